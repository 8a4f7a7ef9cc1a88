//! Application assembly.
//!
//! `App` bundles a provider with the metadata shown in help output and runs
//! one invocation:
//! 1. Ask the provider for all of its options
//! 2. Register the protocol flags plus one flag per option
//! 3. Parse arguments and set up logging
//! 4. Route the invocation to exactly one action

use crate::commands::cli::{build_command, parse_invocation};
use crate::commands::Router;
use crate::options::ConfigOption;
use crate::output::{FifoOpener, SinkOpener};
use crate::protocol::VersionInfo;
use crate::provider::CaptureProvider;
use crate::utils::config::DEFAULT_LOG_FILTER;
use crate::utils::error::Result;
use clap::Command;
use env_logger::{Env, Target};
use log::{debug, warn};
use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Metadata shown in help output
#[derive(Debug, Clone)]
pub struct AppInfo {
    /// Program name used in usage lines
    pub name: String,

    /// One-line description
    pub usage: String,

    /// Longer description
    pub help_page: String,

    /// Argument lines appended after `<name> --extcap-interfaces` in the usage section
    pub usage_examples: Vec<String>,

    pub version: VersionInfo,
}

impl AppInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: String::new(),
            help_page: String::new(),
            usage_examples: Vec::new(),
            version: VersionInfo::default(),
        }
    }
}

/// An extcap backend ready to run
pub struct App<P> {
    info: AppInfo,
    provider: P,
    sink_opener: Box<dyn SinkOpener>,
}

impl<P: CaptureProvider> App<P> {
    pub fn new(name: impl Into<String>, provider: P) -> Self {
        Self {
            info: AppInfo::new(name),
            provider,
            sink_opener: Box::new(FifoOpener),
        }
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.info.usage = usage.into();
        self
    }

    pub fn with_help_page(mut self, help_page: impl Into<String>) -> Self {
        self.info.help_page = help_page.into();
        self
    }

    /// Add an argument line to the usage section, e.g.
    /// `--extcap-interface=demo0 --extcap-dlts`
    pub fn with_usage_example(mut self, example: impl Into<String>) -> Self {
        self.info.usage_examples.push(example.into());
        self
    }

    /// Empty fields fall back to the library defaults
    pub fn with_version(mut self, version: VersionInfo) -> Self {
        self.info.version = version.or_defaults();
        self
    }

    /// Replace the default named-pipe opener
    pub fn with_sink_opener(mut self, opener: impl SinkOpener + 'static) -> Self {
        self.sink_opener = Box::new(opener);
        self
    }

    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The full flag set, including one flag per provider option
    pub fn command(&self) -> Command {
        build_command(&self.info, &self.all_options())
    }

    fn all_options(&self) -> Vec<ConfigOption> {
        self.provider
            .config()
            .map(|config| config.all_config_options())
            .unwrap_or_default()
    }

    /// Run one invocation, writing protocol output to stdout
    ///
    /// `args` includes the program name, as `std::env::args_os()` does.
    pub fn run<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(args, &mut out)
    }

    /// Run one invocation, writing protocol output to `out`
    pub fn run_with_output<I, T>(&self, args: I, out: &mut dyn Write) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = self.command();

        let matches = match command.try_get_matches_from_mut(args) {
            Ok(matches) => matches,
            // --help and --version are successful outcomes
            Err(err) if !err.use_stderr() => {
                write!(out, "{}", err.render())?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let invocation = parse_invocation(&matches);
        init_logging(invocation.debug, invocation.debug_file.as_deref());
        debug!("Invocation: {:?}", invocation);

        let help = command.render_help().to_string();
        let router = Router::new(&self.provider, &self.info.version, self.sink_opener.as_ref(), &help);
        router.dispatch(&invocation, out)?;
        out.flush()?;

        Ok(())
    }
}

/// Set up `env_logger` on stderr, or on `debug_file` when given
///
/// Only the first call in a process installs the logger.
fn init_logging(debug: bool, debug_file: Option<&Path>) {
    let log_level = if debug { "debug" } else { DEFAULT_LOG_FILTER };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(log_level));

    let mut file_error = None;
    if let Some(path) = debug_file {
        match File::create(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => file_error = Some((path, e)),
        }
    }

    if builder.try_init().is_err() {
        return;
    }

    if let Some((path, e)) = file_error {
        warn!("Cannot open debug file {}: {}", path.display(), e);
    }
}
