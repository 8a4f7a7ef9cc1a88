//! Command routing.
//!
//! One invocation performs exactly one action:
//! 1. `--extcap-interfaces`: version preamble and interface list
//! 2. `--extcap-dlts`: the link type of the selected interface
//! 3. `--extcap-config`: numbered option descriptors of the selected interface
//! 4. `--capture`: stream packets into the `--fifo` sink
//! 5. nothing: help text

use super::models::{Action, Invocation};
use crate::options::config::number_options;
use crate::output::SinkOpener;
use crate::protocol::VersionInfo;
use crate::provider::CaptureProvider;
use crate::utils::error::{ExtcapError, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

/// Dispatches an invocation to the provider
///
/// **Public** - used by `App`, usable directly by embedders that parse
/// arguments themselves
pub struct Router<'a> {
    provider: &'a dyn CaptureProvider,
    version: &'a VersionInfo,
    sink_opener: &'a dyn SinkOpener,
    help: &'a str,
}

impl<'a> Router<'a> {
    pub fn new(
        provider: &'a dyn CaptureProvider,
        version: &'a VersionInfo,
        sink_opener: &'a dyn SinkOpener,
        help: &'a str,
    ) -> Self {
        Self {
            provider,
            version,
            sink_opener,
            help,
        }
    }

    /// Run the action selected by `invocation`, writing protocol lines to `out`
    ///
    /// # Errors
    /// * `ExtcapError::NoInterfaceSpecified` - action needs `--extcap-interface`
    /// * `ExtcapError::NoPipeProvided` - capture without `--fifo`
    /// * `ExtcapError::Provider` - a provider callback failed
    /// * `ExtcapError::SinkOpen` - the fifo could not be opened
    pub fn dispatch(&self, invocation: &Invocation, out: &mut dyn Write) -> Result<()> {
        let action = Action::select(invocation);
        debug!("Selected action: {:?}", action);

        match action {
            Action::ListInterfaces => self.list_interfaces(out),
            Action::ListLinkTypes => self.list_link_types(invocation, out),
            Action::ListConfig => self.list_config(invocation, out),
            Action::Capture => self.run_capture(invocation),
            Action::Help => {
                out.write_all(self.help.as_bytes())?;
                Ok(())
            }
        }
    }

    fn list_interfaces(&self, out: &mut dyn Write) -> Result<()> {
        let interfaces = self.provider.interfaces()?;
        debug!("Provider returned {} interfaces", interfaces.len());

        writeln!(out, "{}", self.version)?;
        for iface in &interfaces {
            writeln!(out, "{}", iface)?;
        }

        Ok(())
    }

    fn list_link_types(&self, invocation: &Invocation, out: &mut dyn Write) -> Result<()> {
        let iface = required_interface(invocation)?;

        let dlt = self.provider.link_type(iface)?;
        writeln!(out, "{}", dlt)?;

        Ok(())
    }

    fn list_config(&self, invocation: &Invocation, out: &mut dyn Write) -> Result<()> {
        // No configuration capability means no options, not an error
        let Some(config) = self.provider.config() else {
            debug!("Provider has no configuration options");
            return Ok(());
        };

        let iface = required_interface(invocation)?;

        let mut options = config.config_options(iface)?;
        number_options(&mut options);

        for opt in &options {
            writeln!(out, "{}", opt)?;
        }

        Ok(())
    }

    fn run_capture(&self, invocation: &Invocation) -> Result<()> {
        let iface = required_interface(invocation)?;
        let fifo = invocation
            .fifo
            .as_deref()
            .ok_or(ExtcapError::NoPipeProvided)?;

        let start_time = Instant::now();
        info!("Starting capture on {} into {}", iface, fifo.display());
        debug!(
            "Capture options: {}",
            serde_json::to_string(&invocation.options).unwrap_or_default()
        );

        let mut sink = self
            .sink_opener
            .open(fifo)
            .map_err(|source| ExtcapError::SinkOpen {
                path: fifo.to_path_buf(),
                source,
            })?;

        let result = self.provider.start_capture(
            iface,
            sink.as_mut(),
            invocation.capture_filter.as_deref(),
            &invocation.options,
        );
        let flushed = match &result {
            Ok(()) => sink.flush(),
            Err(_) => Ok(()),
        };
        drop(sink);

        result?;
        flushed?;

        info!("Capture completed in {:.2}s", start_time.elapsed().as_secs_f64());
        Ok(())
    }
}

fn required_interface(invocation: &Invocation) -> Result<&str> {
    invocation
        .interface
        .as_deref()
        .ok_or(ExtcapError::NoInterfaceSpecified)
}
