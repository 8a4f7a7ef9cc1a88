//! Command-line surface.
//!
//! The flag set is assembled at runtime: the protocol flags first, then one
//! typed flag per option the provider declares. Only flags given on the
//! command line count as set; defaults never select an action.

use super::models::Invocation;
use crate::app::AppInfo;
use crate::options::{CaptureOptions, ConfigOption, OptionKind, OptionValue};
use crate::utils::config::*;
use clap::parser::ValueSource;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::collections::HashSet;
use std::path::PathBuf;

/// Indent of every section body in the help text
const INDENT: &str = "   ";

/// Help layout; the name suffix and the description only appear when set
fn help_template(info: &AppInfo) -> String {
    let mut template = format!("NAME:\n{INDENT}{{name}}");
    if !info.usage.is_empty() {
        template.push_str(" - {about}");
    }
    template.push_str(&format!("\n\nUSAGE:\n{INDENT}{{usage}}\n\nVERSION:\n{INDENT}{{version}}\n"));
    if !info.help_page.is_empty() {
        template.push_str(&format!("\nDESCRIPTION:\n{INDENT}{{after-help}}\n"));
    }
    template.push_str("\nOPTIONS:\n{options}\n");
    template
}

/// Names clap registers on its own
const CLAP_FLAGS: &[&str] = &["help", "version"];

/// Build the command for `info`, registering one flag per entry of `options`
///
/// # Panics
/// If an option reuses a protocol flag name or another option's name.
pub fn build_command(info: &AppInfo, options: &[ConfigOption]) -> Command {
    let mut command = Command::new(info.name.clone())
        .version(info.version.info.clone())
        .about(info.usage.clone())
        .after_help(info.help_page.clone())
        .override_usage(usage_text(info))
        .help_template(help_template(info))
        .args(protocol_args());

    let mut seen: HashSet<&str> = BUILTIN_FLAGS.iter().chain(CLAP_FLAGS).copied().collect();
    for opt in options {
        assert!(
            seen.insert(opt.call()),
            "config option --{} collides with another flag",
            opt.call()
        );
        command = command.arg(option_arg(opt));
    }

    command
}

/// Usage section: `--extcap-interfaces` followed by the caller's examples
///
/// The first line carries no indent, the template (or clap's error
/// `Usage:` prefix) provides it.
fn usage_text(info: &AppInfo) -> String {
    std::iter::once(format!("--{}", FLAG_LIST_INTERFACES))
        .chain(info.usage_examples.iter().cloned())
        .map(|example| format!("{} {}", info.name, example))
        .collect::<Vec<_>>()
        .join(&format!("\n{INDENT}"))
}

fn protocol_args() -> Vec<Arg> {
    vec![
        flag(FLAG_LIST_INTERFACES, "list the extcap Interfaces"),
        flag(FLAG_LIST_DLTS, "list the DLTs"),
        value(FLAG_INTERFACE, "IFACE", "specify the extcap interface"),
        flag(FLAG_LIST_CONFIG, "list the additional configuration for an interface"),
        flag(FLAG_CAPTURE, "run the capture"),
        value(FLAG_CAPTURE_FILTER, "CFILTER", "the capture filter"),
        value(FLAG_FIFO, "FIFO", "dump data to file or fifo"),
        value(FLAG_VERSION, "VERSION", "front-end version"),
        flag(FLAG_DEBUG, "print additional messages"),
        value(FLAG_DEBUG_FILE, "PATH", "print debug messages to file"),
    ]
}

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::SetTrue)
}

fn value(name: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name(value_name)
        .allow_hyphen_values(true)
        .action(ArgAction::Set)
}

fn option_arg(opt: &ConfigOption) -> Arg {
    let arg = Arg::new(opt.call().to_string())
        .long(opt.call().to_string())
        .help(opt.display().to_string());

    match opt.kind() {
        // The next argv entry is the value, even when it starts with `-`
        OptionKind::Integer(_) => arg
            .value_name("INTEGER")
            .value_parser(value_parser!(i64))
            .allow_hyphen_values(true)
            .action(ArgAction::Set),
        OptionKind::String(_) => arg
            .value_name("STRING")
            .allow_hyphen_values(true)
            .action(ArgAction::Set),
        OptionKind::Boolean(_) => arg.action(ArgAction::SetTrue),
    }
}

/// Extract the explicitly given flags
pub fn parse_invocation(matches: &ArgMatches) -> Invocation {
    let mut options = CaptureOptions::new();
    for id in matches.ids() {
        let name = id.as_str();
        if RESERVED_FLAGS.contains(&name) || !is_set(matches, name) {
            continue;
        }
        if let Some(value) = raw_value(matches, name) {
            options.insert(name, value);
        }
    }

    Invocation {
        list_interfaces: is_set(matches, FLAG_LIST_INTERFACES),
        list_link_types: is_set(matches, FLAG_LIST_DLTS),
        list_config: is_set(matches, FLAG_LIST_CONFIG),
        capture: is_set(matches, FLAG_CAPTURE),
        interface: set_string(matches, FLAG_INTERFACE),
        fifo: set_string(matches, FLAG_FIFO).map(PathBuf::from),
        capture_filter: set_string(matches, FLAG_CAPTURE_FILTER),
        debug: is_set(matches, FLAG_DEBUG),
        debug_file: set_string(matches, FLAG_DEBUG_FILE).map(PathBuf::from),
        options,
    }
}

fn is_set(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn set_string(matches: &ArgMatches, name: &str) -> Option<String> {
    if !is_set(matches, name) {
        return None;
    }
    matches.get_one::<String>(name).cloned()
}

/// Value of a set flag, whatever type its parser produced
fn raw_value(matches: &ArgMatches, name: &str) -> Option<OptionValue> {
    if let Ok(Some(v)) = matches.try_get_one::<bool>(name) {
        return Some(OptionValue::Boolean(*v));
    }
    if let Ok(Some(v)) = matches.try_get_one::<i64>(name) {
        return Some(OptionValue::Integer(*v));
    }
    if let Ok(Some(v)) = matches.try_get_one::<String>(name) {
        return Some(OptionValue::String(v.clone()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::VersionInfo;

    fn info() -> AppInfo {
        AppInfo {
            name: "testcap".to_string(),
            usage: "test backend".to_string(),
            help_page: "Backend used in tests".to_string(),
            usage_examples: vec!["--extcap-interface=test0 --extcap-dlts".to_string()],
            version: VersionInfo::default(),
        }
    }

    fn options() -> Vec<ConfigOption> {
        vec![
            ConfigOption::integer("delay", "Time delay").range(1, 15).build(),
            ConfigOption::string("message", "Message").build(),
            ConfigOption::boolean("verify", "Verify").build(),
        ]
    }

    fn parse(args: &[&str]) -> Invocation {
        let command = build_command(&info(), &options());
        let matches = command
            .try_get_matches_from(std::iter::once("testcap").chain(args.iter().copied()))
            .unwrap();
        parse_invocation(&matches)
    }

    #[test]
    fn test_nothing_set() {
        let inv = parse(&[]);
        assert_eq!(inv, Invocation::default());
    }

    #[test]
    fn test_protocol_flags() {
        let inv = parse(&[
            "--extcap-interface=test0",
            "--fifo",
            "/tmp/fifo",
            "--extcap-capture-filter=tcp port 80",
            "--capture",
        ]);

        assert!(inv.capture);
        assert!(!inv.list_interfaces);
        assert_eq!(inv.interface.as_deref(), Some("test0"));
        assert_eq!(inv.fifo, Some(PathBuf::from("/tmp/fifo")));
        assert_eq!(inv.capture_filter.as_deref(), Some("tcp port 80"));
    }

    #[test]
    fn test_capture_options_exclude_reserved_flags() {
        let inv = parse(&[
            "--extcap-interface=test0",
            "--fifo=/tmp/fifo",
            "--extcap-capture-filter=udp",
            "--capture",
            "--delay=3",
            "--message",
            "hello",
            "--verify",
        ]);

        assert_eq!(inv.options.get_integer("delay"), Some(3));
        assert_eq!(inv.options.get_string("message"), Some("hello"));
        assert!(inv.options.get_flag("verify"));
        assert!(inv.options.get_flag(FLAG_CAPTURE));
        for reserved in RESERVED_FLAGS {
            assert!(!inv.options.contains(reserved));
        }
        assert_eq!(inv.options.len(), 4);
    }

    #[test]
    fn test_unset_boolean_options_are_absent() {
        let inv = parse(&["--capture"]);
        assert!(!inv.options.contains("verify"));
        assert!(!inv.options.contains(FLAG_LIST_INTERFACES));
    }

    #[test]
    fn test_integer_option_rejects_text() {
        let command = build_command(&info(), &options());
        let result = command.try_get_matches_from(["testcap", "--delay", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_usage_lists_examples() {
        assert_eq!(
            usage_text(&info()),
            "testcap --extcap-interfaces\n   testcap --extcap-interface=test0 --extcap-dlts"
        );
    }

    #[test]
    fn test_help_template_skips_empty_sections() {
        let mut bare = info();
        bare.usage = String::new();
        bare.help_page = String::new();

        let help = build_command(&bare, &[]).render_help().to_string();
        assert!(help.starts_with("NAME:\n   testcap\n\nUSAGE:\n   testcap --extcap-interfaces\n"));
        assert!(!help.contains(" - "));
        assert!(!help.contains("DESCRIPTION:"));
    }

    #[test]
    fn test_help_template_with_all_sections() {
        let help = build_command(&info(), &[]).render_help().to_string();
        assert!(help.starts_with("NAME:\n   testcap - test backend\n"));
        assert!(help.contains("\n   testcap --extcap-interface=test0 --extcap-dlts\n"));
        assert!(help.contains("DESCRIPTION:\n   Backend used in tests\n"));
    }

    #[test]
    fn test_option_values_may_start_with_hyphen() {
        let opts = vec![
            ConfigOption::integer("offset", "Offset").range(-10, 10).build(),
            ConfigOption::string("message", "Message").build(),
        ];
        let matches = build_command(&info(), &opts)
            .try_get_matches_from(["testcap", "--offset", "-2", "--message", "-hi", "--capture"])
            .unwrap();
        let inv = parse_invocation(&matches);

        assert_eq!(inv.options.get_integer("offset"), Some(-2));
        assert_eq!(inv.options.get_string("message"), Some("-hi"));
        assert!(inv.capture);
    }

    #[test]
    #[should_panic(expected = "collides")]
    fn test_option_named_like_protocol_flag_panics() {
        let opts = vec![ConfigOption::string("fifo", "Fifo").build()];
        let _ = build_command(&info(), &opts);
    }

    #[test]
    #[should_panic(expected = "collides")]
    fn test_duplicate_option_panics() {
        let opts = vec![
            ConfigOption::string("delay", "Delay").build(),
            ConfigOption::integer("delay", "Delay").build(),
        ];
        let _ = build_command(&info(), &opts);
    }
}
