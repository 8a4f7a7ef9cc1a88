use crate::options::CaptureOptions;
use std::path::PathBuf;

/// Flags explicitly given on one invocation
///
/// **Public** - built by `commands::cli` from parsed arguments, or directly
/// by tests and embedders that bypass argument parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// `--extcap-interfaces`
    pub list_interfaces: bool,

    /// `--extcap-dlts`
    pub list_link_types: bool,

    /// `--extcap-config`
    pub list_config: bool,

    /// `--capture`
    pub capture: bool,

    /// `--extcap-interface`
    pub interface: Option<String>,

    /// `--fifo`
    pub fifo: Option<PathBuf>,

    /// `--extcap-capture-filter`
    pub capture_filter: Option<String>,

    /// `--debug`
    pub debug: bool,

    /// `--debug-file`
    pub debug_file: Option<PathBuf>,

    /// Every set flag except the reserved interface, fifo and filter flags
    pub options: CaptureOptions,
}

/// The single action an invocation performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListInterfaces,
    ListLinkTypes,
    ListConfig,
    Capture,
    Help,
}

impl Action {
    /// Pick the action for `invocation`; the first set action flag wins in
    /// the order interfaces, DLTs, config, capture.
    pub fn select(invocation: &Invocation) -> Self {
        if invocation.list_interfaces {
            Action::ListInterfaces
        } else if invocation.list_link_types {
            Action::ListLinkTypes
        } else if invocation.list_config {
            Action::ListConfig
        } else if invocation.capture {
            Action::Capture
        } else {
            Action::Help
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_selects_help() {
        assert_eq!(Action::select(&Invocation::default()), Action::Help);
    }

    #[test]
    fn test_priority_order() {
        let all = Invocation {
            list_interfaces: true,
            list_link_types: true,
            list_config: true,
            capture: true,
            ..Default::default()
        };
        assert_eq!(Action::select(&all), Action::ListInterfaces);

        let no_ifaces = Invocation {
            list_interfaces: false,
            ..all.clone()
        };
        assert_eq!(Action::select(&no_ifaces), Action::ListLinkTypes);

        let config_and_capture = Invocation {
            list_link_types: false,
            ..no_ifaces
        };
        assert_eq!(Action::select(&config_and_capture), Action::ListConfig);

        let capture_only = Invocation {
            capture: true,
            ..Default::default()
        };
        assert_eq!(Action::select(&capture_only), Action::Capture);
    }

    #[test]
    fn test_value_flags_do_not_select_an_action() {
        let inv = Invocation {
            interface: Some("eth0".to_string()),
            fifo: Some(PathBuf::from("/tmp/fifo")),
            ..Default::default()
        };
        assert_eq!(Action::select(&inv), Action::Help);
    }
}
