//! Types listed to the front-end besides option descriptors.
//!
//! Their line rendering lives in `output::line`.

use crate::utils::config::{DEFAULT_HELP_URL, DEFAULT_VERSION};

/// One capturable source reported by `--extcap-interfaces`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureInterface {
    /// Value passed back through `--extcap-interface`
    pub value: String,

    /// Human readable name
    pub display: String,
}

impl CaptureInterface {
    pub fn new(value: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display: display.into(),
        }
    }
}

/// Link-layer type (DLT) produced by a capture on an interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkType {
    /// DLT number, e.g. 1 for Ethernet or 147 for USER0
    pub number: u32,
    pub name: String,
    pub display: String,
}

impl LinkType {
    pub fn new(number: u32, name: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            display: display.into(),
        }
    }
}

/// Version preamble printed before the interface list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub info: String,
    pub help: String,
}

impl VersionInfo {
    pub fn new(info: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            info: info.into(),
            help: help.into(),
        }
    }

    /// Replace empty fields with the library defaults
    pub fn or_defaults(mut self) -> Self {
        if self.info.is_empty() {
            self.info = DEFAULT_VERSION.to_string();
        }
        if self.help.is_empty() {
            self.help = DEFAULT_HELP_URL.to_string();
        }
        self
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION, DEFAULT_HELP_URL)
    }
}
