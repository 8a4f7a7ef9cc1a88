//! Capture backend callbacks.
//!
//! A backend implements `CaptureProvider` and, when it has configurable
//! options, `ConfigProvider`. The library never links against the capture
//! machinery itself; it only calls these methods.

use crate::options::{CaptureOptions, ConfigOption};
use crate::protocol::{CaptureInterface, LinkType};
use std::io::Write;

/// The callbacks every backend provides
pub trait CaptureProvider {
    /// Interfaces offered to the front-end, in display order
    fn interfaces(&self) -> anyhow::Result<Vec<CaptureInterface>>;

    /// Link-layer type a capture on `iface` produces
    fn link_type(&self, iface: &str) -> anyhow::Result<LinkType>;

    /// Configuration capability, `None` if the backend has no options
    fn config(&self) -> Option<&dyn ConfigProvider> {
        None
    }

    /// Run a capture on `iface`, writing raw packet data to `sink`
    ///
    /// `filter` is the capture filter from `--extcap-capture-filter`.
    /// The sink is closed by the caller once this returns.
    fn start_capture(
        &self,
        iface: &str,
        sink: &mut dyn Write,
        filter: Option<&str>,
        opts: &CaptureOptions,
    ) -> anyhow::Result<()>;
}

/// Optional configuration capability
pub trait ConfigProvider {
    /// Options shown for `iface` by `--extcap-config`
    fn config_options(&self, iface: &str) -> anyhow::Result<Vec<ConfigOption>>;

    /// Every option any interface may use. One command-line flag is
    /// registered per entry before arguments are parsed.
    fn all_config_options(&self) -> Vec<ConfigOption>;
}
