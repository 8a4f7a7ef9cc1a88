//! Protocol constants and defaults.

/// Version reported when the backend does not set one
pub const DEFAULT_VERSION: &str = "0.0.1";

/// Help URL reported when the backend does not set one
pub const DEFAULT_HELP_URL: &str = "https://www.wireshark.org/docs/wsdg_html_chunked/ChCaptureExtcap.html";

// Protocol flag names (without the leading dashes)
pub const FLAG_LIST_INTERFACES: &str = "extcap-interfaces";
pub const FLAG_LIST_DLTS: &str = "extcap-dlts";
pub const FLAG_INTERFACE: &str = "extcap-interface";
pub const FLAG_LIST_CONFIG: &str = "extcap-config";
pub const FLAG_CAPTURE: &str = "capture";
pub const FLAG_CAPTURE_FILTER: &str = "extcap-capture-filter";
pub const FLAG_FIFO: &str = "fifo";

// Ambient flags
/// Front-end version, passed by newer front-ends along with `--extcap-interfaces`
pub const FLAG_VERSION: &str = "extcap-version";
pub const FLAG_DEBUG: &str = "debug";
pub const FLAG_DEBUG_FILE: &str = "debug-file";

/// Flags never forwarded to the capture callback as options
pub const RESERVED_FLAGS: &[&str] = &[FLAG_INTERFACE, FLAG_FIFO, FLAG_CAPTURE_FILTER];

/// Every flag name registered by the library itself
pub const BUILTIN_FLAGS: &[&str] = &[
    FLAG_LIST_INTERFACES,
    FLAG_LIST_DLTS,
    FLAG_INTERFACE,
    FLAG_LIST_CONFIG,
    FLAG_CAPTURE,
    FLAG_CAPTURE_FILTER,
    FLAG_FIFO,
    FLAG_VERSION,
    FLAG_DEBUG,
    FLAG_DEBUG_FILE,
];

/// Log filter used when `--debug` is absent. Stdout carries the protocol,
/// so only warnings reach stderr by default.
pub const DEFAULT_LOG_FILTER: &str = "warn";
