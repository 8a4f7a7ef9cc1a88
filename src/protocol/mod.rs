//! Records exchanged with the capture front-end.

pub mod types;

pub use types::{CaptureInterface, LinkType, VersionInfo};
