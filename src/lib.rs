//! extcap
//!
//! Host side of the extcap protocol: a capture front-end discovers,
//! configures and launches a capture backend by running it with a fixed set
//! of flags and parsing the lines it prints.
//!
//! A backend implements [`provider::CaptureProvider`] (and optionally
//! [`provider::ConfigProvider`]) and hands it to [`app::App`]:
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     extcap::App::new("mycap", MyProvider)
//!         .with_usage("my capture backend")
//!         .run(std::env::args_os())?;
//!     Ok(())
//! }
//! ```
//!
//! Protocol reference:
//! https://www.wireshark.org/docs/wsdg_html_chunked/ChCaptureExtcap.html

pub mod app;
pub mod commands;
pub mod options;
pub mod output;
pub mod protocol;
pub mod provider;
pub mod utils;

pub use app::{App, AppInfo};
pub use options::{CaptureOptions, ConfigOption, OptionValue};
pub use protocol::{CaptureInterface, LinkType, VersionInfo};
pub use provider::{CaptureProvider, ConfigProvider};
pub use utils::error::{ExtcapError, Result};
