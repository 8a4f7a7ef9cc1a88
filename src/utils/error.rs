//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for provider callbacks and the demo binary.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ExtcapError>;

/// Errors that can terminate an extcap invocation
#[derive(Error, Debug)]
pub enum ExtcapError {
    /// A listing or capture action needs `--extcap-interface`
    #[error("No interface specified")]
    NoInterfaceSpecified,

    /// Capture needs `--fifo`
    #[error("No FIFO pipe provided")]
    NoPipeProvided,

    /// Error returned by a provider callback, passed through unchanged
    #[error(transparent)]
    Provider(#[from] anyhow::Error),

    #[error("Unable to open pipe {}: {source}", .path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing protocol lines to the output stream failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    Cli(#[from] clap::Error),
}
