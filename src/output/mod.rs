//! Output side of the protocol.
//!
//! This module handles everything written by an invocation:
//! - Protocol lines on stdout (`line`)
//! - The capture sink named by `--fifo` (`sink`)

pub mod line;
pub mod sink;

// Re-export main types
pub use sink::{FifoOpener, Sink, SinkOpener};
