//! Capture sink opening.
//!
//! The front-end creates a named pipe and passes its path with `--fifo`.
//! The backend streams raw capture data into it until the reader goes away.

use log::debug;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Write-only destination for captured data
pub type Sink = Box<dyn Write>;

/// Opens the sink named by `--fifo`
///
/// Implemented for any `Fn(&Path) -> io::Result<Sink>`, so a backend can
/// pass a closure to write into a regular file or an in-memory buffer.
pub trait SinkOpener {
    fn open(&self, path: &Path) -> io::Result<Sink>;
}

impl<F> SinkOpener for F
where
    F: Fn(&Path) -> io::Result<Sink>,
{
    fn open(&self, path: &Path) -> io::Result<Sink> {
        self(path)
    }
}

/// Default opener: the existing pipe at `path`, write-only
///
/// Opening blocks until the front-end opens the read end.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoOpener;

impl SinkOpener for FifoOpener {
    fn open(&self, path: &Path) -> io::Result<Sink> {
        debug!("Opening capture pipe: {}", path.display());

        let pipe = OpenOptions::new().write(true).open(path)?;
        Ok(Box::new(pipe))
    }
}
