//! Configuration option model.
//!
//! - `config` holds the option descriptors listed by `--extcap-config`
//! - `value` holds the raw values a capture receives for set flags

pub mod config;
pub mod value;

// Re-export main types
pub use config::{
    BooleanOptionBuilder, BooleanSpec, ConfigOption, IntegerOptionBuilder, IntegerSpec,
    OptionBuilder, OptionKind, StringOptionBuilder, StringSpec,
};
pub use value::{CaptureOptions, OptionValue};
