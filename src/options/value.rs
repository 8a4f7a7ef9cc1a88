//! Raw flag values handed to the capture callback.

use serde::Serialize;
use std::collections::BTreeMap;

/// Value of one flag set on the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i64),
    String(String),
    Boolean(bool),
}

impl OptionValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Flags set for one capture invocation, keyed by flag name
///
/// Built by the router from every set flag except the reserved
/// `extcap-interface`, `fifo` and `extcap-capture-filter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CaptureOptions {
    values: BTreeMap<String, OptionValue>,
}

impl CaptureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: OptionValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get_integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(OptionValue::as_integer)
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(OptionValue::as_str)
    }

    /// `true` only if the boolean flag was passed
    pub fn get_flag(&self, name: &str) -> bool {
        self.get(name).and_then(OptionValue::as_bool).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
