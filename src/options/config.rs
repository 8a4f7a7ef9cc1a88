//! Configuration option descriptors.
//!
//! A `ConfigOption` describes one parameter the front-end shows in its
//! interface options dialog. Options are assembled with a typed builder and
//! are immutable afterwards; only the listing path assigns their `number`.
//!
//! Example:
//! ```
//! use extcap::options::ConfigOption;
//!
//! let delay = ConfigOption::integer("delay", "Time delay")
//!     .tooltip("Time delay between packages")
//!     .range(1, 15)
//!     .required(true)
//!     .build();
//!
//! assert_eq!(delay.call(), "delay");
//! assert_eq!(delay.number(), 0);
//! ```

/// Integer-specific settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerSpec {
    /// Inclusive `(min, max)`, always `min < max`
    pub range: Option<(i64, i64)>,
    pub default: Option<i64>,
}

/// String-specific settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSpec {
    /// Hint shown in an empty text field (omitted from output when empty)
    pub placeholder: String,

    /// Pattern the front-end validates input against, passed through as-is
    pub validation: Option<String>,

    pub default: Option<String>,
}

/// Boolean-specific settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooleanSpec {
    pub default: Option<bool>,
}

/// The supported option kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    Integer(IntegerSpec),
    String(StringSpec),
    Boolean(BooleanSpec),
}

impl OptionKind {
    /// Protocol type name used in the `{type=...}` attribute
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionKind::Integer(_) => "integer",
            OptionKind::String(_) => "string",
            OptionKind::Boolean(_) => "boolflag",
        }
    }
}

impl From<IntegerSpec> for OptionKind {
    fn from(spec: IntegerSpec) -> Self {
        OptionKind::Integer(spec)
    }
}

impl From<StringSpec> for OptionKind {
    fn from(spec: StringSpec) -> Self {
        OptionKind::String(spec)
    }
}

impl From<BooleanSpec> for OptionKind {
    fn from(spec: BooleanSpec) -> Self {
        OptionKind::Boolean(spec)
    }
}

/// A configuration option shown by the capture front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption {
    number: usize,
    call: String,
    display: String,
    tooltip: String,
    group: String,
    required: bool,
    kind: OptionKind,
}

impl ConfigOption {
    /// Start an integer option
    pub fn integer(call: impl Into<String>, display: impl Into<String>) -> IntegerOptionBuilder {
        OptionBuilder::new(call, display)
    }

    /// Start a string option
    pub fn string(call: impl Into<String>, display: impl Into<String>) -> StringOptionBuilder {
        OptionBuilder::new(call, display)
    }

    /// Start a boolean flag option
    pub fn boolean(call: impl Into<String>, display: impl Into<String>) -> BooleanOptionBuilder {
        OptionBuilder::new(call, display)
    }

    /// Position in the last listing, 0 before the option was listed
    pub fn number(&self) -> usize {
        self.number
    }

    /// Flag name without leading dashes
    pub fn call(&self) -> &str {
        &self.call
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Only the listing path numbers options
    pub(crate) fn set_number(&mut self, number: usize) {
        self.number = number;
    }
}

/// Assign sequential numbers in the given order
pub(crate) fn number_options(options: &mut [ConfigOption]) {
    for (i, opt) in options.iter_mut().enumerate() {
        opt.set_number(i);
    }
}

/// Builder shared by all option kinds; `K` carries the kind-specific settings
#[derive(Debug, Clone)]
pub struct OptionBuilder<K> {
    call: String,
    display: String,
    tooltip: String,
    group: String,
    required: bool,
    spec: K,
}

pub type IntegerOptionBuilder = OptionBuilder<IntegerSpec>;
pub type StringOptionBuilder = OptionBuilder<StringSpec>;
pub type BooleanOptionBuilder = OptionBuilder<BooleanSpec>;

impl<K: Default + Into<OptionKind>> OptionBuilder<K> {
    fn new(call: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            call: call.into(),
            display: display.into(),
            tooltip: String::new(),
            group: String::new(),
            required: false,
            spec: K::default(),
        }
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Finish the descriptor
    ///
    /// # Panics
    /// If `call` is empty, starts with `-` or contains whitespace. The
    /// serializer prepends `--` itself, so such a name is a programming error.
    pub fn build(self) -> ConfigOption {
        assert!(
            is_valid_call(&self.call),
            "invalid option call name {:?}: expected a flag name without leading dashes",
            self.call
        );

        ConfigOption {
            number: 0,
            call: self.call,
            display: self.display,
            tooltip: self.tooltip,
            group: self.group,
            required: self.required,
            kind: self.spec.into(),
        }
    }
}

impl OptionBuilder<IntegerSpec> {
    /// Inclusive value range
    ///
    /// # Panics
    /// If `min >= max`.
    pub fn range(mut self, min: i64, max: i64) -> Self {
        assert!(
            min < max,
            "in range max value should be greater than min value (got {}, {})",
            min,
            max
        );
        self.spec.range = Some((min, max));
        self
    }

    pub fn default(mut self, value: i64) -> Self {
        self.spec.default = Some(value);
        self
    }
}

impl OptionBuilder<StringSpec> {
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.spec.placeholder = placeholder.into();
        self
    }

    pub fn validation(mut self, pattern: impl Into<String>) -> Self {
        self.spec.validation = Some(pattern.into());
        self
    }

    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.spec.default = Some(value.into());
        self
    }
}

impl OptionBuilder<BooleanSpec> {
    pub fn default(mut self, value: bool) -> Self {
        self.spec.default = Some(value);
        self
    }
}

fn is_valid_call(call: &str) -> bool {
    !call.is_empty() && !call.starts_with('-') && !call.chars().any(char::is_whitespace)
}
