//! Line serializer for the extcap protocol.
//!
//! Every record renders to one line of the form
//! `<kind> {key=value}{key=value}...`:
//!
//! ```text
//! extcap {version=1.0}{help=https://example.com}
//! interface {value=example1}{display=Example interface 1 for extcap}
//! dlt {number=147}{name=USER0}{display=Demo Implementation for Extcap}
//! arg {number=0}{call=--delay}{display=Time delay}{type=integer}{tooltip=Time delay between packages}{required=true}{range=1,15}
//! ```
//!
//! Values are written verbatim. Front-ends expect the unescaped form, so a
//! `}` inside a value ends the attribute early.

use crate::options::{ConfigOption, OptionKind};
use crate::protocol::{CaptureInterface, LinkType, VersionInfo};
use std::fmt::{self, Display, Write};

/// Appends `{key=value}` attributes after a record keyword
struct AttrLine<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
}

impl<'a, 'b> AttrLine<'a, 'b> {
    fn start(f: &'a mut fmt::Formatter<'b>, keyword: &str) -> Result<Self, fmt::Error> {
        f.write_str(keyword)?;
        f.write_char(' ')?;
        Ok(Self { f })
    }

    fn attr(&mut self, key: &str, value: impl Display) -> fmt::Result {
        write!(self.f, "{{{}={}}}", key, value)
    }

    /// Attribute written only for non-empty values
    fn attr_non_empty(&mut self, key: &str, value: &str) -> fmt::Result {
        if value.is_empty() {
            return Ok(());
        }
        self.attr(key, value)
    }

    fn attr_opt(&mut self, key: &str, value: Option<impl Display>) -> fmt::Result {
        match value {
            Some(v) => self.attr(key, v),
            None => Ok(()),
        }
    }
}

impl Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = AttrLine::start(f, "extcap")?;
        line.attr("version", &self.info)?;
        line.attr("help", &self.help)
    }
}

impl Display for CaptureInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = AttrLine::start(f, "interface")?;
        line.attr("value", &self.value)?;
        line.attr("display", &self.display)
    }
}

impl Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = AttrLine::start(f, "dlt")?;
        line.attr("number", self.number)?;
        line.attr("name", &self.name)?;
        line.attr("display", &self.display)
    }
}

impl Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = AttrLine::start(f, "arg")?;
        line.attr("number", self.number())?;
        line.attr("call", format_args!("--{}", self.call()))?;
        line.attr("display", self.display())?;
        line.attr("type", self.type_name())?;

        line.attr_non_empty("tooltip", self.tooltip())?;
        if self.is_required() {
            line.attr("required", true)?;
        }
        line.attr_non_empty("group", self.group())?;

        match self.kind() {
            OptionKind::Integer(spec) => {
                line.attr_opt("range", spec.range.map(|(min, max)| format!("{},{}", min, max)))?;
                line.attr_opt("default", spec.default)
            }
            OptionKind::String(spec) => {
                line.attr_non_empty("placeholder", &spec.placeholder)?;
                line.attr_opt("validation", spec.validation.as_deref())
            }
            OptionKind::Boolean(spec) => line.attr_opt("default", spec.default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_version_line() {
        let version = VersionInfo::new("1.0", "https://example.com/help");
        assert_eq!(version.to_string(), "extcap {version=1.0}{help=https://example.com/help}");
    }

    #[test]
    fn test_interface_line() {
        let iface = CaptureInterface::new("example1", "Example interface 1 for extcap");
        assert_eq!(
            iface.to_string(),
            "interface {value=example1}{display=Example interface 1 for extcap}"
        );
    }

    #[test]
    fn test_dlt_line() {
        let dlt = LinkType::new(147, "USER1", "Demo Implementation for Extcap");
        assert_eq!(
            dlt.to_string(),
            "dlt {number=147}{name=USER1}{display=Demo Implementation for Extcap}"
        );
    }

    #[test]
    fn test_integer_with_default_and_negative_range() {
        let opt = ConfigOption::integer("offset", "Offset").range(-10, 10).default(-2).build();
        assert_eq!(
            opt.to_string(),
            "arg {number=0}{call=--offset}{display=Offset}{type=integer}{range=-10,10}{default=-2}"
        );
    }

    #[test]
    fn test_group_attribute_is_closed() {
        let opt = ConfigOption::boolean("verify", "Verify").group("Checks").build();
        assert_eq!(
            opt.to_string(),
            "arg {number=0}{call=--verify}{display=Verify}{type=boolflag}{group=Checks}"
        );
    }

    #[test]
    fn test_boolean_default_rendered() {
        let opt = ConfigOption::boolean("verify", "Verify").default(false).build();
        assert_eq!(
            opt.to_string(),
            "arg {number=0}{call=--verify}{display=Verify}{type=boolflag}{default=false}"
        );
    }

    #[test]
    fn test_common_attribute_order() {
        let opt = ConfigOption::string("message", "Message")
            .placeholder("Please enter a message here ...")
            .group("Payload")
            .required(true)
            .tooltip("Package message content")
            .build();
        assert_eq!(
            opt.to_string(),
            "arg {number=0}{call=--message}{display=Message}{type=string}\
             {tooltip=Package message content}{required=true}{group=Payload}\
             {placeholder=Please enter a message here ...}"
        );
    }

    #[test]
    fn test_braces_are_not_escaped() {
        let opt = ConfigOption::string("pattern", "Match {x}").validation("a{2,3}").build();
        assert_eq!(
            opt.to_string(),
            "arg {number=0}{call=--pattern}{display=Match {x}}{type=string}{validation=a{2,3}}"
        );
    }
}
