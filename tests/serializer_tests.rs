use extcap::{CaptureInterface, ConfigOption, LinkType, VersionInfo};
use pretty_assertions::assert_eq;

const IPV4_PATTERN: &str = r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b";

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
fn test_default_version_line() {
    assert_eq!(
        VersionInfo::default().to_string(),
        "extcap {version=0.0.1}{help=https://www.wireshark.org/docs/wsdg_html_chunked/ChCaptureExtcap.html}"
    );
}

#[test]
fn test_integer_option() {
    let opt = ConfigOption::integer("delay", "Time delay")
        .range(1, 15)
        .required(true)
        .tooltip("Time delay between packages")
        .build();

    assert_eq!(
        opt.to_string(),
        "arg {number=0}{call=--delay}{display=Time delay}{type=integer}{tooltip=Time delay between packages}{required=true}{range=1,15}"
    );
}

#[test]
fn test_string_option_with_validation() {
    let opt = ConfigOption::string("server", "IP address for log server")
        .validation(IPV4_PATTERN)
        .build();

    assert_eq!(
        opt.to_string(),
        format!(
            "arg {{number=0}}{{call=--server}}{{display=IP address for log server}}{{type=string}}{{validation={}}}",
            IPV4_PATTERN
        )
    );
}

#[test]
fn test_string_option_with_placeholder() {
    let opt = ConfigOption::string("message", "Message")
        .tooltip("Package message content")
        .placeholder("Please enter a message here ...")
        .build();

    assert_eq!(
        opt.to_string(),
        "arg {number=0}{call=--message}{display=Message}{type=string}{tooltip=Package message content}{placeholder=Please enter a message here ...}"
    );
}

#[test]
fn test_string_default_is_not_rendered() {
    let opt = ConfigOption::string("message", "Message").default("hello").build();

    assert_eq!(
        opt.to_string(),
        "arg {number=0}{call=--message}{display=Message}{type=string}"
    );
}

#[test]
fn test_bool_option_without_default() {
    let opt = ConfigOption::boolean("verify", "Verify")
        .tooltip("Verify package content")
        .build();

    assert_eq!(
        opt.to_string(),
        "arg {number=0}{call=--verify}{display=Verify}{type=boolflag}{tooltip=Verify package content}"
    );
}

#[test]
fn test_bool_option_with_default() {
    let opt = ConfigOption::boolean("verify", "Verify").default(true).build();

    assert_eq!(
        opt.to_string(),
        "arg {number=0}{call=--verify}{display=Verify}{type=boolflag}{default=true}"
    );
}

#[test]
fn test_required_false_is_omitted() {
    let opt = ConfigOption::integer("count", "Count").required(false).default(10).build();

    assert_eq!(
        opt.to_string(),
        "arg {number=0}{call=--count}{display=Count}{type=integer}{default=10}"
    );
}

#[test]
#[should_panic]
fn test_integer_range_must_increase() {
    let _ = ConfigOption::integer("delay", "Time delay").range(15, 1).build();
}
