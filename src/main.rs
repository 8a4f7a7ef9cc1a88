//! extcap demo backend
//!
//! Offers one synthetic interface and streams generated packets as a pcap
//! stream into the front-end's fifo. Useful to try the protocol by hand:
//!
//! ```bash
//! extcap-demo --extcap-interfaces
//! extcap-demo --extcap-interface=demo0 --extcap-config
//! extcap-demo --extcap-interface=demo0 --fifo=/tmp/demo.pcap --capture --count=3 --message=hi
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use extcap::{
    App, CaptureInterface, CaptureOptions, CaptureProvider, ConfigOption, ConfigProvider,
    LinkType, VersionInfo,
};
use log::{debug, info, warn};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const INTERFACE: &str = "demo0";

/// DLT_USER0
const LINK_TYPE: u32 = 147;

const SNAP_LEN: u32 = 65_535;

const IPV4_PATTERN: &str = r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b";

struct DemoProvider;

impl DemoProvider {
    fn options() -> Vec<ConfigOption> {
        vec![
            ConfigOption::integer("delay", "Time delay")
                .tooltip("Time delay between packages")
                .range(1, 15)
                .default(1)
                .build(),
            ConfigOption::string("message", "Message")
                .tooltip("Package message content")
                .placeholder("Please enter a message here ...")
                .build(),
            ConfigOption::boolean("verify", "Verify")
                .tooltip("Verify package content")
                .build(),
            ConfigOption::string("server", "IP address for log server")
                .validation(IPV4_PATTERN)
                .build(),
            ConfigOption::integer("count", "Packet count")
                .tooltip("Stop after this many packets, 0 runs until the pipe closes")
                .default(0)
                .build(),
        ]
    }
}

impl ConfigProvider for DemoProvider {
    fn config_options(&self, iface: &str) -> Result<Vec<ConfigOption>> {
        check_interface(iface)?;
        Ok(Self::options())
    }

    fn all_config_options(&self) -> Vec<ConfigOption> {
        Self::options()
    }
}

impl CaptureProvider for DemoProvider {
    fn interfaces(&self) -> Result<Vec<CaptureInterface>> {
        Ok(vec![CaptureInterface::new(
            INTERFACE,
            "extcap-demo: synthetic packets",
        )])
    }

    fn link_type(&self, iface: &str) -> Result<LinkType> {
        check_interface(iface)?;
        Ok(LinkType::new(LINK_TYPE, "USER0", "Demo Implementation for Extcap"))
    }

    fn config(&self) -> Option<&dyn ConfigProvider> {
        Some(self as &dyn ConfigProvider)
    }

    fn start_capture(
        &self,
        iface: &str,
        sink: &mut dyn Write,
        filter: Option<&str>,
        opts: &CaptureOptions,
    ) -> Result<()> {
        check_interface(iface)?;
        if let Some(filter) = filter {
            warn!("Capture filter ignored by demo backend: {}", filter);
        }
        if let Some(server) = opts.get_string("server") {
            info!("Log server: {}", server);
        }

        let delay = Duration::from_secs(opts.get_integer("delay").unwrap_or(1).max(1) as u64);
        let count = opts.get_integer("count").unwrap_or(0).max(0) as u64;
        let message = opts.get_string("message").unwrap_or("extcap demo packet");
        let verify = opts.get_flag("verify");

        write_pcap_header(sink).context("Can't write pcap file header")?;

        let mut sent: u64 = 0;
        loop {
            let payload = build_payload(sent, message, verify);
            match write_packet(sink, &payload) {
                Ok(()) => {}
                // Front-end stopped reading
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    info!("Pipe closed after {} packets", sent);
                    return Ok(());
                }
                Err(e) => return Err(e).context("Write packet error"),
            }
            sent += 1;
            debug!("Sent packet {} ({} bytes)", sent, payload.len());

            if count != 0 && sent >= count {
                return Ok(());
            }
            thread::sleep(delay);
        }
    }
}

fn check_interface(iface: &str) -> Result<()> {
    if iface != INTERFACE {
        anyhow::bail!("Unknown interface '{}'", iface);
    }
    Ok(())
}

fn write_pcap_header(w: &mut dyn Write) -> io::Result<()> {
    w.write_all(&0xa1b2_c3d4u32.to_le_bytes())?;
    w.write_all(&2u16.to_le_bytes())?;
    w.write_all(&4u16.to_le_bytes())?;
    w.write_all(&0i32.to_le_bytes())?;
    w.write_all(&0u32.to_le_bytes())?;
    w.write_all(&SNAP_LEN.to_le_bytes())?;
    w.write_all(&LINK_TYPE.to_le_bytes())
}

fn write_packet(w: &mut dyn Write, payload: &[u8]) -> io::Result<()> {
    let now = Utc::now();
    let len = payload.len() as u32;

    w.write_all(&(now.timestamp() as u32).to_le_bytes())?;
    w.write_all(&now.timestamp_subsec_micros().to_le_bytes())?;
    w.write_all(&len.to_le_bytes())?;
    w.write_all(&len.to_le_bytes())?;
    w.write_all(payload)?;
    w.flush()
}

/// `<seq> <message>`, followed by an XOR checksum byte when verifying
fn build_payload(seq: u64, message: &str, verify: bool) -> Vec<u8> {
    let mut payload = format!("{} {}", seq, message).into_bytes();
    if verify {
        let checksum = payload.iter().fold(0u8, |acc, b| acc ^ b);
        payload.push(checksum);
    }
    payload
}

fn main() -> Result<()> {
    App::new("extcap-demo", DemoProvider)
        .with_usage("sample extcap backend")
        .with_help_page("Sample backend showing how to use the 'extcap' crate. Generates synthetic packets.")
        .with_version(VersionInfo::new(env!("CARGO_PKG_VERSION"), ""))
        .with_usage_example("--extcap-interface=demo0 --extcap-dlts")
        .with_usage_example("--extcap-interface=demo0 --extcap-config")
        .with_usage_example("--extcap-interface=demo0 --delay 2 --message hello --fifo=FILENAME --capture")
        .run(std::env::args_os())?;

    Ok(())
}
