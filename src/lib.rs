mod address;
mod bsd;
mod command;
mod linux;
mod rotator;
mod vendors;

use std::process::ExitStatus;

use thiserror::Error;

pub use address::{choose_vendor, generate_address, variate, GeneratedAddress, CYCLE_VARIANCE};
pub use command::AddressApplier;
pub use rotator::{RotationOutcome, Rotator, RotatorConfig, MAX_SEQUENTIAL_FAILURES};
pub use vendors::{vendor_display_name, VENDORS};

use bsd::IfconfigApplier;
use linux::IpLinkApplier;

#[derive(Debug, Clone, Copy)]
enum RotatePlatform {
    Linux,
    Ifconfig,
}

#[derive(Error, Debug)]
pub enum RotateError {
    #[error("the {0} program was not found")]
    MissingProgram(String),
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("`{command}` failed with {status}: {output}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        output: String,
    },
    #[error("too many MAC change errors occurred:\n{0}")]
    TooManyFailures(String),
    #[error("this platform is not supported")]
    UnsupportedPlatform,
}

fn check_platform() -> Result<RotatePlatform, RotateError> {
    let os = std::env::consts::OS;
    match os {
        "linux" => Ok(RotatePlatform::Linux),
        "macos" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" => Ok(RotatePlatform::Ifconfig),
        _ => Err(RotateError::UnsupportedPlatform),
    }
}

/// Picks the address-setting strategy for the running OS.
pub fn platform_applier() -> Result<Box<dyn AddressApplier>, RotateError> {
    match check_platform()? {
        RotatePlatform::Linux => Ok(Box::new(IpLinkApplier)),
        RotatePlatform::Ifconfig => Ok(Box::new(IfconfigApplier)),
    }
}

/// The platform-standard primary interface name.
pub fn default_device_name() -> &'static str {
    match check_platform() {
        Ok(RotatePlatform::Ifconfig) => "en0",
        _ => "eth0",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn linux_defaults_to_eth0_and_ip_link() {
        assert_eq!(default_device_name(), "eth0");
        let applier = platform_applier().unwrap();
        let (program, _) = applier.command_line("eth0", "00:01:6c:11:22:33");
        assert_eq!(program, "ip");
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn macos_defaults_to_en0_and_ifconfig() {
        assert_eq!(default_device_name(), "en0");
        let applier = platform_applier().unwrap();
        let (program, _) = applier.command_line("en0", "00:01:6c:11:22:33");
        assert_eq!(program, "ifconfig");
    }
}
