use crate::command::AddressApplier;

/// Assigns addresses through iproute2.
pub struct IpLinkApplier;

impl AddressApplier for IpLinkApplier {
    fn command_line(&self, device: &str, address: &str) -> (&'static str, Vec<String>) {
        (
            "ip",
            vec![
                "link".to_owned(),
                "set".to_owned(),
                "dev".to_owned(),
                device.to_owned(),
                "addr".to_owned(),
                address.to_owned(),
            ],
        )
    }
}
