use crate::command::AddressApplier;

/// Assigns addresses through ifconfig's `ether` sub-action, used on macOS
/// and the BSDs.
pub struct IfconfigApplier;

impl AddressApplier for IfconfigApplier {
    fn command_line(&self, device: &str, address: &str) -> (&'static str, Vec<String>) {
        (
            "ifconfig",
            vec![device.to_owned(), "ether".to_owned(), address.to_owned()],
        )
    }
}
