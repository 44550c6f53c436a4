use alloy_primitives::{address, Address};

/// L2CrossDomainMessenger predeploy address.
///
/// Sends and relays messages between L1 and L2. Storage layout and runtime
/// code are registered under [`L2_CROSS_DOMAIN_MESSENGER_NAME`].
pub const L2_CROSS_DOMAIN_MESSENGER: Address =
    address!("4200000000000000000000000000000000000007");

/// Registry key of the L2CrossDomainMessenger artifacts
pub const L2_CROSS_DOMAIN_MESSENGER_NAME: &str = "L2CrossDomainMessenger";

/// Predeploys by contract name, sorted by address.
pub const PREDEPLOYS: &[(&str, Address)] =
    &[(L2_CROSS_DOMAIN_MESSENGER_NAME, L2_CROSS_DOMAIN_MESSENGER)];

/// Genesis address of the named predeploy, if it is one.
pub fn predeploy_address(name: &str) -> Option<Address> {
    PREDEPLOYS
        .iter()
        .find(|(predeploy, _)| *predeploy == name)
        .map(|(_, address)| *address)
}

/// Name of the predeploy living at `address`.
pub fn predeploy_name(address: Address) -> Option<&'static str> {
    PREDEPLOYS
        .iter()
        .find(|(_, predeploy)| *predeploy == address)
        .map(|(name, _)| *name)
}
