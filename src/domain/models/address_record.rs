use std::fmt;

use serde::{Deserialize, Serialize};

/// One address together with the interface it belongs to.
///
/// `interface` is either an OS interface name or `public` for the
/// address reported by the lookup service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Interface")]
    pub interface: String,
}

impl AddressRecord {
    pub fn new(address: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            interface: interface.into(),
        }
    }
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.address, self.interface)
    }
}
