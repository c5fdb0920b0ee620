use async_trait::async_trait;
use crate::domain::config::AppConfig;
use crate::domain::errors::CollectError;
use crate::domain::models::{AddressRecord, LocalInterface};
use crate::utils;

/// Source of the local interface table
pub trait InterfaceSource {
    fn interfaces(&self) -> Result<Vec<LocalInterface>, CollectError>;
}

/// Source of the address the outside world sees
#[async_trait]
pub trait PublicIpSource: Send + Sync {
    async fn lookup(&self) -> Result<AddressRecord, CollectError>;
}

/// Reads interfaces from the operating system
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Result<Vec<LocalInterface>, CollectError> {
        utils::get_local_interfaces().map_err(CollectError::Interfaces)
    }
}

/// Gathers address records from the local interfaces and the public lookup
pub struct CollectorService<I, P> {
    pub(crate) interfaces: I,
    pub(crate) public_ip: P,
}

impl<I: InterfaceSource, P: PublicIpSource> CollectorService<I, P> {
    pub fn new(interfaces: I, public_ip: P) -> Self {
        Self { interfaces, public_ip }
    }

    /// Collects records in output order: the public address first when
    /// requested, then every local interface address. The first error
    /// aborts the collection and nothing collected so far is returned.
    pub async fn collect(&self, config: &AppConfig) -> Result<Vec<AddressRecord>, CollectError> {
        let mut records = Vec::new();

        if config.wants_public() {
            let public = self.public_ip.lookup().await?;
            log::info!(address = public.address.as_str(); "resolved public address");
            records.push(public);
        }

        if config.public_only() {
            return Ok(records);
        }

        for LocalInterface { name, addresses } in self.interfaces.interfaces()? {
            if addresses.is_empty() {
                log::debug!(interface = name.as_str(); "skipping interface without addresses");
                continue;
            }
            log::debug!(interface = name.as_str(), count = addresses.len(); "found interface");
            records.extend(addresses.into_iter().map(|address| AddressRecord::new(address, name.as_str())));
        }

        Ok(records)
    }
}
