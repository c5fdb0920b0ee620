pub mod collector_service;
pub mod public_ip;

pub use collector_service::{CollectorService, PublicIpSource, SystemInterfaces};
pub use public_ip::HttpPublicIp;
