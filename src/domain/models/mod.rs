pub mod address_record;
pub mod local_interface;

pub use address_record::AddressRecord;
pub use local_interface::LocalInterface;
