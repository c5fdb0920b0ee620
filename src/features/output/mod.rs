pub mod output_service;

pub use output_service::OutputService;
