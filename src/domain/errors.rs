use std::io;
use std::time::Duration;

use thiserror::Error;

/// Failure while gathering addresses. Any of these aborts the whole collection.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("could not enumerate network interfaces")]
    Interfaces(#[source] io::Error),
    #[error("public ip lookup failed")]
    PublicIp(#[source] reqwest::Error),
    #[error("public ip lookup timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("could not encode addresses as json")]
    Json(#[from] serde_json::Error),
    #[error("could not write output")]
    Io(#[from] io::Error),
}
