use std::time::Duration;

use async_trait::async_trait;
use crate::domain::config::AppConfig;
use crate::domain::errors::CollectError;
use crate::domain::models::AddressRecord;
use crate::features::collector::PublicIpSource;

/// Looks up the public address with one GET against a plain-text echo service.
/// The HTTP client is built per lookup.
///
/// A non-success status is a lookup failure: the body of an error page is
/// never reported as an address.
pub struct HttpPublicIp {
    url: String,
    timeout: Duration,
}

impl HttpPublicIp {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    fn client(&self) -> Result<reqwest::Client, CollectError> {
        reqwest::Client::builder()
            .user_agent(AppConfig::USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(CollectError::PublicIp)
    }

    fn classify(&self, error: reqwest::Error) -> CollectError {
        if error.is_timeout() {
            CollectError::Timeout(self.timeout)
        } else {
            CollectError::PublicIp(error)
        }
    }
}

#[async_trait]
impl PublicIpSource for HttpPublicIp {
    async fn lookup(&self) -> Result<AddressRecord, CollectError> {
        log::debug!(url = self.url.as_str(); "looking up public address");

        let body = self
            .client()?
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| self.classify(e))?
            .text()
            .await
            .map_err(|e| self.classify(e))?;

        Ok(AddressRecord::new(body.trim(), AppConfig::PUBLIC_INTERFACE))
    }
}
