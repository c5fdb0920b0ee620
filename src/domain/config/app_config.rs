use std::time::Duration;

use log::LevelFilter;

/// Run configuration, built once from the command line and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub public: bool,
    pub all: bool,
    pub json: bool,
    pub log_level: u64,
    pub timeout: Duration,
    /// Plain-text endpoint answering with the caller's address
    pub url: String,
}

impl AppConfig {
    pub const PUBLIC_IP_URL: &'static str = "https://wtfismyip.com/text";
    pub const USER_AGENT: &'static str = "curl/8.7.1";
    pub const PUBLIC_INTERFACE: &'static str = "public";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Whether the public address has to be looked up
    pub fn wants_public(&self) -> bool {
        self.public || self.all
    }

    /// `-p` without `-a`: local interfaces are not enumerated
    pub fn public_only(&self) -> bool {
        self.public && !self.all
    }

    pub fn log_filter(&self) -> LevelFilter {
        match self.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public: false,
            all: false,
            json: false,
            log_level: 0,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            url: Self::PUBLIC_IP_URL.to_string(),
        }
    }
}
