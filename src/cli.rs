use std::ffi::OsString;
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use crate::domain::config::AppConfig;

/// Print local interface addresses and, optionally, the public IP.
///
/// Every option can also be set through an `IPS_` environment variable;
/// a flag given on the command line wins over the environment.
#[derive(Parser, Debug)]
#[command(name = "ips", version)]
pub struct Args {
    /// Print the public ip only, -a takes precedence
    #[arg(short = 'p', env = "IPS_P", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub public: bool,

    /// Print the public ip and all local addresses
    #[arg(short = 'a', env = "IPS_A", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub all: bool,

    /// Output as a JSON array (`-json` is accepted too)
    #[arg(long = "json", env = "IPS_JSON", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub json: bool,

    /// Log level: 0=warn, 1=info, 2 or more=debug
    #[arg(short = 'l', env = "IPS_L", default_value_t = 0)]
    pub log_level: u64,

    /// Public ip lookup timeout
    #[arg(
        short = 't',
        long = "timeout",
        env = "IPS_T",
        value_name = "SECONDS",
        default_value_t = AppConfig::DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Public ip lookup endpoint
    #[arg(long = "url", env = "IPS_URL", hide = true, default_value = AppConfig::PUBLIC_IP_URL)]
    pub url: String,
}

impl Args {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            public: self.public,
            all: self.all,
            json: self.json,
            log_level: self.log_level,
            timeout: Duration::from_secs(self.timeout),
            url: self.url,
        }
    }
}

pub fn parse() -> Result<Args, clap::Error> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Args::try_parse_from(normalize_args(args))
}

/// Rewrites the single-dash `-json` into `--json`. Arguments after `--` are left alone.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                arg
            } else if arg == "-json" {
                OsString::from("--json")
            } else {
                arg
            }
        })
        .collect()
}
