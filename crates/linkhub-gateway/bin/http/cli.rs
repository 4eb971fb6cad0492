use clap::{Parser, ValueEnum};
use linkhub_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "LINKHUB_GATEWAY_LISTEN_ADDR";
pub const UPSTREAM_TIMEOUT_ENV: &str = "LINKHUB_GATEWAY_UPSTREAM_TIMEOUT_SECS";
pub const LOG_FORMAT_ENV: &str = "LINKHUB_GATEWAY_LOG_FORMAT";
pub const OTLP_ENDPOINT_ENV: &str = "LINKHUB_GATEWAY_OTLP_ENDPOINT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Provider credentials are read from `GPLINKS_API_KEY` and
/// `MDISKSHORTNER_API_KEY`, not from flags.
#[derive(Debug, Parser)]
#[command(name = "linkhub-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Timeout for each outbound provider call, in seconds.
    #[arg(
        long,
        env = UPSTREAM_TIMEOUT_ENV,
        default_value_t = DEFAULT_UPSTREAM_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub upstream_timeout_secs: u64,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,

    #[arg(long, env = OTLP_ENDPOINT_ENV)]
    pub otlp_endpoint: Option<String>,
}
