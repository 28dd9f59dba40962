use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use eyre::WrapErr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
pub const DEFAULT_SESSION_SWEEP_SECS: u64 = 300;

/// Process settings read from `DISCERN_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub session_ttl: Duration,
    pub sweep_interval: Duration,
    /// JSON engine config to load instead of the built-in defaults.
    pub engine_config: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or empty variables
    /// take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("DISCERN_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .wrap_err("DISCERN_BIND_ADDR is not a socket address")?;

        let session_ttl = seconds(var("DISCERN_SESSION_TTL_SECS"), DEFAULT_SESSION_TTL_SECS)
            .wrap_err("DISCERN_SESSION_TTL_SECS must be a positive integer")?;
        let sweep_interval = seconds(var("DISCERN_SESSION_SWEEP_SECS"), DEFAULT_SESSION_SWEEP_SECS)
            .wrap_err("DISCERN_SESSION_SWEEP_SECS must be a positive integer")?;

        Ok(Self {
            bind_addr,
            session_ttl,
            sweep_interval,
            engine_config: var("DISCERN_ENGINE_CONFIG").map(PathBuf::from),
        })
    }
}

fn seconds(raw: Option<String>, default: u64) -> eyre::Result<Duration> {
    let secs = match raw {
        Some(raw) => raw.trim().parse::<u64>()?,
        None => default,
    };
    if secs == 0 {
        eyre::bail!("zero is not allowed");
    }
    Ok(Duration::from_secs(secs))
}
