//! Listener address and shutdown budget.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::ops::RangeInclusive;
use std::time::Duration;

use anyhow::ensure;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Ports the server may bind without elevated privileges.
const UNPRIVILEGED_PORTS: RangeInclusive<u16> = 1024..=u16::MAX;

/// Accepted graceful shutdown budgets, in seconds.
const SHUTDOWN_BUDGETS: RangeInclusive<u64> = 1..=300;

/// Where the server listens and how long it drains on shutdown.
///
/// Set through `--host`/`HOST`, `--port`/`PORT` and
/// `--shutdown-timeout`/`SHUTDOWN_TIMEOUT`.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Interface to listen on; `0.0.0.0` exposes every interface.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    #[serde(default = "loopback")]
    pub host: IpAddr,

    /// TCP port, 1024 or above.
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Seconds that in-flight requests, pending model calls included, may
    /// keep running after SIGINT or SIGTERM. Between 1 and 300.
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,
}

fn loopback() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: loopback(),
            port: 3000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    /// Checks the port and shutdown budget against their accepted ranges.
    ///
    /// # Errors
    ///
    /// Names the first value that falls outside its range.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            UNPRIVILEGED_PORTS.contains(&self.port),
            "port {} needs elevated privileges, pick one from {}..={}",
            self.port,
            UNPRIVILEGED_PORTS.start(),
            UNPRIVILEGED_PORTS.end(),
        );
        ensure!(
            SHUTDOWN_BUDGETS.contains(&self.shutdown_timeout),
            "shutdown timeout of {}s is outside {}..={}s",
            self.shutdown_timeout,
            SHUTDOWN_BUDGETS.start(),
            SHUTDOWN_BUDGETS.end(),
        );
        Ok(())
    }

    /// Address handed to the listener.
    #[must_use]
    pub const fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Drain budget after a shutdown signal.
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }

    /// Whether the listener is reachable from other hosts.
    #[must_use]
    pub const fn is_exposed(&self) -> bool {
        self.host.is_unspecified()
    }

    /// Logs the listener settings at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            addr = %self.server_addr(),
            exposed = self.is_exposed(),
            shutdown_timeout_secs = self.shutdown_timeout,
            "Server configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_loopback() {
        let config = ServerConfig::default();

        assert!(config.validate().is_ok());
        assert!(!config.is_exposed());
        assert_eq!(config.server_addr(), "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn port_boundary() {
        let mut config = ServerConfig::default();

        config.port = 1023;
        let error = config.validate().unwrap_err();
        assert!(error.to_string().starts_with("port 1023 needs elevated privileges"));

        config.port = 1024;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn shutdown_budget_boundaries() {
        for (secs, accepted) in [(0, false), (1, true), (300, true), (301, false)] {
            let config = ServerConfig {
                shutdown_timeout: secs,
                ..ServerConfig::default()
            };
            assert_eq!(config.validate().is_ok(), accepted, "{secs}s");
        }
    }

    #[test]
    fn unspecified_hosts_are_exposed() {
        for host in ["0.0.0.0", "::"] {
            let config = ServerConfig {
                host: host.parse().unwrap(),
                ..ServerConfig::default()
            };
            assert!(config.is_exposed(), "{host}");
        }
    }
}
