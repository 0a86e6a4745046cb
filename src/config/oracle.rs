use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use zeroize::Zeroizing;

use crate::services::SigningScheme;

pub const DEFAULT_RPC_URL: &str = "https://rpc.polkadot.io";
pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_RPC_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Process configuration read from the environment.
///
/// `private_key` is wiped on drop and redacted from `Debug`.
#[derive(Clone)]
pub struct OracleConfig {
    pub private_key: Zeroizing<String>,
    pub rpc_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub rpc_timeout: Duration,
    pub signing_scheme: SigningScheme,
}

impl OracleConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any name → value source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let private_key = get("PRIVATE_KEY").ok_or(ConfigError::Missing("PRIVATE_KEY"))?;
        let rpc_url = get("POLKADOT_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let host = match get("HOST") {
            Some(value) => value.trim().parse::<IpAddr>().map_err(|e| ConfigError::Invalid {
                name: "HOST",
                reason: format!("{e}"),
            })?,
            None => DEFAULT_HOST,
        };

        let port = match get("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: format!("{e}"),
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_seconds = match get("RPC_TIMEOUT_SECONDS") {
            Some(value) => value.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "RPC_TIMEOUT_SECONDS",
                reason: format!("{e}"),
            })?,
            None => DEFAULT_RPC_TIMEOUT_SECONDS,
        };
        if timeout_seconds == 0 {
            return Err(ConfigError::Invalid {
                name: "RPC_TIMEOUT_SECONDS",
                reason: "must be greater than zero".to_string(),
            });
        }

        let signing_scheme = match get("SIGNING_SCHEME") {
            Some(value) => value
                .parse::<SigningScheme>()
                .map_err(|reason| ConfigError::Invalid {
                    name: "SIGNING_SCHEME",
                    reason,
                })?,
            None => SigningScheme::default(),
        };

        Ok(Self {
            private_key: Zeroizing::new(private_key),
            rpc_url,
            host,
            port,
            rpc_timeout: Duration::from_secs(timeout_seconds),
            signing_scheme,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl std::fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleConfig")
            .field("private_key", &"<redacted>")
            .field("rpc_url", &self.rpc_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("rpc_timeout", &self.rpc_timeout)
            .field("signing_scheme", &self.signing_scheme)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<OracleConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        OracleConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_private_key_required() {
        assert_eq!(config(&[]).unwrap_err(), ConfigError::Missing("PRIVATE_KEY"));
        assert_eq!(
            config(&[("PRIVATE_KEY", "  ")]).unwrap_err(),
            ConfigError::Missing("PRIVATE_KEY")
        );
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("PRIVATE_KEY", "0x01")]).unwrap();
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.port, 4001);
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:4001");
        assert_eq!(config.rpc_timeout, Duration::from_secs(10));
        assert_eq!(config.signing_scheme, SigningScheme::PlainMessage);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("PRIVATE_KEY", "0x01"),
            ("POLKADOT_RPC_URL", "http://localhost:9944"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("RPC_TIMEOUT_SECONDS", "3"),
            ("SIGNING_SCHEME", "triplet"),
        ])
        .unwrap();
        assert_eq!(config.rpc_url, "http://localhost:9944");
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.rpc_timeout, Duration::from_secs(3));
        assert_eq!(config.signing_scheme, SigningScheme::Triplet);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        for (name, value) in [
            ("PORT", "http"),
            ("PORT", "70000"),
            ("HOST", "localhost:80"),
            ("RPC_TIMEOUT_SECONDS", "0"),
            ("RPC_TIMEOUT_SECONDS", "-1"),
            ("SIGNING_SCHEME", "eip712"),
        ] {
            assert!(
                matches!(
                    config(&[("PRIVATE_KEY", "0x01"), (name, value)]),
                    Err(ConfigError::Invalid { .. })
                ),
                "{name}={value} accepted"
            );
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = config(&[("PRIVATE_KEY", "deadbeef")]).unwrap();
        assert!(!format!("{config:?}").contains("deadbeef"));
    }
}
