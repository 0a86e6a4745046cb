//! Environment configuration

pub mod oracle;

pub use oracle::{ConfigError, OracleConfig};
