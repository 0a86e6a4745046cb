//! API handlers for the delegation oracle

pub mod oracle;

pub use oracle::{health, info, verify};
