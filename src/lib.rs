//! Delegation oracle library
//!
//! Attests that a nominator has delegated to a validator by signing
//! `(validator, nominator, msg)` with a secp256k1 key, and verifies such
//! attestations the way the on-chain contract does.

pub mod app_state;
pub mod config;
pub mod crypto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod rpc;
pub mod services;
