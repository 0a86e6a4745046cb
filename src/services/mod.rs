//! Business logic services for the delegation oracle

pub mod delegation_service;
pub mod oracle_service;
pub mod verifier_service;

pub use delegation_service::{DelegationCheck, DelegationError, DelegationService};
pub use oracle_service::{OracleError, OracleService, SigningScheme};
pub use verifier_service::{VerifierError, VerifierService};
