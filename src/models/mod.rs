//! Data models for the oracle API and delegation checks

pub mod delegation;
pub mod oracle;

pub use delegation::{DelegationMessage, StakingExtrinsic, VerificationResult};
pub use oracle::{ErrorResponse, HealthResponse, InfoResponse, VerifyRequest, VerifyResponse};
