//! Nominator → validator delegation checks against the chain RPC endpoint.
//!
//! The staking-storage lookups are not implemented yet: `nomination_exists`
//! and `nomination_is_active` are placeholders that return `true`. The only
//! live chain interaction on the main path is the active-era probe, which
//! fails the check when the endpoint is unreachable.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::models::{StakingExtrinsic, VerificationResult};
use crate::rpc::types::{
    block_hash_from_result, ACTIVE_ERA_STORAGE_KEY, METHOD_GET_BLOCK, METHOD_GET_BLOCK_HASH,
    METHOD_GET_HEADER, METHOD_GET_STORAGE,
};
use crate::rpc::{ActiveEra, BlockBody, BlockHeader, ChainRpc, RpcError};

/// Addresses shorter than this are rejected before any RPC call.
pub const MIN_ADDRESS_LENGTH: usize = 10;

const NOMINATION_PATTERNS: [&str; 4] = ["nominate", "staking", "delegate", "bond"];

const STAKING_PATTERNS: [&str; 8] = [
    "nominate",
    "bond",
    "unbond",
    "withdraw_unbonded",
    "chill",
    "set_payee",
    "set_controller",
    "validate",
];

/// Number of blocks below the head searched for staking extrinsics.
const SCAN_DEPTH: u64 = 10;
const MAX_SCAN_HITS: usize = 5;
const DEFAULT_SCAN_PACING: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum DelegationError {
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),

    #[error("failed to fetch active era: {0}")]
    EraFetchFailure(#[source] RpcError),

    #[error("failed to fetch block {block}: {source}")]
    BlockFetchFailure {
        block: String,
        #[source]
        source: RpcError,
    },

    #[error("no nomination extrinsic found in block {0}")]
    NoNominationExtrinsic(String),

    #[error("standard delegation check failed for {nominator} -> {validator}")]
    StandardCheckFailed { nominator: String, validator: String },
}

/// Decides whether a nominator currently backs a validator.
#[async_trait]
pub trait DelegationCheck: Send + Sync {
    async fn is_active_delegation(
        &self,
        nominator: &str,
        validator: &str,
    ) -> Result<bool, DelegationError>;
}

pub struct DelegationService {
    rpc: Arc<dyn ChainRpc>,
    scan_pacing: Duration,
}

impl DelegationService {
    pub fn new(rpc: Arc<dyn ChainRpc>) -> Self {
        Self {
            rpc,
            scan_pacing: DEFAULT_SCAN_PACING,
        }
    }

    /// Delay between block fetches while scanning recent blocks.
    pub fn with_scan_pacing(mut self, pacing: Duration) -> Self {
        self.scan_pacing = pacing;
        self
    }

    pub fn endpoint(&self) -> &str {
        self.rpc.endpoint()
    }

    /// Format check, era probe, then the two storage placeholders, stopping
    /// at the first failure.
    pub async fn is_active_delegation(
        &self,
        nominator: &str,
        validator: &str,
    ) -> Result<bool, DelegationError> {
        info!(nominator, validator, "verifying delegation");

        check_address_format(nominator, validator)?;

        let era = self
            .fetch_active_era()
            .await
            .map_err(DelegationError::EraFetchFailure)?;
        debug!(era_index = ?era.index, "active era probe succeeded");

        if !nomination_exists(nominator, validator) {
            info!(nominator, validator, "nomination not found");
            return Ok(false);
        }

        if !nomination_is_active(nominator, validator, &era) {
            info!(nominator, validator, "nomination exists but is not active");
            return Ok(false);
        }

        info!(nominator, validator, "delegation verified");
        Ok(true)
    }

    /// Stage-by-stage variant. Address problems are reported in the result
    /// rather than as an error; extrinsic validation is never performed here.
    pub async fn verify_v2(
        &self,
        nominator: &str,
        validator: &str,
    ) -> Result<VerificationResult, DelegationError> {
        let mut result = VerificationResult::new(nominator, validator);

        if let Err(reason) = validate_v2_addresses(nominator, validator) {
            warn!(nominator, validator, %reason, "v2 address validation failed");
            result.error = reason;
            return Ok(result);
        }
        result.address_validation = true;

        result.storage_validation = nomination_exists(nominator, validator);
        if !result.storage_validation {
            result.error = "nomination not found in staking storage".to_string();
            return Ok(result);
        }

        let era = self
            .fetch_active_era()
            .await
            .map_err(DelegationError::EraFetchFailure)?;
        result.active_era_validation = nomination_is_active(nominator, validator, &era);
        result.additional_info = match era.index {
            Some(index) => format!("active era {index}"),
            None => "active era not set".to_string(),
        };
        if !result.active_era_validation {
            result.error = "nomination is not active in the current era".to_string();
        }

        result.is_valid =
            result.address_validation && result.storage_validation && result.active_era_validation;
        result.timestamp = Utc::now();
        Ok(result)
    }

    /// Require a nomination-looking extrinsic in `block_hash`, then run the
    /// standard check. Both must pass; a negative standard check is an error.
    pub async fn verify_with_extrinsic(
        &self,
        block_hash: &str,
        nominator: &str,
        validator: &str,
    ) -> Result<(), DelegationError> {
        info!(block_hash, nominator, validator, "verifying delegation by extrinsic");

        let body = self
            .fetch_block(block_hash)
            .await
            .map_err(|source| DelegationError::BlockFetchFailure {
                block: block_hash.to_string(),
                source,
            })?;

        let Some(index) = body
            .extrinsics
            .iter()
            .position(|extrinsic| is_nomination_extrinsic(extrinsic))
        else {
            return Err(DelegationError::NoNominationExtrinsic(block_hash.to_string()));
        };
        debug!(block_hash, index, "found nomination extrinsic");

        let delegated = self.is_active_delegation(nominator, validator).await?;
        require_delegated(delegated, nominator, validator)
    }

    /// Staking extrinsics touching either party.
    ///
    /// A nominator given as a 32-byte `0x` hash is first tried as a block
    /// hash. Otherwise the newest blocks are scanned; a block that fails to
    /// load is skipped.
    pub async fn staking_extrinsics(
        &self,
        nominator: &str,
        validator: &str,
    ) -> Result<Vec<StakingExtrinsic>, DelegationError> {
        if looks_like_hash(nominator) {
            match self.fetch_block(nominator).await {
                Ok(body) => {
                    let found = collect_staking(nominator, None, &body, &[]);
                    if !found.is_empty() {
                        return Ok(dedup_extrinsics(found));
                    }
                }
                Err(e) => warn!(hash = nominator, error = %e, "direct extrinsic lookup failed"),
            }
        }

        let latest = self
            .fetch_latest_header()
            .await
            .map_err(|source| DelegationError::BlockFetchFailure {
                block: "latest".to_string(),
                source,
            })?
            .number;
        let start = latest.saturating_sub(SCAN_DEPTH);
        debug!(start, latest, "scanning recent blocks for staking extrinsics");

        let parties = [nominator, validator];
        let mut found = Vec::new();
        let mut number = latest;
        loop {
            if found.len() >= MAX_SCAN_HITS {
                break;
            }

            match self.staking_in_block(number, &parties).await {
                Ok(hits) => found.extend(hits),
                Err(e) => warn!(block = number, error = %e, "skipping block"),
            }

            if number == start {
                break;
            }
            number -= 1;
            if !self.scan_pacing.is_zero() {
                sleep(self.scan_pacing).await;
            }
        }

        let found = dedup_extrinsics(found);
        info!(count = found.len(), "staking extrinsics found");
        Ok(found)
    }

    async fn staking_in_block(
        &self,
        number: u64,
        parties: &[&str],
    ) -> Result<Vec<StakingExtrinsic>, RpcError> {
        let hash = self.fetch_block_hash(number).await?;
        let body = self.fetch_block(&hash).await?;
        Ok(collect_staking(&hash, Some(number), &body, parties))
    }

    async fn fetch_active_era(&self) -> Result<ActiveEra, RpcError> {
        let result = self
            .rpc
            .call(METHOD_GET_STORAGE, json!([ACTIVE_ERA_STORAGE_KEY]))
            .await?;
        ActiveEra::from_result(result)
    }

    async fn fetch_latest_header(&self) -> Result<BlockHeader, RpcError> {
        let result = self.rpc.call(METHOD_GET_HEADER, json!([])).await?;
        BlockHeader::from_result(result)
    }

    async fn fetch_block_hash(&self, number: u64) -> Result<String, RpcError> {
        let result = self
            .rpc
            .call(METHOD_GET_BLOCK_HASH, json!([format!("0x{number:x}")]))
            .await?;
        block_hash_from_result(result)
    }

    async fn fetch_block(&self, hash: &str) -> Result<BlockBody, RpcError> {
        let result = self.rpc.call(METHOD_GET_BLOCK, json!([hash])).await?;
        BlockBody::from_result(result)
    }
}

#[async_trait]
impl DelegationCheck for DelegationService {
    async fn is_active_delegation(
        &self,
        nominator: &str,
        validator: &str,
    ) -> Result<bool, DelegationError> {
        DelegationService::is_active_delegation(self, nominator, validator).await
    }
}

/// Both addresses must be at least `MIN_ADDRESS_LENGTH` bytes long. No
/// charset is enforced.
pub fn check_address_format(nominator: &str, validator: &str) -> Result<(), DelegationError> {
    for (role, address) in [("nominator", nominator), ("validator", validator)] {
        if address.len() < MIN_ADDRESS_LENGTH {
            return Err(DelegationError::InvalidAddressFormat(format!(
                "{role} address must be at least {MIN_ADDRESS_LENGTH} characters"
            )));
        }
    }
    Ok(())
}

/// Placeholder for a `Staking.Nominators` lookup. Always `true`.
pub fn nomination_exists(_nominator: &str, _validator: &str) -> bool {
    true
}

/// Placeholder for comparing the nomination era with the active era.
/// Always `true`.
pub fn nomination_is_active(_nominator: &str, _validator: &str, _era: &ActiveEra) -> bool {
    true
}

fn require_delegated(
    delegated: bool,
    nominator: &str,
    validator: &str,
) -> Result<(), DelegationError> {
    if delegated {
        return Ok(());
    }
    warn!(nominator, validator, "standard delegation check failed");
    Err(DelegationError::StandardCheckFailed {
        nominator: nominator.to_string(),
        validator: validator.to_string(),
    })
}

fn validate_v2_addresses(nominator: &str, validator: &str) -> Result<(), String> {
    if nominator.len() < MIN_ADDRESS_LENGTH || validator.len() < MIN_ADDRESS_LENGTH {
        return Err(format!(
            "addresses must be at least {MIN_ADDRESS_LENGTH} characters"
        ));
    }
    if nominator == validator {
        return Err("nominator and validator addresses must differ".to_string());
    }
    for (role, address) in [("nominator", nominator), ("validator", validator)] {
        if !is_hex_account(address) && !is_base58(address) {
            return Err(format!("{role} address is neither 0x-hex nor base58"));
        }
    }
    Ok(())
}

fn is_hex_account(address: &str) -> bool {
    address.strip_prefix("0x").is_some_and(|digits| {
        !digits.is_empty()
            && digits.len() % 2 == 0
            && digits.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

fn is_base58(address: &str) -> bool {
    address
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() && !matches!(b, b'0' | b'O' | b'I' | b'l'))
}

fn looks_like_hash(value: &str) -> bool {
    value.len() == 66 && is_hex_account(value)
}

/// Lowercased search text for an extrinsic: the raw string plus, when it is
/// hex, its bytes read as lossy UTF-8.
fn searchable(extrinsic: &str) -> String {
    let mut text = extrinsic.to_lowercase();
    if let Some(bytes) = extrinsic
        .strip_prefix("0x")
        .and_then(|digits| hex::decode(digits).ok())
    {
        text.push(' ');
        text.push_str(&String::from_utf8_lossy(&bytes).to_lowercase());
    }
    text
}

fn is_nomination_extrinsic(extrinsic: &str) -> bool {
    let text = searchable(extrinsic);
    NOMINATION_PATTERNS.iter().any(|pattern| text.contains(pattern))
}

/// The matched staking pattern, if the extrinsic mentions one of `parties`
/// (or `parties` is empty).
fn staking_method(extrinsic: &str, parties: &[&str]) -> Option<&'static str> {
    let text = searchable(extrinsic);
    let pattern = STAKING_PATTERNS
        .iter()
        .copied()
        .find(|pattern| text.contains(pattern))?;

    let mentioned = parties.is_empty()
        || parties
            .iter()
            .filter(|party| !party.is_empty())
            .any(|party| extrinsic.contains(party) || text.contains(&party.to_lowercase()));
    mentioned.then_some(pattern)
}

fn collect_staking(
    block_hash: &str,
    block_number: Option<u64>,
    body: &BlockBody,
    parties: &[&str],
) -> Vec<StakingExtrinsic> {
    body.extrinsics
        .iter()
        .enumerate()
        .filter_map(|(index, extrinsic)| {
            staking_method(extrinsic, parties).map(|pattern| StakingExtrinsic {
                block_hash: block_hash.to_string(),
                block_number,
                extrinsic_index: index,
                method: format!("staking.{pattern}"),
            })
        })
        .collect()
}

fn dedup_extrinsics(extrinsics: Vec<StakingExtrinsic>) -> Vec<StakingExtrinsic> {
    let mut unique: Vec<StakingExtrinsic> = Vec::with_capacity(extrinsics.len());
    for extrinsic in extrinsics {
        let seen = unique.iter().any(|existing| {
            existing.block_hash == extrinsic.block_hash
                && existing.extrinsic_index == extrinsic.extrinsic_index
        });
        if !seen {
            unique.push(extrinsic);
        }
    }
    unique
}


#[cfg(test)]
mod tests {
    use super::test_helpers::MockRpc;
    use super::*;
    use serde_json::Value;

    const NOMINATOR: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";
    const VALIDATOR: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
    const HEX_NOMINATOR: &str =
        "0x73479ae11533f4e717e3f7b45a8f54d95021785395df62abbe68ff9af32e40cc";

    fn service(rpc: Arc<MockRpc>) -> DelegationService {
        DelegationService::new(rpc).with_scan_pacing(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_empty_addresses_rejected_without_rpc() {
        let rpc = MockRpc::healthy();
        let checker = service(rpc.clone());

        let result = checker.is_active_delegation("", "").await;

        assert!(matches!(result, Err(DelegationError::InvalidAddressFormat(_))));
        assert!(rpc.calls().is_empty());
    }

    #[tokio::test]
    async fn test_short_address_rejected_without_rpc() {
        let rpc = MockRpc::healthy();
        let checker = service(rpc.clone());

        let result = checker.is_active_delegation(NOMINATOR, "0x456").await;

        assert!(matches!(result, Err(DelegationError::InvalidAddressFormat(_))));
        assert!(rpc.calls().is_empty());
    }

    #[test]
    fn test_address_length_boundary() {
        assert!(matches!(
            check_address_format("123456789", VALIDATOR),
            Err(DelegationError::InvalidAddressFormat(_))
        ));
        assert!(matches!(
            check_address_format(NOMINATOR, "123456789"),
            Err(DelegationError::InvalidAddressFormat(_))
        ));
        assert!(check_address_format("1234567890", "abcdefghij").is_ok());
    }

    #[tokio::test]
    async fn test_well_formed_addresses_with_reachable_endpoint() {
        let rpc = MockRpc::healthy();
        let checker = service(rpc.clone());

        assert!(checker.is_active_delegation(NOMINATOR, VALIDATOR).await.unwrap());
        assert_eq!(rpc.calls(), vec![METHOD_GET_STORAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_unset_era_still_passes_probe() {
        let rpc = MockRpc::new(|_, _| Ok(Value::Null));
        let checker = service(rpc);

        assert!(checker.is_active_delegation(NOMINATOR, VALIDATOR).await.unwrap());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_error_not_false() {
        let checker = service(MockRpc::unreachable());

        let result = checker.is_active_delegation(NOMINATOR, VALIDATOR).await;

        assert!(matches!(
            result,
            Err(DelegationError::EraFetchFailure(RpcError::Status { status: 503, .. }))
        ));
    }

    #[tokio::test]
    async fn test_remote_rpc_error_surfaces() {
        let rpc = MockRpc::new(|_, _| {
            Err(RpcError::Remote {
                endpoint: "mock".to_string(),
                code: -32000,
                message: "storage unavailable".to_string(),
            })
        });
        let checker = service(rpc);

        let err = checker
            .is_active_delegation(NOMINATOR, VALIDATOR)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("storage unavailable"));
    }

    #[test]
    fn test_placeholders_always_true() {
        assert!(nomination_exists("anything", "anything"));
        assert!(nomination_is_active("a", "b", &ActiveEra::default()));
    }

    #[tokio::test]
    async fn test_v2_valid_pair() {
        let checker = service(MockRpc::healthy());

        let result = checker.verify_v2(HEX_NOMINATOR, VALIDATOR).await.unwrap();

        assert!(result.is_valid);
        assert!(result.address_validation);
        assert!(result.storage_validation);
        assert!(result.active_era_validation);
        assert!(!result.extrinsic_validation);
        assert_eq!(result.additional_info, "active era 42");
        assert_eq!(result.nominator_address, HEX_NOMINATOR);
        assert_eq!(result.validator_address, VALIDATOR);
        assert!(Utc::now() - result.timestamp < chrono::Duration::minutes(1));
    }

    #[tokio::test]
    async fn test_v2_invalid_addresses_reported_in_result() {
        let same = "0x1234567890123456789012345678901234567890123456789012345678901234";
        let cases = [
            ("", ""),
            ("0x123", "0x456"),
            (same, same),
            (
                "1234567890123456789012345678901234567890123456789012345678901234",
                same,
            ),
        ];

        for (nominator, validator) in cases {
            let rpc = MockRpc::healthy();
            let checker = service(rpc.clone());

            let result = checker.verify_v2(nominator, validator).await.unwrap();

            assert!(!result.is_valid, "{nominator} -> {validator}");
            assert!(!result.address_validation);
            assert!(!result.extrinsic_validation);
            assert!(!result.error.is_empty());
            assert!(rpc.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_v2_era_failure_is_error() {
        let checker = service(MockRpc::unreachable());
        assert!(matches!(
            checker.verify_v2(HEX_NOMINATOR, VALIDATOR).await,
            Err(DelegationError::EraFetchFailure(_))
        ));
    }

    #[test]
    fn test_v2_result_serializes() {
        let result = VerificationResult::new(NOMINATOR, VALIDATOR);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["extrinsic_validation"], false);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_nomination_patterns() {
        assert!(is_nomination_extrinsic("Staking.nominate(targets)"));
        assert!(is_nomination_extrinsic("BOND_EXTRA"));
        // "delegate" hidden inside hex-encoded bytes
        assert!(is_nomination_extrinsic(&format!("0x{}", hex::encode("delegate"))));
        assert!(!is_nomination_extrinsic("0x280403000b"));
    }

    #[test]
    fn test_staking_method_requires_party() {
        assert_eq!(
            staking_method(&format!("nominate {VALIDATOR}"), &[NOMINATOR, VALIDATOR]),
            Some("nominate")
        );
        assert_eq!(staking_method("nominate someone", &[NOMINATOR, VALIDATOR]), None);
        assert_eq!(staking_method("chill", &[]), Some("chill"));
        assert_eq!(staking_method("transfer", &[]), None);
    }

    #[tokio::test]
    async fn test_verify_with_extrinsic() {
        let rpc = MockRpc::new(|method, _| match method {
            METHOD_GET_BLOCK => Ok(json!({"block": {"extrinsics": ["0x00", "staking.nominate"]}})),
            METHOD_GET_STORAGE => Ok(json!("0x01000000")),
            _ => Ok(Value::Null),
        });
        let checker = service(rpc.clone());

        checker
            .verify_with_extrinsic("0xblock", NOMINATOR, VALIDATOR)
            .await
            .unwrap();
        assert_eq!(
            rpc.calls(),
            vec![METHOD_GET_BLOCK.to_string(), METHOD_GET_STORAGE.to_string()]
        );
    }

    #[test]
    fn test_negative_standard_check_is_error() {
        assert!(require_delegated(true, NOMINATOR, VALIDATOR).is_ok());
        match require_delegated(false, NOMINATOR, VALIDATOR) {
            Err(DelegationError::StandardCheckFailed {
                nominator,
                validator,
            }) => {
                assert_eq!(nominator, NOMINATOR);
                assert_eq!(validator, VALIDATOR);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_verify_with_extrinsic_without_nomination() {
        let rpc = MockRpc::new(|_, _| Ok(json!({"block": {"extrinsics": ["0x00"]}})));
        let checker = service(rpc);

        assert!(matches!(
            checker
                .verify_with_extrinsic("0xblock", NOMINATOR, VALIDATOR)
                .await,
            Err(DelegationError::NoNominationExtrinsic(_))
        ));
    }

    #[tokio::test]
    async fn test_staking_extrinsics_scans_recent_blocks() {
        let rpc = MockRpc::new(|method, params| match method {
            METHOD_GET_HEADER => Ok(json!({"number": "0x3"})),
            METHOD_GET_BLOCK_HASH => {
                let number = params[0].as_str().unwrap_or_default().to_string();
                Ok(json!(format!("hash-{number}")))
            }
            METHOD_GET_BLOCK => match params[0].as_str() {
                Some("hash-0x2") => Ok(json!({"block": {"extrinsics": [
                    "timestamp.set",
                    format!("staking.nominate {VALIDATOR}"),
                ]}})),
                Some("hash-0x1") => Err(RpcError::Status {
                    endpoint: "mock".to_string(),
                    status: 500,
                }),
                _ => Ok(json!({"block": {"extrinsics": []}})),
            },
            _ => Ok(Value::Null),
        });
        let checker = service(rpc.clone());

        let found = checker.staking_extrinsics(NOMINATOR, VALIDATOR).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].block_hash, "hash-0x2");
        assert_eq!(found[0].block_number, Some(2));
        assert_eq!(found[0].extrinsic_index, 1);
        assert_eq!(found[0].method, "staking.nominate");
        // header + (hash, block) for blocks 3..=0
        assert_eq!(rpc.calls().len(), 1 + 4 * 2);
    }

    #[tokio::test]
    async fn test_staking_extrinsics_direct_hash_lookup() {
        let rpc = MockRpc::new(|method, _| match method {
            METHOD_GET_BLOCK => Ok(json!({"block": {"extrinsics": ["bond", "bond"]}})),
            _ => Ok(Value::Null),
        });
        let checker = service(rpc.clone());

        let found = checker
            .staking_extrinsics(HEX_NOMINATOR, VALIDATOR)
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|e| e.block_hash == HEX_NOMINATOR));
        assert_eq!(rpc.calls(), vec![METHOD_GET_BLOCK.to_string()]);
    }

    #[tokio::test]
    async fn test_staking_extrinsics_head_failure_is_error() {
        let checker = service(MockRpc::unreachable());
        assert!(matches!(
            checker.staking_extrinsics(NOMINATOR, VALIDATOR).await,
            Err(DelegationError::BlockFetchFailure { .. })
        ));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let entry = |hash: &str, index| StakingExtrinsic {
            block_hash: hash.to_string(),
            block_number: None,
            extrinsic_index: index,
            method: "staking.bond".to_string(),
        };
        let unique = dedup_extrinsics(vec![
            entry("a", 0),
            entry("a", 0),
            entry("a", 1),
            entry("b", 0),
        ]);
        assert_eq!(unique.len(), 3);
    }
}
