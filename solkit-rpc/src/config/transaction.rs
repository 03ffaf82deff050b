//! Config objects for transaction submission, simulation and history queries

use serde::{Deserialize, Serialize};
use solkit_base::{Address, Signature};

use super::common::{CommitmentLevel, TransactionDetails, UiAccountEncoding, UiTransactionEncoding};

/// Configuration for `getSignatureStatuses`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcSignatureStatusConfig {
    /// Search the full ledger history, not only the recent status cache
    pub search_transaction_history: bool,
}

impl RpcSignatureStatusConfig {
    /// Create a config with the history search flag
    pub fn new(search_transaction_history: bool) -> Self {
        Self {
            search_transaction_history,
        }
    }
}

/// Configuration for `sendTransaction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcSendTransactionConfig {
    /// Skip the preflight transaction checks
    #[serde(default)]
    pub skip_preflight: bool,
    /// Commitment level to use for preflight checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preflight_commitment: Option<CommitmentLevel>,
    /// Encoding used for the transaction data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<UiTransactionEncoding>,
    /// Maximum number of times the node retries sending to the leader
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<usize>,
    /// The minimum slot that the request can be evaluated at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_context_slot: Option<u64>,
}

impl Default for RpcSendTransactionConfig {
    fn default() -> Self {
        Self {
            skip_preflight: false,
            preflight_commitment: None,
            encoding: Some(UiTransactionEncoding::Base64),
            max_retries: None,
            min_context_slot: None,
        }
    }
}

impl RpcSendTransactionConfig {
    /// Skip or run preflight checks
    pub fn with_skip_preflight(mut self, skip_preflight: bool) -> Self {
        self.skip_preflight = skip_preflight;
        self
    }

    /// Set the preflight commitment level
    pub fn with_preflight_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.preflight_commitment = Some(commitment);
        self
    }

    /// Set the maximum number of node-side retries
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Set the minimum context slot
    pub fn with_min_context_slot(mut self, slot: u64) -> Self {
        self.min_context_slot = Some(slot);
        self
    }
}

/// Accounts to return after a simulated transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcSimulateTransactionAccountsConfig {
    /// Encoding for returned account data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<UiAccountEncoding>,
    /// Accounts to return
    pub addresses: Vec<Address>,
}

/// Configuration for `simulateTransaction`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcSimulateTransactionConfig {
    /// Verify transaction signatures
    #[serde(default)]
    pub sig_verify: bool,
    /// Replace the recent blockhash with the latest one
    #[serde(default)]
    pub replace_recent_blockhash: bool,
    /// Commitment level of the simulated bank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// Encoding used for the transaction data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<UiTransactionEncoding>,
    /// Accounts to return after simulation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<RpcSimulateTransactionAccountsConfig>,
    /// The minimum slot that the request can be evaluated at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_context_slot: Option<u64>,
    /// Return inner instructions
    #[serde(default)]
    pub inner_instructions: bool,
}

impl RpcSimulateTransactionConfig {
    /// Enable or disable signature verification
    pub fn with_sig_verify(mut self, sig_verify: bool) -> Self {
        self.sig_verify = sig_verify;
        self
    }

    /// Replace the transaction's blockhash before simulating
    pub fn with_replace_recent_blockhash(mut self, replace: bool) -> Self {
        self.replace_recent_blockhash = replace;
        self
    }

    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = Some(commitment);
        self
    }

    /// Set the transaction encoding
    pub fn with_encoding(mut self, encoding: UiTransactionEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Return the given accounts after simulation
    pub fn with_accounts(mut self, addresses: Vec<Address>, encoding: UiAccountEncoding) -> Self {
        self.accounts = Some(RpcSimulateTransactionAccountsConfig {
            encoding: Some(encoding),
            addresses,
        });
        self
    }
}

/// Configuration for `getSignaturesForAddress`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcSignaturesForAddressConfig {
    /// Start searching backwards from this signature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Signature>,
    /// Stop searching at this signature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<Signature>,
    /// Maximum number of signatures to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// The minimum slot that the request can be evaluated at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_context_slot: Option<u64>,
}

impl RpcSignaturesForAddressConfig {
    /// Start from the given signature
    pub fn with_before(mut self, signature: Signature) -> Self {
        self.before = Some(signature);
        self
    }

    /// Stop at the given signature
    pub fn with_until(mut self, signature: Signature) -> Self {
        self.until = Some(signature);
        self
    }

    /// Set the maximum number of results
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Configuration for `getTransaction`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionConfig {
    /// Encoding for the returned transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<UiTransactionEncoding>,
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// Highest transaction version the caller can decode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_supported_transaction_version: Option<u8>,
}

impl RpcTransactionConfig {
    /// Set the transaction encoding
    pub fn with_encoding(mut self, encoding: UiTransactionEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = Some(commitment);
        self
    }

    /// Accept versioned transactions up to `version`
    pub fn with_max_supported_transaction_version(mut self, version: u8) -> Self {
        self.max_supported_transaction_version = Some(version);
        self
    }
}

/// Configuration for `getBlock`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlockConfig {
    /// Encoding for returned transactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<UiTransactionEncoding>,
    /// Level of transaction detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_details: Option<TransactionDetails>,
    /// Include block rewards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewards: Option<bool>,
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// Highest transaction version the caller can decode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_supported_transaction_version: Option<u8>,
}

impl RpcBlockConfig {
    /// Set the transaction encoding
    pub fn with_encoding(mut self, encoding: UiTransactionEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Set the level of transaction detail
    pub fn with_transaction_details(mut self, details: TransactionDetails) -> Self {
        self.transaction_details = Some(details);
        self
    }

    /// Include or omit rewards
    pub fn with_rewards(mut self, rewards: bool) -> Self {
        self.rewards = Some(rewards);
        self
    }

    /// Accept versioned transactions up to `version`
    pub fn with_max_supported_transaction_version(mut self, version: u8) -> Self {
        self.max_supported_transaction_version = Some(version);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_transaction_config_defaults_to_base64() {
        assert_eq!(
            serde_json::to_value(RpcSendTransactionConfig::default()).unwrap(),
            json!({"skipPreflight": false, "encoding": "base64"})
        );
        let config = RpcSendTransactionConfig::default()
            .with_skip_preflight(true)
            .with_preflight_commitment(CommitmentLevel::Processed)
            .with_max_retries(3);
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"skipPreflight":true,"preflightCommitment":"processed","encoding":"base64","maxRetries":3}"#
        );
    }

    #[test]
    fn test_signature_status_config() {
        assert_eq!(
            serde_json::to_string(&RpcSignatureStatusConfig::new(true)).unwrap(),
            r#"{"searchTransactionHistory":true}"#
        );
    }

    #[test]
    fn test_simulate_transaction_accounts() {
        let config = RpcSimulateTransactionConfig::default()
            .with_sig_verify(true)
            .with_accounts(vec![Address::default()], UiAccountEncoding::Base64);
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "sigVerify": true,
                "replaceRecentBlockhash": false,
                "accounts": {
                    "encoding": "base64",
                    "addresses": ["11111111111111111111111111111111"]
                },
                "innerInstructions": false
            })
        );
    }

    #[test]
    fn test_signatures_for_address_config() {
        let config = RpcSignaturesForAddressConfig::default()
            .with_before(Signature::default())
            .with_limit(25);
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"before": "1".repeat(64), "limit": 25})
        );
    }

    #[test]
    fn test_block_config() {
        let config = RpcBlockConfig::default()
            .with_transaction_details(TransactionDetails::None)
            .with_rewards(false)
            .with_max_supported_transaction_version(0);
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "transactionDetails": "none",
                "rewards": false,
                "maxSupportedTransactionVersion": 0
            })
        );
    }
}
