//! Enums and small config objects shared by many requests

use serde::{Deserialize, Serialize};

/// Commitment level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentLevel {
    /// The most recent block processed by the node
    Processed,
    /// The most recent block voted on by a supermajority
    Confirmed,
    /// The most recent block finalized by the cluster
    #[default]
    Finalized,
}

/// Encoding of account data in responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UiAccountEncoding {
    /// Legacy base58, limited to small accounts
    Binary,
    /// Base58 text
    Base58,
    /// Base64 text
    Base64,
    /// Program-specific parsed JSON where available
    JsonParsed,
    /// Zstd-compressed then base64
    #[serde(rename = "base64+zstd")]
    Base64Zstd,
}

/// Encoding of transactions in requests and responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UiTransactionEncoding {
    /// Legacy base58
    Binary,
    /// Base64 text
    Base64,
    /// Base58 text
    Base58,
    /// JSON
    Json,
    /// JSON with parsed instructions where available
    JsonParsed,
}

/// Level of transaction detail returned for blocks and history queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionDetails {
    /// Full transactions
    #[default]
    Full,
    /// Signatures only
    Signatures,
    /// No transaction data
    None,
    /// Account keys and balances only
    Accounts,
}

/// Configuration for data slicing in account queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiDataSliceConfig {
    /// The offset to start slicing from
    pub offset: usize,
    /// The length of the slice
    pub length: usize,
}

/// Commitment and minimum context slot, the config of many simple queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcContextConfig {
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// The minimum slot that the request can be evaluated at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_context_slot: Option<u64>,
}

impl RpcContextConfig {
    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = Some(commitment);
        self
    }

    /// Set the minimum context slot
    pub fn with_min_context_slot(mut self, slot: u64) -> Self {
        self.min_context_slot = Some(slot);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(CommitmentLevel::Processed).unwrap(),
            json!("processed")
        );
        assert_eq!(CommitmentLevel::default(), CommitmentLevel::Finalized);
        assert_eq!(
            serde_json::to_value(UiAccountEncoding::Base64Zstd).unwrap(),
            json!("base64+zstd")
        );
        assert_eq!(
            serde_json::to_value(UiAccountEncoding::JsonParsed).unwrap(),
            json!("jsonParsed")
        );
        assert_eq!(
            serde_json::to_value(TransactionDetails::Signatures).unwrap(),
            json!("signatures")
        );
        assert_eq!(
            serde_json::from_value::<UiTransactionEncoding>(json!("base58")).unwrap(),
            UiTransactionEncoding::Base58
        );
    }

    #[test]
    fn test_context_config_omits_unset_fields() {
        assert_eq!(
            serde_json::to_value(RpcContextConfig::default()).unwrap(),
            json!({})
        );
        let config = RpcContextConfig::default()
            .with_commitment(CommitmentLevel::Confirmed)
            .with_min_context_slot(5);
        assert_eq!(
            serde_json::to_value(config).unwrap(),
            json!({"commitment": "confirmed", "minContextSlot": 5})
        );
    }
}
