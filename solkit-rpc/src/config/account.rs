//! Config objects for account and cluster queries

use serde::{Deserialize, Serialize};
use solkit_base::Address;

use super::common::{CommitmentLevel, UiAccountEncoding, UiDataSliceConfig};

/// Configuration for `getAccountInfo`, `getMultipleAccounts` and account scans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcAccountInfoConfig {
    /// Encoding for returned account data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<UiAccountEncoding>,
    /// Request a slice of the account's data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_slice: Option<UiDataSliceConfig>,
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// The minimum slot that the request can be evaluated at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_context_slot: Option<u64>,
}

impl RpcAccountInfoConfig {
    /// Set the data encoding
    pub fn with_encoding(mut self, encoding: UiAccountEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Return only `length` bytes starting at `offset`
    pub fn with_data_slice(mut self, offset: usize, length: usize) -> Self {
        self.data_slice = Some(UiDataSliceConfig { offset, length });
        self
    }

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

/// Filter for `getLargestAccounts`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RpcLargestAccountsFilter {
    /// Only circulating accounts
    Circulating,
    /// Only non-circulating accounts
    NonCirculating,
}

/// Configuration for `getLargestAccounts`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcLargestAccountsConfig {
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// Restrict results by circulation status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<RpcLargestAccountsFilter>,
}

impl RpcLargestAccountsConfig {
    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = Some(commitment);
        self
    }

    /// Set the circulation filter
    pub fn with_filter(mut self, filter: RpcLargestAccountsFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Configuration for `requestAirdrop`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcRequestAirdropConfig {
    /// Blockhash to use for the airdrop transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_blockhash: Option<String>,
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
}

impl RpcRequestAirdropConfig {
    /// Set the blockhash the airdrop transaction is built on
    pub fn with_recent_blockhash(mut self, blockhash: impl Into<String>) -> Self {
        self.recent_blockhash = Some(blockhash.into());
        self
    }

    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = Some(commitment);
        self
    }
}

/// Configuration for epoch-scoped queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcEpochConfig {
    /// Epoch to query, current epoch when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch: Option<u64>,
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// The minimum slot that the request can be evaluated at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_context_slot: Option<u64>,
}

impl RpcEpochConfig {
    /// Set the epoch
    pub fn with_epoch(mut self, epoch: u64) -> Self {
        self.epoch = Some(epoch);
        self
    }

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

/// Which token accounts `getTokenAccountsByOwner` and `ByDelegate` return
///
/// Serializes as a single-key object, `{"mint": ..}` or `{"programId": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RpcTokenAccountsFilter {
    /// Accounts holding this mint
    Mint(Address),
    /// Accounts owned by this token program
    ProgramId(Address),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_info_config_serialization() {
        let config = RpcAccountInfoConfig::default()
            .with_encoding(UiAccountEncoding::Base64)
            .with_data_slice(0, 32)
            .with_commitment(CommitmentLevel::Processed);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"encoding":"base64","dataSlice":{"offset":0,"length":32},"commitment":"processed"}"#
        );
        let back: RpcAccountInfoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_epoch_config_serialization() {
        let config = RpcEpochConfig::default()
            .with_epoch(512)
            .with_commitment(CommitmentLevel::Finalized);
        assert_eq!(
            serde_json::to_value(config).unwrap(),
            json!({"epoch": 512, "commitment": "finalized"})
        );
    }

    #[test]
    fn test_token_accounts_filter_shapes() {
        let address = "11111111111111111111111111111111";
        assert_eq!(
            serde_json::to_value(RpcTokenAccountsFilter::Mint(Address::default())).unwrap(),
            json!({"mint": address})
        );
        assert_eq!(
            serde_json::to_value(RpcTokenAccountsFilter::ProgramId(Address::default())).unwrap(),
            json!({"programId": address})
        );
        let back: RpcTokenAccountsFilter =
            serde_json::from_value(json!({"programId": address})).unwrap();
        assert_eq!(back, RpcTokenAccountsFilter::ProgramId(Address::default()));
    }

    #[test]
    fn test_largest_accounts_filter_name() {
        let config = RpcLargestAccountsConfig::default()
            .with_filter(RpcLargestAccountsFilter::NonCirculating);
        assert_eq!(
            serde_json::to_value(config).unwrap(),
            json!({"filter": "nonCirculating"})
        );
    }
}
