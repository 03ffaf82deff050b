//! Account-scan filters and the program account configs that carry them

use base64::Engine;
use serde::{Deserialize, Serialize};

use super::account::RpcAccountInfoConfig;

/// Encoding of the comparison bytes in a [`Memcmp`] filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemcmpEncoding {
    /// Base58 text
    #[default]
    Base58,
    /// Base64 text
    Base64,
}

/// Matches accounts whose data equals `bytes` at `offset`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memcmp {
    /// Byte offset into the account data
    pub offset: usize,
    /// Encoded comparison bytes
    pub bytes: String,
    /// Encoding of `bytes`
    #[serde(default)]
    pub encoding: MemcmpEncoding,
}

impl Memcmp {
    /// Compare against raw bytes, carried as base58 text
    pub fn new_raw_bytes(offset: usize, bytes: &[u8]) -> Self {
        Self {
            offset,
            bytes: bs58::encode(bytes).into_string(),
            encoding: MemcmpEncoding::Base58,
        }
    }

    /// Compare against bytes that are already base58 text
    pub fn new_base58_encoded(offset: usize, encoded: impl Into<String>) -> Self {
        Self {
            offset,
            bytes: encoded.into(),
            encoding: MemcmpEncoding::Base58,
        }
    }

    /// Compare against raw bytes, carried as base64 text
    pub fn new_base64(offset: usize, bytes: &[u8]) -> Self {
        Self {
            offset,
            bytes: base64::engine::general_purpose::STANDARD.encode(bytes),
            encoding: MemcmpEncoding::Base64,
        }
    }
}

/// One condition of an account scan; a filter list is an implicit AND
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RpcFilterType {
    /// Account data length equals the value
    DataSize(u64),
    /// Account data matches bytes at an offset
    Memcmp(Memcmp),
}

impl From<u64> for RpcFilterType {
    fn from(size: u64) -> Self {
        Self::DataSize(size)
    }
}

impl From<Memcmp> for RpcFilterType {
    fn from(memcmp: Memcmp) -> Self {
        Self::Memcmp(memcmp)
    }
}

/// Configuration for `getProgramAccounts`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcProgramAccountsConfig {
    /// Filters applied in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<RpcFilterType>>,
    /// Account encoding, slicing and commitment
    #[serde(flatten)]
    pub account_config: RpcAccountInfoConfig,
    /// Wrap the result in a context object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_context: Option<bool>,
    /// Sort results by address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_results: Option<bool>,
}

impl RpcProgramAccountsConfig {
    /// Set the filter list; order is kept on the wire
    pub fn with_filters(mut self, filters: Vec<RpcFilterType>) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the account encoding and slicing options
    pub fn with_account_config(mut self, account_config: RpcAccountInfoConfig) -> Self {
        self.account_config = account_config;
        self
    }

    /// Ask for a `{context, value}` response
    pub fn with_context(mut self, with_context: bool) -> Self {
        self.with_context = Some(with_context);
        self
    }

    /// Ask for results sorted by address
    pub fn with_sort_results(mut self, sort_results: bool) -> Self {
        self.sort_results = Some(sort_results);
        self
    }
}

/// Configuration for the paginated `getProgramAccountsV2`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcProgramAccountsV2Config {
    /// Filters applied in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<RpcFilterType>>,
    /// Account encoding, slicing and commitment
    #[serde(flatten)]
    pub account_config: RpcAccountInfoConfig,
    /// Wrap the result in a context object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_context: Option<bool>,
    /// Sort results by address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_results: Option<bool>,
    /// Maximum number of accounts per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Cursor returned by the previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_key: Option<String>,
    /// Only accounts modified after this slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_since_slot: Option<u64>,
}

impl RpcProgramAccountsV2Config {
    /// Set the filter list; order is kept on the wire
    pub fn with_filters(mut self, filters: Vec<RpcFilterType>) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the account encoding and slicing options
    pub fn with_account_config(mut self, account_config: RpcAccountInfoConfig) -> Self {
        self.account_config = account_config;
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue from a previous page
    pub fn with_pagination_key(mut self, key: impl Into<String>) -> Self {
        self.pagination_key = Some(key.into());
        self
    }

    /// Only return accounts changed after `slot`
    pub fn with_changed_since_slot(mut self, slot: u64) -> Self {
        self.changed_since_slot = Some(slot);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::common::{CommitmentLevel, UiAccountEncoding};
    use serde_json::json;

    #[test]
    fn test_filter_shapes_and_order() {
        let filters: Vec<RpcFilterType> = vec![
            10u64.into(),
            Memcmp::new_raw_bytes(10, b"123").into(),
            RpcFilterType::DataSize(165),
        ];
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            json!([
                {"dataSize": 10},
                {"memcmp": {"offset": 10, "bytes": "HXRC", "encoding": "base58"}},
                {"dataSize": 165}
            ])
        );
    }

    #[test]
    fn test_memcmp_base64() {
        let memcmp = Memcmp::new_base64(0, &[1, 2, 3]);
        assert_eq!(
            serde_json::to_value(&memcmp).unwrap(),
            json!({"offset": 0, "bytes": "AQID", "encoding": "base64"})
        );
    }

    #[test]
    fn test_memcmp_without_encoding_defaults_to_base58() {
        let memcmp: Memcmp = serde_json::from_value(json!({"offset": 4, "bytes": "HXRC"})).unwrap();
        assert_eq!(memcmp, Memcmp::new_base58_encoded(4, "HXRC"));
    }

    #[test]
    fn test_program_accounts_config_flattens_account_config() {
        let config = RpcProgramAccountsConfig::default()
            .with_filters(vec![RpcFilterType::DataSize(80)])
            .with_account_config(
                RpcAccountInfoConfig::default()
                    .with_encoding(UiAccountEncoding::Base64)
                    .with_commitment(CommitmentLevel::Confirmed),
            )
            .with_context(true);
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"filters":[{"dataSize":80}],"encoding":"base64","commitment":"confirmed","withContext":true}"#
        );
    }

    #[test]
    fn test_program_accounts_v2_pagination_fields() {
        let config = RpcProgramAccountsV2Config::default()
            .with_limit(1000)
            .with_pagination_key("cursor")
            .with_changed_since_slot(123_456);
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"limit": 1000, "paginationKey": "cursor", "changedSinceSlot": 123456})
        );
        let back: RpcProgramAccountsV2Config =
            serde_json::from_value(serde_json::to_value(&config).unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
