//! Config for the paginated `getTransactionsForAddress` history query

use serde::{Deserialize, Serialize};
use solkit_base::Signature;

use super::common::{CommitmentLevel, TransactionDetails, UiTransactionEncoding};

/// Result ordering by slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpcTransactionsForAddressSortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    Desc,
}

/// Execution outcome filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpcTransactionsForAddressStatus {
    /// Only transactions that succeeded
    Succeeded,
    /// Only transactions that failed
    Failed,
    /// Either outcome
    Any,
}

/// Whether transactions touching the address's token accounts are included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RpcTransactionsForAddressTokenAccounts {
    /// Ignore token accounts
    None,
    /// Include token accounts whose balance changed
    BalanceChanged,
    /// Include every token account
    All,
}

/// Bounds on the slot of returned transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcTransactionsForAddressSlotRange {
    /// Inclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<u64>,
    /// Exclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<u64>,
    /// Inclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<u64>,
    /// Exclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<u64>,
}

impl RpcTransactionsForAddressSlotRange {
    /// The half-open range `[start, end)`
    pub fn half_open(start: u64, end: u64) -> Self {
        Self {
            gte: Some(start),
            lt: Some(end),
            ..Self::default()
        }
    }
}

/// Bounds on the block time of returned transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcTransactionsForAddressBlockTimeRange {
    /// Inclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<u64>,
    /// Exclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<u64>,
    /// Inclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<u64>,
    /// Exclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<u64>,
    /// Exact match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<u64>,
}

/// Bounds on the signature of returned transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcTransactionsForAddressSignatureRange {
    /// Inclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<Signature>,
    /// Exclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<Signature>,
    /// Inclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<Signature>,
    /// Exclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<Signature>,
}

/// Filters combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionsForAddressFilters {
    /// Slot bounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<RpcTransactionsForAddressSlotRange>,
    /// Block time bounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_time: Option<RpcTransactionsForAddressBlockTimeRange>,
    /// Signature bounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<RpcTransactionsForAddressSignatureRange>,
    /// Execution outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RpcTransactionsForAddressStatus>,
    /// Token account inclusion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_accounts: Option<RpcTransactionsForAddressTokenAccounts>,
}

impl RpcTransactionsForAddressFilters {
    /// Restrict by slot
    pub fn with_slot(mut self, range: RpcTransactionsForAddressSlotRange) -> Self {
        self.slot = Some(range);
        self
    }

    /// Restrict by block time
    pub fn with_block_time(mut self, range: RpcTransactionsForAddressBlockTimeRange) -> Self {
        self.block_time = Some(range);
        self
    }

    /// Restrict by signature
    pub fn with_signature(mut self, range: RpcTransactionsForAddressSignatureRange) -> Self {
        self.signature = Some(range);
        self
    }

    /// Restrict by execution outcome
    pub fn with_status(mut self, status: RpcTransactionsForAddressStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Control token account inclusion
    pub fn with_token_accounts(
        mut self,
        token_accounts: RpcTransactionsForAddressTokenAccounts,
    ) -> Self {
        self.token_accounts = Some(token_accounts);
        self
    }
}

/// Configuration for `getTransactionsForAddress`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionsForAddressConfig {
    /// Level of transaction detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_details: Option<TransactionDetails>,
    /// Result ordering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<RpcTransactionsForAddressSortOrder>,
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// The minimum slot that the request can be evaluated at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_context_slot: Option<u64>,
    /// Maximum number of records per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Token returned with the previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
    /// Transaction encoding when full details are requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<UiTransactionEncoding>,
    /// Highest transaction version the caller can decode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_supported_transaction_version: Option<u8>,
    /// Result filters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<RpcTransactionsForAddressFilters>,
}

impl RpcTransactionsForAddressConfig {
    /// Set the level of transaction detail
    pub fn with_transaction_details(mut self, details: TransactionDetails) -> Self {
        self.transaction_details = Some(details);
        self
    }

    /// Set the result ordering
    pub fn with_sort_order(mut self, sort_order: RpcTransactionsForAddressSortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = Some(commitment);
        self
    }

    /// Set the minimum slot the request can be evaluated at
    pub fn with_min_context_slot(mut self, slot: u64) -> Self {
        self.min_context_slot = Some(slot);
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue from a previous page
    pub fn with_pagination_token(mut self, token: impl Into<String>) -> Self {
        self.pagination_token = Some(token.into());
        self
    }

    /// Set the transaction encoding
    pub fn with_encoding(mut self, encoding: UiTransactionEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Set the highest transaction version the caller can decode
    pub fn with_max_supported_transaction_version(mut self, version: u8) -> Self {
        self.max_supported_transaction_version = Some(version);
        self
    }

    /// Set the result filters
    pub fn with_filters(mut self, filters: RpcTransactionsForAddressFilters) -> Self {
        self.filters = Some(filters);
        self
    }
}
