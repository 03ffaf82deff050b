//! Typed configuration objects appended to request params

pub mod account;
pub mod bundle;
pub mod cluster;
pub mod common;
pub mod filter;
pub mod transaction;
pub mod transactions_for_address;

// Re-export commonly used types
pub use account::{
    RpcAccountInfoConfig, RpcEpochConfig, RpcLargestAccountsConfig, RpcLargestAccountsFilter,
    RpcRequestAirdropConfig, RpcTokenAccountsFilter,
};
pub use bundle::{RpcSimulateBundleAccountsConfig, RpcSimulateBundleConfig, SimulationBank};
pub use cluster::{
    RpcBlockProductionConfig, RpcBlockProductionConfigRange, RpcGetVoteAccountsConfig,
    RpcLeaderScheduleConfig, RpcSupplyConfig,
};
pub use common::{
    CommitmentLevel, RpcContextConfig, TransactionDetails, UiAccountEncoding, UiDataSliceConfig,
    UiTransactionEncoding,
};
pub use filter::{
    Memcmp, MemcmpEncoding, RpcFilterType, RpcProgramAccountsConfig, RpcProgramAccountsV2Config,
};
pub use transaction::{
    RpcBlockConfig, RpcSendTransactionConfig, RpcSignatureStatusConfig,
    RpcSignaturesForAddressConfig, RpcSimulateTransactionAccountsConfig,
    RpcSimulateTransactionConfig, RpcTransactionConfig,
};
pub use transactions_for_address::{
    RpcTransactionsForAddressBlockTimeRange, RpcTransactionsForAddressConfig,
    RpcTransactionsForAddressFilters, RpcTransactionsForAddressSignatureRange,
    RpcTransactionsForAddressSlotRange, RpcTransactionsForAddressSortOrder,
    RpcTransactionsForAddressStatus, RpcTransactionsForAddressTokenAccounts,
};
