//! JSON-RPC request kinds and their positional parameter templates
//!
//! Every request is a plain value holding its positional parameters, an
//! optional config object and an optional explicit id. Nothing here performs
//! I/O: a request only knows how to render itself as a JSON-RPC 2.0 envelope.

use std::fmt;

use base64::{Engine as _, engine::general_purpose};
use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use solkit_base::{Address, Signature};

use crate::config::{
    RpcAccountInfoConfig, RpcBlockConfig, RpcBlockProductionConfig, RpcContextConfig,
    RpcEpochConfig, RpcGetVoteAccountsConfig, RpcLargestAccountsConfig, RpcLeaderScheduleConfig,
    RpcProgramAccountsConfig, RpcProgramAccountsV2Config, RpcRequestAirdropConfig,
    RpcSendTransactionConfig, RpcSignatureStatusConfig, RpcSignaturesForAddressConfig,
    RpcSimulateBundleConfig, RpcSimulateTransactionConfig, RpcSupplyConfig,
    RpcTokenAccountsFilter, RpcTransactionConfig, RpcTransactionsForAddressConfig,
    UiTransactionEncoding,
};
use crate::error::Result;

/// Protocol version literal carried by every envelope
pub const JSONRPC_VERSION: &str = "2.0";

macro_rules! rpc_methods {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A JSON-RPC method name
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum RpcMethod {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl RpcMethod {
            /// The method name as sent on the wire
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

rpc_methods! {
    GetAccountInfo => "getAccountInfo",
    GetBalance => "getBalance",
    GetBlock => "getBlock",
    GetBlockHeight => "getBlockHeight",
    GetBlockProduction => "getBlockProduction",
    GetEpochInfo => "getEpochInfo",
    GetGenesisHash => "getGenesisHash",
    GetHealth => "getHealth",
    GetIdentity => "getIdentity",
    GetInflationReward => "getInflationReward",
    GetLargestAccounts => "getLargestAccounts",
    GetLatestBlockhash => "getLatestBlockhash",
    GetLeaderSchedule => "getLeaderSchedule",
    GetMinimumBalanceForRentExemption => "getMinimumBalanceForRentExemption",
    GetMultipleAccounts => "getMultipleAccounts",
    GetProgramAccounts => "getProgramAccounts",
    GetProgramAccountsV2 => "getProgramAccountsV2",
    GetSignatureStatuses => "getSignatureStatuses",
    GetSignaturesForAddress => "getSignaturesForAddress",
    GetSlot => "getSlot",
    GetSupply => "getSupply",
    GetTokenAccountsByDelegate => "getTokenAccountsByDelegate",
    GetTokenAccountsByOwner => "getTokenAccountsByOwner",
    GetTransaction => "getTransaction",
    GetTransactionsForAddress => "getTransactionsForAddress",
    GetVersion => "getVersion",
    GetVoteAccounts => "getVoteAccounts",
    RequestAirdrop => "requestAirdrop",
    SendTransaction => "sendTransaction",
    SimulateTransaction => "simulateTransaction",
    SimulateBundle => "simulateBundle",
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RpcMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The object sent for one call; keys serialize in declaration order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    /// Method name
    pub method: RpcMethod,
    /// Always [`JSONRPC_VERSION`]
    pub jsonrpc: &'static str,
    /// Correlation id
    pub id: u64,
    /// Positional parameters
    pub params: Vec<Value>,
}

impl RequestEnvelope {
    /// Wrap positional params for `method`
    pub fn new(method: RpcMethod, id: u64, params: Vec<Value>) -> Self {
        Self {
            method,
            jsonrpc: JSONRPC_VERSION,
            id,
            params,
        }
    }
}

/// Behaviour shared by every request kind
pub trait RpcRequest {
    /// The method this request calls
    fn method(&self) -> RpcMethod;

    /// The explicit id, if one was given
    fn id(&self) -> Option<u64>;

    /// Positional parameters, with the config last when present
    fn params(&self) -> Result<Vec<Value>>;

    /// Build the envelope using `id`
    fn envelope(&self, id: u64) -> Result<RequestEnvelope> {
        Ok(RequestEnvelope::new(self.method(), id, self.params()?))
    }

    /// Render as a standalone request; the id defaults to 0
    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.envelope(self.id().unwrap_or(0))?)?)
    }

    /// Render as standalone request text; the id defaults to 0
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.envelope(self.id().unwrap_or(0))?)?)
    }
}

fn value<T: Serialize + ?Sized>(param: &T) -> Result<Value> {
    Ok(serde_json::to_value(param)?)
}

fn append_config<C: Serialize>(params: &mut Vec<Value>, config: Option<&C>) -> Result<()> {
    if let Some(config) = config {
        params.push(value(config)?);
    }
    Ok(())
}

/// Text form of transaction bytes; base58 only when explicitly asked for
fn encode_transaction(bytes: &[u8], encoding: Option<UiTransactionEncoding>) -> String {
    match encoding {
        Some(UiTransactionEncoding::Base58 | UiTransactionEncoding::Binary) => {
            bs58::encode(bytes).into_string()
        }
        _ => general_purpose::STANDARD.encode(bytes),
    }
}

macro_rules! rpc_request {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$field_meta:meta])* $field:ident: $ty:ty,)*
        }
        config: $config:ty,
        params: |$this:ident| $params:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $($(#[$field_meta])* pub $field: $ty,)*
            /// Optional configuration object, appended as the last param
            pub config: Option<$config>,
            /// Explicit request id
            pub id: Option<u64>,
        }

        impl $name {
            /// Create the request
            pub fn new($($field: $ty,)* config: Option<$config>, id: Option<u64>) -> Self {
                Self {
                    $($field,)*
                    config,
                    id,
                }
            }
        }

        impl RpcRequest for $name {
            fn method(&self) -> RpcMethod {
                RpcMethod::$name
            }

            fn id(&self) -> Option<u64> {
                self.id
            }

            fn params(&self) -> Result<Vec<Value>> {
                let $this = self;
                let mut params: Vec<Value> = $params;
                append_config(&mut params, $this.config.as_ref())?;
                Ok(params)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident {}
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            /// Explicit request id
            pub id: Option<u64>,
        }

        impl $name {
            /// Create the request
            pub fn new(id: Option<u64>) -> Self {
                Self { id }
            }
        }

        impl RpcRequest for $name {
            fn method(&self) -> RpcMethod {
                RpcMethod::$name
            }

            fn id(&self) -> Option<u64> {
                self.id
            }

            fn params(&self) -> Result<Vec<Value>> {
                Ok(Vec::new())
            }
        }
    };
}

rpc_request! {
    /// `getAccountInfo`: one account's state
    GetAccountInfo {
        /// Account to fetch
        pubkey: Address,
    }
    config: RpcAccountInfoConfig,
    params: |req| vec![value(&req.pubkey)?]
}

rpc_request! {
    /// `getBalance`: lamports held by an account
    GetBalance {
        /// Account to query
        pubkey: Address,
    }
    config: RpcContextConfig,
    params: |req| vec![value(&req.pubkey)?]
}

rpc_request! {
    /// `getBlock`: a confirmed block
    GetBlock {
        /// Slot of the block
        slot: u64,
    }
    config: RpcBlockConfig,
    params: |req| vec![Value::from(req.slot)]
}

rpc_request! {
    /// `getBlockHeight`: current block height
    GetBlockHeight {}
    config: RpcContextConfig,
    params: |_req| Vec::new()
}

rpc_request! {
    /// `getBlockProduction`: leader slots and produced blocks per validator
    GetBlockProduction {}
    config: RpcBlockProductionConfig,
    params: |_req| Vec::new()
}

rpc_request! {
    /// `getEpochInfo`: information about the current epoch
    GetEpochInfo {}
    config: RpcContextConfig,
    params: |_req| Vec::new()
}

rpc_request! {
    /// `getGenesisHash`: the cluster's genesis hash
    GetGenesisHash {}
}

rpc_request! {
    /// `getHealth`: node health
    GetHealth {}
}

rpc_request! {
    /// `getIdentity`: the node's identity address
    GetIdentity {}
}

rpc_request! {
    /// `getInflationReward`: staking rewards of a list of addresses for an epoch
    GetInflationReward {
        /// Addresses to query, in response order
        addresses: Vec<Address>,
    }
    config: RpcEpochConfig,
    params: |req| vec![value(&req.addresses)?]
}

rpc_request! {
    /// `getLargestAccounts`: the largest accounts by lamports
    GetLargestAccounts {}
    config: RpcLargestAccountsConfig,
    params: |_req| Vec::new()
}

rpc_request! {
    /// `getLatestBlockhash`: latest blockhash and its validity window
    GetLatestBlockhash {}
    config: RpcContextConfig,
    params: |_req| Vec::new()
}

rpc_request! {
    /// `getLeaderSchedule`: leader slots of the epoch containing a slot
    ///
    /// The slot is positional, so it renders as `null` whenever a config
    /// follows it; with neither set the params are empty.
    GetLeaderSchedule {
        /// Slot selecting the epoch, the current one when unset
        slot: Option<u64>,
    }
    config: RpcLeaderScheduleConfig,
    params: |req| {
        if req.slot.is_some() || req.config.is_some() {
            vec![value(&req.slot)?]
        } else {
            Vec::new()
        }
    }
}

rpc_request! {
    /// `getMinimumBalanceForRentExemption`: rent-exempt balance for a data size
    GetMinimumBalanceForRentExemption {
        /// Account data length in bytes
        length: usize,
    }
    config: RpcContextConfig,
    params: |req| vec![Value::from(req.length)]
}

rpc_request! {
    /// `getMultipleAccounts`: several accounts in one call
    GetMultipleAccounts {
        /// Accounts to fetch, in response order
        accounts: Vec<Address>,
    }
    config: RpcAccountInfoConfig,
    params: |req| vec![value(&req.accounts)?]
}

rpc_request! {
    /// `getProgramAccounts`: accounts owned by a program
    GetProgramAccounts {
        /// Owning program
        program: Address,
    }
    config: RpcProgramAccountsConfig,
    params: |req| vec![value(&req.program)?]
}

rpc_request! {
    /// `getProgramAccountsV2`: paginated accounts owned by a program
    GetProgramAccountsV2 {
        /// Owning program
        program: Address,
    }
    config: RpcProgramAccountsV2Config,
    params: |req| vec![value(&req.program)?]
}

rpc_request! {
    /// `getSignatureStatuses`: statuses of a list of signatures
    GetSignatureStatuses {
        /// Signatures to look up
        signatures: Vec<Signature>,
    }
    config: RpcSignatureStatusConfig,
    params: |req| vec![value(&req.signatures)?]
}

rpc_request! {
    /// `getSignaturesForAddress`: signatures involving an address, newest first
    GetSignaturesForAddress {
        /// Address to query
        address: Address,
    }
    config: RpcSignaturesForAddressConfig,
    params: |req| vec![value(&req.address)?]
}

rpc_request! {
    /// `getSlot`: current slot
    GetSlot {}
    config: RpcContextConfig,
    params: |_req| Vec::new()
}

rpc_request! {
    /// `getSupply`: circulating and non-circulating lamports
    GetSupply {}
    config: RpcSupplyConfig,
    params: |_req| Vec::new()
}

rpc_request! {
    /// `getTokenAccountsByDelegate`: token accounts a delegate may spend from
    GetTokenAccountsByDelegate {
        /// Delegate to query
        delegate: Address,
        /// Mint or token program restriction
        filter: RpcTokenAccountsFilter,
    }
    config: RpcAccountInfoConfig,
    params: |req| vec![value(&req.delegate)?, value(&req.filter)?]
}

rpc_request! {
    /// `getTokenAccountsByOwner`: token accounts owned by an address
    GetTokenAccountsByOwner {
        /// Owner to query
        owner: Address,
        /// Mint or token program restriction
        filter: RpcTokenAccountsFilter,
    }
    config: RpcAccountInfoConfig,
    params: |req| vec![value(&req.owner)?, value(&req.filter)?]
}

rpc_request! {
    /// `getTransaction`: a confirmed transaction
    GetTransaction {
        /// Transaction signature
        signature: Signature,
    }
    config: RpcTransactionConfig,
    params: |req| vec![value(&req.signature)?]
}

rpc_request! {
    /// `getTransactionsForAddress`: paginated transaction history of an address
    GetTransactionsForAddress {
        /// Address to query
        address: Address,
    }
    config: RpcTransactionsForAddressConfig,
    params: |req| vec![value(&req.address)?]
}

rpc_request! {
    /// `getVersion`: node software version
    GetVersion {}
}

rpc_request! {
    /// `getVoteAccounts`: current and delinquent vote accounts
    GetVoteAccounts {}
    config: RpcGetVoteAccountsConfig,
    params: |_req| Vec::new()
}

rpc_request! {
    /// `requestAirdrop`: request lamports on a test cluster
    RequestAirdrop {
        /// Recipient
        pubkey: Address,
        /// Amount requested
        lamports: u64,
    }
    config: RpcRequestAirdropConfig,
    params: |req| vec![value(&req.pubkey)?, Value::from(req.lamports)]
}

rpc_request! {
    /// `sendTransaction`: submit serialized transaction bytes
    SendTransaction {
        /// Serialized signed transaction
        transaction: Vec<u8>,
    }
    config: RpcSendTransactionConfig,
    params: |req| {
        let encoding = req.config.as_ref().and_then(|config| config.encoding);
        vec![Value::from(encode_transaction(&req.transaction, encoding))]
    }
}

rpc_request! {
    /// `simulateTransaction`: dry-run serialized transaction bytes
    SimulateTransaction {
        /// Serialized transaction
        transaction: Vec<u8>,
    }
    config: RpcSimulateTransactionConfig,
    params: |req| {
        let encoding = req.config.as_ref().and_then(|config| config.encoding);
        vec![Value::from(encode_transaction(&req.transaction, encoding))]
    }
}

rpc_request! {
    /// `simulateBundle`: dry-run an ordered bundle of transactions
    SimulateBundle {
        /// Serialized transactions, executed in order
        transactions: Vec<Vec<u8>>,
    }
    config: RpcSimulateBundleConfig,
    params: |req| {
        let encoding = req.config.as_ref().and_then(|config| config.transaction_encoding);
        let encoded: Vec<String> = req
            .transactions
            .iter()
            .map(|transaction| encode_transaction(transaction, encoding))
            .collect();
        vec![json!({ "encodedTransactions": encoded })]
    }
}

macro_rules! request_body {
    ($($name:ident),* $(,)?) => {
        /// Any request kind, for mixing kinds in one batch
        #[derive(Debug, Clone, PartialEq)]
        pub enum Body {
            $(
                #[doc = concat!("A [`", stringify!($name), "`] request")]
                $name($name),
            )*
        }

        $(
            impl From<$name> for Body {
                fn from(request: $name) -> Self {
                    Self::$name(request)
                }
            }
        )*

        impl RpcRequest for Body {
            fn method(&self) -> RpcMethod {
                match self {
                    $(Self::$name(request) => request.method(),)*
                }
            }

            fn id(&self) -> Option<u64> {
                match self {
                    $(Self::$name(request) => request.id(),)*
                }
            }

            fn params(&self) -> Result<Vec<Value>> {
                match self {
                    $(Self::$name(request) => request.params(),)*
                }
            }
        }
    };
}

request_body! {
    GetAccountInfo,
    GetBalance,
    GetBlock,
    GetBlockHeight,
    GetBlockProduction,
    GetEpochInfo,
    GetGenesisHash,
    GetHealth,
    GetIdentity,
    GetInflationReward,
    GetLargestAccounts,
    GetLatestBlockhash,
    GetLeaderSchedule,
    GetMinimumBalanceForRentExemption,
    GetMultipleAccounts,
    GetProgramAccounts,
    GetProgramAccountsV2,
    GetSignatureStatuses,
    GetSignaturesForAddress,
    GetSlot,
    GetSupply,
    GetTokenAccountsByDelegate,
    GetTokenAccountsByOwner,
    GetTransaction,
    GetTransactionsForAddress,
    GetVersion,
    GetVoteAccounts,
    RequestAirdrop,
    SendTransaction,
    SimulateTransaction,
    SimulateBundle,
}
