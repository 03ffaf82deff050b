//! JSON-RPC 2.0 request, batch and response encoding for Solkit
//!
//! This crate turns typed request values into the exact JSON text a node
//! expects and parses the node's answers back. It performs no I/O: hand the
//! output of [`RpcRequest::to_json`] or [`batch_to_json`] to any transport.
//!
//! # Example
//!
//! ```
//! use solkit_rpc::{Address, Body, GetBalance, GetSlot, RpcRequest, batch_to_json};
//!
//! let single = GetBalance::new(Address::default(), None, Some(1));
//! assert_eq!(
//!     single.to_json().unwrap(),
//!     r#"{"method":"getBalance","jsonrpc":"2.0","id":1,"params":["11111111111111111111111111111111"]}"#
//! );
//!
//! let batch: Vec<Body> = vec![GetSlot::new(None, None).into(), single.into()];
//! let text = batch_to_json(&batch).unwrap();
//! assert!(text.starts_with(r#"[{"method":"getSlot","jsonrpc":"2.0","id":0"#));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod batch;
pub mod config;
pub mod error;
pub mod requests;
pub mod responses;

// Re-export main types and traits
pub use batch::{batch_ids, batch_to_json, batch_to_value};
pub use error::{Result, RpcError};
pub use requests::{
    Body, GetAccountInfo, GetBalance, GetBlock, GetBlockHeight, GetBlockProduction, GetEpochInfo,
    GetGenesisHash, GetHealth, GetIdentity, GetInflationReward, GetLargestAccounts,
    GetLatestBlockhash, GetLeaderSchedule, GetMinimumBalanceForRentExemption, GetMultipleAccounts,
    GetProgramAccounts, GetProgramAccountsV2, GetSignatureStatuses, GetSignaturesForAddress,
    GetSlot, GetSupply, GetTokenAccountsByDelegate, GetTokenAccountsByOwner, GetTransaction,
    GetTransactionsForAddress, GetVersion, GetVoteAccounts, RequestAirdrop, RequestEnvelope,
    RpcMethod, RpcRequest, SendTransaction, SimulateBundle, SimulateTransaction,
};
pub use responses::{
    JsonRpcErrorObject, JsonRpcResponse, Response, RpcConfirmedTransactionStatusWithSignature,
    RpcResponseContext, TransactionConfirmationStatus, parse_batch_response, parse_response,
};

// Re-export Solkit base types for convenience
pub use solkit_base::{Address, Signature};
