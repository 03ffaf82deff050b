//! JSON-RPC response envelopes and common result shapes

use std::collections::{HashMap, VecDeque};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use solkit_base::Signature;
use tracing::debug;

use crate::error::{Result, RpcError};

/// Keeps an explicit `null` result distinct from a missing one
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorObject {
    /// Error code
    pub code: i64,
    /// Human-readable message
    pub message: String,
    /// Optional payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<JsonRpcErrorObject> for RpcError {
    fn from(error: JsonRpcErrorObject) -> Self {
        RpcError::Rpc {
            code: error.code,
            message: error.message,
            data: error.data,
        }
    }
}

/// JSON-RPC response envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct JsonRpcResponse<T> {
    /// Protocol version
    pub jsonrpc: String,
    /// Id of the request this answers; null for some parse errors
    #[serde(default)]
    pub id: Option<u64>,
    /// Result payload, which may itself be `null`
    #[serde(default, deserialize_with = "present")]
    pub result: Option<T>,
    /// Error object
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

impl<T> JsonRpcResponse<T> {
    /// The result, or the remote error as [`RpcError::Rpc`]
    pub fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            debug!("rpc error response {}: {}", error.code, error.message);
            return Err(error.into());
        }
        self.result.ok_or(RpcError::MissingResult)
    }
}

/// Parse a single response and extract its result
pub fn parse_response<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str::<JsonRpcResponse<T>>(text)?.into_result()
}

/// Parse a batch response and return one result per id, in the order of `ids`
///
/// Responses may arrive in any order; they are matched to requests by id. When
/// several requests share an id, their responses are taken in arrival order.
/// An id with no response left yields [`RpcError::MissingResponse`] in its slot.
pub fn parse_batch_response(text: &str, ids: &[u64]) -> Result<Vec<Result<Value>>> {
    let responses: Vec<JsonRpcResponse<Value>> = serde_json::from_str(text)?;
    let mut by_id: HashMap<u64, VecDeque<JsonRpcResponse<Value>>> = HashMap::new();
    for response in responses {
        if let Some(id) = response.id {
            by_id.entry(id).or_default().push_back(response);
        }
    }

    Ok(ids
        .iter()
        .map(|&id| match by_id.get_mut(&id).and_then(VecDeque::pop_front) {
            Some(response) => response.into_result(),
            None => Err(RpcError::MissingResponse { id }),
        })
        .collect())
}

/// Slot context attached to many results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcResponseContext {
    /// Slot at which the result was evaluated
    pub slot: u64,
    /// Node API version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

/// A result wrapped with its slot context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    /// Evaluation context
    pub context: RpcResponseContext,
    /// The result value
    pub value: T,
}

/// Confirmation level reached by a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionConfirmationStatus {
    /// Processed by the node
    Processed,
    /// Voted on by a supermajority
    Confirmed,
    /// Finalized by the cluster
    Finalized,
}

/// One entry of `getSignaturesForAddress` or `getTransactionsForAddress`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcConfirmedTransactionStatusWithSignature {
    /// Transaction signature
    pub signature: Signature,
    /// Slot containing the transaction
    pub slot: u64,
    /// Error if the transaction failed
    pub err: Option<Value>,
    /// Memo attached to the transaction
    pub memo: Option<String>,
    /// Estimated production time, unix seconds
    pub block_time: Option<i64>,
    /// Confirmation level reached
    pub confirmation_status: Option<TransactionConfirmationStatus>,
    /// Position of the transaction within its block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_index: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::batch_ids;
    use crate::requests::{Body, GetHealth, GetSlot};
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_parse_result() {
        let balance: Response<u64> = parse_response(
            r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":7,"apiVersion":"2.1.0"},"value":500}}"#,
        )
        .unwrap();
        assert_eq!(balance.value, 500);
        assert_eq!(balance.context.slot, 7);
        assert_eq!(balance.context.api_version.as_deref(), Some("2.1.0"));
    }

    #[test]
    fn test_null_result_is_not_missing() {
        let result: Option<u64> =
            parse_response(r#"{"jsonrpc":"2.0","id":1,"result":null}"#).unwrap();
        assert_eq!(result, None);

        assert_matches!(
            parse_response::<u64>(r#"{"jsonrpc":"2.0","id":1}"#),
            Err(RpcError::MissingResult)
        );
    }

    #[test]
    fn test_error_object() {
        let err = parse_response::<u64>(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"Method not found"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.rpc_code(), Some(-32601));
        assert_matches!(
            err,
            RpcError::Rpc { ref message, data: None, .. } if message == "Method not found"
        );
    }

    #[test]
    fn test_batch_response_reordered_by_id() {
        let text = json!([
            {"jsonrpc": "2.0", "id": 42, "result": "ok"},
            {"jsonrpc": "2.0", "id": 0, "result": 123},
            {"jsonrpc": "2.0", "id": 2, "error": {"code": -32000, "message": "boom"}}
        ])
        .to_string();
        let results = parse_batch_response(&text, &[0, 42, 2, 5]).unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap(), &json!(123));
        assert_eq!(results[1].as_ref().unwrap(), &json!("ok"));
        assert_matches!(&results[2], Err(RpcError::Rpc { code: -32000, .. }));
        assert_matches!(&results[3], Err(RpcError::MissingResponse { id: 5 }));
    }

    #[test]
    fn test_batch_response_duplicate_ids_in_order() {
        let requests: Vec<Body> = vec![
            GetSlot::new(None, None).into(),
            GetHealth::new(Some(0)).into(),
        ];
        let ids = batch_ids(&requests);
        assert_eq!(ids, vec![0, 0]);

        let text = json!([
            {"jsonrpc": "2.0", "id": 0, "result": 310},
            {"jsonrpc": "2.0", "id": 0, "result": "ok"}
        ])
        .to_string();
        let results = parse_batch_response(&text, &ids).unwrap();
        assert_eq!(results[0].as_ref().unwrap(), &json!(310));
        assert_eq!(results[1].as_ref().unwrap(), &json!("ok"));

        let results = parse_batch_response(&text, &[0, 0, 0]).unwrap();
        assert_matches!(&results[2], Err(RpcError::MissingResponse { id: 0 }));
    }

    #[test]
    fn test_signature_status_entry() {
        let entry: RpcConfirmedTransactionStatusWithSignature = serde_json::from_value(json!({
            "signature": "1".repeat(64),
            "slot": 99,
            "err": null,
            "memo": null,
            "blockTime": 1700000000,
            "confirmationStatus": "finalized",
            "transactionIndex": 3
        }))
        .unwrap();
        assert_eq!(entry.signature, Signature::default());
        assert_eq!(entry.confirmation_status, Some(TransactionConfirmationStatus::Finalized));
        assert_eq!(entry.transaction_index, Some(3));

        let value = serde_json::to_value(RpcConfirmedTransactionStatusWithSignature {
            transaction_index: None,
            ..entry
        })
        .unwrap();
        assert!(value.get("transactionIndex").is_none());
    }
}
