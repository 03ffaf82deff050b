//! Error types for request construction and response parsing

use serde_json::Value;
use solkit_base::CodecError;
use thiserror::Error;

/// Main error type for the RPC layer
#[derive(Error, Debug)]
pub enum RpcError {
    /// A discriminated-union config field matched none of its accepted shapes
    #[error("Invalid value for {field}: {value}")]
    InvalidUnionVariant {
        /// Name of the config field being built
        field: &'static str,
        /// The rejected input, rendered as JSON text
        value: String,
    },

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The remote side answered with a JSON-RPC error object
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// The JSON-RPC error code
        code: i64,
        /// The error message
        message: String,
        /// Optional error payload
        data: Option<Value>,
    },

    /// A response carried neither `result` nor `error`
    #[error("Response carries neither a result nor an error")]
    MissingResult,

    /// A batch response had no entry for a request id
    #[error("No response for request id {id}")]
    MissingResponse {
        /// The request id with no matching response
        id: u64,
    },

    /// Instruction or address codec failure
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

impl RpcError {
    /// Build the error for a union field given an unacceptable value
    pub fn invalid_union_variant(field: &'static str, value: &Value) -> Self {
        Self::InvalidUnionVariant {
            field,
            value: value.to_string(),
        }
    }

    /// The JSON-RPC error code, if this is a remote error
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RpcError>;
