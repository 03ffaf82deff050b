//! Batch encoding: several requests sent as one JSON array

use serde_json::Value;
use tracing::trace;

use crate::error::Result;
use crate::requests::{Body, RequestEnvelope, RpcRequest};

/// Ids assigned to each request of a batch
///
/// An explicit id is kept; otherwise the request's 0-based position is used.
pub fn batch_ids(requests: &[Body]) -> Vec<u64> {
    requests
        .iter()
        .zip(0u64..)
        .map(|(request, position)| request.id().unwrap_or(position))
        .collect()
}

/// Build the envelopes of a batch in request order
pub fn batch_envelopes(requests: &[Body]) -> Result<Vec<RequestEnvelope>> {
    requests
        .iter()
        .zip(batch_ids(requests))
        .map(|(request, id)| {
            trace!("batch request {} assigned id {}", request.method(), id);
            request.envelope(id)
        })
        .collect()
}

/// Encode a batch as a JSON array value
pub fn batch_to_value(requests: &[Body]) -> Result<Value> {
    Ok(serde_json::to_value(batch_envelopes(requests)?)?)
}

/// Encode a batch as JSON array text, even for a single request
pub fn batch_to_json(requests: &[Body]) -> Result<String> {
    Ok(serde_json::to_string(&batch_envelopes(requests)?)?)
}
