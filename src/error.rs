use thiserror::Error;

use crate::rpc::RpcErrorObj;

/// Everything a single call can fail with.
///
/// The three terminal kinds are kept distinct so callers can tell
/// "never reached the server" from "reached the server, got garbage"
/// from "the server answered with a protocol error". Coercion has no
/// arm here: it is total over all string inputs. No kind is ever
/// retried; every call is a single attempt.
#[derive(Debug, Error)]
pub enum CallError {
    /// The request could not be marshalled into JSON.
    #[error("failed to marshal request: {0}")]
    Encode(#[from] serde_json::Error),

    /// Network-level failure: the server was never reached, the
    /// connection was cut, or the deadline expired mid-flight.
    #[error("failed to post request: {0}")]
    Transport(anyhow::Error),

    /// The response bytes are not a well-formed JSON-RPC response, or
    /// carry neither result nor error.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A well-formed error object from the server. Terminal for the
    /// call; rendered with its catalog description.
    #[error(transparent)]
    Rpc(#[from] RpcErrorObj),
}
