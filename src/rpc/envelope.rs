use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::CallError;
use crate::params::Param;

/// The only protocol version this client speaks.
pub const VERSION: &str = "2.0";

/// How the request id is chosen.
///
/// `Random` draws a fresh integer per call from the injected
/// generator; `Fixed` pins it, which makes request fixtures
/// reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Random,
    Fixed(u64),
}

impl IdStrategy {
    pub fn next<R: RngCore>(&self, rng: &mut R) -> u64 {
        match self {
            IdStrategy::Random => rng.next_u64(),
            IdStrategy::Fixed(id) => *id,
        }
    }
}

/// A JSON-RPC 2.0 request envelope.
///
/// `params` ordering is significant and preserved exactly as
/// supplied.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    pub params: Vec<Param>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Vec<Param>, id: u64) -> Self {
        RpcRequest {
            jsonrpc: VERSION,
            id,
            method: method.into(),
            params,
        }
    }

    /// Serializes into a transport-ready payload: compact by default,
    /// indented when `pretty`. No trailing newline either way.
    pub fn to_bytes(&self, pretty: bool) -> Result<Vec<u8>, CallError> {
        let bytes = if pretty {
            serde_json::to_vec_pretty(self)?
        } else {
            serde_json::to_vec(self)?
        };
        Ok(bytes)
    }
}

/// A JSON-RPC 2.0 response envelope.
///
/// `result` stays raw so the payload reaches the caller
/// byte-for-byte. A well-formed response populates exactly one of
/// `result`/`error`; both absent means the response is malformed.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Box<RawValue>>,
    #[serde(default)]
    pub result: Option<Box<RawValue>>,
    #[serde(default)]
    pub error: Option<super::error::RpcErrorObj>,
}

/// Interprets raw response bytes.
///
/// Decode failure if the bytes are not a well-formed JSON object, or
/// decode cleanly but carry neither `result` nor `error`. A present
/// `error` is returned as the failure value and wins even when
/// `result` is also populated.
pub fn parse_response(bytes: &[u8]) -> Result<Vec<u8>, CallError> {
    let resp: RpcResponse = serde_json::from_slice(bytes).map_err(|e| {
        CallError::Decode(format!("{e}: {}", String::from_utf8_lossy(bytes)))
    })?;
    if let Some(err) = resp.error {
        return Err(CallError::Rpc(err));
    }
    match resp.result {
        Some(result) => Ok(result.get().as_bytes().to_vec()),
        None => Err(CallError::Decode(
            "response carries neither result nor error".to_string(),
        )),
    }
}
