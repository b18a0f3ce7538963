use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// Maps a JSON-RPC error code to its human description.
///
/// The server-error check is a strict open interval on both ends:
/// -32000 and -32099 themselves fall through to "Unrecognized error".
pub fn describe(code: i64) -> &'static str {
    match code {
        PARSE_ERROR => "Parse error",
        INVALID_REQUEST => "Invalid Request",
        METHOD_NOT_FOUND => "Method not found",
        INVALID_PARAMS => "Invalid params",
        INTERNAL_ERROR => "Internal error",
        c if -32000 > c && c > -32099 => "Server error",
        _ => "Unrecognized error",
    }
}

/// The error member of a JSON-RPC 2.0 response.
///
/// `data` is kept as raw JSON so whatever the server attached is
/// reproduced verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorObj {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Box<RawValue>>,
}

/// Formats with full details and a code description:
///
///     jsonrpc error: <code> (<description>): <message>[: <data>]
impl fmt::Display for RpcErrorObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "jsonrpc error: {} ({}): {}",
            self.code,
            describe(self.code),
            self.message
        )?;
        if let Some(data) = &self.data {
            write!(f, ": {}", data.get())?;
        }
        Ok(())
    }
}

impl std::error::Error for RpcErrorObj {}
