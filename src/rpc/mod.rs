pub mod envelope;
pub mod error;

pub use envelope::{IdStrategy, RpcRequest, RpcResponse, parse_response};
pub use error::{RpcErrorObj, describe};
