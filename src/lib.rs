// Parameter coercion
pub mod params;

// Static method/argument catalog
pub mod catalog;

// Shell completion engine
pub mod complete;

// Error taxonomy
pub mod error;

// JSON-RPC envelope
pub mod rpc;

// Transport layer
pub mod transport;

// Client
pub mod client;

pub use client::{Client, Config};
pub use error::CallError;
pub use params::Param;
pub use rpc::{IdStrategy, RpcErrorObj, RpcRequest, RpcResponse};
pub use transport::{HttpTransport, Transport};
