use std::time::Duration;

use crate::error::CallError;

/// Boundary to the wire: a single POST of a prepared payload.
///
/// Implementations never interpret the body, and the client never
/// inspects HTTP status codes: the JSON-RPC error object, not the
/// status line, is this protocol's failure channel.
pub trait Transport {
    fn post(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, CallError>> + Send;
}

/// HTTP POST transport backed by a reqwest client.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Builds the transport. `timeout` is the whole-call deadline: on
    /// expiry the in-flight request is aborted and the call fails
    /// with a transport error, so no partial response is ever parsed.
    pub fn new(timeout: Option<Duration>) -> Result<Self, CallError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| CallError::Transport(e.into()))?;
        Ok(HttpTransport { http })
    }
}

impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>, CallError> {
        let resp = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| CallError::Transport(e.into()))?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| CallError::Transport(e.into()))?;
        Ok(bytes.to_vec())
    }
}
