use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::CallError;
use crate::params;
use crate::rpc::envelope::{self, IdStrategy, RpcRequest};
use crate::transport::Transport;

/// Process-wide call configuration, set once from CLI flags before
/// any request is built.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Print the equivalent curl command that is run.
    pub print_command: bool,
    /// Print the command without transmitting.
    pub dry_run: bool,
    /// Echo payload and raw response to stderr.
    pub verbose: bool,
    /// Indent the request JSON.
    pub pretty: bool,
    /// Pin the request id instead of drawing a random one.
    pub fixed_id: Option<u64>,
    /// Whole-call transport deadline.
    pub timeout: Option<Duration>,
}

/// One-shot JSON-RPC client: coerces raw tokens, builds and
/// serializes the envelope, posts it, and interprets the response.
///
/// The random source for request ids is owned here and seedable, so
/// tests can pin deterministic ids without touching global state.
pub struct Client<T: Transport> {
    transport: T,
    config: Config,
    rng: StdRng,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Client {
            transport,
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Like [`Client::new`] but with a pinned generator.
    pub fn with_rng(transport: T, config: Config, rng: StdRng) -> Self {
        Client {
            transport,
            config,
            rng,
        }
    }

    /// Issues a single call and returns the raw result bytes.
    ///
    /// Exactly one request is built and at most one transport call is
    /// made; in dry-run mode the transport is never invoked and the
    /// call reports success with an empty result. Failures are never
    /// retried here; retry policy belongs to whoever drives us.
    pub async fn call(
        &mut self,
        url: &str,
        method: &str,
        raw_args: &[String],
    ) -> Result<Vec<u8>, CallError> {
        let params = params::coerce_all(raw_args);
        let strategy = match self.config.fixed_id {
            Some(id) => IdStrategy::Fixed(id),
            None => IdStrategy::Random,
        };
        let id = strategy.next(&mut self.rng);
        let req = RpcRequest::new(method, params, id);
        let payload = req.to_bytes(self.config.pretty)?;
        debug!(method, id, "built request");

        if self.config.print_command || self.config.dry_run || self.config.verbose {
            eprintln!("{}", render_curl(url, &payload, self.config.verbose));
        }
        if self.config.dry_run {
            return Ok(Vec::new());
        }

        let body = self.transport.post(url, payload).await?;
        debug!(bytes = body.len(), "received response");
        if self.config.verbose {
            eprintln!("{}", String::from_utf8_lossy(&body));
        }
        envelope::parse_response(&body)
    }
}

/// Renders the curl invocation equivalent to the call we make, for
/// the -x/-n/-v echoes.
fn render_curl(url: &str, payload: &[u8], verbose: bool) -> String {
    let mut args: Vec<&str> = vec!["curl"];
    if !verbose {
        args.push("-s");
    }
    let payload = String::from_utf8_lossy(payload);
    args.extend([
        "-H",
        "Content-Type: application/json",
        "-X",
        "POST",
        "-d",
        payload.as_ref(),
        url,
    ]);
    args.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_curl() {
        let cmd = render_curl("http://localhost:8545", br#"{"id":1}"#, false);
        assert_eq!(
            cmd,
            r#"curl -s -H Content-Type: application/json -X POST -d {"id":1} http://localhost:8545"#
        );
    }

    #[test]
    fn test_render_curl_verbose_drops_silent() {
        let cmd = render_curl("http://localhost:8545", b"{}", true);
        assert!(!cmd.contains(" -s "));
        assert!(cmd.starts_with("curl -H"));
    }
}
