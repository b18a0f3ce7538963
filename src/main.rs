use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;

use ethcurl::{Client, Config, HttpTransport, complete};

/// Environment variable carrying the target URL. When set, the
/// trailing [url] argument is omitted.
const ENV_URL: &str = "ETHCURL";

#[derive(Parser, Debug)]
#[command(name = "ethcurl")]
#[command(about = "JSON-RPC 2.0 command-line client for Ethereum-style nodes")]
#[command(after_help = "Environment:\n  ETHCURL - target URL; set it to omit the trailing [url] argument")]
struct Opts {
    /// Print the curl command that is run
    #[arg(short = 'x')]
    print_command: bool,

    /// Print the curl command without running it
    #[arg(short = 'n')]
    dry_run: bool,

    /// Verbose logs
    #[arg(short = 'v')]
    verbose: bool,

    /// Pretty JSON formatting for the request
    #[arg(long)]
    pretty: bool,

    /// Pin the request id instead of drawing a random one
    #[arg(long)]
    id: Option<u64>,

    /// Transport deadline in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Method namespace (eth|net|web3); not validated here, the
    /// remote endpoint is the authority
    namespace: String,

    /// Method name within the namespace
    method: String,

    /// Positional params, then the target URL unless ETHCURL is set
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Shell completion requests bypass normal argument parsing.
    if complete::run() {
        return Ok(());
    }

    init_logging();

    let opts = Opts::parse();
    let (url, args) = resolve_url(std::env::var(ENV_URL).ok(), opts.args)?;
    let method = format!("{}_{}", opts.namespace, opts.method);

    let config = Config {
        print_command: opts.print_command,
        dry_run: opts.dry_run,
        verbose: opts.verbose,
        pretty: opts.pretty,
        fixed_id: opts.id,
        timeout: opts.timeout.map(Duration::from_secs),
    };

    let transport = HttpTransport::new(config.timeout)?;
    let mut client = Client::new(transport, config);
    let result = client.call(&url, &method, &args).await?;

    println!("{}", String::from_utf8_lossy(&result));
    Ok(())
}

/// The target URL comes from the environment when set, otherwise it
/// is the final positional argument.
fn resolve_url(
    env_url: Option<String>,
    mut args: Vec<String>,
) -> anyhow::Result<(String, Vec<String>)> {
    match env_url {
        Some(url) => Ok((url, args)),
        None => match args.pop() {
            Some(url) => Ok((url, args)),
            None => Err(anyhow!(
                "too few arguments: ethcurl (eth|net|web3) (method) [args...] [url]"
            )),
        },
    }
}

/// Initialize logging with tracing. Events go to stderr so stdout
/// stays clean for the result payload.
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ethcurl=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
