//! Broker Adapters Binary
//!
//! Operator tooling around the broker adapters.
//!
//! # Usage
//!
//! ```bash
//! echo '{"symbol":"SBIN","exchange":"NSE","quantity":"10","pricetype":"MARKET","action":"BUY","product":"MIS"}' \
//!     | cargo run --bin broker-adapters -- fyers-order --symbols symbols.json
//! cargo run --bin broker-adapters -- upstox-auth <AUTHORIZATION_CODE>
//! ```
//!
//! # Environment Variables
//!
//! ## Required (upstox-auth)
//! - `BROKER_API_KEY`: Broker API key
//! - `BROKER_API_SECRET`: Broker API secret
//! - `REDIRECT_URL`: OAuth redirect URL
//!
//! ## Optional
//! - `UPSTOX_TOKEN_URL`: Token endpoint override
//! - `BROKER_HTTP_TIMEOUT_SECS`: HTTP timeout (default: 30)
//! - `RUST_LOG`: Log level (default: info)

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use broker_adapters::config::{BrokerSettings, load_dotenv};
use broker_adapters::{
    FyersOrderMapper, InMemorySymbolResolver, ModifyOrderRequest, OrderRequest,
    PassthroughSymbolResolver, SymbolResolver, UpstoxAuthClient, transform_modify_order_data,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "broker-adapters")]
#[command(about = "Broker order mapping and login tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a canonical order (JSON on stdin) to a Fyers order request
    FyersOrder {
        /// JSON symbol map ([{symbol, exchange, brsymbol}]); symbols pass through when omitted
        #[arg(long)]
        symbols: Option<PathBuf>,
    },

    /// Map a canonical modify request (JSON on stdin) to a Fyers modify request
    FyersModify,

    /// Exchange an Upstox authorization code for an access token
    UpstoxAuth {
        /// Authorization code from the login redirect
        code: String,
    },
}

fn main() -> Result<ExitCode> {
    let dotenv_path = load_dotenv();
    init_tracing();
    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    let cli = Cli::parse();
    match cli.cmd {
        Commands::FyersOrder { symbols } => {
            let order: OrderRequest = read_stdin_json()?;
            let resolver: Box<dyn SymbolResolver> = match symbols {
                Some(path) => Box::new(
                    InMemorySymbolResolver::from_json_file(&path)
                        .with_context(|| format!("loading symbol map {}", path.display()))?,
                ),
                None => Box::new(PassthroughSymbolResolver),
            };
            let request = FyersOrderMapper::new(resolver)
                .transform_data(&order)
                .context("mapping order for Fyers")?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::FyersModify => {
            let order: ModifyOrderRequest = read_stdin_json()?;
            let request = transform_modify_order_data(&order);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::UpstoxAuth { code } => {
            let settings = BrokerSettings::from_env()?;
            let client = UpstoxAuthClient::new(settings.upstox_config())?;
            match client.authenticate_broker(&code) {
                Ok(token) => println!("{token}"),
                Err(e) => {
                    eprintln!("{e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_stdin_json<T: serde::de::DeserializeOwned>() -> Result<T> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    serde_json::from_str(&input).context("parsing request JSON")
}

/// Initialize the tracing subscriber with environment filter.
///
/// Logs go to stderr so stdout carries only the mapped request or token.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "broker_adapters=info"
                    .parse()
                    .expect("static directive 'broker_adapters=info' is valid"),
            ),
        )
        .init();
}
