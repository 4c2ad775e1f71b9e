//! RustDuo CLI - issue one signed verification API call from the shell.
//!
//! Signs the request with the credential from the environment, sends it,
//! and pretty-prints the JSON reply.
//!
//! # Usage
//!
//! ```text
//! DUO_INTEGRATION_KEY=DIWJ8X6AEYOR5OMC6TQ1 \
//! DUO_SECRET_KEY=... \
//! DUO_API_HOST=api-eval.duosecurity.com \
//!     rustduo-cli POST /auth/v2/auth username=bob factor=push
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DUO_INTEGRATION_KEY` | *(required)* | Integration key identifying the caller |
//! | `DUO_SECRET_KEY` | *(required)* | Shared secret used as the HMAC key |
//! | `DUO_API_HOST` | *(required)* | API hostname |
//! | `DUO_API_SCHEME` | `https` | URL scheme (`http` only makes sense against a local test server) |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result};
use rustduo_auth::Credential;
use rustduo_client::{ClientConfig, VerificationClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Client version logged at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "usage: rustduo-cli METHOD PATH [key=value ...]";

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Application configuration loaded from the environment.
#[derive(Debug)]
struct AppConfig {
    credential: Credential,
    host: String,
    scheme: String,
    log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    fn from_env() -> Result<Self> {
        let integration_key = require_env("DUO_INTEGRATION_KEY")?;
        let secret_key = require_env("DUO_SECRET_KEY")?;
        let host = require_env("DUO_API_HOST")?;
        let scheme = std::env::var("DUO_API_SCHEME").unwrap_or_else(|_| "https".to_owned());
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());

        Ok(Self {
            credential: Credential::new(integration_key, secret_key),
            host,
            scheme,
            log_level,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("missing required environment variable: {name}"))
}

/// Parse and validate the request method.
///
/// Only the methods the API accepts are allowed; anything else fails with
/// a descriptive message rather than being sent to the server.
fn parse_method(raw: &str) -> Result<http::Method> {
    match raw.to_ascii_uppercase().as_str() {
        "GET" => Ok(http::Method::GET),
        "POST" => Ok(http::Method::POST),
        "PUT" => Ok(http::Method::PUT),
        "DELETE" => Ok(http::Method::DELETE),
        other => anyhow::bail!("unsupported method: {other} (expected GET, POST, PUT, or DELETE)"),
    }
}

/// Parse trailing `key=value` arguments into parameter pairs.
fn parse_params(args: &[String]) -> Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .with_context(|| format!("malformed parameter (expected key=value): {arg}"))
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        anyhow::bail!("{USAGE}");
    }

    let method = parse_method(&args[0])?;
    let path = args[1].clone();
    if !path.starts_with('/') {
        anyhow::bail!("path must start with '/': {path}");
    }
    let params = parse_params(&args[2..])?;

    let config = AppConfig::from_env()?;
    init_tracing(&config.log_level)?;

    info!(
        method = %method,
        path = %path,
        host = %config.host,
        version = VERSION,
        "issuing signed API call",
    );

    let client_config = ClientConfig::builder()
        .credential(config.credential)
        .host(config.host)
        .scheme(config.scheme)
        .build();
    let client = VerificationClient::new(client_config)?;

    let reply = client.request(&method, &path, &params).await?;

    match reply {
        Some(value) => {
            let rendered =
                serde_json::to_string_pretty(&value).context("failed to render API response")?;
            println!("{rendered}");
            Ok(())
        }
        None => anyhow::bail!("no usable response from {}", client.host()),
    }
}
