//! Integration tests for the RustDuo verification API client.
//!
//! These tests sign real requests against a live API host, so they need
//! credentials in the environment. They are marked `#[ignore]` so they
//! don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! DUO_INTEGRATION_KEY=... DUO_SECRET_KEY=... DUO_API_HOST=api-XXXXXXXX.duosecurity.com \
//!     cargo test -p rustduo-integration -- --ignored
//! ```

use std::sync::Once;

use rustduo_auth::Credential;
use rustduo_client::{ClientConfig, VerificationClient};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Read a required environment variable, panicking with guidance if unset.
fn required_env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set to run integration tests"))
}

/// Create a client configured from `DUO_*` environment variables.
#[must_use]
pub fn client_from_env() -> VerificationClient {
    init_tracing();

    let credential = Credential::new(
        required_env("DUO_INTEGRATION_KEY"),
        required_env("DUO_SECRET_KEY"),
    );
    let host = required_env("DUO_API_HOST");
    let scheme = std::env::var("DUO_API_SCHEME").unwrap_or_else(|_| "https".to_owned());

    let config = ClientConfig::builder()
        .credential(credential)
        .host(host)
        .scheme(scheme)
        .build();

    VerificationClient::new(config).expect("failed to build verification client")
}

mod test_auth;
