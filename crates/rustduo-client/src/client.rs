//! High-level verification API client.
//!
//! [`VerificationClient`] owns a [`RequestSigner`] and a [`Transport`] and
//! wires them together for each call: canonicalize the parameters, sign
//! them against the current UTC instant, assemble the wire request, and
//! parse the JSON reply.
//!
//! Wire-level trouble is part of normal operation for this API (hosts are
//! customer-configured and often unreachable), so connect failures,
//! non-success statuses, and empty bodies all come back as `Ok(None)`
//! rather than errors; each is logged before being absorbed.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rustduo_auth::{Credential, RequestSigner, canonicalize_params};
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

use crate::error::ClientResult;
use crate::request::build_api_request;
use crate::transport::{ReqwestTransport, Transport};

/// Client configuration.
///
/// # Examples
///
/// ```
/// use rustduo_auth::Credential;
/// use rustduo_client::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .credential(Credential::new("DIWJ8X6AEYOR5OMC6TQ1", "secret"))
///     .host("api-eval.duosecurity.com".to_owned())
///     .build();
/// assert_eq!(config.scheme, "https");
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct ClientConfig {
    /// Integration and secret key pair used to sign every request.
    pub credential: Credential,

    /// API hostname, e.g. `api-eval.duosecurity.com`.
    pub host: String,

    /// URL scheme. Anything other than `https` is only sensible against a
    /// local test server.
    #[builder(default = String::from("https"))]
    pub scheme: String,

    /// Total per-exchange timeout.
    #[builder(default = Duration::from_secs(180))]
    pub timeout: Duration,
}

/// Signed client for the verification API.
pub struct VerificationClient {
    signer: RequestSigner,
    scheme: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for VerificationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationClient")
            .field("signer", &self.signer)
            .field("scheme", &self.scheme)
            .field("transport", &"<dyn Transport>")
            .finish()
    }
}

impl VerificationClient {
    /// Create a client backed by the production [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`](crate::error::ClientError) if the HTTP
    /// client cannot be constructed.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            signer: RequestSigner::new(config.credential, config.host),
            scheme: config.scheme,
            transport,
        }
    }

    /// The API host this client talks to.
    #[must_use]
    pub fn host(&self) -> &str {
        self.signer.host()
    }

    /// Issue one signed API call and parse the JSON reply.
    ///
    /// Parameters may be given in any order; they are canonicalized before
    /// signing, and the transmitted form is byte-identical to the signed
    /// form. `Ok(None)` means the server could not be reached, answered
    /// with a non-success status, or sent an empty body.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`](crate::error::ClientError) if signing
    /// fails, if scheme, host, and path do not form a valid URL, or if a
    /// successful response carries a malformed body.
    pub async fn request<K, V>(
        &self,
        method: &http::Method,
        path: &str,
        params: &[(K, V)],
    ) -> ClientResult<Option<serde_json::Value>>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let canonical_params = canonicalize_params(params);
        let signature = self
            .signer
            .authorization_key(method, Utc::now(), path, &canonical_params)?;
        let request = build_api_request(
            &self.scheme,
            self.signer.host(),
            method,
            path,
            &canonical_params,
            &signature,
        )?;

        debug!(method = %method, url = %request.url, "Dispatching signed request");

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(error = %error, "Transport failed; treating response as absent");
                return Ok(None);
            }
        };

        if !response.status.is_success() {
            warn!(status = %response.status, "API answered with non-success status");
            return Ok(None);
        }

        if response.body.is_empty() {
            debug!("API answered with an empty body");
            return Ok(None);
        }

        let value = serde_json::from_slice(&response.body)?;
        Ok(Some(value))
    }
}
