//! Transport seam between the client and the wire.
//!
//! [`VerificationClient`](crate::client::VerificationClient) never talks to
//! the network directly; it hands a fully-signed [`ApiRequest`] to a
//! [`Transport`] and gets back a raw [`ApiResponse`]. The production
//! implementation is [`ReqwestTransport`]; tests substitute a capturing
//! double behind the same trait.
//!
//! # Object safety
//!
//! [`Transport`] uses `#[async_trait]` because it must be object-safe for
//! dynamic dispatch (`Arc<dyn Transport>`), so one client can serve both
//! the real wire and test doubles.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header;
use tracing::debug;

/// A fully-signed request, ready to be put on the wire.
///
/// Everything authentication-sensitive is already resolved: `authorization`
/// carries the complete header value and `date` is the exact timestamp
/// string that was signed. A transport must transmit both verbatim.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Absolute request URL, query string included for query-style calls.
    pub url: reqwest::Url,
    /// Complete `Authorization` header value (`Basic <token>`).
    pub authorization: String,
    /// `Date` header value, byte-identical to the signed timestamp.
    pub date: String,
    /// Form-encoded body for bodied methods, `None` otherwise.
    pub body: Option<String>,
}

/// A raw response as read off the wire.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: http::StatusCode,
    /// Response body bytes, possibly empty.
    pub body: Bytes,
}

/// Errors raised by a [`Transport`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The exchange failed on the wire before a complete response was read.
    #[error("wire exchange failed")]
    Wire(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::Wire(Box::new(error))
    }
}

/// Executes signed API requests against the wire.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Perform one exchange.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Wire`] if the exchange fails before a
    /// complete response (status plus body) has been read. Non-success
    /// statuses are not errors at this layer; they come back as a normal
    /// [`ApiResponse`].
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Production transport backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport whose exchanges time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the underlying client cannot
    /// be constructed.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Build)?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let ApiRequest {
            method,
            url,
            authorization,
            date,
            body,
        } = request;

        debug!(method = %method, url = %url, "Executing API exchange");

        let mut builder = self
            .client
            .request(method, url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::DATE, date)
            .header(header::ACCEPT, "application/json");

        if let Some(form) = body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(form);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(status = %status, body_len = body.len(), "Exchange completed");

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_transport_with_timeout() {
        let transport = ReqwestTransport::new(Duration::from_secs(180));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_should_construct_wire_error_from_message() {
        let error = TransportError::Wire("connection refused".into());
        assert_eq!(error.to_string(), "wire exchange failed");
    }
}
