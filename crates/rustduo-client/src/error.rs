//! Error types for the verification API client.

use rustduo_auth::SignError;

use crate::transport::TransportError;

/// Errors that can occur while issuing a verification API call.
///
/// Wire-level trouble (connect failures, non-success statuses, empty
/// bodies) is not represented here; the client reports those as an absent
/// response. Only failures the caller can act on surface as errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Signing the request failed.
    #[error("failed to sign request")]
    Sign(#[from] SignError),

    /// The configured scheme/host plus the requested path do not form a
    /// valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The HTTP transport could not be constructed.
    #[error("failed to initialize transport")]
    Transport(#[from] TransportError),

    /// A successful response carried a body that is not valid JSON.
    #[error("malformed JSON in API response")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
