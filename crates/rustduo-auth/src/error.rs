//! Error types for request signing.

/// Errors that can occur while signing a request.
///
/// The signer never degrades to an empty signature string: any failure of
/// the underlying HMAC primitive is surfaced as a distinct error, so a
/// caller cannot mistake a failed signing operation for a valid header
/// value and transmit an unauthenticated request.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    /// The secret key was rejected as HMAC key material.
    #[error("secret key rejected by HMAC-SHA1")]
    InvalidKey(#[from] digest::InvalidLength),
}
