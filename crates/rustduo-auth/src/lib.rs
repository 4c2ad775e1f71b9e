//! HMAC-SHA1 request signing for the RustDuo verification API.
//!
//! This crate implements the client side of the API's request authentication:
//! given an integration key, a secret key, and the components of an HTTP
//! request, it produces the Basic `Authorization` token the server verifies,
//! along with the `Date` header value that was folded into the signature.
//!
//! # Overview
//!
//! The server recomputes the signature from the request it receives, so
//! client and server must derive the identical canonical byte string. This
//! crate pins down that derivation: parameters are sorted and
//! percent-encoded deterministically, method and host are case-normalized,
//! and the signed timestamp is returned to the caller so the transport can
//! send it verbatim.
//!
//! # Usage
//!
//! ```rust
//! use chrono::Utc;
//! use rustduo_auth::{Credential, RequestSigner, canonicalize_params};
//!
//! let signer = RequestSigner::new(
//!     Credential::new("DIWJ8X6AEYOR5OMC6TQ1", "Zh5eGmUq9zpfQnyUIu5OL9iWoMMv5ZNmk3zLJ4Ep"),
//!     "api-eval.duosecurity.com",
//! );
//!
//! let params = canonicalize_params(&[("username", "bob"), ("factor", "push")]);
//! let signature = signer
//!     .authorization_key(&http::Method::POST, Utc::now(), "/auth/v2/auth", &params)
//!     .unwrap();
//!
//! // Send `Authorization: Basic {signature.token}` and `Date: {signature.date}`.
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical parameter and request string construction
//! - [`credentials`] - Integration/secret key pair with a redacting `Debug`
//! - [`error`] - Signing error types
//! - [`signer`] - HMAC-SHA1 signing and authorization token assembly

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod signer;

pub use canonical::{build_canonical_request, canonicalize_params};
pub use credentials::Credential;
pub use error::SignError;
pub use signer::{
    RequestSignature, RequestSigner, authorization_token, format_http_date, sign_canonical,
};
