//! Async client for the RustDuo verification API.
//!
//! This crate builds on [`rustduo_auth`] to issue complete signed calls:
//! it canonicalizes the caller's parameters, signs them against the
//! current UTC instant, transmits the request with coupled
//! `Authorization` and `Date` headers, and parses the JSON reply into a
//! dynamic [`serde_json::Value`].
//!
//! # Response contract
//!
//! The API is commonly deployed behind customer-configured hosts, so an
//! unreachable server, a non-success status, or an empty body are all
//! reported as an absent response (`Ok(None)`) rather than errors. Errors
//! are reserved for conditions the caller caused or must handle: signing
//! failures, malformed endpoints, and malformed JSON in a successful
//! response.
//!
//! # Usage
//!
//! ```rust,no_run
//! use rustduo_auth::Credential;
//! use rustduo_client::{ClientConfig, VerificationClient};
//!
//! # async fn demo() -> Result<(), rustduo_client::ClientError> {
//! let config = ClientConfig::builder()
//!     .credential(Credential::new("DIWJ8X6AEYOR5OMC6TQ1", "secret"))
//!     .host("api-eval.duosecurity.com".to_owned())
//!     .build();
//! let client = VerificationClient::new(config)?;
//!
//! let reply = client
//!     .request(
//!         &http::Method::POST,
//!         "/auth/v2/auth",
//!         &[("username", "bob"), ("factor", "push")],
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] - High-level client and its configuration
//! - [`error`] - Client error types
//! - [`transport`] - Transport trait, production implementation, wire types

pub mod client;
pub mod error;
mod request;
pub mod transport;

pub use client::{ClientConfig, VerificationClient};
pub use error::{ClientError, ClientResult};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport, TransportError};
