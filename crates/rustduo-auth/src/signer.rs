//! HMAC-SHA1 request signing for the verification API.
//!
//! Every authenticated call carries a Basic `Authorization` header derived
//! from the canonical request:
//!
//! ```text
//! Authorization: Basic Base64(<integration-key>:<signature>)
//! ```
//!
//! Where `signature = lowercase_hex(HMAC-SHA1(secret-key, canonical-request))`
//! and the canonical request folds in the RFC 1123 timestamp that the
//! transport must also send as the `Date` header. [`RequestSigner`] therefore
//! returns both the token and the exact date string it signed, so the two
//! headers cannot drift apart.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use tracing::debug;

use crate::canonical::build_canonical_request;
use crate::credentials::Credential;
use crate::error::SignError;

type HmacSha1 = Hmac<Sha1>;

/// RFC 1123 date layout with a literal `GMT` zone, e.g.
/// `Tue, 21 Aug 2012 17:29:18 GMT`.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a UTC timestamp as an RFC 1123 HTTP date.
///
/// Weekday and month names are the English abbreviations regardless of
/// locale, and the day of month is zero-padded.
#[must_use]
pub fn format_http_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format(HTTP_DATE_FORMAT).to_string()
}

/// Sign a canonical request string: `lowercase_hex(HMAC-SHA1(secret, canonical))`.
///
/// # Errors
///
/// Returns [`SignError::InvalidKey`] if the HMAC primitive rejects the
/// secret key material. The failure is never collapsed into an empty
/// signature string.
pub fn sign_canonical(secret_key: &str, canonical: &str) -> Result<String, SignError> {
    let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes())?;
    mac.update(canonical.as_bytes());
    let digest = mac.finalize().into_bytes();
    Ok(hex::encode(digest))
}

/// Build the Basic authorization token: `Base64(integration-key:hex-digest)`.
#[must_use]
pub fn authorization_token(credential: &Credential, hex_digest: &str) -> String {
    BASE64.encode(format!("{}:{hex_digest}", credential.integration_key()))
}

/// The output of signing one request.
///
/// `token` goes into `Authorization: Basic <token>`; `date` must be sent
/// verbatim as the `Date` header, since re-formatting the timestamp on the
/// transport side would break server-side verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSignature {
    /// Base64 Basic token, ready for the `Authorization` header.
    pub token: String,
    /// The exact RFC 1123 date string folded into the signature.
    pub date: String,
}

/// Signs requests for one API host with a fixed credential.
///
/// The signer is immutable after construction; signing is a pure function
/// of its inputs, so a shared signer can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
    host: String,
}

impl RequestSigner {
    /// Create a signer for the given API host.
    #[must_use]
    pub fn new(credential: Credential, host: impl Into<String>) -> Self {
        Self {
            credential,
            host: host.into(),
        }
    }

    /// The API host requests are signed for.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Sign one request, producing the authorization token together with
    /// the exact date string that was signed.
    ///
    /// `canonical_params` must already be in canonical form (see
    /// [`canonicalize_params`](crate::canonical::canonicalize_params)); it
    /// is folded into the signature verbatim and must be transmitted
    /// byte-identical. Method and host are case-normalized here, so callers
    /// need not pre-normalize them.
    ///
    /// # Errors
    ///
    /// Returns [`SignError::InvalidKey`] if the HMAC primitive rejects the
    /// secret key material.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use rustduo_auth::{Credential, RequestSigner};
    ///
    /// let signer = RequestSigner::new(
    ///     Credential::new("1234", "abcd"),
    ///     "api-xxxxxxxx.duosecurity.com",
    /// );
    /// let timestamp = Utc.with_ymd_and_hms(2012, 8, 21, 17, 29, 18).unwrap();
    /// let signature = signer
    ///     .authorization_key(
    ///         &http::Method::POST,
    ///         timestamp,
    ///         "/rest/v1/auth",
    ///         "auto=phone1&factor=auto&ipaddr=141.213.231.43&user=bob",
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(signature.date, "Tue, 21 Aug 2012 17:29:18 GMT");
    /// assert_eq!(
    ///     signature.token,
    ///     "MTIzNDpjZTI1YTE5ZDI3YTk4ZjI1NGU4M2JiY2NhYWVmOTg0YjY4OGJlNzEz"
    /// );
    /// ```
    pub fn authorization_key(
        &self,
        method: &http::Method,
        timestamp: DateTime<Utc>,
        path: &str,
        canonical_params: &str,
    ) -> Result<RequestSignature, SignError> {
        let date = format_http_date(timestamp);
        let canonical =
            build_canonical_request(&date, method.as_str(), &self.host, path, canonical_params);

        debug!(
            integration_key = %self.credential.integration_key(),
            method = %method,
            path = %path,
            canonical = ?canonical,
            "Signing request"
        );

        let digest = sign_canonical(self.credential.secret_key(), &canonical)?;
        let token = authorization_token(&self.credential, &digest);

        Ok(RequestSignature { token, date })
    }
}
