//! The credential pair identifying a calling application.

use std::fmt;

/// An integration key / secret key pair for the verification API.
///
/// The integration key is the public identifier of the calling application,
/// comparable to an API key ID. The secret key is only ever used locally as
/// HMAC key material: it is redacted from `Debug` output and carries no
/// serde derives, so it cannot leak through logging or serialization.
///
/// A credential is immutable once constructed and is owned by one
/// [`RequestSigner`](crate::signer::RequestSigner) for its whole lifetime.
///
/// # Examples
///
/// ```
/// use rustduo_auth::Credential;
///
/// let credential = Credential::new("DIWJ8X6AEYOR5OMC6TQ1", "secret");
/// assert_eq!(credential.integration_key(), "DIWJ8X6AEYOR5OMC6TQ1");
/// ```
#[derive(Clone)]
pub struct Credential {
    integration_key: String,
    secret_key: String,
}

impl Credential {
    /// Create a credential from an integration key and a secret key.
    #[must_use]
    pub fn new(integration_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            integration_key: integration_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// The public integration key.
    #[must_use]
    pub fn integration_key(&self) -> &str {
        &self.integration_key
    }

    /// The shared secret used as HMAC key material.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("integration_key", &self.integration_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_expose_both_keys() {
        let credential = Credential::new("ikey", "skey");
        assert_eq!(credential.integration_key(), "ikey");
        assert_eq!(credential.secret_key(), "skey");
    }

    #[test]
    fn test_should_redact_secret_key_in_debug_output() {
        let credential = Credential::new("ikey", "very-secret-value");
        let rendered = format!("{credential:?}");
        assert!(rendered.contains("ikey"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("very-secret-value"));
    }
}
