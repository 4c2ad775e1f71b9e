//! Assembly of signed requests into wire form.
//!
//! The canonical parameter string that was signed must reach the server
//! byte-identical, so this module never re-encodes it: for query-style
//! methods it is appended verbatim as the raw query string, for bodied
//! methods it becomes the form body verbatim.

use rustduo_auth::RequestSignature;

use crate::error::ClientError;
use crate::transport::ApiRequest;

/// Whether the method carries its parameters in the body rather than the
/// query string.
pub(crate) fn uses_body(method: &http::Method) -> bool {
    *method == http::Method::POST || *method == http::Method::PUT
}

/// Build the absolute request URL from its parts.
///
/// `query` is already percent-encoded and is attached as-is; `None` (and
/// the empty string) produce a URL without a `?`.
pub(crate) fn build_url(
    scheme: &str,
    host: &str,
    path: &str,
    query: Option<&str>,
) -> Result<reqwest::Url, ClientError> {
    let endpoint = match query {
        Some(query) if !query.is_empty() => format!("{scheme}://{host}{path}?{query}"),
        _ => format!("{scheme}://{host}{path}"),
    };

    reqwest::Url::parse(&endpoint)
        .map_err(|error| ClientError::InvalidEndpoint(format!("{endpoint}: {error}")))
}

/// Combine a signed request's parts into a wire-ready [`ApiRequest`].
pub(crate) fn build_api_request(
    scheme: &str,
    host: &str,
    method: &http::Method,
    path: &str,
    canonical_params: &str,
    signature: &RequestSignature,
) -> Result<ApiRequest, ClientError> {
    let (query, body) = if uses_body(method) {
        (None, Some(canonical_params.to_owned()))
    } else {
        (Some(canonical_params), None)
    };

    let url = build_url(scheme, host, path, query)?;

    Ok(ApiRequest {
        method: method.clone(),
        url,
        authorization: format!("Basic {}", signature.token),
        date: signature.date.clone(),
        body,
    })
}
