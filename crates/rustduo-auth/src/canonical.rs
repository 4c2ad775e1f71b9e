//! Canonical request construction for the signed verification API.
//!
//! Every authenticated call is signed over a deterministic canonical
//! request: five newline-joined fields that client and server derive
//! independently and must agree on byte for byte:
//!
//! ```text
//! RFC1123-UTC-date\n
//! UPPERCASE-METHOD\n
//! lowercase-host\n
//! path\n
//! canonical-params
//! ```
//!
//! The parameter field is itself canonical: pairs are sorted by key and
//! percent-encoded against a fixed unreserved set, so any ordering of the
//! caller's parameters produces the same bytes.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The set of characters that must be percent-encoded in parameter keys and
/// values.
///
/// All characters except unreserved characters (A-Z, a-z, 0-9, `-`, `_`,
/// `.`, `~`) are encoded. Space becomes `%20`, never `+`.
const PARAM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single parameter key or value.
fn param_encode(input: &str) -> String {
    utf8_percent_encode(input, PARAM_ENCODE_SET).to_string()
}

/// Build the canonical parameter string from an unordered pair sequence.
///
/// Pairs are sorted by key using byte-wise ordinal comparison before
/// encoding. The sort is stable, so duplicate keys keep their original
/// relative order; no pair is dropped or merged. Each key and value is
/// percent-encoded, pairs are rendered as `key=value` and joined with `&`.
/// An empty value still produces `key=`.
///
/// # Examples
///
/// ```
/// use rustduo_auth::canonical::canonicalize_params;
///
/// assert_eq!(canonicalize_params(&[("b", "2"), ("a", "1")]), "a=1&b=2");
/// assert_eq!(canonicalize_params::<&str, &str>(&[]), "");
/// ```
#[must_use]
pub fn canonicalize_params<K: AsRef<str>, V: AsRef<str>>(params: &[(K, V)]) -> String {
    let mut pairs: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_ref()))
        .collect();

    // The server re-derives this ordering independently; a stable sort keeps
    // duplicate keys in their original relative order.
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", param_encode(k), param_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the full canonical request string from its components.
///
/// The result is exactly five newline-joined fields with no trailing
/// newline:
///
/// 1. RFC 1123 date, passed through verbatim
/// 2. HTTP method, upper-cased
/// 3. Host, lower-cased
/// 4. Path, passed through verbatim (leading slash included, no query
///    string)
/// 5. Canonical parameter string
///
/// This is pure string assembly with no failure path; validating the method
/// is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use rustduo_auth::canonical::build_canonical_request;
///
/// let canonical = build_canonical_request(
///     "Tue, 21 Aug 2012 17:29:18 GMT",
///     "post",
///     "API.Example.com",
///     "/rest/v1/auth",
///     "user=bob",
/// );
/// assert_eq!(
///     canonical,
///     "Tue, 21 Aug 2012 17:29:18 GMT\nPOST\napi.example.com\n/rest/v1/auth\nuser=bob"
/// );
/// ```
#[must_use]
pub fn build_canonical_request(
    date: &str,
    method: &str,
    host: &str,
    path: &str,
    encoded_params: &str,
) -> String {
    let method = method.to_uppercase();
    let host = host.to_lowercase();
    format!("{date}\n{method}\n{host}\n{path}\n{encoded_params}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_sort_params_by_key() {
        assert_eq!(canonicalize_params(&[("b", "2"), ("a", "1"), ("c", "3")]), "a=1&b=2&c=3");
    }

    #[test]
    fn test_should_produce_identical_output_for_any_input_order() {
        let forward = canonicalize_params(&[("a", "1"), ("b", "2")]);
        let reversed = canonicalize_params(&[("b", "2"), ("a", "1")]);
        assert_eq!(forward, reversed);
        assert_eq!(forward, "a=1&b=2");
    }

    #[test]
    fn test_should_sort_keys_bytewise() {
        // Ordinal comparison: all uppercase letters sort before lowercase.
        assert_eq!(canonicalize_params(&[("a", "1"), ("B", "2")]), "B=2&a=1");
    }

    #[test]
    fn test_should_preserve_duplicate_keys_in_original_order() {
        assert_eq!(
            canonicalize_params(&[("k", "second"), ("a", "0"), ("k", "first")]),
            "a=0&k=second&k=first"
        );
    }

    #[test]
    fn test_should_encode_space_as_percent_20_and_plus_as_percent_2b() {
        assert_eq!(canonicalize_params(&[("msg", "a +b")]), "msg=a%20%2Bb");
    }

    #[test]
    fn test_should_pass_unreserved_characters_through() {
        assert_eq!(canonicalize_params(&[("key-1_2.3~", "A-Z_a.z~0")]), "key-1_2.3~=A-Z_a.z~0");
    }

    #[test]
    fn test_should_encode_utf8_values_per_byte() {
        // U+0134 (LATIN CAPITAL LETTER J WITH CIRCUMFLEX) is 0xC4 0xB4.
        assert_eq!(canonicalize_params(&[("j", "\u{0134}")]), "j=%C4%B4");
    }

    #[test]
    fn test_should_encode_empty_value_as_bare_key_equals() {
        assert_eq!(canonicalize_params(&[("empty", "")]), "empty=");
    }

    #[test]
    fn test_should_return_empty_string_for_empty_input() {
        assert_eq!(canonicalize_params::<&str, &str>(&[]), "");
    }

    #[test]
    fn test_should_reproduce_pin_message_encoding() {
        // Pinned against the encoded form the verification service documents.
        assert_eq!(
            canonicalize_params(&[("message", "Your PIN is <pin>"), ("phone", "+447952556282")]),
            "message=Your%20PIN%20is%20%3Cpin%3E&phone=%2B447952556282"
        );
    }

    #[test]
    fn test_should_build_five_newline_joined_fields() {
        let canonical = build_canonical_request(
            "Fri, 07 Dec 2012 17:18:00 GMT",
            "GET",
            "api-eval.duosecurity.com",
            "/admin/v1/users",
            "limit=10",
        );
        assert_eq!(canonical.split('\n').count(), 5);
        assert!(!canonical.ends_with('\n'));
    }

    #[test]
    fn test_should_keep_five_fields_when_params_are_empty() {
        let canonical = build_canonical_request(
            "Fri, 07 Dec 2012 17:18:00 GMT",
            "GET",
            "api-eval.duosecurity.com",
            "/admin/v1/users",
            "",
        );
        let fields: Vec<&str> = canonical.split('\n').collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[4], "");
    }

    #[test]
    fn test_should_uppercase_method_and_lowercase_host() {
        let lower = build_canonical_request("d", "post", "API.Example.com", "/p", "");
        let upper = build_canonical_request("d", "POST", "api.example.com", "/p", "");
        assert_eq!(lower, upper);
        assert!(lower.contains("\nPOST\n"));
        assert!(lower.contains("\napi.example.com\n"));
    }

    #[test]
    fn test_should_pass_path_through_unmodified() {
        let canonical = build_canonical_request("d", "GET", "h", "/Path/With%20Case", "");
        assert!(canonical.contains("\n/Path/With%20Case\n"));
    }
}
