//! Credential and connectivity integration tests.

#[cfg(test)]
mod tests {
    use crate::client_from_env;

    #[tokio::test]
    #[ignore = "requires DUO_* credentials and a reachable API host"]
    async fn test_should_answer_ping() {
        let client = client_from_env();

        let reply = client
            .request::<&str, &str>(&http::Method::GET, "/auth/v2/ping", &[])
            .await
            .expect("ping request");

        let value = reply.expect("ping response body");
        assert_eq!(value["stat"], "OK");
    }

    #[tokio::test]
    #[ignore = "requires DUO_* credentials and a reachable API host"]
    async fn test_should_validate_credentials_with_check() {
        let client = client_from_env();

        let reply = client
            .request::<&str, &str>(&http::Method::GET, "/auth/v2/check", &[])
            .await
            .expect("check request");

        let value = reply.expect("check response body");
        assert_eq!(value["stat"], "OK", "credentials rejected: {value}");
    }

    #[tokio::test]
    #[ignore = "requires DUO_* credentials and a reachable API host"]
    async fn test_should_preauth_a_user() {
        let client = client_from_env();
        let username =
            std::env::var("DUO_TEST_USERNAME").unwrap_or_else(|_| "integration-probe".to_owned());

        let reply = client
            .request(
                &http::Method::POST,
                "/auth/v2/preauth",
                &[("username", username.as_str())],
            )
            .await
            .expect("preauth request");

        let value = reply.expect("preauth response body");
        tracing::info!(%value, "preauth reply");
        assert!(value["stat"].is_string());
    }
}
