//! Bearer token providers.
//!
//! [`HttpTokenProvider`] posts configured credentials to an authorization
//! endpoint and reads the token from the JSON answer.
//! [`StaticTokenProvider`] hands out a token supplied in configuration.

use std::collections::BTreeMap;
use std::time::Duration;

use reqres_application::ports::{AuthError, TokenFuture, TokenSource};
use reqres_domain::BearerToken;
use tracing::debug;

/// Obtains a token by posting credentials to an authorization endpoint.
pub struct HttpTokenProvider {
    http_client: reqwest::Client,
    url: String,
    credentials: BTreeMap<String, String>,
    token_field: String,
}

impl HttpTokenProvider {
    /// Creates a provider.
    ///
    /// `token_field` is a dotted path into the response JSON, e.g. `token`
    /// or `data.access_token`.
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        credentials: BTreeMap<String, String>,
        token_field: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            url: url.into(),
            credentials,
            token_field: token_field.into(),
        }
    }

    async fn request_token(&self) -> Result<BearerToken, AuthError> {
        debug!(url = %self.url, "requesting bearer token");
        let response = self
            .http_client
            .post(&self.url)
            .json(&self.credentials)
            .send()
            .await
            .map_err(|e: reqwest::Error| AuthError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AuthError::Network {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
        extract_token(&json, &self.token_field)
    }
}

impl TokenSource for HttpTokenProvider {
    fn acquire(&self) -> TokenFuture<'_> {
        Box::pin(self.request_token())
    }
}

/// Looks up a non-empty string at a dotted `field` path.
fn extract_token(json: &serde_json::Value, field: &str) -> Result<BearerToken, AuthError> {
    field
        .split('.')
        .try_fold(json, |value, key| value.get(key))
        .and_then(serde_json::Value::as_str)
        .filter(|token| !token.trim().is_empty())
        .map(BearerToken::new)
        .ok_or_else(|| AuthError::MissingToken {
            field: field.to_string(),
        })
}

/// Hands out a fixed token.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: BearerToken,
}

impl StaticTokenProvider {
    /// Wraps `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: BearerToken::new(token),
        }
    }
}

impl TokenSource for StaticTokenProvider {
    fn acquire(&self) -> TokenFuture<'_> {
        let token = self.token.clone();
        Box::pin(async move { Ok(token) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("login".to_string(), "qa".to_string()),
            ("password".to_string(), "secret".to_string()),
        ])
    }

    #[test]
    fn test_extract_nested_token() {
        let body = json!({"data": {"access_token": "xyz"}});
        assert_eq!(
            extract_token(&body, "data.access_token").unwrap(),
            BearerToken::new("xyz")
        );
    }

    #[test]
    fn test_extract_rejects_empty_or_non_string() {
        assert!(extract_token(&json!({"token": ""}), "token").is_err());
        assert!(extract_token(&json!({"token": 42}), "token").is_err());
        assert_eq!(
            extract_token(&json!({}), "token").unwrap_err(),
            AuthError::MissingToken {
                field: "token".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_acquire_posts_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/authorizations"))
            .and(body_json(json!({"login": "qa", "password": "secret"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let provider = HttpTokenProvider::new(
            format!("{}/authorizations", server.uri()),
            credentials(),
            "token",
            Duration::from_secs(5),
        );

        assert_eq!(provider.acquire().await.unwrap(), BearerToken::new("abc"));
    }

    #[tokio::test]
    async fn test_acquire_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .mount(&server)
            .await;

        let provider = HttpTokenProvider::new(
            server.uri(),
            credentials(),
            "token",
            Duration::from_secs(5),
        );

        assert_eq!(
            provider.acquire().await.unwrap_err(),
            AuthError::Rejected {
                status: 401,
                body: "bad credentials".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_static_provider() {
        let provider = StaticTokenProvider::new("fixed");
        assert_eq!(provider.acquire().await.unwrap(), BearerToken::new("fixed"));
    }
}
