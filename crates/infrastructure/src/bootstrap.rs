//! Wiring from configuration to a ready-to-run suite context.

use std::sync::Arc;

use reqres_application::{BootstrapToken, SuiteContext};
use tracing::info;

use crate::adapters::{ReqwestHttpClient, SystemClock};
use crate::config::{ConfigError, SuiteConfig};

/// Builds the HTTP client and clock, acquires the bearer token once and
/// assembles the context every scenario shares.
///
/// A failed token acquisition does not abort; it is recorded in the
/// context and surfaces in the scenarios that need the token.
///
/// # Errors
///
/// Returns an error if a base URL is invalid or the HTTP client cannot be
/// built.
pub async fn build_context(config: &SuiteConfig) -> Result<SuiteContext, ConfigError> {
    let client = ReqwestHttpClient::new(config.http.timeout(), &config.http.user_agent)?;
    let reqres = config.reqres_defaults()?;
    info!(base_url = %reqres.base_url(), "reqres endpoint");

    let mut ctx = SuiteContext::new(Arc::new(client), Arc::new(SystemClock::new()), reqres);
    if let Some(balance) = config.balance_defaults()? {
        info!(base_url = %balance.base_url(), "balance endpoint");
        ctx = ctx.with_balance(balance);
    }

    let source = config.token_source();
    let token = BootstrapToken::acquire(source.as_deref()).await;
    Ok(ctx.with_token(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, BalanceConfig, ReqresConfig};
    use pretty_assertions::assert_eq;
    use reqres_domain::BearerToken;

    #[tokio::test]
    async fn test_context_without_auth() {
        let ctx = build_context(&SuiteConfig::default()).await.unwrap();
        assert_eq!(ctx.token(), &BootstrapToken::NotRequested);
        assert!(ctx.balance().is_none());
    }

    #[tokio::test]
    async fn test_context_with_static_token() {
        let config = SuiteConfig {
            auth: Some(AuthConfig {
                token: Some("t0k3n".to_string()),
                ..AuthConfig::default()
            }),
            balance: Some(BalanceConfig {
                base_url: "http://localhost:9100".to_string(),
            }),
            ..SuiteConfig::default()
        };

        let ctx = build_context(&config).await.unwrap();

        assert_eq!(
            ctx.token(),
            &BootstrapToken::Acquired(BearerToken::new("t0k3n"))
        );
        assert!(ctx.balance().is_some());
    }

    #[tokio::test]
    async fn test_unreachable_auth_is_recorded_not_fatal() {
        let config = SuiteConfig {
            auth: Some(AuthConfig {
                url: Some("http://127.0.0.1:1/authorizations".to_string()),
                ..AuthConfig::default()
            }),
            ..SuiteConfig::default()
        };

        let ctx = build_context(&config).await.unwrap();

        assert!(matches!(ctx.token(), BootstrapToken::Failed(_)));
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_an_error() {
        let config = SuiteConfig {
            reqres: ReqresConfig {
                base_url: "ftp://reqres.in".to_string(),
                api_key: None,
            },
            ..SuiteConfig::default()
        };

        assert!(matches!(
            build_context(&config).await,
            Err(ConfigError::Invalid { .. })
        ));
    }
}
