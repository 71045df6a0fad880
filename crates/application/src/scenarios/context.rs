//! Shared, read-only state handed to every scenario.

use std::sync::Arc;

use reqres_domain::{BearerToken, RequestDefaults};
use tracing::{info, warn};

use crate::ports::{Clock, HttpClient, TokenSource};

/// Outcome of the one-time token bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BootstrapToken {
    /// No token source was configured.
    #[default]
    NotRequested,
    /// A token was obtained.
    Acquired(BearerToken),
    /// Acquisition failed; scenarios needing the token report this message.
    Failed(String),
}

impl BootstrapToken {
    /// Runs the token source once, if any, and records the outcome.
    pub async fn acquire(source: Option<&dyn TokenSource>) -> Self {
        let Some(source) = source else {
            return Self::NotRequested;
        };
        match source.acquire().await {
            Ok(token) if token.is_blank() => {
                warn!("authorization returned an empty token");
                Self::Failed("authorization returned an empty token".to_string())
            }
            Ok(token) => {
                info!(token = %token.preview(), "bearer token acquired");
                Self::Acquired(token)
            }
            Err(e) => {
                warn!(error = %e, "bearer token acquisition failed");
                Self::Failed(e.to_string())
            }
        }
    }

    /// Returns the token, if acquired.
    #[must_use]
    pub const fn token(&self) -> Option<&BearerToken> {
        match self {
            Self::Acquired(token) => Some(token),
            Self::NotRequested | Self::Failed(_) => None,
        }
    }
}

/// Everything a scenario needs to run.
#[derive(Clone)]
pub struct SuiteContext {
    client: Arc<dyn HttpClient>,
    clock: Arc<dyn Clock>,
    reqres: RequestDefaults,
    balance: Option<RequestDefaults>,
    token: BootstrapToken,
}

impl SuiteContext {
    /// Creates a context for the reqres service.
    #[must_use]
    pub fn new(client: Arc<dyn HttpClient>, clock: Arc<dyn Clock>, reqres: RequestDefaults) -> Self {
        Self {
            client,
            clock,
            reqres,
            balance: None,
            token: BootstrapToken::NotRequested,
        }
    }

    /// Sets the request defaults of the account balance service.
    #[must_use]
    pub fn with_balance(mut self, balance: RequestDefaults) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Sets the bootstrap token.
    #[must_use]
    pub fn with_token(mut self, token: BootstrapToken) -> Self {
        self.token = token;
        self
    }

    /// HTTP client.
    #[must_use]
    pub fn client(&self) -> &dyn HttpClient {
        self.client.as_ref()
    }

    /// Clock.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Request defaults for reqres.
    #[must_use]
    pub const fn reqres(&self) -> &RequestDefaults {
        &self.reqres
    }

    /// Request defaults for the balance service, if configured.
    #[must_use]
    pub const fn balance(&self) -> Option<&RequestDefaults> {
        self.balance.as_ref()
    }

    /// Bootstrap token state.
    #[must_use]
    pub const fn token(&self) -> &BootstrapToken {
        &self.token
    }
}

impl std::fmt::Debug for SuiteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuiteContext")
            .field("reqres", &self.reqres)
            .field("balance", &self.balance)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}
