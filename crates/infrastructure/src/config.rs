//! Layered suite configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. a TOML file (`--config`, or `reqres-suite.toml` when present)
//! 3. environment variables prefixed `REQRES__`, nested keys separated by
//!    `__` (e.g. `REQRES__REQRES__API_KEY`)

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use reqres_application::{HttpClientError, ScenarioSettings, TokenSource};
use reqres_domain::{DomainError, RequestDefaults};

use crate::auth::{HttpTokenProvider, StaticTokenProvider};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "reqres-suite.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "REQRES";

/// Header carrying the reqres API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not deserialize.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value is present but unusable.
    #[error("invalid configuration value for `{key}`: {reason}")]
    Invalid {
        /// Offending key.
        key: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be built from the settings.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] HttpClientError),
}

impl ConfigError {
    fn invalid(key: &'static str, error: &DomainError) -> Self {
        Self::Invalid {
            key,
            reason: error.to_string(),
        }
    }
}

/// The reqres service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReqresConfig {
    /// Base URL.
    pub base_url: String,
    /// Optional API key sent as `x-api-key`.
    pub api_key: Option<String>,
}

impl Default for ReqresConfig {
    fn default() -> Self {
        Self {
            base_url: "https://reqres.in/".to_string(),
            api_key: None,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout.
    pub timeout_ms: u64,
    /// User-Agent header.
    pub user_agent: String,
}

impl HttpConfig {
    /// Timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            user_agent: concat!("reqres-suite/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// How the bearer token is obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Authorization endpoint receiving `credentials` as JSON.
    pub url: Option<String>,
    /// Credential fields posted to `url`.
    pub credentials: BTreeMap<String, String>,
    /// Dotted path of the token in the response.
    pub token_field: String,
    /// Literal token; takes precedence over `url`.
    pub token: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            url: None,
            credentials: BTreeMap::new(),
            token_field: "token".to_string(),
            token: None,
        }
    }
}

/// The authenticated balance service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Base URL.
    pub base_url: String,
}

/// Complete suite configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// reqres service.
    pub reqres: ReqresConfig,
    /// HTTP client.
    pub http: HttpConfig,
    /// Token acquisition; absent means no token.
    pub auth: Option<AuthConfig>,
    /// Balance service; absent skips the balance scenario.
    pub balance: Option<BalanceConfig>,
    /// Scenario inputs.
    pub scenarios: ScenarioSettings,
}

impl SuiteConfig {
    /// Loads configuration from an optional file plus the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file is missing, a source
    /// does not parse, or a value fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, None)
    }

    /// Like [`SuiteConfig::load`], with environment variables taken from
    /// `env` instead of the process when given.
    ///
    /// # Errors
    ///
    /// See [`SuiteConfig::load`].
    pub fn load_from(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => File::from(p).format(FileFormat::Toml).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE)
                .format(FileFormat::Toml)
                .required(false),
        };

        let config: Self = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reqres_defaults()?;
        self.balance_defaults()?;
        if self.http.timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "http.timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if let Some(auth) = &self.auth
            && auth.token.is_none()
            && auth.url.is_none()
        {
            return Err(ConfigError::Invalid {
                key: "auth",
                reason: "either `url` or `token` is required".to_string(),
            });
        }
        Ok(())
    }

    /// Request defaults for reqres, with the API key header when set.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn reqres_defaults(&self) -> Result<RequestDefaults, ConfigError> {
        let defaults = RequestDefaults::new(&self.reqres.base_url)
            .map_err(|e| ConfigError::invalid("reqres.base_url", &e))?;
        Ok(match &self.reqres.api_key {
            Some(key) => defaults.with_header(API_KEY_HEADER, key),
            None => defaults,
        })
    }

    /// Request defaults for the balance service, if configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn balance_defaults(&self) -> Result<Option<RequestDefaults>, ConfigError> {
        self.balance
            .as_ref()
            .map(|b| {
                RequestDefaults::new(&b.base_url)
                    .map_err(|e| ConfigError::invalid("balance.base_url", &e))
            })
            .transpose()
    }

    /// Token source described by the `auth` section.
    #[must_use]
    pub fn token_source(&self) -> Option<Arc<dyn TokenSource>> {
        let auth = self.auth.as_ref()?;
        if let Some(token) = &auth.token {
            return Some(Arc::new(StaticTokenProvider::new(token)));
        }
        let url = auth.url.as_ref()?;
        Some(Arc::new(HttpTokenProvider::new(
            url,
            auth.credentials.clone(),
            &auth.token_field,
            self.http.timeout(),
        )))
    }
}
