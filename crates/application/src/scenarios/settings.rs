//! Tunable inputs of the scenario catalogue.

use reqres_domain::TimestampPrecision;
use serde::{Deserialize, Serialize};

/// Token the service issues for the documented registration fixture.
pub const FIXTURE_TOKEN: &str = "QpwL5tke4Pnpja7X4";

/// Id the service issues for the documented registration fixture.
pub const FIXTURE_USER_ID: u64 = 4;

/// Error message for a registration without password.
pub const MISSING_PASSWORD: &str = "Missing password";

/// What a registration attempt must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegistrationExpectation {
    /// 200 with fixed id and token.
    Success {
        /// Expected user id.
        id: u64,
        /// Expected token.
        token: String,
    },
    /// Rejection with the given status and message.
    Failure {
        /// Expected status.
        status: u16,
        /// Expected error message.
        error: String,
    },
}

/// One row of the parameterized registration scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationCase {
    /// Email to register.
    pub email: String,
    /// Password to register.
    pub password: String,
    /// Required outcome.
    pub expect: RegistrationExpectation,
}

impl RegistrationCase {
    /// A case that must succeed with the fixture id and token.
    #[must_use]
    pub fn fixture_success(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            expect: RegistrationExpectation::Success {
                id: FIXTURE_USER_ID,
                token: FIXTURE_TOKEN.to_string(),
            },
        }
    }

    /// A case that must be rejected with 400 and `error`.
    #[must_use]
    pub fn rejected(
        email: impl Into<String>,
        password: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            expect: RegistrationExpectation::Failure {
                status: 400,
                error: error.into(),
            },
        }
    }
}

/// Inputs of every scenario in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioSettings {
    /// Page requested from the user list.
    pub users_page: u32,
    /// User updated and deleted.
    pub user_id: u64,
    /// Domain every listed email must end with.
    pub email_domain: String,
    /// Name sent in the update.
    pub update_name: String,
    /// Job sent in the update.
    pub update_job: String,
    /// Email used for the missing-password registration.
    pub register_failure_email: String,
    /// Parameterized registration rows.
    pub registration: Vec<RegistrationCase>,
    /// Granularity of the update timestamp comparison.
    pub timestamp_precision: TimestampPrecision,
    /// Path of the balance endpoint, relative to its base URL.
    pub balance_path: String,
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self {
            users_page: 2,
            user_id: 2,
            email_domain: "reqres.in".to_string(),
            update_name: "morpheus".to_string(),
            update_job: "zion resident".to_string(),
            register_failure_email: "eve.holt@reqres.in".to_string(),
            registration: vec![
                RegistrationCase::fixture_success("eve.holt@reqres.in", "pistol"),
                RegistrationCase::rejected("eve.holt@reqre1.in", "pisto3", MISSING_PASSWORD),
            ],
            timestamp_precision: TimestampPrecision::TenSeconds,
            balance_path: "account/balance".to_string(),
        }
    }
}
