//! Scenario catalogue
//!
//! Each scenario configures a specification, issues one call, decodes the
//! body and asserts on it. Scenarios are independent of each other; the only
//! shared input is the read-only [`SuiteContext`].

mod account_balance;
mod colors;
mod context;
mod register;
mod settings;
mod user_changes;
mod users;

use async_trait::async_trait;
use reqres_domain::{AssertionResult, UpdateUser};

pub use account_balance::AccountBalanceCheck;
pub use colors::SortedYears;
pub use context::{BootstrapToken, SuiteContext};
pub use register::Register;
pub use settings::{
    FIXTURE_TOKEN, FIXTURE_USER_ID, MISSING_PASSWORD, RegistrationCase, RegistrationExpectation,
    ScenarioSettings,
};
pub use user_changes::{DeleteUser, UpdateTimestamp};
pub use users::{AvatarContainsId, UserEmailDomain};

use crate::error::ScenarioOutcome;

/// One independent check against the service.
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Stable identifier used in reports and filters.
    fn name(&self) -> &str;

    /// Runs the scenario.
    ///
    /// Returns the assertion results when the call completed with the
    /// expected status and the body decoded; failed assertions are part of
    /// the returned list, not an error.
    async fn run(&self, ctx: &SuiteContext) -> ScenarioOutcome<Vec<AssertionResult>>;
}

/// Builds the full scenario list in execution order.
#[must_use]
pub fn catalog(settings: &ScenarioSettings) -> Vec<Box<dyn Scenario>> {
    let mut scenarios: Vec<Box<dyn Scenario>> = vec![
        Box::new(AccountBalanceCheck::new(&settings.balance_path)),
        Box::new(AvatarContainsId::new(settings.users_page)),
        Box::new(UserEmailDomain::new(
            settings.users_page,
            &settings.email_domain,
        )),
    ];
    scenarios.extend(
        settings
            .registration
            .iter()
            .enumerate()
            .map(|(i, case)| Box::new(Register::case(i + 1, case)) as Box<dyn Scenario>),
    );
    scenarios.push(Box::new(Register::missing_password(
        &settings.register_failure_email,
    )));
    scenarios.push(Box::new(SortedYears));
    scenarios.push(Box::new(DeleteUser::new(settings.user_id)));
    scenarios.push(Box::new(UpdateTimestamp::new(
        settings.user_id,
        UpdateUser::new(&settings.update_name, &settings.update_job),
        settings.timestamp_precision,
    )));
    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_catalog_order() {
        let names: Vec<String> = catalog(&ScenarioSettings::default())
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "account_balance",
                "avatar_contains_id",
                "user_email_domain",
                "register[1:eve.holt@reqres.in]",
                "register[2:eve.holt@reqre1.in]",
                "register_missing_password",
                "sorted_years",
                "delete_user",
                "update_timestamp",
            ]
        );
    }

    #[test]
    fn test_catalog_without_registration_rows() {
        let settings = ScenarioSettings {
            registration: Vec::new(),
            ..ScenarioSettings::default()
        };
        assert_eq!(catalog(&settings).len(), 7);
    }

    #[test]
    fn test_repeated_registration_emails_get_distinct_names() {
        let settings = ScenarioSettings {
            registration: vec![
                RegistrationCase::fixture_success("eve.holt@reqres.in", "pistol"),
                RegistrationCase::rejected("eve.holt@reqres.in", "", MISSING_PASSWORD),
            ],
            ..ScenarioSettings::default()
        };
        let names: Vec<String> = catalog(&settings)
            .iter()
            .map(|s| s.name().to_string())
            .filter(|n| n.starts_with("register["))
            .collect();
        assert_eq!(
            names,
            vec!["register[1:eve.holt@reqres.in]", "register[2:eve.holt@reqres.in]"]
        );
    }
}
