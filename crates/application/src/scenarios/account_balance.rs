//! Authenticated balance query.

use async_trait::async_trait;

use reqres_domain::{AccountBalance, AssertionResult, RequestSpec};

use super::{BootstrapToken, Scenario, SuiteContext};
use crate::error::{ScenarioError, ScenarioOutcome};
use crate::expect::Expectations;
use crate::specification::{Specification, decode};

/// An authenticated balance query reports a zero balance.
#[derive(Debug, Clone)]
pub struct AccountBalanceCheck {
    path: String,
}

impl AccountBalanceCheck {
    /// Queries `path` on the balance service.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Scenario for AccountBalanceCheck {
    fn name(&self) -> &str {
        "account_balance"
    }

    async fn run(&self, ctx: &SuiteContext) -> ScenarioOutcome<Vec<AssertionResult>> {
        let Some(defaults) = ctx.balance() else {
            return Err(ScenarioError::NotConfigured(
                "balance endpoint".to_string(),
            ));
        };
        let token = match ctx.token() {
            BootstrapToken::Acquired(token) => token.clone(),
            BootstrapToken::Failed(reason) => {
                return Err(ScenarioError::MissingPrerequisite(format!(
                    "bearer token: {reason}"
                )));
            }
            BootstrapToken::NotRequested => {
                return Err(ScenarioError::MissingPrerequisite(
                    "bearer token: no authorization configured".to_string(),
                ));
            }
        };

        let spec = Specification::expecting(defaults.clone().with_bearer(token), 200);
        let response = spec.call(ctx.client(), &RequestSpec::get(&self.path)).await?;
        let body: AccountBalance = decode(&response)?;

        let mut expect = Expectations::new();
        expect.holds("balance is 0", body.is_zero(), body.balance.to_string());
        Ok(expect.into_results())
    }
}
