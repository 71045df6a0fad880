//! Scenarios over the paged user list.

use async_trait::async_trait;
use tracing::warn;

use reqres_domain::checks::{avatar_contains_id, email_has_domain};
use reqres_domain::{AssertionResult, RequestSpec, User};

use super::{Scenario, SuiteContext};
use crate::error::ScenarioOutcome;
use crate::expect::Expectations;
use crate::specification::{Specification, decode_list};

async fn fetch_users(ctx: &SuiteContext, page: u32) -> ScenarioOutcome<Vec<User>> {
    let spec = Specification::expecting(ctx.reqres().clone(), 200);
    let response = spec
        .call(ctx.client(), &RequestSpec::get(format!("api/users?page={page}")))
        .await?;
    let users: Vec<User> = decode_list(&response, "data")?;
    if users.is_empty() {
        warn!(page, "user list is empty");
    }
    Ok(users)
}

/// Every user's avatar URL embeds the user's id.
#[derive(Debug, Clone)]
pub struct AvatarContainsId {
    page: u32,
}

impl AvatarContainsId {
    /// Checks the given page.
    #[must_use]
    pub const fn new(page: u32) -> Self {
        Self { page }
    }
}

#[async_trait]
impl Scenario for AvatarContainsId {
    fn name(&self) -> &str {
        "avatar_contains_id"
    }

    async fn run(&self, ctx: &SuiteContext) -> ScenarioOutcome<Vec<AssertionResult>> {
        let users = fetch_users(ctx, self.page).await?;
        let mut expect = Expectations::new();
        for user in &users {
            expect.holds(
                format!("avatar of user {} contains its id", user.id),
                avatar_contains_id(user),
                user.avatar.clone(),
            );
        }
        Ok(expect.into_results())
    }
}

/// Every user's email belongs to the service's domain.
#[derive(Debug, Clone)]
pub struct UserEmailDomain {
    page: u32,
    domain: String,
}

impl UserEmailDomain {
    /// Checks the given page against `domain`.
    #[must_use]
    pub fn new(page: u32, domain: impl Into<String>) -> Self {
        Self {
            page,
            domain: domain.into(),
        }
    }
}

#[async_trait]
impl Scenario for UserEmailDomain {
    fn name(&self) -> &str {
        "user_email_domain"
    }

    async fn run(&self, ctx: &SuiteContext) -> ScenarioOutcome<Vec<AssertionResult>> {
        let users = fetch_users(ctx, self.page).await?;
        let mut expect = Expectations::new();
        for user in &users {
            expect.holds(
                format!("email of user {} ends with {}", user.id, self.domain),
                email_has_domain(&user.email, &self.domain),
                user.email.clone(),
            );
        }
        Ok(expect.into_results())
    }
}
