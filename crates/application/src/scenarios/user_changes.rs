//! Update and delete of a single user.

use async_trait::async_trait;
use tracing::debug;

use reqres_domain::{
    AssertionResult, RequestSpec, TimestampComparison, TimestampPrecision, UpdateResponse,
    UpdateUser,
};

use super::{Scenario, SuiteContext};
use crate::error::ScenarioOutcome;
use crate::expect::Expectations;
use crate::specification::{Specification, decode};

/// Deleting a user answers 204 with an empty body.
#[derive(Debug, Clone, Copy)]
pub struct DeleteUser {
    user_id: u64,
}

impl DeleteUser {
    /// Deletes `user_id`.
    #[must_use]
    pub const fn new(user_id: u64) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl Scenario for DeleteUser {
    fn name(&self) -> &str {
        "delete_user"
    }

    async fn run(&self, ctx: &SuiteContext) -> ScenarioOutcome<Vec<AssertionResult>> {
        let spec = Specification::expecting(ctx.reqres().clone(), 204);
        let request = RequestSpec::delete(format!("api/users/{}", self.user_id));
        let response = spec.call(ctx.client(), &request).await?;

        let mut expect = Expectations::new();
        expect.holds(
            "body is empty",
            response.is_body_empty(),
            response.body_preview(100),
        );
        Ok(expect.into_results())
    }
}

/// Updating a user echoes the payload and stamps the current time.
#[derive(Debug, Clone)]
pub struct UpdateTimestamp {
    user_id: u64,
    payload: UpdateUser,
    precision: TimestampPrecision,
}

impl UpdateTimestamp {
    /// Sends `payload` to `user_id`, comparing times at `precision`.
    #[must_use]
    pub const fn new(user_id: u64, payload: UpdateUser, precision: TimestampPrecision) -> Self {
        Self {
            user_id,
            payload,
            precision,
        }
    }
}

#[async_trait]
impl Scenario for UpdateTimestamp {
    fn name(&self) -> &str {
        "update_timestamp"
    }

    async fn run(&self, ctx: &SuiteContext) -> ScenarioOutcome<Vec<AssertionResult>> {
        let spec = Specification::expecting(ctx.reqres().clone(), 200);
        let request =
            RequestSpec::put(format!("api/users/{}", self.user_id)).with_json(&self.payload)?;
        let response = spec.call(ctx.client(), &request).await?;
        let body: UpdateResponse = decode(&response)?;

        let now = ctx.clock().now();
        let comparison = TimestampComparison::new(&body.updated_at, now, self.precision)?;
        debug!(
            server = %comparison.server,
            local = %comparison.local,
            precision = ?self.precision,
            "comparing update time"
        );

        let mut expect = Expectations::new();
        expect
            .equals("name echoed", self.payload.name.as_str(), body.name.as_str())
            .equals("job echoed", self.payload.job.as_str(), body.job.as_str())
            .holds(
                format!("updatedAt matches local time ({:?})", self.precision),
                comparison.matches(),
                format!(
                    "server {} vs local {}",
                    comparison.server.to_rfc3339(),
                    comparison.local.to_rfc3339()
                ),
            );
        Ok(expect.into_results())
    }
}
