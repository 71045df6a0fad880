//! Registration scenarios.

use async_trait::async_trait;

use reqres_domain::{
    AssertionResult, RegisterFailure, RegisterRequest, RegisterSuccess, RequestSpec,
};

use super::settings::{MISSING_PASSWORD, RegistrationCase, RegistrationExpectation};
use super::{Scenario, SuiteContext};
use crate::error::ScenarioOutcome;
use crate::expect::Expectations;
use crate::specification::{Specification, decode};

const REGISTER_PATH: &str = "api/register";

/// Registers one email/password pair and checks the documented outcome.
#[derive(Debug, Clone)]
pub struct Register {
    name: String,
    request: RegisterRequest,
    expect: RegistrationExpectation,
}

impl Register {
    /// One parameterized row; `row` is its 1-based position in the case
    /// list and keeps names unique when emails repeat.
    #[must_use]
    pub fn case(row: usize, case: &RegistrationCase) -> Self {
        Self {
            name: format!("register[{row}:{}]", case.email),
            request: RegisterRequest::new(&case.email, &case.password),
            expect: case.expect.clone(),
        }
    }

    /// Registration with an empty password must be rejected.
    #[must_use]
    pub fn missing_password(email: impl Into<String>) -> Self {
        Self {
            name: "register_missing_password".to_string(),
            request: RegisterRequest::new(email, ""),
            expect: RegistrationExpectation::Failure {
                status: 400,
                error: MISSING_PASSWORD.to_string(),
            },
        }
    }

    const fn expected_status(&self) -> u16 {
        match &self.expect {
            RegistrationExpectation::Success { .. } => 200,
            RegistrationExpectation::Failure { status, .. } => *status,
        }
    }
}

#[async_trait]
impl Scenario for Register {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, ctx: &SuiteContext) -> ScenarioOutcome<Vec<AssertionResult>> {
        let spec = Specification::expecting(ctx.reqres().clone(), self.expected_status());
        let request = RequestSpec::post(REGISTER_PATH).with_json(&self.request)?;
        let response = spec.call(ctx.client(), &request).await?;

        let mut expect = Expectations::new();
        match &self.expect {
            RegistrationExpectation::Success { id, token } => {
                let body: RegisterSuccess = decode(&response)?;
                expect
                    .present("id is present", body.id.as_ref())
                    .present("token is present", body.token.as_ref())
                    .equals("id", &Some(*id), &body.id)
                    .equals("token", &Some(token.as_str()), &body.token.as_deref());
            }
            RegistrationExpectation::Failure { error, .. } => {
                let body: RegisterFailure = decode(&response)?;
                expect
                    .present("error is present", body.error.as_ref())
                    .equals("error message", &Some(error.as_str()), &body.error.as_deref());
            }
        }
        Ok(expect.into_results())
    }
}
