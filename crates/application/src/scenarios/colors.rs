//! Resource list ordering.

use async_trait::async_trait;

use reqres_domain::checks::{first_descent, is_sorted_ascending};
use reqres_domain::{AssertionResult, ColorData, RequestSpec};

use super::{Scenario, SuiteContext};
use crate::error::ScenarioOutcome;
use crate::expect::Expectations;
use crate::specification::{Specification, decode_list};

/// `LIST <RESOURCE>` returns items ordered by year.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedYears;

#[async_trait]
impl Scenario for SortedYears {
    fn name(&self) -> &str {
        "sorted_years"
    }

    async fn run(&self, ctx: &SuiteContext) -> ScenarioOutcome<Vec<AssertionResult>> {
        let spec = Specification::expecting(ctx.reqres().clone(), 200);
        let response = spec.call(ctx.client(), &RequestSpec::get("api/unknown")).await?;
        let colors: Vec<ColorData> = decode_list(&response, "data")?;

        let years: Vec<i32> = colors.iter().map(|c| c.year).collect();
        let mut expect = Expectations::new();
        let description = first_descent(&years).map_or_else(
            || "years are in ascending order".to_string(),
            |i| format!("years are in ascending order (first descent at position {i})"),
        );
        expect.holds(description, is_sorted_ascending(&years), format!("{years:?}"));
        Ok(expect.into_results())
    }
}
