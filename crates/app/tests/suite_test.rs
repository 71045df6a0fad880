//! End-to-end runs of the scenario catalogue against mock services.
//!
//! A wiremock server stands in for reqres.in, a second one for the
//! authorization and balance endpoints.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{SecondsFormat, Utc};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use reqres_application::{SuiteRunner, catalog};
use reqres_domain::{Outcome, SuiteReport, TimestampPrecision};
use reqres_infrastructure::{
    AuthConfig, BalanceConfig, ReqresConfig, SuiteConfig, build_context,
};

const API_KEY: &str = "reqres-free-v1";

fn users_page() -> Value {
    let users: Vec<Value> = (7..=12)
        .map(|id| {
            json!({
                "id": id,
                "email": format!("user{id}@reqres.in"),
                "first_name": "First",
                "last_name": "Last",
                "avatar": format!("https://reqres.in/img/faces/{id}-image.jpg"),
            })
        })
        .collect();
    json!({"page": 2, "per_page": 6, "total": 12, "total_pages": 2, "data": users})
}

fn colors(years: &[i32]) -> Value {
    let data: Vec<Value> = years
        .iter()
        .enumerate()
        .map(|(i, year)| {
            json!({
                "id": i + 1,
                "name": "cerulean",
                "year": year,
                "color": "#98B2D1",
                "pantone_value": "15-4020",
            })
        })
        .collect();
    json!({"page": 1, "data": data})
}

fn echo_update(request: &Request) -> ResponseTemplate {
    let mut body: Value = serde_json::from_slice(&request.body).unwrap();
    body["updatedAt"] = json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
    ResponseTemplate::new(200).set_body_json(body)
}

async fn mount_reqres(server: &MockServer, years: &[i32]) {
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "2"))
        .and(header("x-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page()))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .and(body_json(json!({"email": "eve.holt@reqres.in", "password": "pistol"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 4, "token": "QpwL5tke4Pnpja7X4"})),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Missing password"})))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/unknown"))
        .respond_with(ResponseTemplate::new(200).set_body_json(colors(years)))
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/users/2"))
        .and(body_json(json!({"name": "morpheus", "job": "zion resident"})))
        .respond_with(echo_update)
        .mount(server)
        .await;
}

async fn mount_bank(server: &MockServer, balance: f64) {
    Mock::given(method("POST"))
        .and(path("/v1/authorizations"))
        .and(body_json(json!({"login": "qa", "password": "secret"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "abc123"})))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/account/balance"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"balance": balance})))
        .mount(server)
        .await;
}

fn config(reqres: &MockServer, bank: Option<&MockServer>) -> SuiteConfig {
    let mut config = SuiteConfig {
        reqres: ReqresConfig {
            base_url: reqres.uri(),
            api_key: Some(API_KEY.to_string()),
        },
        ..SuiteConfig::default()
    };
    config.http.timeout_ms = 5_000;
    config.scenarios.timestamp_precision = TimestampPrecision::Minute;
    if let Some(bank) = bank {
        config.balance = Some(BalanceConfig {
            base_url: format!("{}/v1", bank.uri()),
        });
        config.auth = Some(AuthConfig {
            url: Some(format!("{}/v1/authorizations", bank.uri())),
            credentials: [("login", "qa"), ("password", "secret")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..AuthConfig::default()
        });
    }
    config
}

async fn run(config: &SuiteConfig, filters: Vec<String>) -> SuiteReport {
    let ctx = build_context(config).await.unwrap();
    SuiteRunner::new(catalog(&config.scenarios))
        .with_filters(filters)
        .unwrap()
        .run(&ctx)
        .await
}

fn outcomes(report: &SuiteReport) -> Vec<(&str, Outcome)> {
    report
        .scenarios
        .iter()
        .map(|s| (s.name.as_str(), s.outcome))
        .collect()
}

#[tokio::test]
async fn test_full_suite_passes() {
    let reqres = MockServer::start().await;
    let bank = MockServer::start().await;
    mount_reqres(&reqres, &[2000, 2001, 2002, 2003, 2004, 2005]).await;
    mount_bank(&bank, 0.0).await;

    let report = run(&config(&reqres, Some(&bank)), Vec::new()).await;

    assert_eq!(
        outcomes(&report),
        vec![
            ("account_balance", Outcome::Passed),
            ("avatar_contains_id", Outcome::Passed),
            ("user_email_domain", Outcome::Passed),
            ("register[1:eve.holt@reqres.in]", Outcome::Passed),
            ("register[2:eve.holt@reqre1.in]", Outcome::Passed),
            ("register_missing_password", Outcome::Passed),
            ("sorted_years", Outcome::Passed),
            ("delete_user", Outcome::Passed),
            ("update_timestamp", Outcome::Passed),
        ]
    );
    assert!(report.all_passed());
    assert_eq!(report.total, 9);
    assert_eq!(report.passed, 9);
    assert_eq!(
        report.scenario("avatar_contains_id").unwrap().assertions.len(),
        6
    );
}

#[tokio::test]
async fn test_failures_do_not_stop_the_suite() {
    let reqres = MockServer::start().await;
    let bank = MockServer::start().await;
    mount_reqres(&reqres, &[2000, 2002, 2001]).await;
    mount_bank(&bank, 12.5).await;

    let report = run(&config(&reqres, Some(&bank)), Vec::new()).await;

    assert_eq!(
        report.scenario("sorted_years").unwrap().outcome,
        Outcome::Failed
    );
    assert_eq!(
        report.scenario("account_balance").unwrap().outcome,
        Outcome::Failed
    );
    assert_eq!(report.scenario("delete_user").unwrap().outcome, Outcome::Passed);
    assert_eq!(
        report.scenario("update_timestamp").unwrap().outcome,
        Outcome::Passed
    );
    assert_eq!(report.failed, 2);
    assert_eq!(report.passed, 7);
    assert!(!report.all_passed());
}

#[tokio::test]
async fn test_unexpected_status_fails_scenario() {
    let reqres = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&reqres)
        .await;

    let report = run(&config(&reqres, None), vec!["delete_user".to_string()]).await;

    let delete = report.scenario("delete_user").unwrap();
    assert_eq!(delete.outcome, Outcome::Failed);
    assert!(delete.message.as_deref().unwrap().contains("404"));
    assert_eq!(report.skipped, report.total - 1);
}

#[tokio::test]
async fn test_balance_skipped_without_configuration() {
    let reqres = MockServer::start().await;
    mount_reqres(&reqres, &[2000, 2001]).await;

    let report = run(&config(&reqres, None), Vec::new()).await;

    assert_eq!(
        report.scenario("account_balance").unwrap().outcome,
        Outcome::Skipped
    );
    assert!(report.all_passed());
}

#[tokio::test]
async fn test_rejected_authorization_errors_balance_only() {
    let reqres = MockServer::start().await;
    let bank = MockServer::start().await;
    mount_reqres(&reqres, &[2000, 2001]).await;
    Mock::given(method("POST"))
        .and(path("/v1/authorizations"))
        .respond_with(ResponseTemplate::new(401).set_body_string("denied"))
        .mount(&bank)
        .await;

    let report = run(&config(&reqres, Some(&bank)), Vec::new()).await;

    let balance = report.scenario("account_balance").unwrap();
    assert_eq!(balance.outcome, Outcome::Errored);
    assert!(balance.message.as_deref().unwrap().contains("bearer token"));
    assert_eq!(report.errored, 1);
    assert_eq!(report.passed, report.total - 1);
}

#[tokio::test]
async fn test_transport_failure_errors_scenario() {
    let mut config = SuiteConfig::default();
    config.reqres.base_url = "http://127.0.0.1:1".to_string();
    config.http.timeout_ms = 2_000;

    let report = run(&config, vec!["sorted_years".to_string()]).await;

    assert_eq!(
        report.scenario("sorted_years").unwrap().outcome,
        Outcome::Errored
    );
}

/// Runs against the public service; needs network access.
#[tokio::test]
#[ignore = "requires network access to reqres.in"]
async fn test_live_reqres() {
    let mut config = SuiteConfig::default();
    config.reqres.api_key = Some(API_KEY.to_string());

    let report = run(&config, Vec::new()).await;

    assert_eq!(
        report.scenario("account_balance").unwrap().outcome,
        Outcome::Skipped
    );
    assert_eq!(
        report.scenario("avatar_contains_id").unwrap().outcome,
        Outcome::Passed
    );
}
