//! Test doubles for the ports.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqres_domain::{PreparedRequest, RequestDefaults, ResponseSpec};

use crate::ports::{Clock, HttpClient, HttpClientError, HttpFuture};
use crate::scenarios::SuiteContext;

/// Canned responses keyed by method and URL path; records every request.
#[derive(Clone, Default)]
pub struct StubHttpClient {
    routes: Arc<HashMap<(String, String), (u16, String)>>,
    requests: Arc<Mutex<Vec<PreparedRequest>>>,
}

impl StubHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: &str, path: &str, status: u16, body: &str) -> Self {
        let mut routes = (*self.routes).clone();
        routes.insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self.routes = Arc::new(routes);
        self
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for StubHttpClient {
    fn execute<'a>(&'a self, request: &'a PreparedRequest) -> HttpFuture<'a> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request.clone());
            let key = (request.method.to_string(), request.url.path().to_string());
            let (status, body) = self.routes.get(&key).cloned().ok_or_else(|| {
                HttpClientError::ConnectionRefused {
                    host: request.url.host_str().unwrap_or("unknown").to_string(),
                    port: request.url.port_or_known_default().unwrap_or(80),
                }
            })?;
            Ok(ResponseSpec::new(
                status,
                HashMap::new(),
                body.into_bytes(),
                Duration::from_millis(1),
            ))
        })
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(rfc3339: &str) -> Self {
        Self(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn context(client: StubHttpClient) -> SuiteContext {
    context_at(client, FixedClock::at("2024-05-01T10:20:35Z"))
}

pub fn context_at(client: StubHttpClient, clock: FixedClock) -> SuiteContext {
    SuiteContext::new(
        Arc::new(client),
        Arc::new(clock),
        RequestDefaults::new("https://reqres.in").unwrap(),
    )
}
