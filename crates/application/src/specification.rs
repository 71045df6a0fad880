//! Request and response specifications applied to one call.
//!
//! A [`Specification`] pairs the request defaults for a service with the
//! status every response must carry. Calling through it logs the full
//! exchange at debug level and turns a status mismatch into an error before
//! any payload is decoded.

use serde::de::DeserializeOwned;
use tracing::debug;

use reqres_domain::{
    DomainError, RequestDefaults, RequestSpec, ResponseSpec, StatusExpectation,
};

use crate::error::{ScenarioError, ScenarioOutcome};
use crate::ports::HttpClient;

/// Characters of body kept in status mismatch errors.
const BODY_PREVIEW_CHARS: usize = 200;

/// Request defaults plus the expected response status.
#[derive(Debug, Clone)]
pub struct Specification {
    request: RequestDefaults,
    expected: StatusExpectation,
}

impl Specification {
    /// Creates a specification expecting exactly `status`.
    #[must_use]
    pub const fn expecting(request: RequestDefaults, status: u16) -> Self {
        Self {
            request,
            expected: StatusExpectation::exact(status),
        }
    }

    /// Sends `spec` and validates the response status.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::UnexpectedStatus`] on a status mismatch,
    /// or the transport/request error that prevented the call.
    pub async fn call(
        &self,
        client: &dyn HttpClient,
        spec: &RequestSpec,
    ) -> ScenarioOutcome<ResponseSpec> {
        let prepared = self.request.prepare(spec)?;
        debug!(
            method = %prepared.method,
            url = %prepared.url,
            body = prepared.body.as_deref().unwrap_or(""),
            "sending request"
        );

        let response = client.execute(&prepared).await?;
        debug!(
            status = response.status,
            duration_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
            headers = ?response.headers,
            body = %response.body,
            "received response"
        );

        if !self.expected.matches(response.status) {
            return Err(ScenarioError::UnexpectedStatus {
                expected: self.expected.description(),
                actual: response.status,
                body: response.body_preview(BODY_PREVIEW_CHARS),
            });
        }
        Ok(response)
    }
}

/// Decodes the whole response body into `T`.
///
/// # Errors
///
/// Returns [`ScenarioError::Deserialization`] if the body does not match `T`.
pub fn decode<T: DeserializeOwned>(response: &ResponseSpec) -> ScenarioOutcome<T> {
    response.json().map_err(deserialization::<T>)
}

/// Decodes the array under `field` into `Vec<T>`.
///
/// # Errors
///
/// Returns [`ScenarioError::Deserialization`] if the field is missing or an
/// element does not match `T`.
pub fn decode_list<T: DeserializeOwned>(
    response: &ResponseSpec,
    field: &str,
) -> ScenarioOutcome<Vec<T>> {
    response.json_list(field).map_err(deserialization::<T>)
}

fn deserialization<T>(error: DomainError) -> ScenarioError {
    let target = std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("payload")
        .to_string();
    let reason = match error {
        DomainError::UnexpectedPayload(reason) => reason,
        other => other.to_string(),
    };
    ScenarioError::Deserialization { target, reason }
}
