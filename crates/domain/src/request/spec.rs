//! Request specification types
//!
//! A [`RequestSpec`] describes a single call relative to a base URL.
//! [`RequestDefaults`] carries what every call against one service shares
//! (base URL, bearer token, extra headers) and turns a spec into a
//! [`PreparedRequest`] that an HTTP adapter can send as-is.

use serde::Serialize;
use url::Url;

use super::HttpMethod;
use crate::auth::BearerToken;
use crate::error::{DomainError, DomainResult};

/// Content type used for every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single HTTP header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name
    pub name: String,
    /// Header value
    pub value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Specification for one HTTP call, relative to a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base URL, may carry a query string
    pub path: String,
    /// Headers specific to this call
    pub headers: Vec<Header>,
    /// Serialized JSON body
    pub body: Option<String>,
}

impl RequestSpec {
    /// Creates a request with the given method and path.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Serializes `payload` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn with_json<T: Serialize>(mut self, payload: &T) -> DomainResult<Self> {
        let body =
            serde_json::to_string(payload).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }
}

/// Settings shared by every request sent to one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    base_url: Url,
    bearer: Option<BearerToken>,
    headers: Vec<Header>,
}

impl RequestDefaults {
    /// Creates defaults for the given base URL.
    ///
    /// A trailing slash is added to the base path so relative paths are
    /// appended rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or is not http(s).
    pub fn new(base_url: &str) -> DomainResult<Self> {
        let mut url =
            Url::parse(base_url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "URL must start with http:// or https://: {base_url}"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            bearer: None,
            headers: Vec::new(),
        })
    }

    /// Attaches a bearer token to every request.
    #[must_use]
    pub fn with_bearer(mut self, token: BearerToken) -> Self {
        self.bearer = Some(token);
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn resolve(&self, path: &str) -> DomainResult<Url> {
        let relative = path.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {path}")))
    }

    /// Builds the concrete request for `spec`.
    ///
    /// Header order: defaults, then `Authorization`, then the spec's own
    /// headers, then `Content-Type` when a body is present and no header
    /// already sets it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be resolved.
    pub fn prepare(&self, spec: &RequestSpec) -> DomainResult<PreparedRequest> {
        let url = self.resolve(&spec.path)?;

        let mut headers = self.headers.clone();
        if let Some(token) = &self.bearer {
            headers.push(Header::new("Authorization", token.header_value()));
        }
        headers.extend(spec.headers.iter().cloned());

        if spec.body.is_some()
            && !headers
                .iter()
                .any(|h| h.name.eq_ignore_ascii_case("content-type"))
        {
            headers.push(Header::new("Content-Type", JSON_CONTENT_TYPE));
        }

        Ok(PreparedRequest {
            method: spec.method,
            url,
            headers,
            body: spec.body.clone(),
        })
    }
}

/// A fully resolved request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute URL
    pub url: Url,
    /// All headers to send
    pub headers: Vec<Header>,
    /// Body to send
    pub body: Option<String>,
}
