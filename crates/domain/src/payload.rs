//! Request and response payloads exchanged with the service.
//!
//! Response records reject unknown fields: an unexpected or missing field is
//! a contract break, not something to paper over.

use serde::{Deserialize, Serialize};

/// One user entry from `GET api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// User id
    pub id: u64,
    /// Email address
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Avatar image URL
    pub avatar: String,
}

/// One resource entry from `GET api/unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorData {
    /// Resource id
    pub id: u64,
    /// Color name
    pub name: String,
    /// Year the color was introduced
    pub year: i32,
    /// Hex color
    pub color: String,
    /// Pantone code
    pub pantone_value: String,
}

/// Body of `POST api/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Email address
    pub email: String,
    /// Password, empty to exercise the failure path
    pub password: String,
}

impl RegisterRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterSuccess {
    /// Assigned user id
    pub id: Option<u64>,
    /// Session token
    pub token: Option<String>,
}

/// Rejected registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterFailure {
    /// Error message
    pub error: Option<String>,
}

/// Body of `PUT api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// Display name
    pub name: String,
    /// Job title
    pub job: String,
}

impl UpdateUser {
    /// Creates an update request.
    #[must_use]
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// Response of `PUT api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateResponse {
    /// Echoed display name
    pub name: String,
    /// Echoed job title
    pub job: String,
    /// Server-side update time (RFC 3339)
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Response of the authenticated balance endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountBalance {
    /// Current balance
    pub balance: f64,
}

impl AccountBalance {
    /// Returns true if the balance is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.balance.abs() < f64::EPSILON
    }
}
