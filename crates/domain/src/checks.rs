//! Pure checks applied to decoded payloads.

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::payload::User;

/// Returns true if the user's avatar URL contains the user's id.
#[must_use]
pub fn avatar_contains_id(user: &User) -> bool {
    user.avatar.contains(&user.id.to_string())
}

/// Returns true if the email ends with `domain`.
#[must_use]
pub fn email_has_domain(email: &str, domain: &str) -> bool {
    email.ends_with(domain)
}

/// Returns true if `values` equals its own sorted form.
#[must_use]
pub fn is_sorted_ascending<T: Ord + Clone>(values: &[T]) -> bool {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted == values
}

/// Index of the first element smaller than its predecessor.
#[must_use]
pub fn first_descent<T: Ord>(values: &[T]) -> Option<usize> {
    values
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| i + 1)
}

/// Granularity at which two timestamps are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampPrecision {
    /// Whole minutes.
    Minute,
    /// Ten-second windows (drops the last digit of the seconds field).
    #[default]
    TenSeconds,
    /// Whole seconds.
    Second,
}

impl TimestampPrecision {
    /// Width of one comparison window.
    #[must_use]
    pub fn window(self) -> TimeDelta {
        match self {
            Self::Minute => TimeDelta::minutes(1),
            Self::TenSeconds => TimeDelta::seconds(10),
            Self::Second => TimeDelta::seconds(1),
        }
    }

    /// Floors `instant` to the start of its window.
    ///
    /// # Errors
    ///
    /// Returns an error if the instant is outside the representable range.
    pub fn truncate(self, instant: DateTime<Utc>) -> DomainResult<DateTime<Utc>> {
        instant
            .duration_trunc(self.window())
            .map_err(|e| DomainError::InvalidTimestamp {
                value: instant.to_rfc3339(),
                reason: e.to_string(),
            })
    }
}

/// Parses an RFC 3339 timestamp into UTC.
///
/// # Errors
///
/// Returns an error if the value is not valid RFC 3339.
pub fn parse_timestamp(value: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Outcome of comparing a server timestamp with the local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampComparison {
    /// Server value floored to the precision.
    pub server: DateTime<Utc>,
    /// Local value floored to the precision.
    pub local: DateTime<Utc>,
}

impl TimestampComparison {
    /// Compares `server` (RFC 3339) with `local` at `precision`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server value cannot be parsed.
    pub fn new(
        server: &str,
        local: DateTime<Utc>,
        precision: TimestampPrecision,
    ) -> DomainResult<Self> {
        Ok(Self {
            server: precision.truncate(parse_timestamp(server)?)?,
            local: precision.truncate(local)?,
        })
    }

    /// Returns true if both values fall into the same window.
    #[must_use]
    pub fn matches(&self) -> bool {
        self.server == self.local
    }
}
