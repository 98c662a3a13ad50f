//! Notification preference domain records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::UserId;

/// How often the reader wants the suggested-readings digest.
///
/// Legacy contracts derive boolean flags from this enum by exact equality
/// against a single designated variant, so adding a variant here must be
/// reviewed against every shaper in `crate::compat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DigestFrequency {
    /// No digest at all.
    #[default]
    None,
    /// One digest per day.
    Daily,
    /// One digest per week.
    Weekly,
    /// One digest per month.
    Monthly,
}

impl DigestFrequency {
    /// Returns the wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for DigestFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown digest frequency string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown digest frequency: {input:?}")]
pub struct ParseDigestFrequencyError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::str::FromStr for DigestFrequency {
    type Err = ParseDigestFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(ParseDigestFrequencyError {
                input: s.to_owned(),
            }),
        }
    }
}

/// A reader's notification preference record.
///
/// The record is optional everywhere it is consumed: accounts created
/// before the preferences feature shipped simply have none, and legacy
/// contracts substitute fixed defaults for every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct NotificationPreference {
    /// The account these preferences belong to.
    pub user_account_id: UserId,
    /// Receive reply notifications by email.
    pub reply_via_email: bool,
    /// Receive reply notifications through the browser extension.
    pub reply_via_extension: bool,
    /// Receive company update announcements by email.
    pub company_update_via_email: bool,
    /// Suggested-readings digest cadence.
    pub digest_frequency: DigestFrequency,
    /// Instant the reader last saw a new-reply notification.
    pub last_reply_seen: Option<DateTime<Utc>>,
    /// Instant the reader last acknowledged a new-reply notification.
    pub last_reply_acknowledged: Option<DateTime<Utc>>,
}
