//! User account domain records.
//!
//! Accounts arrive pre-fetched from data-access collaborators; this core
//! only reads them. Serde casing follows the platform-wide camelCase wire
//! convention.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Stable user identifier stored as a UUID.
///
/// # Examples
/// ```
/// use backend::domain::UserId;
///
/// let id = UserId::random();
/// assert_eq!(id, UserId::from_uuid(id.as_uuid()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Access role attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserAccountRole {
    /// Ordinary reader account.
    #[default]
    Regular,
    /// Staff account with moderation powers.
    Admin,
}

impl UserAccountRole {
    /// Returns the wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserAccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown user account role: {input:?}")]
pub struct ParseUserAccountRoleError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::str::FromStr for UserAccountRole {
    type Err = ParseUserAccountRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseUserAccountRoleError {
                input: s.to_owned(),
            }),
        }
    }
}

/// A reader's account record.
///
/// ## Invariants
/// - Immutable from this core's point of view; shapers only borrow it.
/// - `time_zone_id` references a [`super::UserTimeZone`] that collaborators
///   resolve before invoking the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserAccount {
    /// Stable account identifier.
    pub id: UserId,
    /// Unique reader name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Instant the account was created.
    pub date_created: DateTime<Utc>,
    /// Access role.
    pub role: UserAccountRole,
    /// Whether the email address has been confirmed.
    pub is_email_confirmed: bool,
    /// Reference to the account's selected timezone record.
    pub time_zone_id: Option<Uuid>,
}
