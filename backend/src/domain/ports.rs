//! Domain ports defining the edges of the hexagon.
//!
//! The compatibility core performs no I/O of its own: data-access
//! collaborators fetch the domain records up front and hand them over as a
//! [`UserProfileRecords`] bundle. Each port exposes strongly typed errors
//! so adapters map their failures into predictable variants.

use async_trait::async_trait;
use chrono::DateTime;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use uuid::Uuid;

use super::{
    DigestFrequency, NotificationPreference, UserAccount, UserAccountRole, UserId, UserTimeZone,
};

/// The pre-fetched record bundle a profile response is shaped from.
///
/// `preference` and `time_zone` are genuinely optional: accounts predating
/// the preferences feature have no record, and not every account selects a
/// timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfileRecords {
    /// The account itself.
    pub account: UserAccount,
    /// The account's notification preferences, when any were saved.
    pub preference: Option<NotificationPreference>,
    /// The resolved timezone record, when the account selected one.
    pub time_zone: Option<UserTimeZone>,
}

/// Errors surfaced by profile storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileStoreError {
    /// The backing store could not be reached.
    #[error("profile store unavailable: {message}")]
    Unavailable {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl ProfileStoreError {
    /// Helper for connectivity-related adapter errors.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Driven port supplying profile records to the HTTP adapter.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Load the record bundle for one account.
    ///
    /// Returns `Ok(None)` when the account does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileStoreError`] when the backing store fails.
    async fn load_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserProfileRecords>, ProfileStoreError>;
}

/// In-memory implementation serving one canned profile.
///
/// Keeps the binary runnable without a database and gives integration
/// tests a deterministic record set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserProfileQuery;

impl FixtureUserProfileQuery {
    /// The record bundle the fixture serves for every account id.
    #[must_use]
    pub fn records(user_id: UserId) -> UserProfileRecords {
        let time_zone_id = Uuid::from_u128(0x6f0a_1d8e_0000_0000_0000_0000_0000_0001);
        let date_created =
            DateTime::from_timestamp(1_554_349_200, 0).unwrap_or(DateTime::UNIX_EPOCH);
        UserProfileRecords {
            account: UserAccount {
                id: user_id,
                name: "quietReader".to_owned(),
                email: "quiet.reader@example.com".to_owned(),
                date_created,
                role: UserAccountRole::Regular,
                is_email_confirmed: true,
                time_zone_id: Some(time_zone_id),
            },
            preference: Some(NotificationPreference {
                user_account_id: user_id,
                reply_via_email: true,
                reply_via_extension: false,
                company_update_via_email: true,
                digest_frequency: DigestFrequency::Weekly,
                last_reply_seen: DateTime::from_timestamp(1_556_200_000, 0),
                last_reply_acknowledged: DateTime::from_timestamp(1_556_100_000, 0),
            }),
            time_zone: Some(UserTimeZone {
                id: time_zone_id,
                name: "America/New_York".to_owned(),
                display_name: "Eastern Time".to_owned(),
            }),
        }
    }
}

#[async_trait]
impl UserProfileQuery for FixtureUserProfileQuery {
    async fn load_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserProfileRecords>, ProfileStoreError> {
        Ok(Some(Self::records(user_id)))
    }
}
