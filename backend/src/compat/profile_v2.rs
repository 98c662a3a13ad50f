//! The 1.5.0-era user profile contract, frozen.
//!
//! This band moved notification settings into a nested object and dropped
//! the derived reply/digest booleans of the earlier flat shape. It shares
//! no code with `profile_v1`: each frozen contract defaults its own
//! fields, so editing one cannot disturb the other.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{NotificationPreference, UserAccount, UserAccountRole, UserId, UserTimeZone};

/// Nested notification settings as published in the 1.5.0-era contract.
///
/// Always present on the wire; a missing preference record serialises as
/// the all-off defaults below rather than null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferenceV2 {
    /// Reply notifications by email.
    pub reply_via_email: bool,
    /// Reply notifications through the browser extension.
    pub reply_via_extension: bool,
    /// Company update announcements by email.
    pub company_update_via_email: bool,
    /// Digest cadence token: `none`, `daily`, `weekly`, or `monthly`.
    pub digest_frequency: String,
}

/// Nested timezone selection as published in the 1.5.0-era contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeZoneV2 {
    /// IANA timezone name.
    pub name: String,
    /// Human-readable label.
    pub display_name: String,
}

/// The nested user profile served to the 1.5.0-to-current band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileV2 {
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
    /// Notification settings; defaulted, never null.
    pub notification_preference: NotificationPreferenceV2,
    /// Timezone selection; null when the account never chose one.
    pub time_zone: Option<TimeZoneV2>,
}

impl UserProfileV2 {
    /// Derive the frozen 1.5.0-era profile from current-version records.
    ///
    /// A missing preference record becomes the all-off nested object with
    /// `digestFrequency: "none"`; a missing timezone record becomes null.
    ///
    /// Pure: borrows its inputs, mutates nothing, and is deterministic.
    #[must_use]
    pub fn shape(
        account: &UserAccount,
        preference: Option<&NotificationPreference>,
        time_zone: Option<&UserTimeZone>,
    ) -> Self {
        let notification_preference = preference.map_or_else(
            || NotificationPreferenceV2 {
                reply_via_email: false,
                reply_via_extension: false,
                company_update_via_email: false,
                digest_frequency: "none".to_owned(),
            },
            |p| NotificationPreferenceV2 {
                reply_via_email: p.reply_via_email,
                reply_via_extension: p.reply_via_extension,
                company_update_via_email: p.company_update_via_email,
                digest_frequency: p.digest_frequency.as_str().to_owned(),
            },
        );

        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            date_created: account.date_created,
            role: account.role,
            is_email_confirmed: account.is_email_confirmed,
            notification_preference,
            time_zone: time_zone.map(|tz| TimeZoneV2 {
                name: tz.name.clone(),
                display_name: tz.display_name.clone(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "profile_v2_tests.rs"]
mod tests;
