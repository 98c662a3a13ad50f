//! The 1.2.0-era user profile contract, frozen.
//!
//! Clients from this band hard-code assumptions about every field below:
//! names, casing, nullability, and the exact defaults substituted when a
//! source record is missing. The field set must never change.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    DigestFrequency, NotificationPreference, UserAccount, UserAccountRole, UserId, UserTimeZone,
};

/// The flat user profile served to pre-1.5.0 builds.
///
/// Constructed fresh per response by [`UserProfileV1::shape`]; never
/// persisted, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileV1 {
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
    /// Reply notifications by email.
    pub receive_reply_email_notifications: bool,
    /// Reply notifications through the browser extension.
    pub receive_reply_desktop_notifications: bool,
    /// Instant the reader last saw a new reply. Never null; the Unix epoch
    /// stands in for "never".
    pub last_new_reply_seen: DateTime<Utc>,
    /// Instant the reader last acknowledged a new reply. Never null; the
    /// Unix epoch stands in for "never".
    pub last_new_reply_acknowledged: DateTime<Utc>,
    /// Company update announcements by email.
    pub receive_website_updates: bool,
    /// Whether the reader receives the suggested-readings digest.
    pub receive_suggested_readings: bool,
    /// IANA timezone name, when the account selected one.
    pub time_zone_name: Option<String>,
    /// Human-readable timezone label, when the account selected one.
    pub time_zone_display_name: Option<String>,
}

impl UserProfileV1 {
    /// Derive the frozen 1.2.0-era profile from current-version records.
    ///
    /// Missing records take the contract's fixed defaults: booleans are
    /// `false`, both "last new reply" instants are the Unix epoch (never
    /// "now", never null), and the timezone fields are null.
    ///
    /// `receiveSuggestedReadings` is `true` only when the digest frequency
    /// equals [`DigestFrequency::Weekly`] exactly. Every other value,
    /// including any frequency added after this contract froze, yields
    /// `false`. That strictness is the published behaviour; widening it
    /// would change what shipped clients observe.
    ///
    /// Pure: borrows its inputs, mutates nothing, and is deterministic.
    #[must_use]
    pub fn shape(
        account: &UserAccount,
        preference: Option<&NotificationPreference>,
        time_zone: Option<&UserTimeZone>,
    ) -> Self {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            date_created: account.date_created,
            role: account.role,
            is_email_confirmed: account.is_email_confirmed,
            receive_reply_email_notifications: preference.is_some_and(|p| p.reply_via_email),
            receive_reply_desktop_notifications: preference.is_some_and(|p| p.reply_via_extension),
            last_new_reply_seen: preference
                .and_then(|p| p.last_reply_seen)
                .unwrap_or(epoch),
            last_new_reply_acknowledged: preference
                .and_then(|p| p.last_reply_acknowledged)
                .unwrap_or(epoch),
            receive_website_updates: preference.is_some_and(|p| p.company_update_via_email),
            receive_suggested_readings: preference
                .is_some_and(|p| p.digest_frequency == DigestFrequency::Weekly),
            time_zone_name: time_zone.map(|tz| tz.name.clone()),
            time_zone_display_name: time_zone.map(|tz| tz.display_name.clone()),
        }
    }
}

#[cfg(test)]
#[path = "profile_v1_tests.rs"]
mod tests;
