//! User profile API handlers.
//!
//! ```text
//! GET /api/v1/users/{user_id}/profile
//! ```
//!
//! The profile endpoint is where version gating and response shaping meet:
//! the extractor establishes the caller's [`crate::domain::ClientIdentity`],
//! [`select_profile_shape`] picks the contract band, and exactly one pure
//! shaper produces the body. Gating is an explicit call in the handler, not
//! middleware metadata, so the decision path stays inspectable in tests.

use actix_web::{HttpResponse, get, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::compat::{ProfileShape, UserProfileV1, UserProfileV2, select_profile_shape};
use crate::domain::ports::{ProfileStoreError, UserProfileRecords};
use crate::domain::{DigestFrequency, DomainError, UserAccountRole, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::client_context::ClientContext;
use crate::inbound::http::state::HttpState;

/// Notification settings in the present-day profile contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferenceResponse {
    /// Reply notifications by email.
    pub reply_via_email: bool,
    /// Reply notifications through the browser extension.
    pub reply_via_extension: bool,
    /// Company update announcements by email.
    pub company_update_via_email: bool,
    /// Suggested-readings digest cadence.
    pub digest_frequency: DigestFrequency,
    /// Instant the reader last saw a new-reply notification.
    pub last_reply_seen: Option<DateTime<Utc>>,
    /// Instant the reader last acknowledged a new-reply notification.
    pub last_reply_acknowledged: Option<DateTime<Utc>>,
}

/// Timezone selection in the present-day profile contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeZoneResponse {
    /// Stable record identifier.
    pub id: Uuid,
    /// IANA timezone name.
    pub name: String,
    /// Human-readable label.
    pub display_name: String,
}

/// The present-day profile contract served to up-to-date builds.
///
/// Unlike the frozen shapes in [`crate::compat`], this one is free to
/// evolve with the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
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
    /// Notification settings; null when none were saved.
    pub notification_preference: Option<NotificationPreferenceResponse>,
    /// Timezone selection; null when the account never chose one.
    pub time_zone: Option<TimeZoneResponse>,
}

impl From<UserProfileRecords> for UserProfileResponse {
    fn from(records: UserProfileRecords) -> Self {
        Self {
            id: records.account.id,
            name: records.account.name,
            email: records.account.email,
            date_created: records.account.date_created,
            role: records.account.role,
            is_email_confirmed: records.account.is_email_confirmed,
            notification_preference: records.preference.map(|p| NotificationPreferenceResponse {
                reply_via_email: p.reply_via_email,
                reply_via_extension: p.reply_via_extension,
                company_update_via_email: p.company_update_via_email,
                digest_frequency: p.digest_frequency,
                last_reply_seen: p.last_reply_seen,
                last_reply_acknowledged: p.last_reply_acknowledged,
            }),
            time_zone: records.time_zone.map(|tz| TimeZoneResponse {
                id: tz.id,
                name: tz.name,
                display_name: tz.display_name,
            }),
        }
    }
}

fn map_profile_store_error(error: ProfileStoreError) -> DomainError {
    tracing::error!(error = %error, "profile store lookup failed");
    DomainError::unavailable("profile storage is temporarily unavailable")
}

/// Fetch a user's profile in the shape the calling build understands.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/profile",
    params(
        ("user_id" = Uuid, Path, description = "Account identifier"),
    ),
    responses(
        (status = 200, description = "Profile in the caller's contract band", body = UserProfileResponse),
        (status = 404, description = "No such account", body = DomainError),
        (status = 503, description = "Profile storage unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "getUserProfile"
)]
#[get("/users/{user_id}/profile")]
pub async fn get_user_profile(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    client: ClientContext,
) -> ApiResult<HttpResponse> {
    let user_id = UserId::from_uuid(path.into_inner());
    let records = state
        .profiles
        .load_profile(user_id)
        .await
        .map_err(map_profile_store_error)?
        .ok_or_else(|| DomainError::not_found("no account with that id"))?;

    let shape = select_profile_shape(client.identity());
    debug!(?shape, %user_id, "selected profile contract band");

    let response = match shape {
        ProfileShape::V1 => HttpResponse::Ok().json(UserProfileV1::shape(
            &records.account,
            records.preference.as_ref(),
            records.time_zone.as_ref(),
        )),
        ProfileShape::V2 => HttpResponse::Ok().json(UserProfileV2::shape(
            &records.account,
            records.preference.as_ref(),
            records.time_zone.as_ref(),
        )),
        ProfileShape::Current => HttpResponse::Ok().json(UserProfileResponse::from(records)),
    };
    Ok(response)
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
