//! Timezone domain records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timezone record referenced from [`super::UserAccount`].
///
/// Collaborators resolve the account's `time_zone_id` to one of these
/// before invoking the core; accounts without a selection hand over
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserTimeZone {
    /// Stable record identifier.
    pub id: Uuid,
    /// IANA timezone name, e.g. `America/New_York`.
    pub name: String,
    /// Human-readable label, e.g. `Eastern Time`.
    pub display_name: String,
}
