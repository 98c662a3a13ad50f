//! Domain primitives and aggregates.
//!
//! Purpose: hold the pure compatibility core (semantic client versions,
//! client identity parsing, per-feature version gating) plus the
//! read-only records that response shaping consumes. Everything here is
//! synchronous, side-effect free, and safe to share across requests.
//!
//! Public surface:
//! - [`SemanticVersion`] — `major.minor.patch` with numeric ordering.
//! - [`ClientType`] / [`ClientIdentity`] — parsed client identification.
//! - [`VersionThresholds`] / [`meets_threshold`] — per-feature gating.
//! - [`UserAccount`], [`NotificationPreference`], [`UserTimeZone`] —
//!   collaborator-supplied records.
//! - [`DomainError`] / [`ErrorCode`] — transport-agnostic error payload.

pub mod client_identity;
pub mod client_version;
pub mod error;
pub mod notification_preference;
pub mod ports;
pub mod time_zone;
pub mod user_account;
pub mod version_gate;

pub use self::client_identity::{
    CLIENT_TOKEN_REGISTRY, ClientIdentity, ClientIdentityError, ClientType,
};
pub use self::client_version::{ParseClientVersionError, SemanticVersion};
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::notification_preference::{
    DigestFrequency, NotificationPreference, ParseDigestFrequencyError,
};
pub use self::time_zone::UserTimeZone;
pub use self::user_account::{ParseUserAccountRoleError, UserAccount, UserAccountRole, UserId};
pub use self::version_gate::{VersionThresholds, meets_threshold};
