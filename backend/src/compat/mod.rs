//! Frozen legacy response contracts and their shape routing.
//!
//! Old client builds keep receiving exactly the JSON they were compiled
//! against, so each historical contract lives in its own module as an
//! independent value shape with its own defaulting rules. Contracts never
//! share code or inherit from one another: a change to one can never leak
//! into another, and a later domain change shows up as a compile error in
//! every shaper that reads the changed field.
//!
//! Routing is an explicit decision, not metadata: the handler asks
//! [`select_profile_shape`] which band the caller's build falls into and
//! then invokes exactly one shaper.

pub mod profile_v1;
pub mod profile_v2;

pub use profile_v1::UserProfileV1;
pub use profile_v2::UserProfileV2;

use crate::domain::{ClientIdentity, ClientType, SemanticVersion, VersionThresholds, meets_threshold};

/// Which user-profile contract a client build receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileShape {
    /// The 1.2.0-era flat contract ([`UserProfileV1`]).
    V1,
    /// The 1.5.0-era nested contract ([`UserProfileV2`]).
    V2,
    /// The present-day contract served to up-to-date builds.
    Current,
}

/// Minimum versions that receive the present-day profile contract.
#[must_use]
pub fn current_profile_thresholds() -> VersionThresholds {
    VersionThresholds::from([
        (ClientType::IosApp, SemanticVersion::new(1, 6, 0)),
        (ClientType::IosExtension, SemanticVersion::new(1, 6, 0)),
        (ClientType::WebAppClient, SemanticVersion::new(2, 0, 0)),
        (ClientType::WebAppServer, SemanticVersion::new(2, 0, 0)),
        (ClientType::WebExtension, SemanticVersion::new(1, 2, 0)),
    ])
}

/// Minimum versions that shipped the 1.5.0-era nested profile contract.
#[must_use]
pub fn v2_profile_thresholds() -> VersionThresholds {
    VersionThresholds::from([
        (ClientType::IosApp, SemanticVersion::new(1, 5, 0)),
        (ClientType::IosExtension, SemanticVersion::new(1, 5, 0)),
        (ClientType::WebAppClient, SemanticVersion::new(1, 3, 0)),
        (ClientType::WebAppServer, SemanticVersion::new(1, 3, 0)),
        (ClientType::WebExtension, SemanticVersion::new(0, 10, 0)),
    ])
}

/// Pick the profile contract for the identified client build.
///
/// Unidentified callers (missing, malformed, or unregistered identifier)
/// fall back to the most restrictive legacy shape: every parser generation
/// ever shipped can read [`UserProfileV1`], so a proxied or mangled header
/// degrades service cosmetically rather than breaking the client.
#[must_use]
pub fn select_profile_shape(identity: Option<&ClientIdentity>) -> ProfileShape {
    if meets_threshold(identity, &current_profile_thresholds()) {
        ProfileShape::Current
    } else if meets_threshold(identity, &v2_profile_thresholds()) {
        ProfileShape::V2
    } else {
        ProfileShape::V1
    }
}

#[cfg(test)]
#[path = "routing_tests.rs"]
mod tests;
