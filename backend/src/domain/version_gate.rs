//! Per-feature version gating.
//!
//! Features roll out independently per platform, so every call site builds
//! its own [`VersionThresholds`] map instead of consulting a global table.
//! The gate itself is a pure predicate over an optional [`ClientIdentity`].

use std::collections::HashMap;

use super::{ClientIdentity, ClientType, SemanticVersion};

/// Minimum client versions for a single feature, keyed by platform.
///
/// A platform with no entry never passes the gate, which keeps new
/// features dark on platforms that have not shipped support yet.
///
/// # Examples
/// ```
/// use backend::domain::{
///     meets_threshold, ClientIdentity, ClientType, SemanticVersion, VersionThresholds,
/// };
///
/// let thresholds = VersionThresholds::from([
///     (ClientType::IosApp, SemanticVersion::new(1, 4, 0)),
/// ]);
/// let identity = ClientIdentity::parse_opt("ios/app@1.5.0");
///
/// assert!(meets_threshold(identity.as_ref(), &thresholds));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionThresholds(HashMap<ClientType, SemanticVersion>);

impl VersionThresholds {
    /// Minimum version required for the given platform, if one is set.
    #[must_use]
    pub fn for_client_type(&self, client_type: ClientType) -> Option<SemanticVersion> {
        self.0.get(&client_type).copied()
    }
}

impl<const N: usize> From<[(ClientType, SemanticVersion); N]> for VersionThresholds {
    fn from(entries: [(ClientType, SemanticVersion); N]) -> Self {
        Self(HashMap::from(entries))
    }
}

impl FromIterator<(ClientType, SemanticVersion)> for VersionThresholds {
    fn from_iter<I: IntoIterator<Item = (ClientType, SemanticVersion)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Decide whether an identified client clears a feature's thresholds.
///
/// Returns `false` for unidentified clients and for platforms without an
/// entry in `thresholds`; otherwise compares the client's version against
/// its platform's minimum. Stateless, so one request may consult the gate
/// repeatedly with a different threshold set per feature.
#[must_use]
pub fn meets_threshold(identity: Option<&ClientIdentity>, thresholds: &VersionThresholds) -> bool {
    let Some(identity) = identity else {
        return false;
    };
    thresholds
        .for_client_type(identity.client_type)
        .is_some_and(|minimum| identity.version >= minimum)
}

#[cfg(test)]
#[path = "version_gate_tests.rs"]
mod tests;
