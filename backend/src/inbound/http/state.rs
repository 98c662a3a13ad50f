//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureUserProfileQuery, UserProfileQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Supplies pre-fetched profile record bundles.
    pub profiles: Arc<dyn UserProfileQuery>,
}

impl HttpState {
    /// Wire the state with explicit port implementations.
    #[must_use]
    pub fn new(profiles: Arc<dyn UserProfileQuery>) -> Self {
        Self { profiles }
    }

    /// State backed entirely by in-memory fixtures.
    #[must_use]
    pub fn fixture() -> Self {
        Self::new(Arc::new(FixtureUserProfileQuery))
    }
}
