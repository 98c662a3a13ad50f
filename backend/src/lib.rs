//! Backend library modules.
//!
//! Serves the content-reading platform's API to independently-versioned
//! client builds. The pure compatibility core lives in [`domain`] and
//! [`compat`]; [`inbound`] adapts it to HTTP.

pub mod compat;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod server;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
