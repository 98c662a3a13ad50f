//! HTTP inbound adapter exposing REST endpoints.

pub mod client_context;
pub mod error;
pub mod health;
pub mod state;
pub mod users;

pub use client_context::{CLIENT_IDENTIFIER_HEADER, ClientContext};
pub use error::ApiResult;
