//! Client identification extracted from the request headers.
//!
//! Wraps the raw `X-Client-Identifier` header so handlers only deal with a
//! parsed, optional [`ClientIdentity`]. Extraction never rejects a
//! request: a missing, malformed, or unregistered identifier simply
//! yields no identity, and the handler picks its conservative fallback.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::{ClientIdentity, ClientIdentityError};

/// Request header carrying the client identification string.
pub const CLIENT_IDENTIFIER_HEADER: &str = "X-Client-Identifier";

/// The per-request client identity, when one could be established.
///
/// # Examples
/// ```
/// use backend::domain::ClientType;
/// use backend::inbound::http::ClientContext;
///
/// let context = ClientContext::from_header_value(Some("ios/app@1.4.2"));
/// let identity = context.identity().expect("registered token");
/// assert_eq!(identity.client_type, ClientType::IosApp);
///
/// assert!(ClientContext::from_header_value(None).identity().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientContext(Option<ClientIdentity>);

impl ClientContext {
    /// Parse an optional raw header value into a context.
    ///
    /// Unregistered tokens are logged at warn level: the request still
    /// proceeds unidentified, but the log flags a registry gap worth a
    /// deliberate review.
    #[must_use]
    pub fn from_header_value(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self(None);
        };
        match ClientIdentity::parse(raw) {
            Ok(identity) => Self(Some(identity)),
            Err(ClientIdentityError::UnknownClientType { token }) => {
                tracing::warn!(%token, "client identifier token missing from registry");
                Self(None)
            }
            Err(error) => {
                tracing::debug!(%error, "client identifier did not parse");
                Self(None)
            }
        }
    }

    /// The parsed identity, if the header established one.
    #[must_use]
    pub const fn identity(&self) -> Option<&ClientIdentity> {
        self.0.as_ref()
    }
}

impl FromRequest for ClientContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req
            .headers()
            .get(CLIENT_IDENTIFIER_HEADER)
            .and_then(|value| value.to_str().ok());
        ready(Ok(Self::from_header_value(raw)))
    }
}
