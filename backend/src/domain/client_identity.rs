//! Client identification parsed from the `X-Client-Identifier` header.
//!
//! Every request carries a compact token naming the client build, e.g.
//! `ios/app@1.4.2` or `web/extension#beta@0.9.12`. This module parses that
//! token into a [`ClientIdentity`]: a registered [`ClientType`], a
//! [`SemanticVersion`], and an optional mode tag.
//!
//! The wire-token registry is a static table on purpose: adding a client
//! platform is a deliberate, reviewable code change, never an inference
//! from the token's shape.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ParseClientVersionError, SemanticVersion};

/// A recognised client platform.
///
/// Variants map one-to-one onto wire tokens via [`CLIENT_TOKEN_REGISTRY`].
/// Unregistered tokens never produce an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    /// Native iOS application.
    IosApp,
    /// Safari browser extension distributed with the iOS app.
    IosExtension,
    /// Browser-side web client.
    WebAppClient,
    /// Server-side web renderer.
    WebAppServer,
    /// Desktop browser extension.
    WebExtension,
}

/// Static mapping from wire token to client type.
///
/// Tokens are hierarchical slash-delimited names and are looked up
/// verbatim.
pub const CLIENT_TOKEN_REGISTRY: &[(&str, ClientType)] = &[
    ("ios/app", ClientType::IosApp),
    ("ios/extension", ClientType::IosExtension),
    ("web/app/client", ClientType::WebAppClient),
    ("web/app/server", ClientType::WebAppServer),
    ("web/extension", ClientType::WebExtension),
];

impl ClientType {
    /// Look up a wire token in [`CLIENT_TOKEN_REGISTRY`].
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ClientType;
    ///
    /// assert_eq!(ClientType::from_token("ios/app"), Some(ClientType::IosApp));
    /// assert_eq!(ClientType::from_token("android/app"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        CLIENT_TOKEN_REGISTRY
            .iter()
            .find(|(candidate, _)| *candidate == token)
            .map(|(_, client_type)| *client_type)
    }

    /// Return the wire token for this client type.
    #[must_use]
    pub const fn as_token(&self) -> &'static str {
        match self {
            Self::IosApp => "ios/app",
            Self::IosExtension => "ios/extension",
            Self::WebAppClient => "web/app/client",
            Self::WebAppServer => "web/app/server",
            Self::WebExtension => "web/extension",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Errors explaining why a header value produced no identity.
///
/// All variants are recoverable: callers collapse them into "no identity"
/// and pick a conservative code path. [`ClientIdentityError::UnknownClientType`]
/// is worth logging because it flags a gap in [`CLIENT_TOKEN_REGISTRY`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientIdentityError {
    /// The value does not end in `token[#mode]@major.minor.patch`.
    #[error("client identifier does not match the expected grammar")]
    Unrecognised,
    /// The token is syntactically valid but not registered.
    #[error("unregistered client token: {token:?}")]
    UnknownClientType {
        /// The unrecognised wire token.
        token: String,
    },
    /// The version portion matched the grammar but failed to parse.
    #[error(transparent)]
    InvalidVersion(#[from] ParseClientVersionError),
}

static IDENTITY_RE: OnceLock<Regex> = OnceLock::new();

fn identity_regex() -> &'static Regex {
    IDENTITY_RE.get_or_init(|| {
        // Anchored at the end only: proxies may prefix the header value, so
        // any trailing `token[#mode]@version` suffix is accepted.
        Regex::new(r"([a-z/]+)(#\w+)?@(\d+\.\d+\.\d+)$").expect("identity pattern is valid")
    })
}

/// A fully parsed client identification.
///
/// Produced only by a completely successful parse; there is no partially
/// populated form.
///
/// # Examples
/// ```
/// use backend::domain::{ClientIdentity, ClientType, SemanticVersion};
///
/// let identity = ClientIdentity::parse_opt("web/extension#beta@0.9.12").expect("registered");
/// assert_eq!(identity.client_type, ClientType::WebExtension);
/// assert_eq!(identity.version, SemanticVersion::new(0, 9, 12));
/// assert_eq!(identity.mode.as_deref(), Some("beta"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    /// The registered platform the build belongs to.
    pub client_type: ClientType,
    /// The build's reported release version.
    pub version: SemanticVersion,
    /// Optional mode tag, e.g. `beta`, with the `#` marker stripped.
    pub mode: Option<String>,
}

impl ClientIdentity {
    /// Parse a raw header value into an identity.
    ///
    /// # Errors
    ///
    /// Returns [`ClientIdentityError`] when the grammar does not match the
    /// tail of the input, the token is unregistered, or the version does
    /// not parse. None of these are fatal; see [`Self::parse_opt`].
    pub fn parse(raw: &str) -> Result<Self, ClientIdentityError> {
        let captures = identity_regex()
            .captures(raw)
            .ok_or(ClientIdentityError::Unrecognised)?;

        let token = captures
            .get(1)
            .map(|m| m.as_str())
            .ok_or(ClientIdentityError::Unrecognised)?;
        let client_type = ClientType::from_token(token).ok_or_else(|| {
            ClientIdentityError::UnknownClientType {
                token: token.to_owned(),
            }
        })?;

        let version = captures
            .get(3)
            .map(|m| m.as_str())
            .ok_or(ClientIdentityError::Unrecognised)?
            .parse::<SemanticVersion>()?;

        let mode = captures
            .get(2)
            .map(|m| m.as_str().trim_start_matches('#').to_owned());

        Ok(Self {
            client_type,
            version,
            mode,
        })
    }

    /// Parse a raw header value, collapsing every failure to `None`.
    #[must_use]
    pub fn parse_opt(raw: &str) -> Option<Self> {
        Self::parse(raw).ok()
    }
}

#[cfg(test)]
#[path = "client_identity_tests.rs"]
mod tests;
