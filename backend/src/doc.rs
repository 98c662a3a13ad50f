//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: the profile endpoint, the health probes, and the
//! response schemas for every contract band a client can receive.

use utoipa::OpenApi;

use crate::compat::profile_v1::UserProfileV1;
use crate::compat::profile_v2::{NotificationPreferenceV2, TimeZoneV2, UserProfileV2};
use crate::domain::error::{DomainError, ErrorCode};
use crate::inbound::http::users::{
    NotificationPreferenceResponse, TimeZoneResponse, UserProfileResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Content-reading platform API",
        description = "Profile endpoints with per-client-version response shaping."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user_profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DomainError,
        ErrorCode,
        UserProfileResponse,
        NotificationPreferenceResponse,
        TimeZoneResponse,
        UserProfileV1,
        UserProfileV2,
        NotificationPreferenceV2,
        TimeZoneV2,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_contract_band_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components are registered");
        for schema in [
            "UserProfileResponse",
            "UserProfileV1",
            "UserProfileV2",
            "DomainError",
        ] {
            assert!(
                components.schemas.contains_key(schema),
                "missing schema: {schema}"
            );
        }
    }
}
