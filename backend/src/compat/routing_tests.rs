//! Tests for profile shape routing.

use rstest::rstest;

use super::*;

fn identity(raw: &str) -> Option<ClientIdentity> {
    ClientIdentity::parse_opt(raw)
}

#[test]
fn unidentified_clients_get_the_most_restrictive_shape() {
    assert_eq!(select_profile_shape(None), ProfileShape::V1);
}

#[rstest]
#[case("ios/app@1.4.2", ProfileShape::V1)]
#[case("ios/app@1.5.0", ProfileShape::V2)]
#[case("ios/app@1.5.9", ProfileShape::V2)]
#[case("ios/app@1.6.0", ProfileShape::Current)]
#[case("ios/app@2.0.0", ProfileShape::Current)]
fn ios_app_bands_split_at_one_five_and_one_six(#[case] raw: &str, #[case] expected: ProfileShape) {
    assert_eq!(select_profile_shape(identity(raw).as_ref()), expected);
}

#[rstest]
#[case("web/extension#beta@0.9.12", ProfileShape::V1)]
#[case("web/extension@0.10.0", ProfileShape::V2)]
#[case("web/extension@1.2.0", ProfileShape::Current)]
#[case("web/app/client@1.2.9", ProfileShape::V1)]
#[case("web/app/client@1.3.0", ProfileShape::V2)]
#[case("web/app/server@2.0.0", ProfileShape::Current)]
fn web_platforms_have_their_own_cutovers(#[case] raw: &str, #[case] expected: ProfileShape) {
    assert_eq!(select_profile_shape(identity(raw).as_ref()), expected);
}

#[test]
fn exactly_one_shape_applies_per_identity() {
    // The bands partition the version line per platform: the current and
    // v2 gates are consulted in order, so an identity passing both still
    // lands on a single shape.
    let identity = identity("ios/app@9.9.9");
    assert!(meets_threshold(identity.as_ref(), &current_profile_thresholds()));
    assert!(meets_threshold(identity.as_ref(), &v2_profile_thresholds()));
    assert_eq!(
        select_profile_shape(identity.as_ref()),
        ProfileShape::Current
    );
}
