//! Tests for client identifier parsing.

use rstest::rstest;

use super::*;

#[test]
fn parses_plain_identifier() {
    let identity = ClientIdentity::parse("ios/app@1.4.2").expect("registered token");
    assert_eq!(identity.client_type, ClientType::IosApp);
    assert_eq!(identity.version, SemanticVersion::new(1, 4, 2));
    assert_eq!(identity.mode, None);
}

#[test]
fn parses_identifier_with_mode() {
    let identity = ClientIdentity::parse("web/extension#beta@0.9.12").expect("registered token");
    assert_eq!(identity.client_type, ClientType::WebExtension);
    assert_eq!(identity.version, SemanticVersion::new(0, 9, 12));
    assert_eq!(identity.mode.as_deref(), Some("beta"));
}

#[rstest]
#[case("ios/app", ClientType::IosApp)]
#[case("ios/extension", ClientType::IosExtension)]
#[case("web/app/client", ClientType::WebAppClient)]
#[case("web/app/server", ClientType::WebAppServer)]
#[case("web/extension", ClientType::WebExtension)]
fn recognises_every_registered_token(#[case] token: &str, #[case] expected: ClientType) {
    let identity =
        ClientIdentity::parse(&format!("{token}@2.0.1")).expect("registered token");
    assert_eq!(identity.client_type, expected);
    assert_eq!(expected.as_token(), token);
}

#[test]
fn accepts_arbitrary_prefix_before_a_valid_suffix() {
    // The grammar anchors at the end of the value only.
    let identity = ClientIdentity::parse("Forwarded ios/app@1.4.2").expect("suffix matches");
    assert_eq!(identity.client_type, ClientType::IosApp);
    assert_eq!(identity.version, SemanticVersion::new(1, 4, 2));
}

#[test]
fn prefix_letters_extend_the_token_and_miss_the_registry() {
    // A lowercase prefix glued to the token changes the token itself.
    let error = ClientIdentity::parse("xios/app@1.4.2").expect_err("token is not registered");
    assert_eq!(
        error,
        ClientIdentityError::UnknownClientType {
            token: "xios/app".to_owned(),
        }
    );
}

#[test]
fn rejects_unregistered_token() {
    let error = ClientIdentity::parse("bogus-token@1.0.0").expect_err("token is not registered");
    assert!(matches!(
        error,
        ClientIdentityError::UnknownClientType { .. }
    ));
    assert_eq!(ClientIdentity::parse_opt("bogus-token@1.0.0"), None);
}

#[rstest]
#[case("")]
#[case("not a valid header")]
#[case("ios/app@1.4")]
#[case("ios/app@1.4.2.9")]
#[case("ios/app#beta")]
#[case("ios/app@1.4.2 ")]
#[case("IOS/APP@1.4.2")]
fn rejects_values_missing_the_grammar(#[case] raw: &str) {
    assert_eq!(ClientIdentity::parse(raw), Err(ClientIdentityError::Unrecognised));
    assert_eq!(ClientIdentity::parse_opt(raw), None);
}

#[test]
fn rejects_overflowing_version_component() {
    let error =
        ClientIdentity::parse("ios/app@4294967296.0.0").expect_err("component overflows");
    assert!(matches!(error, ClientIdentityError::InvalidVersion(_)));
}

#[test]
fn mode_marker_is_stripped_but_required() {
    let identity = ClientIdentity::parse("ios/app#test_1@1.0.0").expect("mode allows word chars");
    assert_eq!(identity.mode.as_deref(), Some("test_1"));
}
