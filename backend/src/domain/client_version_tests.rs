//! Tests for semantic client version parsing and ordering.

use rstest::rstest;

use super::*;

#[rstest]
#[case("0.0.0")]
#[case("1.2.0")]
#[case("1.4.2")]
#[case("10.20.30")]
#[case("4294967295.0.1")]
fn round_trips_canonical_versions(#[case] input: &str) {
    let parsed: SemanticVersion = input.parse().expect("well formed version");
    assert_eq!(parsed.to_string(), input);
}

#[test]
fn parses_components_numerically() {
    let version: SemanticVersion = "1.4.2".parse().expect("well formed version");
    assert_eq!(version.major(), 1);
    assert_eq!(version.minor(), 4);
    assert_eq!(version.patch(), 2);
}

#[test]
fn leading_zeroes_parse_as_their_numeric_value() {
    let padded: SemanticVersion = "1.02.3".parse().expect("digit runs are well formed");
    assert_eq!(padded, SemanticVersion::new(1, 2, 3));
    assert_eq!(padded.to_string(), "1.2.3");
}

#[rstest]
#[case("2.0.0", "1.9.9")]
#[case("1.10.0", "1.9.0")]
#[case("1.2.1", "1.2.0")]
#[case("0.10.0", "0.9.12")]
fn orders_numerically_not_lexicographically(#[case] newer: &str, #[case] older: &str) {
    let newer: SemanticVersion = newer.parse().expect("well formed version");
    let older: SemanticVersion = older.parse().expect("well formed version");
    assert!(newer > older);
    assert!(older < newer);
}

#[test]
fn equal_versions_compare_equal() {
    let a: SemanticVersion = "1.2.0".parse().expect("well formed version");
    let b: SemanticVersion = "1.2.0".parse().expect("well formed version");
    assert_eq!(a, b);
}

#[rstest]
#[case("")]
#[case("1")]
#[case("1.2")]
#[case("1.2.3.4")]
#[case("1.2.x")]
#[case("1..3")]
#[case("a.b.c")]
#[case(" 1.2.3")]
#[case("1.2.3 ")]
#[case("+1.2.3")]
#[case("1.-2.3")]
#[case("1.2.3-beta")]
fn rejects_malformed_inputs(#[case] input: &str) {
    let error = input
        .parse::<SemanticVersion>()
        .expect_err("input must be rejected");
    assert!(matches!(error, ParseClientVersionError::Malformed { .. }));
}

#[test]
fn rejects_components_beyond_u32() {
    let error = "4294967296.0.0"
        .parse::<SemanticVersion>()
        .expect_err("overflowing component must be rejected");
    assert!(matches!(
        error,
        ParseClientVersionError::ComponentOutOfRange { .. }
    ));
}

#[test]
fn serde_uses_the_string_form() {
    let version = SemanticVersion::new(1, 4, 2);
    let json = serde_json::to_value(version).expect("serialises");
    assert_eq!(json, serde_json::json!("1.4.2"));

    let back: SemanticVersion = serde_json::from_value(json).expect("deserialises");
    assert_eq!(back, version);
}
