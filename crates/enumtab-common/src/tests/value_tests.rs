use crate::value::{EnumDomain, EnumValue, RawConstant};

#[test]
fn signed_domain_bounds() {
    let domain = EnumDomain::new("Small", true, 8).unwrap();
    assert_eq!(domain.min_value(), EnumValue(-128));
    assert_eq!(domain.max_value(), EnumValue(127));
}

#[test]
fn unsigned_domain_bounds_at_full_width() {
    let domain = EnumDomain::unsigned("Wide");
    assert_eq!(domain.min_value(), EnumValue(0));
    assert_eq!(domain.max_value(), EnumValue::from(u64::MAX));
}

#[test]
fn contains_respects_sign_and_width() {
    let unum = EnumDomain::new("Unum", false, 8).unwrap();
    assert!(unum.contains(EnumValue(0)));
    assert!(unum.contains(EnumValue(255)));
    assert!(!unum.contains(EnumValue(-3)));
    assert!(!unum.contains(EnumValue(256)));

    let num = EnumDomain::new("Num", true, 8).unwrap();
    assert!(num.contains(EnumValue(-128)));
    assert!(!num.contains(EnumValue(128)));

    let wide = EnumDomain::unsigned("U64");
    assert!(wide.contains(EnumValue::from(u64::MAX)));
    assert!(!wide.contains(EnumValue(-1)));
}

#[test]
fn rejects_out_of_range_bit_width() {
    assert!(EnumDomain::new("Zero", true, 0).is_err());
    assert!(EnumDomain::new("Huge", false, 128).is_err());
}

#[test]
fn fallback_name_embeds_type_and_value() {
    let domain = EnumDomain::signed("Day");
    assert_eq!(domain.fallback_name(EnumValue(-7)), "Day(-7)");
}

#[test]
fn raw_constant_deserializes_number_and_string_values() {
    let from_number: RawConstant =
        serde_json::from_str(r#"{"name": "Monday", "value": 3}"#).unwrap();
    assert_eq!(from_number.identifier, "Monday");
    assert_eq!(from_number.value, EnumValue(3));
    assert_eq!(from_number.annotation, None);

    let from_string: RawConstant = serde_json::from_str(
        r#"{"name": "Big", "value": "18446744073709551615", "annotation": "big one"}"#,
    )
    .unwrap();
    assert_eq!(from_string.value, EnumValue::from(u64::MAX));
    assert_eq!(from_string.annotation.as_deref(), Some("big one"));
}

#[test]
fn enum_value_serializes_as_plain_number() {
    let text = serde_json::to_string(&EnumValue(-2)).unwrap();
    assert_eq!(text, "-2");
    let text = serde_json::to_string(&EnumValue::from(u64::MAX)).unwrap();
    assert_eq!(text, "18446744073709551615");
}
