use super::manifest::{load_manifest, parse_manifest};
use enumtab_common::{EnumValue, RawConstant};

#[test]
fn parses_enums_with_defaults() {
    let collection = parse_manifest(
        r#"{"enums": [
            {"typeName": "Day", "constants": [
                {"name": "Monday", "value": 0},
                {"name": "Tuesday", "value": 1, "annotation": "Tue"}
            ]},
            {"typeName": "Unum", "signed": false, "bitWidth": 8, "constants": []}
        ]}"#,
    )
    .unwrap();

    assert_eq!(collection.type_names(), vec!["Day", "Unum"]);
    let day = &collection.enums[0];
    assert!(day.domain.signed);
    assert_eq!(day.domain.bit_width, 64);
    assert_eq!(day.constants[0], RawConstant::new("Monday", 0));
    assert_eq!(day.constants[1].annotation.as_deref(), Some("Tue"));

    let unum = &collection.enums[1];
    assert!(!unum.domain.signed);
    assert_eq!(unum.domain.bit_width, 8);
    assert!(unum.constants.is_empty());
}

#[test]
fn values_may_be_strings_or_full_width_integers() {
    let collection = parse_manifest(
        r#"{"enums": [{"typeName": "Big", "signed": false, "constants": [
            {"name": "Max", "value": 18446744073709551615},
            {"name": "Neg", "value": "-5"}
        ]}]}"#,
    )
    .unwrap();
    let constants = &collection.enums[0].constants;
    assert_eq!(constants[0].value, EnumValue::from(u64::MAX));
    assert_eq!(constants[1].value, EnumValue(-5));
}

#[test]
fn out_of_range_width_is_kept_for_later_reporting() {
    let collection =
        parse_manifest(r#"{"enums": [{"typeName": "Wide", "bitWidth": 128, "constants": []}]}"#)
            .unwrap();
    assert!(collection.enums[0].domain.validate().is_err());
}

#[test]
fn empty_document_has_no_enums() {
    assert!(parse_manifest("{}").unwrap().enums.is_empty());
}

#[test]
fn malformed_manifest_is_an_error() {
    assert!(parse_manifest(r#"{"enums": [{"constants": []}]}"#).is_err());
    assert!(parse_manifest("not json").is_err());
}

#[test]
fn load_manifest_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_manifest(&dir.path().join("missing.json")).unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));
}
