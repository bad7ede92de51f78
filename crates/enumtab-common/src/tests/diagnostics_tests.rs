use crate::diagnostics::{DiagnosticCategory, EnumError, diagnostic_codes};
use crate::value::EnumValue;

#[test]
fn name_not_found_is_recoverable_and_carries_input() {
    let err = EnumError::NameNotFound {
        name: "NotARealName".to_string(),
        type_name: "Day".to_string(),
    };
    assert!(!err.is_fatal());
    assert_eq!(err.to_string(), "NotARealName does not belong to Day values");
}

#[test]
fn empty_and_ambiguous_are_fatal() {
    let empty = EnumError::EmptyEnumeration {
        type_name: "Day".to_string(),
    };
    let ambiguous = EnumError::AmbiguousTypeSelection {
        requested: "Day".to_string(),
        candidates: 2,
    };
    assert!(empty.is_fatal());
    assert!(ambiguous.is_fatal());
    assert_eq!(
        ambiguous.to_string(),
        "type name Day matches 2 declared enumerations"
    );
}

#[test]
fn missing_type_has_its_own_message() {
    let missing = EnumError::AmbiguousTypeSelection {
        requested: "Color".to_string(),
        candidates: 0,
    };
    assert_eq!(
        missing.to_string(),
        "no enumeration type named Color was declared"
    );
}

#[test]
fn error_converts_to_error_diagnostic() {
    let diag = EnumError::EmptyEnumeration {
        type_name: "Gap".to_string(),
    }
    .to_diagnostic();
    assert_eq!(diag.category, DiagnosticCategory::Error);
    assert_eq!(diag.code, diagnostic_codes::EMPTY_ENUMERATION);
    assert_eq!(diag.type_name, "Gap");
    assert!(diag.is_error());
    assert_eq!(diag.to_string(), "error ET1001: Gap: no values defined for type Gap");
}

#[test]
fn out_of_domain_value_is_fatal_and_names_the_constant() {
    let err = EnumError::ValueOutOfDomain {
        type_name: "Unum".to_string(),
        identifier: "m_2".to_string(),
        value: EnumValue(-3),
    };
    assert!(err.is_fatal());
    assert_eq!(err.code(), diagnostic_codes::VALUE_OUT_OF_DOMAIN);
    assert_eq!(err.type_name(), "Unum");
    assert_eq!(err.to_string(), "m_2 = -3 overflows type Unum");
}
