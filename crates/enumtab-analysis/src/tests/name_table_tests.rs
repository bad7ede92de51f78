use crate::name_table::{NameSpan, NameTable};
use crate::normalize::NormalizedEntry;
use enumtab_common::EnumValue;

fn entries(pairs: &[(i128, &str)]) -> Vec<NormalizedEntry> {
    pairs
        .iter()
        .map(|&(value, name)| NormalizedEntry {
            value: EnumValue(value),
            display_name: name.to_string(),
        })
        .collect()
}

#[test]
fn spans_partition_packed_string() {
    let table = NameTable::build(&entries(&[(1, "One"), (2, "Two"), (3, "Three")]));
    assert_eq!(table.packed(), "OneTwoThree");
    assert_eq!(
        table.spans(),
        &[
            NameSpan { value: EnumValue(1), start: 0, end: 3 },
            NameSpan { value: EnumValue(2), start: 3, end: 6 },
            NameSpan { value: EnumValue(3), start: 6, end: 11 },
        ]
    );
    assert!(table.is_partition());
    assert_eq!(table.boundaries(), vec![0, 3, 6, 11]);
}

#[test]
fn equal_names_get_separate_copies() {
    let table = NameTable::build(&entries(&[(1, "same"), (2, "same")]));
    assert_eq!(table.packed(), "samesame");
    assert_eq!(table.name(&table.spans()[0]), "same");
    assert_eq!(table.name(&table.spans()[1]), "same");
    assert_ne!(table.spans()[0].start, table.spans()[1].start);
    assert!(table.is_partition());
}

#[test]
fn multibyte_names_keep_char_boundaries() {
    let table = NameTable::build(&entries(&[(0, "Grün"), (1, "Blau")]));
    assert_eq!(table.spans()[0].len(), "Grün".len());
    assert_eq!(table.name(&table.spans()[0]), "Grün");
    assert_eq!(table.name(&table.spans()[1]), "Blau");
    assert!(table.is_partition());
}

#[test]
fn empty_display_name_is_a_zero_width_span() {
    let table = NameTable::build(&entries(&[(0, ""), (1, "x")]));
    assert!(table.spans()[0].is_empty());
    assert!(table.is_partition());
}

#[test]
fn building_twice_is_identical() {
    let input = entries(&[(2, "p2"), (3, "p3"), (5, "p5")]);
    assert_eq!(NameTable::build(&input), NameTable::build(&input));
}

#[test]
fn out_of_order_values_are_not_a_partition() {
    let table = NameTable::build(&entries(&[(3, "c"), (1, "a")]));
    assert!(!table.is_partition());
}
