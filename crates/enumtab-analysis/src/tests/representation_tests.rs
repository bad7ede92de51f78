use crate::name_table::NameTable;
use crate::normalize::NormalizedEntry;
use crate::representation::{RepresentationPlan, Strategy, offset_width, select_strategy};
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

fn plan_for(entries: &[NormalizedEntry]) -> (NameTable, RepresentationPlan) {
    let table = NameTable::build(entries);
    let plan = RepresentationPlan::build(entries, &table);
    (table, plan)
}

#[test]
fn contiguous_values_select_direct_index() {
    let days = entries(&[
        (0, "Monday"),
        (1, "Tuesday"),
        (2, "Wednesday"),
        (3, "Thursday"),
        (4, "Friday"),
        (5, "Saturday"),
        (6, "Sunday"),
    ]);
    assert_eq!(
        select_strategy(&days),
        Strategy::DirectIndex {
            min_value: EnumValue(0),
            max_value: EnumValue(6),
        }
    );
}

#[test]
fn contiguous_range_not_starting_at_zero_is_direct() {
    let offset = entries(&[(1, "One"), (2, "Two"), (3, "Three")]);
    assert!(select_strategy(&offset).is_direct_index());

    let negative = entries(&[(-2, "m_2"), (-1, "m_1"), (0, "m0"), (1, "m1"), (2, "m2")]);
    assert!(select_strategy(&negative).is_direct_index());
}

#[test]
fn any_gap_selects_lookup_table() {
    let gap = entries(&[
        (2, "Two"),
        (3, "Three"),
        (5, "Five"),
        (6, "Six"),
        (7, "Seven"),
        (8, "Eight"),
        (9, "Nine"),
        (11, "Eleven"),
    ]);
    assert_eq!(select_strategy(&gap), Strategy::LookupTable);

    let unsigned = entries(&[(0, "m0"), (1, "m1"), (2, "m2"), (253, "m_2"), (254, "m_1")]);
    assert_eq!(select_strategy(&unsigned), Strategy::LookupTable);
}

#[test]
fn single_value_is_direct() {
    let one = entries(&[(42, "Answer")]);
    assert!(select_strategy(&one).is_direct_index());
}

#[test]
fn full_unsigned_range_does_not_overflow() {
    let extremes = entries(&[(0, "zero"), (i128::from(u64::MAX), "max")]);
    assert_eq!(select_strategy(&extremes), Strategy::LookupTable);

    let signed_extremes = entries(&[(i128::from(i64::MIN), "min"), (i128::from(i64::MAX), "max")]);
    assert_eq!(select_strategy(&signed_extremes), Strategy::LookupTable);
}

#[test]
fn offset_width_is_narrowest_fit() {
    assert_eq!(offset_width(0), 8);
    assert_eq!(offset_width(255), 8);
    assert_eq!(offset_width(256), 16);
    assert_eq!(offset_width(65_535), 16);
    assert_eq!(offset_width(65_536), 32);
}

#[test]
fn direct_plan_locates_by_offset() {
    let (_, plan) = plan_for(&entries(&[(1, "One"), (2, "Two"), (3, "Three")]));
    match &plan {
        RepresentationPlan::DirectIndex {
            boundaries,
            offset_width,
            ..
        } => {
            assert_eq!(boundaries, &vec![0, 3, 6, 11]);
            assert_eq!(*offset_width, 8);
        }
        other => panic!("expected direct index, got {other:?}"),
    }
    assert_eq!(plan.locate(EnumValue(1)), Some(0));
    assert_eq!(plan.locate(EnumValue(3)), Some(2));
    assert_eq!(plan.locate(EnumValue(0)), None);
    assert_eq!(plan.locate(EnumValue(4)), None);
    assert_eq!(plan.span_of(EnumValue(3)), Some((6, 11)));
}

#[test]
fn lookup_plan_finds_only_declared_values() {
    let (table, plan) = plan_for(&entries(&[(2, "Two"), (5, "Five"), (11, "Eleven")]));
    assert_eq!(plan.strategy(), Strategy::LookupTable);
    assert_eq!(plan.locate(EnumValue(5)), Some(1));
    assert_eq!(plan.locate(EnumValue(4)), None);
    let (start, end) = plan.span_of(EnumValue(11)).unwrap();
    assert_eq!(&table.packed()[start..end], "Eleven");
}

#[test]
fn strategy_depends_only_on_values() {
    let short = entries(&[(0, "a"), (1, "b")]);
    let long = entries(&[(0, "a much longer name"), (1, "another long name")]);
    assert_eq!(select_strategy(&short), select_strategy(&long));
}
