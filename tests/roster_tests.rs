mod common;

use rust_decimal::Decimal;

use gradebook::errors::RosterError;
use gradebook::intelligence::{
    check_passing, check_passing_default, compute_prefix_sum, range_sum, record_prefix_sum,
    PassingStatus,
};
use gradebook::models::UpsertOutcome;
use gradebook::roster::{Lookup, RosterStore};

#[test]
fn test_john_doe_is_passing() {
    let store = common::seeded_store();

    let report = check_passing_default(&store, "1111111-1").expect("John Doe should classify");
    assert_eq!(report.status, PassingStatus::Passing);
    assert_eq!(report.name, "John Doe");
    assert_eq!(report.average.round_dp(2), Decimal::new(8383, 2));
}

#[test]
fn test_jane_smith_is_failing() {
    let store = common::seeded_store();

    let report = check_passing_default(&store, "1111111-2").unwrap();
    assert_eq!(report.status, PassingStatus::Failing);
    assert_eq!(report.average, Decimal::new(455, 1));
}

#[test]
fn test_sample_roster_classification_order() {
    let store = common::seeded_store();

    let statuses: Vec<PassingStatus> = store
        .iter()
        .map(|s| check_passing_default(&store, &s.id).unwrap().status)
        .collect();

    use PassingStatus::{Failing as F, Passing as P};
    // Chris White averages 58.67 and fails
    assert_eq!(statuses, vec![P, F, P, P, F, P, F, P, F, P]);
}

#[test]
fn test_lookup_before_and_after_upsert() {
    let mut store = RosterStore::new();
    assert_eq!(store.find_by_id("2222222-1"), Lookup::NotFound { id: "2222222-1" });

    store.upsert("2222222-1", "New Student", common::quiz_sheet(&[60]));
    let record = store.find_by_id("2222222-1").found().expect("record after upsert");
    assert_eq!(record.name, "New Student");
}

#[test]
fn test_update_sample_student_changes_classification() {
    let mut store = common::seeded_store();

    let outcome = store.upsert("1111111-2", "Jane Smith", common::quiz_sheet(&[90, 80]));
    assert_eq!(
        outcome,
        UpsertOutcome::Updated { id: "1111111-2".into(), name: "Jane Smith".into() }
    );
    assert_eq!(store.len(), 10);

    let report = check_passing(&store, "1111111-2", Decimal::from(85)).unwrap();
    assert_eq!(report.status, PassingStatus::Passing);
}

#[test]
fn test_classifier_does_not_mask_not_found() {
    let store = common::seeded_store();
    assert_eq!(
        check_passing_default(&store, "1111111-99"),
        Err(RosterError::NotFound { id: "1111111-99".into() })
    );
}

#[test]
fn test_john_doe_prefix_sums_and_ranges() {
    let store = common::seeded_store();
    let record = store.find_by_id("1111111-1").found().unwrap();

    let sums = record_prefix_sum(record).unwrap();
    let expected: Vec<Decimal> = [82, 157, 242, 337, 415, 503].into_iter().map(Decimal::from).collect();
    assert_eq!(sums.prefix_sums, expected);
    assert_eq!(sums.labels[0], "Class Participation");

    // Assignment through Quiz #2
    assert_eq!(range_sum(&sums.prefix_sums, 1, 3).unwrap(), Decimal::from(255));
    assert_eq!(range_sum(&sums.prefix_sums, 0, 5).unwrap(), Decimal::from(503));
    assert!(matches!(
        range_sum(&sums.prefix_sums, 0, 6),
        Err(RosterError::OutOfRange { len: 6, .. })
    ));
}

#[test]
fn test_range_sum_with_fractional_scores() {
    let values = vec![Decimal::new(825, 1), Decimal::new(175, 1), Decimal::new(100, 1)];
    let prefix = compute_prefix_sum(&values).unwrap();

    assert_eq!(range_sum(&prefix, 1, 2).unwrap(), Decimal::new(275, 1));
}
