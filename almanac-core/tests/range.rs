use almanac_core::{AlmanacError, Range};

#[test]
fn test_range_end_is_inclusive() {
    let range = Range::new(79, 14).unwrap();
    assert_eq!(range.start(), 79);
    assert_eq!(range.length(), 14);
    assert_eq!(range.end(), 92);
    assert!(range.contains(79));
    assert!(range.contains(92));
    assert!(!range.contains(78));
    assert!(!range.contains(93));
}

#[test]
fn test_single_value_range() {
    let range = Range::new(0, 1).unwrap();
    assert_eq!(range.end(), 0);
}

#[test]
fn test_invalid_range() {
    assert_eq!(
        Range::new(5, 0),
        Err(AlmanacError::InvalidRange {
            start: 5,
            length: 0
        })
    );
    assert!(Range::new(5, -3).is_err());
    assert!(Range::new(-1, 3).is_err());
    assert!(Range::new(i64::MAX, 2).is_err());
    assert!(Range::new(i64::MAX, 1).is_ok());
}

#[test]
fn test_range_equality_is_structural() {
    assert_eq!(Range::new(10, 3).unwrap(), Range::new(10, 3).unwrap());
    assert_ne!(Range::new(10, 3).unwrap(), Range::new(10, 4).unwrap());
}

#[test]
fn test_range_serde() {
    let range = Range::new(55, 13).unwrap();
    assert_eq!(serde_json::to_string(&range).unwrap(), "[55,13]");
    assert_eq!(serde_json::from_str::<Range>("[55,13]").unwrap(), range);
    assert!(serde_json::from_str::<Range>("[55,0]").is_err());
    assert!(serde_json::from_str::<Range>("[-1,4]").is_err());
}

#[test]
fn test_range_display() {
    assert_eq!(Range::new(55, 13).unwrap().to_string(), "55..=67");
}
