use super::*;

#[test]
fn empty_value_is_missing() {
    assert!(is_missing(""));
}

#[test]
fn whitespace_only_value_is_missing() {
    assert!(is_missing("   \t\n"));
}

#[test]
fn filled_value_is_not_missing() {
    assert!(!is_missing("Иванов"));
    assert!(!is_missing("  x  "));
}
