use super::*;

#[test]
fn empty_needle_matches_everything() {
    assert!(matches_filter(&["Pan dulce"], ""));
    assert!(matches_filter(&[], "   "));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(matches_filter(&["Administrador"], "ADMIN"));
    assert!(matches_filter(&["Cajero"], "caje"));
}

#[test]
fn any_column_can_match() {
    assert!(matches_filter(&["Ana", "ana@panaderia.com"], "panaderia"));
    assert!(!matches_filter(&["Ana", "ana@panaderia.com"], "luis"));
}

#[test]
fn needle_is_trimmed_before_matching() {
    assert!(matches_filter(&["Bollería"], "  bollería "));
}
