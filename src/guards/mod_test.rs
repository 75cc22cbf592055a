use super::*;
use crate::net::types::User;

fn loaded(permissions: &[&str]) -> AuthState {
    AuthState {
        user: Some(User {
            id: 1,
            nombre: "Ana".to_owned(),
            email: "a@b.com".to_owned(),
            roles: Vec::new(),
            permissions: permissions.iter().map(|&p| p.to_owned()).collect(),
        }),
        loading: false,
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|&p| p.to_owned()).collect()
}

// =============================================================
// Public / protected redirect predicates
// =============================================================

#[test]
fn public_gate_redirects_only_when_authenticated() {
    assert!(should_redirect_public(true));
    assert!(!should_redirect_public(false));
}

#[test]
fn protected_gate_redirects_only_when_anonymous() {
    assert!(should_redirect_protected(false));
    assert!(!should_redirect_protected(true));
}

// =============================================================
// check_access: single permission
// =============================================================

#[test]
fn single_permission_grants_on_membership() {
    let state = loaded(&["a"]);
    assert!(check_access(&state, Some("a"), &[], false));
    assert!(!check_access(&state, Some("b"), &[], false));
}

#[test]
fn empty_configuration_grants_access() {
    let state = loaded(&[]);
    assert!(check_access(&state, None, &[], false));
    assert!(check_access(&state, None, &[], true));
}

// =============================================================
// check_access: list semantics
// =============================================================

#[test]
fn list_with_require_all_needs_every_permission() {
    let both = loaded(&["a", "b"]);
    let one = loaded(&["a"]);
    let list = owned(&["a", "b"]);
    assert!(check_access(&both, None, &list, true));
    assert!(!check_access(&one, None, &list, true));
}

#[test]
fn list_without_require_all_needs_any_permission() {
    let one = loaded(&["b"]);
    let none = loaded(&["x"]);
    let list = owned(&["a", "b"]);
    assert!(check_access(&one, None, &list, false));
    assert!(!check_access(&none, None, &list, false));
}

// =============================================================
// check_access: single AND list tie-break
// =============================================================

#[test]
fn single_permission_failure_vetoes_even_a_passing_list() {
    let state = loaded(&["a", "b"]);
    let list = owned(&["a", "b"]);
    assert!(!check_access(&state, Some("missing"), &list, false));
    assert!(!check_access(&state, Some("missing"), &list, true));
}

#[test]
fn list_failure_vetoes_even_a_passing_single_permission() {
    let state = loaded(&["a"]);
    let list = owned(&["x", "y"]);
    assert!(!check_access(&state, Some("a"), &list, false));
}

#[test]
fn both_mechanisms_passing_grants_access() {
    let state = loaded(&["a", "b"]);
    assert!(check_access(&state, Some("a"), &owned(&["b"]), false));
}

// =============================================================
// gate_outcome
// =============================================================

#[test]
fn gate_is_loading_while_provider_loads_even_without_user() {
    let state = AuthState { user: None, loading: true };
    assert_eq!(
        gate_outcome(&state, Some("a"), &[], false),
        GateOutcome::Loading
    );
}

#[test]
fn gate_never_denies_while_loading_regardless_of_checks() {
    let state = AuthState { user: None, loading: true };
    let list = owned(&["a", "b"]);
    assert_eq!(gate_outcome(&state, None, &list, true), GateOutcome::Loading);
}

#[test]
fn gate_denies_after_loading_when_check_fails() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(
        gate_outcome(&state, Some("a"), &[], false),
        GateOutcome::Denied
    );
}

#[test]
fn gate_grants_after_loading_when_check_passes() {
    let state = loaded(&["a"]);
    assert_eq!(
        gate_outcome(&state, Some("a"), &[], false),
        GateOutcome::Granted
    );
}
