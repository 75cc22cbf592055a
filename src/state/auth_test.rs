use super::*;

fn user_with_permissions(permissions: &[&str]) -> User {
    User {
        id: 1,
        nombre: "Ana".to_owned(),
        email: "a@b.com".to_owned(),
        roles: vec!["Administrador".to_owned()],
        permissions: permissions.iter().map(|&p| p.to_owned()).collect(),
    }
}

fn loaded_state(permissions: &[&str]) -> AuthState {
    AuthState {
        user: Some(user_with_permissions(permissions)),
        loading: false,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_has_no_user_and_is_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
}

// =============================================================
// has_permission
// =============================================================

#[test]
fn has_permission_is_exact_membership() {
    let state = loaded_state(&["a", "b"]);
    assert!(state.has_permission("a"));
    assert!(state.has_permission("b"));
    assert!(!state.has_permission("c"));
}

#[test]
fn has_permission_does_no_prefix_matching() {
    let state = loaded_state(&["admin.sidebar.roles.y.permisos"]);
    assert!(state.has_permission("admin.sidebar.roles.y.permisos"));
    assert!(!state.has_permission("admin.sidebar"));
    assert!(!state.has_permission("admin.sidebar.roles.y.permisos.extra"));
}

#[test]
fn has_permission_is_false_without_user() {
    let state = AuthState { user: None, loading: false };
    assert!(!state.has_permission("a"));
}

// =============================================================
// has_role
// =============================================================

#[test]
fn has_role_checks_role_snapshot() {
    let state = loaded_state(&[]);
    assert!(state.has_role("Administrador"));
    assert!(!state.has_role("Cajero"));
}

#[test]
fn has_role_is_false_without_user() {
    let state = AuthState { user: None, loading: true };
    assert!(!state.has_role("Administrador"));
}

// =============================================================
// has_any_permission
// =============================================================

#[test]
fn has_any_permission_is_true_when_one_matches() {
    let state = loaded_state(&["a", "b"]);
    assert!(state.has_any_permission(&["c", "b"]));
}

#[test]
fn has_any_permission_is_false_when_none_match() {
    let state = loaded_state(&["a", "b"]);
    assert!(!state.has_any_permission(&["c", "d"]));
}

#[test]
fn has_any_permission_is_false_for_empty_list() {
    let state = loaded_state(&["a"]);
    assert!(!state.has_any_permission::<&str>(&[]));
}
