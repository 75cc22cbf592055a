//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` provided at the app root is the in-memory
//! face of the persisted session: route guards and permission-aware
//! components read it, the sign-in flow and logout write it. Hydration
//! from storage happens in a mount effect, so `loading` stays true for
//! exactly one tick and permission-gated content never renders before
//! the snapshot is in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::session::SessionStore;

/// Authentication state tracking the current user and loading status.
///
/// `roles`/`permissions` on the embedded user are login-time snapshots,
/// advisory for UI gating only; the server re-checks every sensitive
/// operation.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // Boots as loading so consumers treat permission checks as
        // unknown until storage hydration finishes.
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Exact-membership check against the user's permission snapshot.
    /// No user (or still loading) means `false`.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.permissions.iter().any(|p| p == permission))
    }

    /// Exact-membership check against the user's role snapshot.
    pub fn has_role(&self, role: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.roles.iter().any(|r| r == role))
    }

    /// True when at least one of `permissions` passes [`Self::has_permission`].
    pub fn has_any_permission<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        permissions
            .iter()
            .any(|permission| self.has_permission(permission.as_ref()))
    }
}

/// Create the auth signal, provide it as context, and hydrate it from
/// the session store on mount.
pub fn provide_auth_session(store: SessionStore) -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Mount effect: synchronous storage read, then loading = false.
    Effect::new(move || {
        let user = store.current_user();
        auth.set(AuthState { user, loading: false });
    });

    auth
}

/// Replace the in-memory user only. Durable writes stay with the
/// sign-in flow so it controls the write-before-navigate ordering.
pub fn set_user(auth: RwSignal<AuthState>, user: Option<User>) {
    auth.update(|state| state.user = user);
}

/// Re-fetch the current user from `/api/me` and sync both the signal
/// and the persisted snapshot (token and scheme preserved).
///
/// Failure handling: an authentication rejection clears the session
/// everywhere; a transport failure keeps the stored snapshot so a flaky
/// connection cannot log the user out. Errors are logged, never
/// propagated.
pub async fn refresh_user(auth: RwSignal<AuthState>, store: SessionStore) {
    let Some(session) = store.read() else {
        auth.update(|state| {
            state.user = None;
            state.loading = false;
        });
        return;
    };

    match crate::net::api::get_me(&session.authorization()).await {
        Ok(user) => {
            store.write(&session.token, &session.token_type, &user);
            auth.update(|state| {
                state.user = Some(user);
                state.loading = false;
            });
        }
        Err(err) if err.is_auth_rejection() => {
            leptos::logging::warn!("session rejected during refresh: {err}");
            store.clear();
            auth.update(|state| {
                state.user = None;
                state.loading = false;
            });
        }
        Err(err) => {
            leptos::logging::warn!("user refresh failed, keeping stored session: {err}");
        }
    }
}
