//! Route gates deciding render-vs-redirect from session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three gates wrap the route tree: `PublicOnly` keeps signed-in users
//! off the auth screens, `RequireAuth` keeps anonymous visitors out of
//! the back office, and `RequirePermission` gates individual screens on
//! permission snapshots. All three are UX only — the server re-checks
//! authorization on every request — and none of them performs network
//! calls: authentication is a synchronous [`SessionStore`] read, so
//! route rendering never blocks on the network.
//!
//! DESIGN
//! ======
//! Decisions are pure functions over state; the components are thin
//! wrappers that navigate in an effect. That keeps every branch of the
//! gating protocol testable without a browser.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::SessionStore;
use crate::state::auth::AuthState;

/// Landing route for authenticated users.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Sign-in route for anonymous users.
pub const LOGIN_ROUTE: &str = "/";

/// Outcome of the permission gate for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Auth state not hydrated yet; show an interstitial, never redirect.
    Loading,
    Granted,
    Denied,
}

/// A signed-in user on a public-only page gets sent to the dashboard.
pub fn should_redirect_public(authenticated: bool) -> bool {
    authenticated
}

/// An anonymous visitor on a protected page gets sent to sign-in.
pub fn should_redirect_protected(authenticated: bool) -> bool {
    !authenticated
}

/// Combined access check for the permission gate and [`CanAccess`].
///
/// The single `permission` and the `permissions` list compose by
/// logical AND: when both are supplied, the single permission must pass
/// *and* the list check must pass. `require_all` only selects AND/OR
/// semantics *within* the list. An empty configuration grants access.
///
/// [`CanAccess`]: crate::components::can_access::CanAccess
pub fn check_access(
    state: &AuthState,
    permission: Option<&str>,
    permissions: &[String],
    require_all: bool,
) -> bool {
    if let Some(permission) = permission {
        if !state.has_permission(permission) {
            return false;
        }
    }
    if !permissions.is_empty() {
        let list_passes = if require_all {
            permissions.iter().all(|p| state.has_permission(p))
        } else {
            permissions.iter().any(|p| state.has_permission(p))
        };
        if !list_passes {
            return false;
        }
    }
    true
}

/// Permission-gate decision: `Loading` until the provider has hydrated,
/// then [`check_access`].
pub fn gate_outcome(
    state: &AuthState,
    permission: Option<&str>,
    permissions: &[String],
    require_all: bool,
) -> GateOutcome {
    if state.loading {
        GateOutcome::Loading
    } else if check_access(state, permission, permissions, require_all) {
        GateOutcome::Granted
    } else {
        GateOutcome::Denied
    }
}

fn replace_navigation() -> NavigateOptions {
    let mut options = NavigateOptions::default();
    options.replace = true;
    options
}

/// Public-only gate: renders its children for anonymous visitors and
/// redirects signed-in users to the dashboard.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let authenticated = store.is_authenticated();

    Effect::new(move || {
        if should_redirect_public(authenticated) {
            navigate(DASHBOARD_ROUTE, replace_navigation());
        }
    });

    move || {
        if should_redirect_public(authenticated) {
            ().into_any()
        } else {
            children().into_any()
        }
    }
}

/// Authenticated-only gate: renders its children for signed-in users
/// and redirects anonymous visitors to sign-in.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let authenticated = store.is_authenticated();

    Effect::new(move || {
        if should_redirect_protected(authenticated) {
            navigate(LOGIN_ROUTE, replace_navigation());
        }
    });

    move || {
        if should_redirect_protected(authenticated) {
            ().into_any()
        } else {
            children().into_any()
        }
    }
}

/// Permission gate for a protected screen. Mount inside [`RequireAuth`].
///
/// While the auth provider is loading this renders a spinner and never
/// redirects, so first paint cannot flash-redirect before permissions
/// are known. Once loaded, a failed check renders `fallback` when one
/// is supplied and otherwise redirects to the dashboard.
///
/// `permission` and `permissions` compose by logical AND; `require_all`
/// applies to the list only (see [`check_access`]).
#[component]
pub fn RequirePermission(
    /// Single permission that must be present.
    #[prop(optional, into)]
    permission: Option<String>,
    /// Permission list checked with AND (`require_all`) or OR semantics.
    #[prop(optional)]
    permissions: Vec<String>,
    /// AND/OR switch for the `permissions` list. Defaults to OR.
    #[prop(optional)]
    require_all: bool,
    /// Rendered instead of redirecting when access is denied.
    #[prop(optional, into)]
    fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let has_fallback = fallback.is_some();

    let effect_permission = permission.clone();
    let effect_permissions = permissions.clone();
    Effect::new(move || {
        let outcome = gate_outcome(
            &auth.get(),
            effect_permission.as_deref(),
            &effect_permissions,
            require_all,
        );
        if outcome == GateOutcome::Denied && !has_fallback {
            navigate(DASHBOARD_ROUTE, replace_navigation());
        }
    });

    move || {
        match gate_outcome(&auth.get(), permission.as_deref(), &permissions, require_all) {
            GateOutcome::Loading => view! {
                <div class="gate-loading">
                    <div class="gate-loading__spinner"></div>
                </div>
            }
            .into_any(),
            GateOutcome::Granted => children().into_any(),
            GateOutcome::Denied => match &fallback {
                Some(fallback) => fallback.run().into_any(),
                None => ().into_any(),
            },
        }
    }
}
