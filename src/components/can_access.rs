//! Capability-gated render wrapper for UI fragments.

use leptos::prelude::*;

use crate::guards::check_access;
use crate::state::auth::AuthState;

/// Renders its children only when the permission check passes, and the
/// `fallback` (nothing by default) otherwise.
///
/// Same contract as the permission route gate: `permission` and
/// `permissions` compose by logical AND, and `require_all` selects
/// AND/OR semantics within the list only. Unlike the route gate this
/// wrapper never redirects and shows no interstitial; while auth state
/// is still loading the check simply fails and the fallback renders.
#[component]
pub fn CanAccess(
    /// Single permission that must be present.
    #[prop(optional, into)]
    permission: Option<String>,
    /// Permission list checked with AND (`require_all`) or OR semantics.
    #[prop(optional)]
    permissions: Vec<String>,
    /// AND/OR switch for the `permissions` list. Defaults to OR.
    #[prop(optional)]
    require_all: bool,
    /// Rendered when access is denied.
    #[prop(optional, into)]
    fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        if check_access(&auth.get(), permission.as_deref(), &permissions, require_all) {
            children().into_any()
        } else {
            match &fallback {
                Some(fallback) => fallback.run().into_any(),
                None => ().into_any(),
            }
        }
    }
}
