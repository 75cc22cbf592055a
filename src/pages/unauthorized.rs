//! Access-denied page, usable as a permission-gate fallback.

use leptos::prelude::*;
use leptos_router::components::A;

/// Shown when a signed-in user lacks the permission for a screen.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"Acceso denegado"</h1>
            <p>"No tienes permisos para ver esta sección."</p>
            <A href="/dashboard" attr:class="btn btn--primary">
                "Volver al inicio"
            </A>
        </div>
    }
}
