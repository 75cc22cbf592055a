//! 404 fallback page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Rendered for any route the router does not recognize.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"404"</h1>
            <p>"La página que buscas no existe."</p>
            <A href="/dashboard" attr:class="btn btn--primary">
                "Ir al inicio"
            </A>
        </div>
    }
}
