//! Authenticated landing page with capability-gated shortcuts.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::can_access::CanAccess;
use crate::state::auth::AuthState;

/// Dashboard landing route behind the authenticated gate.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Bienvenido".to_owned(), |user| format!("Bienvenido, {}", user.nombre))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <p class="dashboard-page__subtitle">"Panel administrativo de la panadería"</p>
            </header>

            <div class="dashboard-page__cards">
                <CanAccess permission="admin.sidebar.roles.y.permisos">
                    <A href="/roles" attr:class="dashboard-card">
                        <h2>"Roles"</h2>
                        <p>"Gestiona los roles y sus permisos"</p>
                    </A>
                    <A href="/usuarios" attr:class="dashboard-card">
                        <h2>"Usuarios"</h2>
                        <p>"Altas, bajas y roles del personal"</p>
                    </A>
                </CanAccess>
                <CanAccess permission="admin.sidebar.productos.categorias">
                    <A href="/categorias" attr:class="dashboard-card">
                        <h2>"Categorías"</h2>
                        <p>"Configura las categorías de productos"</p>
                    </A>
                </CanAccess>
            </div>
        </div>
    }
}
