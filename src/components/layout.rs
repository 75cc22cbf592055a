//! Protected-area shell: sidebar navigation, top bar, content slot.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::can_access::CanAccess;
use crate::components::user_dropdown::UserDropdown;
use crate::util::dark_mode;

/// Layout for every screen behind the authenticated gate. Sidebar
/// entries are capability-gated so users only see sections their
/// permission snapshot allows; the server still enforces access.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let dark = RwSignal::new(false);

    // Mount: pick up the persisted theme preference.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        dark.set(enabled);
    });

    let on_toggle_dark = move |_| {
        dark.set(dark_mode::toggle(dark.get_untracked()));
    };

    view! {
        <div class="layout">
            <aside class="sidebar">
                <div class="sidebar__brand">"Panadería Admin"</div>
                <nav class="sidebar__nav">
                    <A href="/dashboard">"Inicio"</A>
                    <CanAccess permission="admin.sidebar.roles.y.permisos">
                        <A href="/roles">"Roles"</A>
                        <A href="/permisos">"Permisos"</A>
                        <A href="/usuarios">"Usuarios"</A>
                    </CanAccess>
                    <CanAccess permission="admin.sidebar.productos.categorias">
                        <A href="/categorias">"Categorías"</A>
                    </CanAccess>
                </nav>
            </aside>
            <div class="layout__main">
                <header class="topbar">
                    <div class="topbar__spacer"></div>
                    <button class="topbar__dark-toggle" on:click=on_toggle_dark title="Cambiar tema">
                        {move || if dark.get() { "☾" } else { "☀" }}
                    </button>
                    <UserDropdown/>
                </header>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}
