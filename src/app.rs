//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::AppLayout;
use crate::guards::{PublicOnly, RequireAuth, RequirePermission};
use crate::pages::{
    categories::CategoriesPage, dashboard::DashboardPage, not_found::NotFoundPage,
    permissions::PermissionsPage, reset_password::ResetPasswordPage,
    reset_password_confirm::ResetPasswordConfirmPage, role_permissions::RolePermissionsPage,
    roles::RolesPage, sign_in::SignInPage, unauthorized::UnauthorizedPage, users::UsersPage,
};
use crate::session::SessionStore;
use crate::state::auth::provide_auth_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and auth state contexts, then sets up
/// client-side routing with the three gate types wrapping each screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session store first: the auth provider hydrates from it and the
    // route guards read it on every navigation.
    let store = SessionStore::new();
    provide_context(store.clone());
    provide_auth_session(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/panaderia-admin.css"/>
        <Title text="Panadería Admin"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                // Public screens: signed-in users get bounced to the dashboard.
                <Route
                    path=StaticSegment("")
                    view=|| view! { <PublicOnly><SignInPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("reset-password")
                    view=|| view! { <PublicOnly><ResetPasswordPage/></PublicOnly> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("reset-password"))
                    view=|| view! { <PublicOnly><ResetPasswordConfirmPage/></PublicOnly> }
                />

                // Protected screens: anonymous visitors get bounced to sign-in.
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! {
                        <RequireAuth>
                            <AppLayout>
                                <DashboardPage/>
                            </AppLayout>
                        </RequireAuth>
                    }
                />
                <Route
                    path=StaticSegment("roles")
                    view=|| view! {
                        <RequireAuth>
                            <AppLayout>
                                <RequirePermission permission="admin.sidebar.roles.y.permisos">
                                    <RolesPage/>
                                </RequirePermission>
                            </AppLayout>
                        </RequireAuth>
                    }
                />
                <Route
                    path=(StaticSegment("roles"), ParamSegment("id"), StaticSegment("permisos"))
                    view=|| view! {
                        <RequireAuth>
                            <AppLayout>
                                <RequirePermission permission="admin.sidebar.roles.y.permisos">
                                    <RolePermissionsPage/>
                                </RequirePermission>
                            </AppLayout>
                        </RequireAuth>
                    }
                />
                <Route
                    path=StaticSegment("permisos")
                    view=|| view! {
                        <RequireAuth>
                            <AppLayout>
                                <RequirePermission permission="admin.sidebar.roles.y.permisos">
                                    <PermissionsPage/>
                                </RequirePermission>
                            </AppLayout>
                        </RequireAuth>
                    }
                />
                <Route
                    path=StaticSegment("usuarios")
                    view=|| view! {
                        <RequireAuth>
                            <AppLayout>
                                <RequirePermission permission="admin.sidebar.roles.y.permisos">
                                    <UsersPage/>
                                </RequirePermission>
                            </AppLayout>
                        </RequireAuth>
                    }
                />
                <Route
                    path=StaticSegment("categorias")
                    view=|| view! {
                        <RequireAuth>
                            <AppLayout>
                                <RequirePermission
                                    permission="admin.sidebar.productos.categorias"
                                    fallback=|| view! { <UnauthorizedPage/> }
                                >
                                    <CategoriesPage/>
                                </RequirePermission>
                            </AppLayout>
                        </RequireAuth>
                    }
                />
            </Routes>
        </Router>
    }
}
