//! Roles table with create, delete, and per-role permission links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::confirm_delete_modal::ConfirmDeleteModal;
use crate::components::name_modal::EntityNameModal;
use crate::net::types::Role;
use crate::session::SessionStore;
use crate::util::filter::matches_filter;

async fn load_roles(store: SessionStore, load_error: RwSignal<String>) -> Vec<Role> {
    let Some(session) = store.read() else {
        load_error.set("Token no encontrado".to_owned());
        return Vec::new();
    };
    match crate::net::api::fetch_roles(&session.authorization()).await {
        Ok(list) => {
            load_error.set(String::new());
            list
        }
        Err(err) => {
            leptos::logging::warn!("error cargando roles: {err}");
            load_error.set(err.user_message());
            Vec::new()
        }
    }
}

/// Roles administration screen.
#[component]
pub fn RolesPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let load_error = RwSignal::new(String::new());
    let page_error = RwSignal::new(String::new());
    let filter_text = RwSignal::new(String::new());

    let roles = LocalResource::new({
        let store = store.clone();
        move || load_roles(store.clone(), load_error)
    });

    // Create dialog state.
    let show_create = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let creating = RwSignal::new(false);

    let on_create_open = move |_| {
        new_name.set(String::new());
        page_error.set(String::new());
        show_create.set(true);
    };
    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_create_submit = Callback::new({
        let store = store.clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let store = store.clone();
                creating.set(true);
                leptos::task::spawn_local(async move {
                    let Some(session) = store.read() else {
                        creating.set(false);
                        return;
                    };
                    let name = new_name.get_untracked().trim().to_owned();
                    match crate::net::api::create_role(&session.authorization(), &name).await {
                        Ok(_) => {
                            show_create.set(false);
                            roles.refetch();
                        }
                        Err(err) => page_error.set(err.user_message()),
                    }
                    creating.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &store;
            }
        }
    });

    // Delete dialog state.
    let delete_target = RwSignal::new(None::<Role>);
    let deleting = RwSignal::new(false);

    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new({
        let store = store.clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let Some(target) = delete_target.get_untracked() else {
                    return;
                };
                let store = store.clone();
                deleting.set(true);
                leptos::task::spawn_local(async move {
                    let Some(session) = store.read() else {
                        deleting.set(false);
                        return;
                    };
                    match crate::net::api::delete_role(&session.authorization(), target.id).await {
                        Ok(_) => {
                            delete_target.set(None);
                            roles.refetch();
                        }
                        Err(err) => page_error.set(err.user_message()),
                    }
                    deleting.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &store;
            }
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Roles"</h1>
                <div class="page__toolbar">
                    <input
                        class="page__filter"
                        type="text"
                        placeholder="Buscar..."
                        prop:value=move || filter_text.get()
                        on:input=move |ev| filter_text.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=on_create_open>
                        "+ Nuevo Rol"
                    </button>
                </div>
            </header>

            <Show when=move || !load_error.get().is_empty()>
                <p class="page__error">{move || load_error.get()}</p>
            </Show>
            <Show when=move || !page_error.get().is_empty()>
                <p class="page__error">{move || page_error.get()}</p>
            </Show>

            <Suspense fallback=move || view! { <p class="table-status">"Cargando roles..."</p> }>
                {move || {
                    roles
                        .get()
                        .map(|list| {
                            let needle = filter_text.get();
                            let rows: Vec<Role> = list
                                .into_iter()
                                .filter(|role| {
                                    matches_filter(&[&role.id.to_string(), &role.name], &needle)
                                })
                                .collect();
                            if rows.is_empty() {
                                view! { <p class="table-status">"No hay roles"</p> }.into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th class="data-table__id">"ID"</th>
                                                <th>"Rol"</th>
                                                <th class="data-table__options">"Opciones"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|role| {
                                                    let detail_href = format!(
                                                        "/roles/{}/permisos?nombre={}",
                                                        role.id,
                                                        role.name.replace(' ', "%20"),
                                                    );
                                                    let target = role.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{role.id}</td>
                                                            <td>{role.name.clone()}</td>
                                                            <td class="data-table__actions">
                                                                <A href=detail_href attr:class="btn btn--small">
                                                                    "Permisos"
                                                                </A>
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click=move |_| {
                                                                        delete_target.set(Some(target.clone()));
                                                                    }
                                                                >
                                                                    "Eliminar"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <EntityNameModal
                    title="Nuevo Rol"
                    label="Nombre del rol"
                    name=new_name
                    busy=creating
                    on_cancel=on_create_cancel
                    on_submit=on_create_submit
                />
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <ConfirmDeleteModal
                    title="Eliminar Rol"
                    message=format!(
                        "¿Eliminar el rol \"{}\"? Esta acción no se puede deshacer.",
                        delete_target.get().map(|role| role.name).unwrap_or_default(),
                    )
                    busy=deleting
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}
