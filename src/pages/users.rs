//! Back-office user administration: table, create, edit.

use leptos::prelude::*;

use crate::components::user_modal::{EditUserModal, NewUserModal};
use crate::net::types::{EditUser, NewUser, Role, Usuario};
use crate::session::SessionStore;
use crate::util::filter::matches_filter;

async fn load_users(store: SessionStore, load_error: RwSignal<String>) -> Vec<Usuario> {
    let Some(session) = store.read() else {
        load_error.set("Token no encontrado".to_owned());
        return Vec::new();
    };
    match crate::net::api::fetch_users(&session.authorization()).await {
        Ok(list) => {
            load_error.set(String::new());
            list
        }
        Err(err) => {
            leptos::logging::warn!("error cargando usuarios: {err}");
            load_error.set(err.user_message());
            Vec::new()
        }
    }
}

async fn load_roles(store: SessionStore) -> Vec<Role> {
    let Some(session) = store.read() else {
        return Vec::new();
    };
    crate::net::api::fetch_roles(&session.authorization())
        .await
        .unwrap_or_else(|err| {
            leptos::logging::warn!("error cargando roles: {err}");
            Vec::new()
        })
}

/// Users administration screen.
#[component]
pub fn UsersPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let load_error = RwSignal::new(String::new());
    let page_error = RwSignal::new(String::new());
    let filter_text = RwSignal::new(String::new());

    let users = LocalResource::new({
        let store = store.clone();
        move || load_users(store.clone(), load_error)
    });
    let roles = LocalResource::new({
        let store = store.clone();
        move || load_roles(store.clone())
    });
    let role_options = Signal::derive(move || roles.get().unwrap_or_default());

    // Create dialog state.
    let show_create = RwSignal::new(false);
    let creating = RwSignal::new(false);

    let on_create_open = move |_| {
        page_error.set(String::new());
        show_create.set(true);
    };
    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_create_submit = Callback::new({
        let store = store.clone();
        move |form: NewUser| {
            #[cfg(feature = "hydrate")]
            {
                let store = store.clone();
                creating.set(true);
                leptos::task::spawn_local(async move {
                    let Some(session) = store.read() else {
                        creating.set(false);
                        return;
                    };
                    match crate::net::api::create_user(&session.authorization(), &form).await {
                        Ok(_) => {
                            show_create.set(false);
                            users.refetch();
                        }
                        Err(err) => page_error.set(err.user_message()),
                    }
                    creating.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&store, &form);
            }
        }
    });

    // Edit dialog state.
    let edit_target = RwSignal::new(None::<Usuario>);
    let updating = RwSignal::new(false);

    let on_edit_cancel = Callback::new(move |()| edit_target.set(None));
    let on_edit_submit = Callback::new({
        let store = store.clone();
        move |form: EditUser| {
            #[cfg(feature = "hydrate")]
            {
                let Some(target) = edit_target.get_untracked() else {
                    return;
                };
                let store = store.clone();
                updating.set(true);
                leptos::task::spawn_local(async move {
                    let Some(session) = store.read() else {
                        updating.set(false);
                        return;
                    };
                    match crate::net::api::update_user(&session.authorization(), target.id, &form)
                        .await
                    {
                        Ok(_) => {
                            edit_target.set(None);
                            users.refetch();
                        }
                        Err(err) => page_error.set(err.user_message()),
                    }
                    updating.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&store, &form);
            }
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Usuarios"</h1>
                <div class="page__toolbar">
                    <input
                        class="page__filter"
                        type="text"
                        placeholder="Buscar..."
                        prop:value=move || filter_text.get()
                        on:input=move |ev| filter_text.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=on_create_open>
                        "+ Nuevo Usuario"
                    </button>
                </div>
            </header>

            <Show when=move || !load_error.get().is_empty()>
                <p class="page__error">{move || load_error.get()}</p>
            </Show>
            <Show when=move || !page_error.get().is_empty()>
                <p class="page__error">{move || page_error.get()}</p>
            </Show>

            <Suspense fallback=move || view! { <p class="table-status">"Cargando usuarios..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|list| {
                            let needle = filter_text.get();
                            let rows: Vec<Usuario> = list
                                .into_iter()
                                .filter(|usuario| {
                                    matches_filter(
                                        &[&usuario.nombre, &usuario.correo, &usuario.rol],
                                        &needle,
                                    )
                                })
                                .collect();
                            if rows.is_empty() {
                                view! { <p class="table-status">"No hay usuarios"</p> }.into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th class="data-table__id">"ID"</th>
                                                <th>"Nombre"</th>
                                                <th>"Correo"</th>
                                                <th>"Rol"</th>
                                                <th>"Estado"</th>
                                                <th class="data-table__options">"Opciones"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|usuario| {
                                                    let target = usuario.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{usuario.id}</td>
                                                            <td>{usuario.nombre.clone()}</td>
                                                            <td>{usuario.correo.clone()}</td>
                                                            <td>{usuario.rol.clone()}</td>
                                                            <td>
                                                                <span
                                                                    class="badge"
                                                                    class=("badge--active", usuario.estado)
                                                                    class=("badge--inactive", !usuario.estado)
                                                                >
                                                                    {if usuario.estado { "Activo" } else { "Inactivo" }}
                                                                </span>
                                                            </td>
                                                            <td class="data-table__actions">
                                                                <button
                                                                    class="btn btn--small"
                                                                    on:click=move |_| {
                                                                        edit_target.set(Some(target.clone()));
                                                                    }
                                                                >
                                                                    "Editar"
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
                <NewUserModal
                    roles=role_options
                    busy=creating
                    on_cancel=on_create_cancel
                    on_submit=on_create_submit
                />
            </Show>

            {move || {
                edit_target
                    .get()
                    .map(|usuario| {
                        view! {
                            <EditUserModal
                                usuario=usuario
                                roles=role_options
                                busy=updating
                                on_cancel=on_edit_cancel
                                on_submit=on_edit_submit
                            />
                        }
                    })
            }}
        </div>
    }
}
