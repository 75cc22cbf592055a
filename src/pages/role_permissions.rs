//! Permissions attached to a single role, with attach and detach.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::net::types::Permiso;
use crate::session::SessionStore;
use crate::util::filter::matches_filter;

async fn load_role_permissions(
    store: SessionStore,
    role_id: Option<i64>,
    load_error: RwSignal<String>,
) -> Vec<Permiso> {
    let Some(role_id) = role_id else {
        return Vec::new();
    };
    let Some(session) = store.read() else {
        load_error.set("Token no encontrado".to_owned());
        return Vec::new();
    };
    match crate::net::api::fetch_role_permissions(&session.authorization(), role_id).await {
        Ok(list) => {
            load_error.set(String::new());
            list
        }
        Err(err) => {
            leptos::logging::warn!("error cargando permisos del rol: {err}");
            load_error.set(err.user_message());
            Vec::new()
        }
    }
}

async fn load_catalog(store: SessionStore) -> Vec<Permiso> {
    let Some(session) = store.read() else {
        return Vec::new();
    };
    crate::net::api::fetch_permissions(&session.authorization())
        .await
        .unwrap_or_else(|err| {
            leptos::logging::warn!("error cargando catálogo de permisos: {err}");
            Vec::new()
        })
}

/// Per-role permission screen, reached from the roles table.
#[component]
pub fn RolePermissionsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let params = use_params_map();
    let query = use_query_map();

    let role_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|value| value.parse::<i64>().ok()))
    });
    let role_name = Memo::new(move |_| {
        query.with(|q| q.get("nombre").unwrap_or_default().replace("%20", " "))
    });

    let load_error = RwSignal::new(String::new());
    let page_error = RwSignal::new(String::new());
    let filter_text = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let attached = LocalResource::new({
        let store = store.clone();
        move || load_role_permissions(store.clone(), role_id.get(), load_error)
    });
    let catalog = LocalResource::new({
        let store = store.clone();
        move || load_catalog(store.clone())
    });

    // Attach dialog state.
    let show_attach = RwSignal::new(false);
    let selected = RwSignal::new(String::new());

    let on_attach_open = move |_| {
        selected.set(String::new());
        page_error.set(String::new());
        show_attach.set(true);
    };
    let on_attach_cancel = Callback::new(move |()| show_attach.set(false));
    let on_attach_submit = Callback::new({
        let store = store.clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let Some(role) = role_id.get_untracked() else {
                    return;
                };
                let Ok(permiso_id) = selected.get_untracked().parse::<i64>() else {
                    return;
                };
                let store = store.clone();
                busy.set(true);
                leptos::task::spawn_local(async move {
                    let Some(session) = store.read() else {
                        busy.set(false);
                        return;
                    };
                    match crate::net::api::attach_permission(
                        &session.authorization(),
                        role,
                        permiso_id,
                    )
                    .await
                    {
                        Ok(_) => {
                            show_attach.set(false);
                            attached.refetch();
                        }
                        Err(err) => page_error.set(err.user_message()),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &store;
            }
        }
    });

    let on_detach = Callback::new({
        let store = store.clone();
        move |permiso_id: i64| {
            #[cfg(feature = "hydrate")]
            {
                let Some(role) = role_id.get_untracked() else {
                    return;
                };
                let store = store.clone();
                busy.set(true);
                leptos::task::spawn_local(async move {
                    let Some(session) = store.read() else {
                        busy.set(false);
                        return;
                    };
                    match crate::net::api::detach_permission(
                        &session.authorization(),
                        role,
                        permiso_id,
                    )
                    .await
                    {
                        Ok(_) => attached.refetch(),
                        Err(err) => page_error.set(err.user_message()),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&store, permiso_id);
            }
        }
    });

    // Catalog entries not yet attached to this role.
    let available = Signal::derive(move || {
        let attached_ids: Vec<i64> = attached
            .get()
            .unwrap_or_default()
            .iter()
            .map(|permiso| permiso.id)
            .collect();
        catalog
            .get()
            .unwrap_or_default()
            .into_iter()
            .filter(|permiso| !attached_ids.contains(&permiso.id))
            .collect::<Vec<Permiso>>()
    });

    view! {
        <div class="page">
            <header class="page__header">
                <div>
                    <h1>"Permisos del Rol"</h1>
                    <p class="page__subtitle">
                        "Rol: "
                        <strong>{move || role_name.get()}</strong>
                    </p>
                </div>
                <div class="page__toolbar">
                    <input
                        class="page__filter"
                        type="text"
                        placeholder="Buscar..."
                        prop:value=move || filter_text.get()
                        on:input=move |ev| filter_text.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=on_attach_open>
                        "+ Agregar Permiso"
                    </button>
                    <A href="/roles" attr:class="btn">
                        "Volver"
                    </A>
                </div>
            </header>

            <Show when=move || role_id.get().is_none()>
                <p class="page__error">"Rol inválido"</p>
            </Show>
            <Show when=move || !load_error.get().is_empty()>
                <p class="page__error">{move || load_error.get()}</p>
            </Show>
            <Show when=move || !page_error.get().is_empty()>
                <p class="page__error">{move || page_error.get()}</p>
            </Show>

            <Suspense fallback=move || view! { <p class="table-status">"Cargando permisos..."</p> }>
                {move || {
                    attached
                        .get()
                        .map(|list| {
                            let needle = filter_text.get();
                            let rows: Vec<Permiso> = list
                                .into_iter()
                                .filter(|permiso| {
                                    matches_filter(
                                        &[&permiso.id.to_string(), &permiso.name],
                                        &needle,
                                    )
                                })
                                .collect();
                            if rows.is_empty() {
                                view! { <p class="table-status">"No hay permisos asignados"</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th class="data-table__id">"ID"</th>
                                                <th>"Permiso"</th>
                                                <th class="data-table__options">"Opciones"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|permiso| {
                                                    let permiso_id = permiso.id;
                                                    view! {
                                                        <tr>
                                                            <td>{permiso.id}</td>
                                                            <td class="data-table__mono">{permiso.name.clone()}</td>
                                                            <td class="data-table__actions">
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    disabled=move || busy.get()
                                                                    on:click=move |_| on_detach.run(permiso_id)
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

            <Show when=move || show_attach.get()>
                <AttachPermissionDialog
                    available=available
                    selected=selected
                    busy=busy
                    on_cancel=on_attach_cancel
                    on_submit=on_attach_submit
                />
            </Show>
        </div>
    }
}

/// Dialog selecting one catalog permission to attach to the role.
#[component]
fn AttachPermissionDialog(
    #[prop(into)] available: Signal<Vec<Permiso>>,
    selected: RwSignal<String>,
    busy: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        if selected.get().is_empty() || busy.get() {
            return;
        }
        on_submit.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Agregar Permiso"</h2>
                <label class="dialog__label">
                    "Permiso"
                    <select
                        class="dialog__input"
                        prop:value=move || selected.get()
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        <option value="">"Selecciona un permiso"</option>
                        {move || {
                            available
                                .get()
                                .into_iter()
                                .map(|permiso| {
                                    view! {
                                        <option value=permiso.id.to_string()>{permiso.name}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <Show when=move || available.get().is_empty()>
                    <p class="dialog__message">"No quedan permisos por asignar"</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" disabled=move || busy.get() on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if busy.get() { "Agregando..." } else { "Agregar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
