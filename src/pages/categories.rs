//! Product-category configuration: table, create, edit.

use leptos::prelude::*;

use crate::components::name_estado_modal::EntityNameEstadoModal;
use crate::components::name_modal::EntityNameModal;
use crate::net::types::Categoria;
use crate::session::SessionStore;
use crate::util::filter::matches_filter;

async fn load_categories(store: SessionStore, load_error: RwSignal<String>) -> Vec<Categoria> {
    let Some(session) = store.read() else {
        load_error.set("Token no encontrado".to_owned());
        return Vec::new();
    };
    match crate::net::api::fetch_categories(&session.authorization()).await {
        Ok(list) => {
            load_error.set(String::new());
            list
        }
        Err(err) => {
            leptos::logging::warn!("error cargando categorías: {err}");
            load_error.set(err.user_message());
            Vec::new()
        }
    }
}

/// Category configuration screen.
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let load_error = RwSignal::new(String::new());
    let page_error = RwSignal::new(String::new());
    let filter_text = RwSignal::new(String::new());

    let categorias = LocalResource::new({
        let store = store.clone();
        move || load_categories(store.clone(), load_error)
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
                    let nombre = new_name.get_untracked().trim().to_owned();
                    match crate::net::api::create_category(&session.authorization(), &nombre).await
                    {
                        Ok(_) => {
                            show_create.set(false);
                            categorias.refetch();
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

    // Edit dialog state.
    let edit_target = RwSignal::new(None::<Categoria>);
    let edit_name = RwSignal::new(String::new());
    let edit_estado = RwSignal::new(true);
    let updating = RwSignal::new(false);

    let on_edit_open = Callback::new(move |categoria: Categoria| {
        edit_name.set(categoria.nombre.clone());
        edit_estado.set(categoria.estado);
        page_error.set(String::new());
        edit_target.set(Some(categoria));
    });
    let on_edit_cancel = Callback::new(move |()| edit_target.set(None));
    let on_edit_submit = Callback::new({
        let store = store.clone();
        move |()| {
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
                    let nombre = edit_name.get_untracked().trim().to_owned();
                    let estado = edit_estado.get_untracked();
                    match crate::net::api::update_category(
                        &session.authorization(),
                        target.id,
                        &nombre,
                        estado,
                    )
                    .await
                    {
                        Ok(_) => {
                            edit_target.set(None);
                            categorias.refetch();
                        }
                        Err(err) => page_error.set(err.user_message()),
                    }
                    updating.set(false);
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
                <h1>"Categorías"</h1>
                <div class="page__toolbar">
                    <input
                        class="page__filter"
                        type="text"
                        placeholder="Buscar..."
                        prop:value=move || filter_text.get()
                        on:input=move |ev| filter_text.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=on_create_open>
                        "+ Nueva Categoría"
                    </button>
                </div>
            </header>

            <Show when=move || !load_error.get().is_empty()>
                <p class="page__error">{move || load_error.get()}</p>
            </Show>
            <Show when=move || !page_error.get().is_empty()>
                <p class="page__error">{move || page_error.get()}</p>
            </Show>

            <Suspense fallback=move || view! { <p class="table-status">"Cargando categorías..."</p> }>
                {move || {
                    categorias
                        .get()
                        .map(|list| {
                            let needle = filter_text.get();
                            let rows: Vec<Categoria> = list
                                .into_iter()
                                .filter(|categoria| {
                                    matches_filter(
                                        &[&categoria.id.to_string(), &categoria.nombre],
                                        &needle,
                                    )
                                })
                                .collect();
                            if rows.is_empty() {
                                view! { <p class="table-status">"No hay categorías"</p> }.into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th class="data-table__id">"ID"</th>
                                                <th>"Categoría"</th>
                                                <th>"Estado"</th>
                                                <th class="data-table__options">"Opciones"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|categoria| {
                                                    let target = categoria.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{categoria.id}</td>
                                                            <td>{categoria.nombre.clone()}</td>
                                                            <td>
                                                                <span
                                                                    class="badge"
                                                                    class=("badge--active", categoria.estado)
                                                                    class=("badge--inactive", !categoria.estado)
                                                                >
                                                                    {if categoria.estado { "Activa" } else { "Inactiva" }}
                                                                </span>
                                                            </td>
                                                            <td class="data-table__actions">
                                                                <button
                                                                    class="btn btn--small"
                                                                    on:click=move |_| on_edit_open.run(target.clone())
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
                <EntityNameModal
                    title="Nueva Categoría"
                    label="Nombre de la categoría"
                    name=new_name
                    busy=creating
                    on_cancel=on_create_cancel
                    on_submit=on_create_submit
                />
            </Show>

            <Show when=move || edit_target.get().is_some()>
                <EntityNameEstadoModal
                    title="Editar Categoría"
                    label="Nombre de la categoría"
                    name=edit_name
                    estado=edit_estado
                    busy=updating
                    on_cancel=on_edit_cancel
                    on_submit=on_edit_submit
                />
            </Show>
        </div>
    }
}
