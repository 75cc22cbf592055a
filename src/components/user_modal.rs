//! Create and edit dialogs for back-office users.

use leptos::prelude::*;

use crate::net::types::{EditUser, NewUser, Role, Usuario};

/// Dialog for creating a user. Emits the completed form through
/// `on_submit`; the caller performs the API call and closes the dialog.
#[component]
pub fn NewUserModal(
    #[prop(into)] roles: Signal<Vec<Role>>,
    busy: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<NewUser>,
) -> impl IntoView {
    let nombre = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let rol = RwSignal::new(String::new());
    let field_error = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let form = NewUser {
            nombre: nombre.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            rol: rol.get(),
        };
        if form.nombre.is_empty()
            || form.email.is_empty()
            || form.password.is_empty()
            || form.rol.is_empty()
        {
            field_error.set("Completa todos los campos".to_owned());
            return;
        }
        field_error.set(String::new());
        on_submit.run(form);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--user" on:click=move |ev| ev.stop_propagation()>
                <h2>"Nuevo Usuario"</h2>
                <label class="dialog__label">
                    "Nombre"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || nombre.get()
                        on:input=move |ev| nombre.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Correo"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Contraseña"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Rol"
                    <select
                        class="dialog__input"
                        prop:value=move || rol.get()
                        on:change=move |ev| rol.set(event_target_value(&ev))
                    >
                        <option value="">"Selecciona un rol"</option>
                        {move || {
                            roles
                                .get()
                                .into_iter()
                                .map(|role| {
                                    view! { <option value=role.name.clone()>{role.name.clone()}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <Show when=move || !field_error.get().is_empty()>
                    <p class="dialog__error">{move || field_error.get()}</p>
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
                        {move || if busy.get() { "Creando..." } else { "Crear" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Dialog for editing a user. Password left blank means unchanged.
#[component]
pub fn EditUserModal(
    usuario: Usuario,
    #[prop(into)] roles: Signal<Vec<Role>>,
    busy: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<EditUser>,
) -> impl IntoView {
    let nombre = RwSignal::new(usuario.nombre);
    let email = RwSignal::new(usuario.correo);
    let password = RwSignal::new(String::new());
    let rol = RwSignal::new(usuario.rol);
    let estado = RwSignal::new(usuario.estado);
    let field_error = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let password_value = password.get();
        let form = EditUser {
            nombre: nombre.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: (!password_value.is_empty()).then_some(password_value),
            rol: rol.get(),
            estado: estado.get(),
        };
        if form.nombre.is_empty() || form.email.is_empty() || form.rol.is_empty() {
            field_error.set("Completa todos los campos".to_owned());
            return;
        }
        field_error.set(String::new());
        on_submit.run(form);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--user" on:click=move |ev| ev.stop_propagation()>
                <h2>"Editar Usuario"</h2>
                <label class="dialog__label">
                    "Nombre"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || nombre.get()
                        on:input=move |ev| nombre.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Correo"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Contraseña (opcional)"
                    <input
                        class="dialog__input"
                        type="password"
                        placeholder="Sin cambios"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Rol"
                    <select
                        class="dialog__input"
                        prop:value=move || rol.get()
                        on:change=move |ev| rol.set(event_target_value(&ev))
                    >
                        {move || {
                            roles
                                .get()
                                .into_iter()
                                .map(|role| {
                                    view! { <option value=role.name.clone()>{role.name.clone()}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label dialog__label--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || estado.get()
                        on:change=move |ev| estado.set(event_target_checked(&ev))
                    />
                    "Activo"
                </label>
                <Show when=move || !field_error.get().is_empty()>
                    <p class="dialog__error">{move || field_error.get()}</p>
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
                        {move || if busy.get() { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
