//! Edit dialog for entities with a name and an active flag.

use leptos::prelude::*;

/// Name + estado dialog used by the edit flows. The caller owns both
/// signals and reads them on submit.
#[component]
pub fn EntityNameEstadoModal(
    #[prop(into)] title: String,
    #[prop(into)] label: String,
    name: RwSignal<String>,
    estado: RwSignal<bool>,
    busy: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        if name.get().trim().is_empty() || busy.get() {
            return;
        }
        on_submit.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    {label}
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label dialog__label--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || estado.get()
                        on:change=move |ev| estado.set(event_target_checked(&ev))
                    />
                    "Activo"
                </label>
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
