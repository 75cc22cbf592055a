//! Confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Modal asking the user to confirm a delete. The caller owns the busy
/// flag and performs the actual call from `on_confirm`.
#[component]
pub fn ConfirmDeleteModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    busy: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--confirm" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" disabled=move || busy.get() on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Eliminando..." } else { "Eliminar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
