//! Create dialog for entities that only need a name (categories,
//! roles, permissions).

use leptos::prelude::*;

/// Single-field name dialog. The caller owns the `name` signal so it
/// can read the value on submit and reset it between openings.
#[component]
pub fn EntityNameModal(
    #[prop(into)] title: String,
    #[prop(into)] label: String,
    name: RwSignal<String>,
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
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
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
