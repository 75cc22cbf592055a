//! Password-reset confirmation page, reached from the emailed link.
//!
//! The link carries `token` and `email` query parameters; both are
//! required to submit the new password.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::util::validate::validate_new_password;

/// Page setting a new password from a reset link.
#[component]
pub fn ResetPasswordConfirmPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    let token = Memo::new(move |_| query.with(|q| q.get("token").unwrap_or_default()));
    let email = Memo::new(move |_| query.with(|q| q.get("email").unwrap_or_default()));
    let link_valid = move || !token.get().is_empty() && !email.get().is_empty();

    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let password_error = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }

        if let Err(message) = validate_new_password(&password.get(), &confirmation.get()) {
            password_error.set(message.to_owned());
            return;
        }
        password_error.set(String::new());
        form_error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::confirm_reset_password(
                    &token.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                    &confirmation.get_untracked(),
                )
                .await;
                match result {
                    Ok(resp) if resp.success => {
                        busy.set(false);
                        let mut options = NavigateOptions::default();
                        options.replace = true;
                        navigate("/", options);
                    }
                    Ok(resp) => {
                        form_error.set(if resp.message.is_empty() {
                            "No se pudo restablecer la contraseña".to_owned()
                        } else {
                            resp.message
                        });
                        busy.set(false);
                    }
                    Err(err) => {
                        form_error.set(err.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Nueva contraseña"</h1>
                <Show
                    when=link_valid
                    fallback=|| view! {
                        <p class="auth-card__error">
                            "El enlace de restablecimiento no es válido o está incompleto."
                        </p>
                    }
                >
                    <p class="auth-card__subtitle">{move || email.get()}</p>
                    <form
                        class="auth-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <label class="auth-form__label">
                            "Contraseña nueva"
                            <input
                                class="auth-form__input"
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Confirmar contraseña"
                            <input
                                class="auth-form__input"
                                type="password"
                                prop:value=move || confirmation.get()
                                on:input=move |ev| confirmation.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || !password_error.get().is_empty()>
                            <p class="auth-form__error">{move || password_error.get()}</p>
                        </Show>

                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Guardando..." } else { "Guardar contraseña" }}
                        </button>
                    </form>
                    <Show when=move || !form_error.get().is_empty()>
                        <p class="auth-card__error">{move || form_error.get()}</p>
                    </Show>
                </Show>

                <A href="/" attr:class="auth-card__link">
                    "Volver a iniciar sesión"
                </A>
            </div>
        </div>
    }
}
