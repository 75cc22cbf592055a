//! Password-reset request page.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::components::A;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ResetPasswordResponse;
use crate::util::validate::validate_email;

/// When the backend blames the submitted email, the message belongs on
/// the email field; other outcomes are form-level.
#[cfg(any(test, feature = "hydrate"))]
fn reset_email_field_error(resp: &ResetPasswordResponse) -> Option<String> {
    resp.code
        .filter(|code| code.is_email_error())
        .map(|_| resp.message.clone())
}

/// Page requesting a password-reset email.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let email_value = match validate_email(&email.get()) {
            Ok(value) => {
                email_error.set(String::new());
                value
            }
            Err(message) => {
                email_error.set(message.to_owned());
                return;
            }
        };

        busy.set(true);
        info.set(String::new());
        form_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::send_reset_password_email(&email_value).await {
                    Ok(resp) if resp.success => {
                        info.set(resp.message);
                        email.set(String::new());
                        busy.set(false);
                    }
                    Ok(resp) => {
                        if let Some(field_message) = reset_email_field_error(&resp) {
                            email_error.set(field_message);
                        } else {
                            form_error.set(if resp.message.is_empty() {
                                "No se pudo enviar el correo".to_owned()
                            } else {
                                resp.message
                            });
                        }
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
            let _ = &email_value;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Recuperar contraseña"</h1>
                <p class="auth-card__subtitle">
                    "Te enviaremos un enlace para restablecer tu contraseña"
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Correo"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="tu@panaderia.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !email_error.get().is_empty()>
                        <p class="auth-form__error">{move || email_error.get()}</p>
                    </Show>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Enviando..." } else { "Enviar enlace" }}
                    </button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__info">{move || info.get()}</p>
                </Show>
                <Show when=move || !form_error.get().is_empty()>
                    <p class="auth-card__error">{move || form_error.get()}</p>
                </Show>

                <A href="/" attr:class="auth-card__link">
                    "Volver a iniciar sesión"
                </A>
            </div>
        </div>
    }
}
