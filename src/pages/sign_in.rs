//! Sign-in page with per-field validation and error routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only flow that creates a session. On success the order
//! matters: persist the session first (synchronous storage write), then
//! update the in-memory provider, then navigate — so the very next
//! guard evaluation observes the new session.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{AuthErrorCode, LoginResponse};
use crate::session::SessionStore;
use crate::state::auth::AuthState;
use crate::util::validate::{validate_email, validate_password};

/// Route the server's rejection message to the matching form field:
/// `(email_error, password_error)`.
#[cfg(any(test, feature = "hydrate"))]
fn login_field_errors(resp: &LoginResponse) -> (Option<String>, Option<String>) {
    match resp.status {
        Some(AuthErrorCode::EmailNotFound) => (Some(resp.message.clone()), None),
        Some(AuthErrorCode::InvalidPassword) => (None, Some(resp.message.clone())),
        _ => (None, None),
    }
}

/// Sign-in page.
#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(String::new());
    let password_error = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let email_result = validate_email(&email.get());
        let password_value = password.get();
        let password_result = validate_password(&password_value);

        email_error.set(email_result.as_ref().err().map(|e| (*e).to_owned()).unwrap_or_default());
        password_error.set(password_result.err().map(ToOwned::to_owned).unwrap_or_default());
        form_error.set(String::new());

        let Ok(email_value) = email_result else {
            return;
        };
        if password_result.is_err() {
            return;
        }

        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(resp) if resp.success && resp.token.is_some() => {
                        let token = resp.token.unwrap_or_default();
                        let token_type = resp.token_type.unwrap_or_else(|| "Bearer".to_owned());

                        // Fetch the full user record (roles + permissions)
                        // before persisting anything.
                        match crate::net::api::get_me(&format!("{token_type} {token}")).await {
                            Ok(user) => {
                                store.write(&token, &token_type, &user);
                                crate::state::auth::set_user(auth, Some(user));
                                busy.set(false);
                                let mut options = NavigateOptions::default();
                                options.replace = true;
                                navigate("/dashboard", options);
                            }
                            Err(err) => {
                                form_error.set(err.user_message());
                                busy.set(false);
                            }
                        }
                    }
                    Ok(resp) => {
                        let (email_err, password_err) = login_field_errors(&resp);
                        let routed = email_err.is_some() || password_err.is_some();
                        email_error.set(email_err.unwrap_or_default());
                        password_error.set(password_err.unwrap_or_default());
                        if !routed {
                            form_error.set(if resp.message.is_empty() {
                                "No se pudo iniciar sesión".to_owned()
                            } else {
                                resp.message
                            });
                        }
                        busy.set(false);
                    }
                    Err(err) => {
                        password_error.set(err.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &navigate, &auth, &email_value, &password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Panadería Admin"</h1>
                <p class="auth-card__subtitle">"Inicia sesión para continuar"</p>
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

                    <label class="auth-form__label">
                        "Contraseña"
                        <div class="auth-form__password">
                            <input
                                class="auth-form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="auth-form__toggle"
                                type="button"
                                on:click=move |_| show_password.update(|shown| *shown = !*shown)
                            >
                                {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                            </button>
                        </div>
                    </label>
                    <Show when=move || !password_error.get().is_empty()>
                        <p class="auth-form__error">{move || password_error.get()}</p>
                    </Show>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Iniciar sesión" }}
                    </button>
                </form>

                <Show when=move || !form_error.get().is_empty()>
                    <p class="auth-card__error">{move || form_error.get()}</p>
                </Show>

                <A href="/reset-password" attr:class="auth-card__link">
                    "¿Olvidaste tu contraseña?"
                </A>
            </div>
        </div>
    }
}
