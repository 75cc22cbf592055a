//! Header dropdown with the signed-in identity and the logout action.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_overlay::LoadingOverlay;
use crate::session::SessionStore;
use crate::state::auth::AuthState;

/// Identity dropdown. Logout revokes the session server-side on a
/// best-effort basis, clears persisted and in-memory state, and only
/// then navigates to sign-in so the next guard evaluation observes the
/// logged-out session.
#[component]
pub fn UserDropdown() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let open = RwSignal::new(false);
    let logging_out = RwSignal::new(false);

    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map_or_else(|| "—".to_owned(), |u| u.nombre.clone())
    };
    let user_email = move || {
        auth.get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.email.clone())
    };

    // Re-fetches the profile so a role/permission change made by another
    // administrator shows up without a re-login. Session invalidation
    // during the refresh clears state; the guards then route to sign-in.
    let refresh_store = store.clone();
    let on_refresh = Callback::new(move |()| {
        open.set(false);
        #[cfg(feature = "hydrate")]
        {
            let store = refresh_store.clone();
            leptos::task::spawn_local(async move {
                crate::state::auth::refresh_user(auth, store).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &refresh_store;
        }
    });

    let on_logout = Callback::new(move |()| {
        if logging_out.get() {
            return;
        }
        open.set(false);
        logging_out.set(true);

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // Best-effort server-side revocation; local state is
                // cleared regardless of the outcome.
                if let Some(session) = store.read() {
                    if let Err(err) = crate::net::api::logout(&session.authorization()).await {
                        leptos::logging::warn!("logout request failed: {err}");
                    }
                }
                store.clear();
                crate::state::auth::set_user(auth, None);

                gloo_timers::future::sleep(std::time::Duration::from_millis(300)).await;
                logging_out.set(false);
                let mut options = NavigateOptions::default();
                options.replace = true;
                navigate("/", options);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &navigate);
        }
    });

    view! {
        <div class="user-dropdown">
            <button
                class="user-dropdown__toggle"
                on:click=move |_| open.update(|is_open| *is_open = !*is_open)
            >
                <span class="user-dropdown__name">{user_name}</span>
                <span
                    class="user-dropdown__caret"
                    class=("user-dropdown__caret--open", move || open.get())
                >
                    "▾"
                </span>
            </button>

            <Show when=move || open.get()>
                <div class="user-dropdown__menu">
                    <div class="user-dropdown__identity">
                        <span class="user-dropdown__identity-name">{user_name}</span>
                        <span class="user-dropdown__identity-email">{user_email}</span>
                    </div>
                    <button class="user-dropdown__refresh" on:click=move |_| on_refresh.run(())>
                        "Actualizar datos"
                    </button>
                    <button
                        class="user-dropdown__logout"
                        disabled=move || logging_out.get()
                        on:click=move |_| on_logout.run(())
                    >
                        {move || {
                            if logging_out.get() { "Cerrando sesión..." } else { "Cerrar sesión" }
                        }}
                    </button>
                </div>
            </Show>

            <Show when=move || logging_out.get()>
                <LoadingOverlay message="Cerrando sesión..."/>
            </Show>
        </div>
    }
}
