//! Full-screen loading overlay shown during blocking mutations.

use leptos::prelude::*;

/// Backdrop with a spinner and a status message.
#[component]
pub fn LoadingOverlay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="overlay">
            <div class="overlay__panel">
                <div class="overlay__spinner"></div>
                <p class="overlay__message">{message}</p>
            </div>
        </div>
    }
}
