//! Full-page spinner shown while the session is resolving.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-page" role="status" aria-live="polite">
            <div class="loading-page__spinner" aria-hidden="true"></div>
            <p class="loading-page__text">"Loading..."</p>
        </div>
    }
}
