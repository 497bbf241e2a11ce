//! Fallback page for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for does not exist."</p>
            <a class="btn" href="/">"Back to home"</a>
        </section>
    }
}
