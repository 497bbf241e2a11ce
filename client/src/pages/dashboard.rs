//! Admin dashboard landing page.

use leptos::prelude::*;

use crate::components::admin_shell::NAV_ENTRIES;
use crate::net::types::Session;

/// Greeting line for the dashboard header.
pub fn greeting(session: Option<&Session>) -> String {
    match session {
        Some(s) => format!("Welcome back, {}", s.name),
        None => "Welcome back".to_owned(),
    }
}

/// Admin home. Reads the signed-in `Session` provided by `AdminShell`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_context::<Session>();
    let title = greeting(session.as_ref());

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>{title}</h1>
            </header>
            <ul class="admin-page__shortcuts">
                {NAV_ENTRIES
                    .iter()
                    .skip(1)
                    .map(|entry| {
                        view! {
                            <li>
                                <a class="admin-page__shortcut" href=entry.href>
                                    {entry.label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;
