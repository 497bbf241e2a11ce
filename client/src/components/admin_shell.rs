//! Auth-gated admin chrome: top bar, sidebar, and routed content region.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the `/admin` parent route. Each mount issues exactly one
//! session query through `GateDriver`; the chrome renders only after that query
//! settles with a session. Signed-out or failed queries redirect to `/`.

#[cfg(test)]
#[path = "admin_shell_test.rs"]
mod admin_shell_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Session;
use crate::state::auth::{GatePhase, MountGuard, SignOutLatch};
#[cfg(feature = "hydrate")]
use crate::{net::api::HttpAuthClient, util::auth::GateDriver};

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// Sidebar entries, in display order.
pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry { label: "Dashboard", href: "/admin" },
    NavEntry { label: "Courses", href: "/admin/courses" },
    NavEntry { label: "Enrollments", href: "/admin/enrollments" },
    NavEntry { label: "Certificates", href: "/admin/certificates" },
];

pub const PRODUCT_LABEL: &str = "Academy Admin";

/// Admin shell gate. Renders `children` inside the admin chrome once signed in.
#[component]
pub fn AdminShell(children: ChildrenFn) -> impl IntoView {
    let phase = RwSignal::new(GatePhase::Loading);
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.dispose()
    });

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // One query per mount; no retry.
    #[cfg(feature = "hydrate")]
    {
        let driver = gate_driver(guard.clone(), phase, navigate.clone());
        leptos::task::spawn_local(async move {
            driver.check().await;
        });
    }

    // Later clicks are ignored once a sign-out is in flight.
    let sign_out = SignOutLatch::new();
    let on_logout = Callback::new(move |()| {
        if !phase.get_untracked().shows_chrome() || !sign_out.try_begin() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let driver = gate_driver(guard.clone(), phase, navigate.clone());
            leptos::task::spawn_local(async move {
                driver.sign_out().await;
            });
        }
    });

    view! { {move || gate_view(phase.get(), children.clone(), on_logout)} }
}

/// View for one gate phase. `Redirecting` renders nothing.
fn gate_view(phase: GatePhase, children: ChildrenFn, on_logout: Callback<()>) -> AnyView {
    match phase {
        GatePhase::Loading => view! { <AdminLoading/> }.into_any(),
        GatePhase::Redirecting => ().into_any(),
        GatePhase::Authenticated(session) => view! {
            <AdminChrome session=session on_logout=on_logout>
                {children()}
            </AdminChrome>
        }
            .into_any(),
    }
}

#[cfg(feature = "hydrate")]
fn gate_driver<F>(
    guard: MountGuard,
    phase: RwSignal<GatePhase>,
    navigate: F,
) -> GateDriver<HttpAuthClient, impl Fn(&str), impl Fn(GatePhase)>
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    GateDriver::new(
        HttpAuthClient,
        guard,
        move |path: &str| navigate(path, NavigateOptions::default()),
        move |next: GatePhase| phase.set(next),
    )
}

#[component]
fn AdminLoading() -> impl IntoView {
    view! {
        <div class="admin-loading" role="status" aria-live="polite">
            <span class="admin-loading__spinner" aria-hidden="true"></span>
            <span class="admin-loading__label">"Loading..."</span>
        </div>
    }
}

/// Signed-in layout. Also provides the `Session` to the routed content.
#[component]
fn AdminChrome(session: Session, on_logout: Callback<()>, children: Children) -> impl IntoView {
    let avatar = session.avatar().map(str::to_owned);
    let name = session.name.clone();
    provide_context(session);

    view! {
        <div class="admin-shell">
            <header class="admin-topbar">
                <a class="admin-topbar__brand" href="/admin">
                    <span class="admin-topbar__mark" aria-hidden="true">"A"</span>
                    <span class="admin-topbar__label">{PRODUCT_LABEL}</span>
                </a>
                <div class="admin-topbar__user">
                    {avatar.map(|src| view! { <img class="admin-topbar__avatar" src=src alt=""/> })}
                    <span class="admin-topbar__name">{name}</span>
                    <button class="btn admin-topbar__logout" on:click=move |_| on_logout.run(())>
                        "Log out"
                    </button>
                </div>
            </header>
            <div class="admin-body">
                <AdminSidebar/>
                <main class="admin-content">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn AdminSidebar() -> impl IntoView {
    view! {
        <nav class="admin-sidebar" aria-label="Admin">
            <ul class="admin-sidebar__list">
                {NAV_ENTRIES
                    .iter()
                    .map(|entry| {
                        view! {
                            <li>
                                <a class="admin-sidebar__link" href=entry.href>
                                    {entry.label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
