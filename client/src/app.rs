//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::{admin_shell::AdminShell, site_layout::SiteLayout};
use crate::pages::{
    dashboard::DashboardPage,
    home::HomePage,
    not_found::NotFoundPage,
    sections::{CertificatesPage, CoursesPage, EnrollmentsPage},
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Public pages share `SiteLayout`. The admin pages sit under one parent route
/// so the gate mounts once for the whole section.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Academy"/>

        <Router>
            <Routes fallback=|| view! { <SiteLayout><NotFoundPage/></SiteLayout> }>
                <Route path=StaticSegment("") view=PublicHome/>
                <ParentRoute path=StaticSegment("admin") view=AdminSection>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route path=StaticSegment("enrollments") view=EnrollmentsPage/>
                    <Route path=StaticSegment("certificates") view=CertificatesPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn PublicHome() -> impl IntoView {
    view! {
        <SiteLayout>
            <HomePage/>
        </SiteLayout>
    }
}

#[component]
fn AdminSection() -> impl IntoView {
    view! {
        <Title text="Academy Admin"/>
        <AdminShell>
            <Outlet/>
        </AdminShell>
    }
}
