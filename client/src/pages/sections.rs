//! Admin section pages reachable from the sidebar.
//!
//! Each page is a titled content region; records come from services outside
//! this app and render through the same empty-state frame.

use leptos::prelude::*;

#[component]
fn SectionPage(title: &'static str, description: &'static str, empty: &'static str) -> impl IntoView {
    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>{title}</h1>
                <p class="admin-page__description">{description}</p>
            </header>
            <div class="admin-page__empty">{empty}</div>
        </div>
    }
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <SectionPage
            title="Courses"
            description="Create, publish, and archive courses."
            empty="No courses yet."
        />
    }
}

#[component]
pub fn EnrollmentsPage() -> impl IntoView {
    view! {
        <SectionPage
            title="Enrollments"
            description="Review who is enrolled and track their progress."
            empty="No enrollments yet."
        />
    }
}

#[component]
pub fn CertificatesPage() -> impl IntoView {
    view! {
        <SectionPage
            title="Certificates"
            description="Issue and revoke completion certificates."
            empty="No certificates issued yet."
        />
    }
}
