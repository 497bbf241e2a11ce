//! Public landing page.

use leptos::prelude::*;

/// Featured courses on the landing page, as `(title, summary)`.
const FEATURED_COURSES: [(&str, &str); 3] = [
    ("Foundations of Programming", "Variables, control flow, and your first programs."),
    ("Data Analysis", "Clean, explore, and chart real datasets."),
    ("Web Development", "Build and ship a full-stack web application."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Learn at your own pace"</h1>
            <p class="hero__subtitle">
                "Structured courses, hands-on projects, and certificates you can share."
            </p>
            <a class="btn btn--primary" href="#courses">"Browse courses"</a>
        </section>

        <section id="courses" class="home-section">
            <h2>"Featured courses"</h2>
            <ul class="course-grid">
                {FEATURED_COURSES
                    .iter()
                    .map(|(title, summary)| {
                        view! {
                            <li class="course-card">
                                <h3 class="course-card__title">{*title}</h3>
                                <p class="course-card__summary">{*summary}</p>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>

        <section id="about" class="home-section">
            <h2>"How it works"</h2>
            <ol class="steps">
                <li>"Enroll in a course."</li>
                <li>"Work through lessons and projects."</li>
                <li>"Earn a certificate on completion."</li>
            </ol>
        </section>
    }
}
