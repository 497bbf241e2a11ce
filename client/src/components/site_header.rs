//! Marketing site header.

use leptos::prelude::*;

/// Top navigation links on public pages, as `(label, href)`.
pub const HEADER_LINKS: [(&str, &str); 3] = [("Courses", "/#courses"), ("About", "/#about"), ("Admin", "/admin")];

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                <span class="site-header__mark" aria-hidden="true">"A"</span>
                <span class="site-header__name">"Academy"</span>
            </a>
            <nav class="site-header__nav" aria-label="Main">
                {HEADER_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a class="site-header__link" href=*href>{*label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
