//! Marketing site footer.

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <section class="site-footer__column">
                    <h2 class="site-footer__heading">"Academy"</h2>
                    <p>"Self-paced courses with verifiable certificates."</p>
                </section>
                <section class="site-footer__column">
                    <h2 class="site-footer__heading">"Learn"</h2>
                    <a href="/#courses">"Course catalog"</a>
                    <a href="/#about">"How it works"</a>
                </section>
                <section class="site-footer__column">
                    <h2 class="site-footer__heading">"Staff"</h2>
                    <a href="/admin">"Admin sign-in"</a>
                </section>
            </div>
            <p class="site-footer__legal">"© Academy. All rights reserved."</p>
        </footer>
    }
}
