//! Root layout for public pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure composition: header, routed page content, footer, and the
//! scroll-to-top widget. The admin section uses `AdminShell` instead.

use leptos::prelude::*;

use super::scroll_to_top::ScrollToTop;
use super::site_footer::SiteFooter;
use super::site_header::SiteHeader;

#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <SiteHeader/>
            <main class="site__main">{children()}</main>
            <SiteFooter/>
            <ScrollToTop/>
        </div>
    }
}
