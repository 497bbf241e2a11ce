//! Floating "back to top" button for long marketing pages.

use leptos::prelude::*;

use crate::util::scroll::scroll_to_origin;
#[cfg(feature = "hydrate")]
use crate::util::scroll::{current_offset, is_visible, next_visibility};

/// Button that appears once the page is scrolled past the threshold.
///
/// The window scroll listener lives exactly as long as the component.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        // Restored scroll positions need a flag before the first scroll event.
        Effect::new(move || visible.set(is_visible(current_offset())));

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            if let Some(next) = next_visibility(visible.get_untracked(), current_offset()) {
                visible.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <button
            type="button"
            class="scroll-top"
            class=("scroll-top--visible", move || visible.get())
            aria-label="Scroll to top"
            aria-hidden=move || if visible.get() { "false" } else { "true" }
            tabindex=move || if visible.get() { "0" } else { "-1" }
            on:click=move |_| scroll_to_origin()
        >
            "↑"
        </button>
    }
}
