//! Scroll-position helpers for the scroll-to-top widget.
//!
//! Visibility is a pure function of the latest offset; the browser glue only
//! feeds offsets in and pushes the flag into a signal.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offset (CSS px) past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Whether the widget should be shown at `offset`.
pub fn is_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// New visibility for `offset`, or `None` when it matches `current`.
pub fn next_visibility(current: bool, offset: f64) -> Option<bool> {
    let next = is_visible(offset);
    (next != current).then_some(next)
}

/// Map a stream of offsets to the visibility flips it causes, starting from
/// hidden.
pub fn visibility_changes<I>(offsets: I) -> impl Iterator<Item = bool>
where
    I: IntoIterator<Item = f64>,
{
    let mut current = false;
    offsets.into_iter().filter_map(move |offset| {
        let next = next_visibility(current, offset)?;
        current = next;
        Some(next)
    })
}

/// Current vertical scroll offset of the window.
pub fn current_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smoothly scroll the window back to the origin.
pub fn scroll_to_origin() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_left(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
