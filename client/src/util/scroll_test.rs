use super::*;

#[test]
fn hidden_at_and_below_threshold() {
    for offset in [0.0, 1.0, 150.0, 299.9, 300.0] {
        assert!(!is_visible(offset), "expected hidden at {offset}");
    }
}

#[test]
fn visible_above_threshold() {
    for offset in [300.5, 301.0, 1_000.0, 50_000.0] {
        assert!(is_visible(offset), "expected visible at {offset}");
    }
}

#[test]
fn negative_overscroll_is_hidden() {
    assert!(!is_visible(-40.0));
}

#[test]
fn next_visibility_reports_only_changes() {
    assert_eq!(next_visibility(false, 100.0), None);
    assert_eq!(next_visibility(false, 400.0), Some(true));
    assert_eq!(next_visibility(true, 400.0), None);
    assert_eq!(next_visibility(true, 300.0), Some(false));
}

#[test]
fn visibility_changes_toggle_on_increasing_and_decreasing_scroll() {
    let offsets = [0.0, 120.0, 299.0, 301.0, 800.0, 450.0, 300.0, 10.0, 900.0];
    let flips: Vec<bool> = visibility_changes(offsets).collect();
    assert_eq!(flips, vec![true, false, true]);
}

#[test]
fn visibility_changes_empty_when_never_crossing() {
    let flips: Vec<bool> = visibility_changes([0.0, 50.0, 300.0, 12.0]).collect();
    assert!(flips.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_offset_is_origin_off_browser() {
    assert!(current_offset().abs() < f64::EPSILON);
    scroll_to_origin();
}
