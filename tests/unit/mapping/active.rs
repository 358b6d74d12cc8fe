use super::*;
use crate::foundation::core::Viewport;
use crate::geometry::{ElementBox, StaticLayout};

const A: ElementId = ElementId(1);
const B: ElementId = ElementId(2);

fn page() -> StaticLayout {
    StaticLayout::new(Viewport::new(1200.0, 900.0).unwrap(), 3000.0)
        .with_element(A, ElementBox::new(0.0, 100.0, 1200.0, 300.0))
        .with_element(B, ElementBox::new(0.0, 400.0, 1200.0, 500.0))
}

#[test]
fn first_straddling_section_wins_and_flips_once() {
    let mut layout = page();
    let mut tracker = ActiveSectionTracker::new(vec![A, B], 1.0 / 3.0);

    let mut changes = Vec::new();
    let mut seen = Vec::new();
    for y in (0..=1400).step_by(10) {
        layout.scroll_to(f64::from(y));
        if let Some(c) = tracker.update(&layout) {
            changes.push((y, c));
        }
        seen.push(tracker.active());
    }

    // A's bottom is at the anchor (300) exactly at scroll 100; both straddle and A comes first.
    assert_eq!(changes, vec![(0, A), (110, B)]);
    // Never falls back to "none" once something was active.
    assert!(seen.iter().all(|s| s.is_some()));
    // Past B's bottom nothing straddles, B stays active.
    assert_eq!(tracker.active(), Some(B));
    assert_eq!(tracker.straddling(&layout), None);
}

#[test]
fn nothing_active_before_any_section_reaches_anchor() {
    let layout = StaticLayout::new(Viewport::new(1200.0, 900.0).unwrap(), 3000.0)
        .with_element(A, ElementBox::new(0.0, 1000.0, 1200.0, 300.0));
    let mut tracker = ActiveSectionTracker::new(vec![A], ActiveSectionTracker::DEFAULT_ANCHOR_FRACTION);
    assert_eq!(tracker.update(&layout), None);
    assert_eq!(tracker.active(), None);
}

#[test]
fn scrolling_back_reactivates_earlier_section() {
    let mut layout = page();
    let mut tracker = ActiveSectionTracker::new(vec![A, B], 1.0 / 3.0);
    layout.scroll_to(300.0);
    assert_eq!(tracker.update(&layout), Some(B));
    layout.scroll_to(0.0);
    assert_eq!(tracker.update(&layout), Some(A));
    assert_eq!(tracker.update(&layout), None);
}

#[test]
fn missing_elements_are_skipped() {
    let layout = page();
    let mut tracker = ActiveSectionTracker::new(vec![ElementId(77), B, A], 1.0 / 3.0);
    // B is listed first but does not straddle at scroll 0, A does.
    assert_eq!(tracker.update(&layout), Some(A));
    assert_eq!(tracker.sections().len(), 3);
}
