use super::*;

#[test]
fn pointer_is_absent_until_first_move() {
    let mut s = InputSampler::new();
    assert_eq!(s.snapshot().pointer, None);
    s.on_pointer_move(10.0, 20.0);
    assert_eq!(s.snapshot().pointer, Some(PointerSample::new(10.0, 20.0)));
    s.on_pointer_move(11.0, 21.0);
    // No history: only the latest sample survives.
    assert_eq!(s.snapshot().pointer, Some(PointerSample::new(11.0, 21.0)));
    s.on_pointer_leave();
    assert_eq!(s.snapshot().pointer, None);
}

#[test]
fn scroll_direction_follows_events() {
    let mut s = InputSampler::new();
    s.on_scroll(100.0);
    assert_eq!(s.snapshot().direction, ScrollDirection::Down);
    s.on_scroll(100.0);
    assert_eq!(s.snapshot().direction, ScrollDirection::Down);
    s.on_scroll(40.0);
    assert_eq!(s.snapshot().direction, ScrollDirection::Up);
    assert_eq!(s.snapshot().scroll_y, 40.0);
}

#[test]
fn generations_count_events_per_kind() {
    let mut s = InputSampler::new();
    let before = s.snapshot().generations;
    s.on_scroll(1.0);
    s.on_scroll(2.0);
    s.on_hover(Some(ElementId(3)));
    s.on_hover(Some(ElementId(3)));
    let after = s.snapshot().generations;
    assert!(after.any_since(&before));
    assert_eq!(after.scroll, 2);
    assert_eq!(after.hover, 1);
    assert_eq!(after.pointer, 0);
}

#[test]
fn non_finite_events_are_dropped() {
    let mut s = InputSampler::new();
    s.on_scroll(f64::NAN);
    s.on_pointer_move(f64::INFINITY, 0.0);
    s.on_resize(Viewport {
        width: 0.0,
        height: 10.0,
    });
    assert_eq!(s.snapshot(), InputSnapshot::default());
}

#[test]
fn resize_bumps_only_its_generation() {
    let mut s = InputSampler::new();
    let before = s.snapshot().generations;
    s.on_resize(Viewport::new(375.0, 812.0).unwrap());
    let after = s.snapshot().generations;
    assert!(after.any_since(&before));
    assert_eq!(after.resize, 1);
    assert_eq!(after.scroll, 0);
    assert_eq!(after.pointer, 0);
}
