use super::*;

fn vp() -> Viewport {
    Viewport::new(1200.0, 900.0).unwrap()
}

fn section(top: f64, height: f64) -> Rect {
    Rect::new(0.0, top, 1200.0, top + height)
}

#[test]
fn sticky_progress_spans_scrollable_distance() {
    // 5 viewports tall -> 3600px of scrollable distance.
    assert_eq!(sticky_progress(section(200.0, 4500.0), vp()), Some(0.0));
    assert_eq!(sticky_progress(section(0.0, 4500.0), vp()), Some(0.0));
    assert_eq!(sticky_progress(section(-1800.0, 4500.0), vp()), Some(0.5));
    assert_eq!(sticky_progress(section(-3600.0, 4500.0), vp()), Some(1.0));
    assert_eq!(sticky_progress(section(-9000.0, 4500.0), vp()), Some(1.0));
}

#[test]
fn anchored_progress_uses_anchor_line() {
    let p = anchored_progress(300.0, section(0.0, 1900.0), vp()).unwrap();
    assert!((p - 0.3).abs() < 1e-12);
}

#[test]
fn degenerate_scroll_distance_is_skipped() {
    // Shorter than the viewport.
    assert_eq!(sticky_progress(section(-100.0, 600.0), vp()), None);
    // Exactly the viewport height.
    assert_eq!(sticky_progress(section(-100.0, 900.0), vp()), None);
    assert_eq!(document_progress(0.0, 900.0, vp()), None);
    assert_eq!(document_progress(10.0, 300.0, vp()), None);
    assert_eq!(band_progress(section(0.0, 10.0), vp(), 0.5, 0.5), None);
}

#[test]
fn mapper_is_idempotent() {
    let rect = section(-1234.5, 4500.0);
    for m in [
        ProgressMapper::Sticky,
        ProgressMapper::PassThrough,
        ProgressMapper::Anchored { anchor: 300.0 },
        ProgressMapper::Band { start: 0.8, end: 0.2 },
    ] {
        assert_eq!(m.map(rect, vp()), m.map(rect, vp()));
    }
}

#[test]
fn pass_through_goes_from_enter_to_exit() {
    assert_eq!(pass_through_progress(section(900.0, 600.0), vp()), Some(0.0));
    assert_eq!(pass_through_progress(section(-600.0, 600.0), vp()), Some(1.0));
    let mid = pass_through_progress(section(150.0, 600.0), vp()).unwrap();
    assert!((mid - 0.5).abs() < 1e-12);
}

#[test]
fn band_progress_focuses_middle_of_screen() {
    // start = 720, end = 180
    let at_start = band_progress(section(720.0, 100.0), vp(), 0.8, 0.2).unwrap();
    let at_end = band_progress(section(180.0, 100.0), vp(), 0.8, 0.2).unwrap();
    assert!(at_start.abs() < 1e-9);
    assert!((at_end - 1.0).abs() < 1e-9);
    let p = band_progress(section(450.0, 100.0), vp(), 0.8, 0.2).unwrap();
    assert!((p - 0.5).abs() < 1e-12);
}

#[test]
fn document_progress_maps_scroll_offset() {
    assert_eq!(document_progress(1550.0, 4000.0, vp()), Some(0.5));
    assert_eq!(document_progress(9999.0, 4000.0, vp()), Some(1.0));
}

#[test]
fn pointer_offsets() {
    let o = pointer_offset(PointerSample::new(900.0, 225.0), vp(), 2.0);
    assert!((o.x - 0.5).abs() < 1e-12);
    assert!((o.y + 0.5).abs() < 1e-12);

    let rect = Rect::new(100.0, 100.0, 300.0, 200.0);
    let e = element_pointer_offset(PointerSample::new(250.0, 125.0), rect).unwrap();
    assert!((e.x - 0.25).abs() < 1e-12);
    assert!((e.y + 0.25).abs() < 1e-12);
    assert_eq!(element_pointer_offset(PointerSample::new(0.0, 0.0), Rect::ZERO), None);

    let c = center_offset(PointerSample::new(210.0, 140.0), rect);
    assert_eq!(c, Vec2::new(10.0, -10.0));
}

#[test]
fn stagger_spreads_items() {
    // 4 items over spread 0.4, gain 10: item i starts at 0.1*i.
    assert_eq!(stagger_progress(0.0, 0.0, 0, 4, 0.4, 10.0), 0.0);
    assert_eq!(stagger_progress(0.1, 0.0, 0, 4, 0.4, 10.0), 1.0);
    assert_eq!(stagger_progress(0.1, 0.0, 1, 4, 0.4, 10.0), 0.0);
    assert!((stagger_progress(0.25, 0.0, 2, 4, 0.4, 10.0) - 0.5).abs() < 1e-9);
    assert_eq!(stagger_progress(0.5, 0.0, 0, 0, 0.4, 10.0), 1.0);
}

#[test]
fn tracker_keeps_previous_on_degenerate_input() {
    let mut t = ProgressTracker::new(0.0);
    assert!(t.update(Some(0.4)));
    assert!(!t.update(None));
    assert_eq!(t.value(), 0.4);
    assert!(!t.update(Some(f64::NAN)));
    assert!(!t.update(Some(f64::INFINITY)));
    assert_eq!(t.value(), 0.4);
    assert!(!t.update(Some(0.4)));
}

#[test]
fn mapper_validation() {
    assert!(ProgressMapper::Band { start: 0.2, end: 0.8 }.validate().is_err());
    assert!(ProgressMapper::Band { start: 0.8, end: 0.2 }.validate().is_ok());
    assert!(ProgressMapper::Anchored { anchor: f64::NAN }.validate().is_err());
    assert!(ProgressMapper::Sticky.validate().is_ok());
}
