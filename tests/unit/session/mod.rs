use super::*;
use crate::config::scene::CursorLabel;
use crate::foundation::core::Viewport;
use crate::geometry::{ElementBox, StaticLayout};
use crate::output::style::Slot;
use crate::output::surface::RecordingSurface;

fn layout() -> StaticLayout {
    StaticLayout::new(Viewport::new(1000.0, 1000.0).unwrap(), 5000.0)
        .with_element(ElementId(1), ElementBox::new(0.0, 100.0, 1000.0, 300.0))
        .with_element(ElementId(2), ElementBox::new(0.0, 400.0, 1000.0, 500.0))
        .with_element(ElementId(3), ElementBox::new(0.0, 2000.0, 1000.0, 400.0))
}

#[test]
fn ungated_widgets_run_on_the_first_frame() {
    let mut s = AnimationSession::new(DeviceProfile::desktop());
    let bar = s.mount(ScrollProgressBar::new());
    assert_eq!(s.pending_frames(), 1);
    assert_eq!(s.phase(bar), Some(Phase::Tracking));

    let mut surface = RecordingSurface::new();
    let stats = s.frame(0.0, &layout(), &mut surface);
    assert_eq!(stats.ran, 1);
    assert_eq!(stats.writes, 1);
    assert_eq!(
        surface.get(&Slot::new(bar, "bar")).unwrap().transform.as_deref(),
        Some("scaleX(0)")
    );
    // Settled: the loop sleeps until the next input event.
    assert_eq!(s.pending_frames(), 0);
}

#[test]
fn input_events_wake_sleeping_widgets_once() {
    let mut s = AnimationSession::new(DeviceProfile::desktop());
    let bar = s.mount(ScrollProgressBar::new());
    let mut surface = RecordingSurface::new();
    let mut l = layout();
    s.frame(0.0, &l, &mut surface);

    l.scroll_to(2000.0);
    s.on_scroll(2000.0);
    s.on_scroll(2000.0);
    assert_eq!(s.pending_frames(), 1);

    s.frame(16.0, &l, &mut surface);
    assert_eq!(surface.writes_for(bar), 2);
    assert_eq!(s.widget::<ScrollProgressBar>(bar).unwrap().progress(), 0.5);
}

#[test]
fn header_signals_are_readable_through_the_session() {
    let mut s = AnimationSession::new(DeviceProfile::desktop());
    let header = s.mount(Header::new(vec![ElementId(1), ElementId(2)]));
    let mut surface = RecordingSurface::new();
    let mut l = layout();

    s.frame(0.0, &l, &mut surface);
    let h = s.widget::<Header>(header).unwrap();
    assert_eq!(h.active_section(), Some(ElementId(1)));
    assert!(!h.is_scrolled());

    l.scroll_to(200.0);
    s.on_scroll(200.0);
    s.frame(16.0, &l, &mut surface);
    let h = s.widget::<Header>(header).unwrap();
    assert_eq!(h.active_section(), Some(ElementId(2)));
    assert!(h.is_scrolled());
    assert!(h.is_hidden());

    assert!(s.widget::<ScrollProgressBar>(header).is_none());
}

#[test]
fn offscreen_widgets_stay_idle() {
    let mut s = AnimationSession::new(DeviceProfile::desktop());
    let tilt = s.mount(HeroTilt::new(ElementId(3)));
    assert_eq!(s.phase(tilt), Some(Phase::Idle));

    let mut surface = RecordingSurface::new();
    for i in 0..5 {
        s.frame(16.0 * f64::from(i), &layout(), &mut surface);
    }
    assert_eq!(surface.writes_for(tilt), 0);
    assert_eq!(s.phase(tilt), Some(Phase::Idle));
}

#[test]
fn unmount_cancels_pending_frame() {
    let mut s = AnimationSession::new(DeviceProfile::desktop());
    let bar = s.mount(ScrollProgressBar::new());
    assert!(s.unmount(bar));
    assert!(!s.unmount(bar));
    assert_eq!(s.pending_frames(), 0);

    let mut surface = RecordingSurface::new();
    let stats = s.frame(0.0, &layout(), &mut surface);
    assert_eq!(stats, FrameStats::default());
    assert_eq!(s.phase(bar), None);
}

#[test]
fn resize_rederives_device_profile() {
    let vp = Viewport::new(1280.0, 800.0).unwrap();
    let mut s = AnimationSession::with_device_spec(DeviceSpec::default(), vp);
    assert!(!s.device().mobile);

    s.on_resize(Viewport::new(600.0, 900.0).unwrap());
    assert!(s.device().mobile);
    assert!(s.device().low_perf);

    // Degenerate sizes are ignored.
    s.on_resize(Viewport {
        width: 0.0,
        height: 900.0,
    });
    assert!(s.device().mobile);
}

#[test]
fn apply_routes_script_events() {
    let mut s = AnimationSession::new(DeviceProfile::desktop());
    s.apply(&InputEvent::PointerMove { x: 3.0, y: 4.0 });
    s.apply(&InputEvent::Hover {
        target: Some(ElementId(2)),
    });
    let snap = s.input();
    assert_eq!(snap.pointer.map(|p| (p.x, p.y)), Some((3.0, 4.0)));
    assert_eq!(snap.hover, Some(ElementId(2)));

    s.apply(&InputEvent::PointerLeave);
    assert_eq!(s.input().pointer, None);
}

#[test]
fn cursor_from_spec_follows_hover_context() {
    let mut s = AnimationSession::new(DeviceProfile::desktop());
    let cursor = s.mount_spec(&WidgetSpec::CustomCursor {
        magnetic: vec![],
        clickable: vec![ElementId(1)],
        labels: vec![CursorLabel {
            element: ElementId(2),
            text: "DRAG".into(),
        }],
    });
    let mut surface = RecordingSurface::new();
    let l = layout();

    s.on_pointer_move(500.0, 200.0);
    s.on_hover(Some(ElementId(1)));
    s.frame(0.0, &l, &mut surface);
    let c = s.widget::<CustomCursor>(cursor).unwrap();
    assert!(c.is_hovering());
    assert_eq!(c.label(), None);

    s.on_hover(Some(ElementId(2)));
    s.frame(16.0, &l, &mut surface);
    assert_eq!(s.widget::<CustomCursor>(cursor).unwrap().label(), Some("DRAG"));

    s.on_pointer_leave();
    s.frame(32.0, &l, &mut surface);
    let c = s.widget::<CustomCursor>(cursor).unwrap();
    assert!(!c.is_hovering());
    assert_eq!(c.mode(), &crate::widgets::CursorMode::Idle);
}
