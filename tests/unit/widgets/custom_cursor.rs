use super::*;
use crate::config::device::DeviceProfile;
use crate::foundation::core::Viewport;
use crate::geometry::{ElementBox, StaticLayout};
use crate::input::InputSnapshot;
use crate::widgets::testing::{ctx, opacity_of, run, transform_of};

fn layout() -> StaticLayout {
    StaticLayout::new(Viewport::new(1200.0, 900.0).unwrap(), 900.0)
        .with_element(ElementId(5), ElementBox::new(100.0, 100.0, 100.0, 100.0))
}

fn pointer_at(x: f64, y: f64) -> InputSnapshot {
    InputSnapshot {
        pointer: Some(PointerSample::new(x, y)),
        ..InputSnapshot::default()
    }
}

#[test]
fn nothing_is_drawn_before_the_first_pointer_event() {
    let l = layout();
    let input = InputSnapshot::default();
    let mut w = CustomCursor::new([]);
    let out = run(&mut w, &ctx(&l, &input, 0.0, 0.016, DeviceProfile::desktop()), false);
    assert!(out.is_empty());
}

#[test]
fn dot_is_exact_and_outline_trails() {
    let l = layout();
    let input = pointer_at(400.0, 200.0);
    let mut w = CustomCursor::new([]);
    let out = run(&mut w, &ctx(&l, &input, 0.0, 0.016, DeviceProfile::desktop()), false);

    assert_eq!(transform_of(&out, "dot", 0), "translate3d(400px, 200px, 0px)");
    assert_eq!(transform_of(&out, "outline", 0), "translate3d(60px, 30px, 0px)");
}

#[test]
fn magnetic_hover_pulls_outline_toward_element_center() {
    let l = layout();
    let input = InputSnapshot {
        hover: Some(ElementId(5)),
        ..pointer_at(250.0, 150.0)
    };
    let mut w = CustomCursor::new([ElementId(5)]);
    run(&mut w, &ctx(&l, &input, 0.0, 0.016, DeviceProfile::desktop()), true);

    // Center (150, 150): 250 + (150 - 250) * 0.35 = 215.
    assert!((w.outline() - Vec2::new(215.0, 150.0)).hypot() < 1e-9);
}

#[test]
fn non_magnetic_hover_is_ignored() {
    let l = layout();
    let input = InputSnapshot {
        hover: Some(ElementId(5)),
        ..pointer_at(250.0, 150.0)
    };
    let mut w = CustomCursor::new([]);
    run(&mut w, &ctx(&l, &input, 0.0, 0.016, DeviceProfile::desktop()), true);
    assert_eq!(w.outline(), Vec2::new(250.0, 150.0));
}

#[test]
fn disabled_on_mobile() {
    let l = layout();
    let input = pointer_at(10.0, 10.0);
    let mut w = CustomCursor::new([]);
    let out = run(&mut w, &ctx(&l, &input, 0.0, 0.016, DeviceProfile::detect(400.0, 8)), false);
    assert!(out.is_empty());
    assert!(!w.is_enabled());
}

fn hovering(w: &mut CustomCursor, target: Option<ElementId>) -> Vec<(Slot, crate::output::style::RenderedStyle)> {
    let l = layout();
    let input = InputSnapshot {
        hover: target,
        ..pointer_at(150.0, 150.0)
    };
    run(w, &ctx(&l, &input, 0.0, 0.016, DeviceProfile::desktop()), false)
}

#[test]
fn clickable_hover_sets_and_clears_hovering() {
    let mut w = CustomCursor::new([]).with_clickable([ElementId(5)]);
    hovering(&mut w, Some(ElementId(5)));
    assert!(w.is_hovering());
    assert_eq!(w.mode(), &CursorMode::Hovering);
    assert_eq!(w.label(), None);

    hovering(&mut w, None);
    assert!(!w.is_hovering());
    assert_eq!(w.mode(), &CursorMode::Idle);
}

#[test]
fn labelled_hover_shows_text_until_leave() {
    let mut w = CustomCursor::new([]).with_label(ElementId(5), "VIEW");
    let out = hovering(&mut w, Some(ElementId(5)));
    assert!(w.is_hovering());
    assert_eq!(w.label(), Some("VIEW"));
    assert_eq!(opacity_of(&out, "label", 0), 1.0);

    // Hovering something unknown drops back to the plain cursor.
    let out = hovering(&mut w, Some(ElementId(9)));
    assert_eq!(w.label(), None);
    assert!(!w.is_hovering());
    assert_eq!(opacity_of(&out, "label", 0), 0.0);
}

#[test]
fn mobile_never_enters_contextual_mode() {
    let l = layout();
    let input = InputSnapshot {
        hover: Some(ElementId(5)),
        ..pointer_at(150.0, 150.0)
    };
    let mut w = CustomCursor::new([]).with_label(ElementId(5), "VIEW");
    run(&mut w, &ctx(&l, &input, 0.0, 0.016, DeviceProfile::detect(400.0, 8)), false);
    assert_eq!(w.mode(), &CursorMode::Idle);
}
