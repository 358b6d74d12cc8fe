use super::*;
use crate::config::device::DeviceProfile;
use crate::foundation::core::Viewport;
use crate::geometry::{ElementBox, StaticLayout};
use crate::input::InputSnapshot;
use crate::widgets::testing::{ctx, run, transform_of};

fn layout(scroll_y: f64) -> StaticLayout {
    // Section 1000..3000 with two principles stacked inside it.
    let mut l = StaticLayout::new(Viewport::new(1200.0, 1000.0).unwrap(), 5000.0)
        .with_element(ElementId(1), ElementBox::new(0.0, 1000.0, 1200.0, 2000.0))
        .with_element(ElementId(10), ElementBox::new(0.0, 1200.0, 1200.0, 800.0))
        .with_element(ElementId(11), ElementBox::new(0.0, 2000.0, 1200.0, 800.0));
    l.scroll_to(scroll_y);
    l
}

fn manifesto() -> Manifesto {
    Manifesto::new(ElementId(1), vec![ElementId(10), ElementId(11)])
}

#[test]
fn pass_through_progress_drives_parallax() {
    // Top at 0 of a 1000 px viewport: (1000 - 0) / (1000 + 2000) = 1/3.
    let l = layout(1000.0);
    let input = InputSnapshot::default();
    let mut w = manifesto();
    let out = run(&mut w, &ctx(&l, &input, 0.0, 0.0, DeviceProfile::desktop()), true);

    assert!((w.progress() - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(transform_of(&out, "grid", 0), "translate(0px, -16.6667px)");
    assert_eq!(transform_of(&out, "blob", 0), "translate(0px, 50px) scale(1.1667)");
    assert_eq!(transform_of(&out, "line", 0), "scaleY(0.3333)");
}

#[test]
fn follows_slowly_with_linear_factor() {
    let input = InputSnapshot::default();
    let mut w = manifesto();
    run(&mut w, &ctx(&layout(0.0), &input, 0.0, 0.0, DeviceProfile::desktop()), true);
    assert_eq!(w.progress(), 0.0);

    let l = layout(1000.0);
    run(&mut w, &ctx(&l, &input, 16.0, 0.016, DeviceProfile::desktop()), false);
    assert!((w.progress() - 0.08 / 3.0).abs() < 1e-12);
}

#[test]
fn tracks_principle_at_mid_screen() {
    let input = InputSnapshot::default();
    let mut w = manifesto();
    assert_eq!(w.active_principle(), Some(0));

    // Anchor at 500: principle 10 spans 1200..2000 in the document.
    run(&mut w, &ctx(&layout(1000.0), &input, 0.0, 0.0, DeviceProfile::desktop()), true);
    assert_eq!(w.active_principle(), Some(0));

    run(&mut w, &ctx(&layout(1800.0), &input, 16.0, 0.016, DeviceProfile::desktop()), false);
    assert_eq!(w.active_principle(), Some(1));
}

#[test]
fn principle_on_the_line_edge_does_not_switch() {
    let input = InputSnapshot::default();
    let mut w = manifesto();
    run(&mut w, &ctx(&layout(1800.0), &input, 0.0, 0.0, DeviceProfile::desktop()), true);
    assert_eq!(w.active_principle(), Some(1));

    // Mid line at 2000: principle 10 ends and 11 starts exactly there.
    run(&mut w, &ctx(&layout(1500.0), &input, 16.0, 0.016, DeviceProfile::desktop()), false);
    assert_eq!(w.active_principle(), Some(1));
}

#[test]
fn last_overlapping_principle_wins() {
    let mut l = StaticLayout::new(Viewport::new(1200.0, 1000.0).unwrap(), 5000.0)
        .with_element(ElementId(1), ElementBox::new(0.0, 1000.0, 1200.0, 2000.0))
        .with_element(ElementId(10), ElementBox::new(0.0, 1200.0, 1200.0, 800.0))
        .with_element(ElementId(11), ElementBox::new(0.0, 1900.0, 1200.0, 800.0));
    l.scroll_to(1450.0);
    let input = InputSnapshot::default();
    let mut w = manifesto();
    run(&mut w, &ctx(&l, &input, 0.0, 0.0, DeviceProfile::desktop()), true);
    assert_eq!(w.active_principle(), Some(1));
}

#[test]
fn no_principles_means_no_active_index() {
    let w = Manifesto::new(ElementId(1), vec![]);
    assert_eq!(w.active_principle(), None);
}
