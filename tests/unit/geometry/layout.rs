use super::*;

fn page() -> StaticLayout {
    StaticLayout::new(Viewport::new(1200.0, 900.0).unwrap(), 5000.0)
        .with_element(ElementId(1), ElementBox::new(0.0, 1000.0, 1200.0, 600.0))
        .with_element(
            ElementId(2),
            ElementBox::new(20.0, 20.0, 80.0, 40.0).fixed(),
        )
        .with_element(
            ElementId(3),
            ElementBox::new(0.0, 2000.0, 1200.0, 400.0).with_scroll_width(3400.0),
        )
}

#[test]
fn bounding_rect_follows_scroll() {
    let mut l = page();
    assert_eq!(
        l.bounding_rect(ElementId(1)),
        Some(Rect::new(0.0, 1000.0, 1200.0, 1600.0))
    );
    l.scroll_to(1200.0);
    assert_eq!(
        l.bounding_rect(ElementId(1)),
        Some(Rect::new(0.0, -200.0, 1200.0, 400.0))
    );
}

#[test]
fn fixed_elements_ignore_scroll() {
    let mut l = page();
    l.scroll_to(3000.0);
    assert_eq!(
        l.bounding_rect(ElementId(2)),
        Some(Rect::new(20.0, 20.0, 100.0, 60.0))
    );
}

#[test]
fn scroll_is_clamped_to_document() {
    let mut l = page();
    l.scroll_to(99_999.0);
    assert_eq!(l.scroll_y(), 4100.0);
    l.scroll_to(-50.0);
    assert_eq!(l.scroll_y(), 0.0);
    l.scroll_to(f64::NAN);
    assert_eq!(l.scroll_y(), 0.0);
}

#[test]
fn scroll_width_falls_back_to_box_width() {
    let l = page();
    assert_eq!(l.scroll_width(ElementId(3)), Some(3400.0));
    assert_eq!(l.scroll_width(ElementId(1)), Some(1200.0));
    assert_eq!(l.scroll_width(ElementId(99)), None);
}

#[test]
fn validate_rejects_negative_boxes() {
    let l = page().with_element(ElementId(9), ElementBox::new(0.0, 0.0, -1.0, 10.0));
    assert!(l.validate().is_err());
    assert!(page().validate().is_ok());
}

#[test]
fn layout_roundtrips_through_json_with_numeric_keys() {
    let l = page();
    let s = serde_json::to_string(&l).unwrap();
    let back: StaticLayout = serde_json::from_str(&s).unwrap();
    assert_eq!(back, l);
}
