use super::*;

#[test]
fn narrow_viewports_are_mobile_and_low_perf() {
    let p = DeviceProfile::detect(767.0, 16);
    assert!(p.mobile);
    assert!(p.low_perf);
}

#[test]
fn breakpoint_itself_is_desktop() {
    let p = DeviceProfile::detect(768.0, 16);
    assert!(!p.mobile);
    assert!(!p.low_perf);
}

#[test]
fn few_cores_mark_low_perf_on_desktop() {
    let p = DeviceProfile::detect(1440.0, 4);
    assert!(!p.mobile);
    assert!(p.low_perf);
    assert!(!DeviceProfile::detect(1440.0, 5).low_perf);
}

#[test]
fn spec_defaults_fill_missing_fields() {
    let s: DeviceSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(s, DeviceSpec::default());
    let s: DeviceSpec = serde_json::from_str(r#"{"breakpoint": 1024}"#).unwrap();
    assert!(s.profile(900.0).mobile);
}
