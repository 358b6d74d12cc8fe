use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutQuart,
    Ease::OutExpo,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::OutQuart.apply(-1.0), 0.0);
    assert_eq!(Ease::OutQuart.apply(2.0), 1.0);
    assert_eq!(Ease::OutExpo.apply(f64::NAN), 0.0);
}

#[test]
fn out_quart_matches_closed_form() {
    let t: f64 = 0.3;
    assert!((Ease::OutQuart.apply(t) - (1.0 - 0.7f64.powi(4))).abs() < 1e-12);
}
