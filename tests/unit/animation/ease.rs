use super::*;

const ALL: [Ease; 14] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutQuart,
    Ease::InOutQuart,
    Ease::OutExpo,
    Ease::InExpo,
    Ease::OutBack,
    Ease::OutBounce,
    Ease::OutElastic,
];

#[test]
fn endpoints_are_pinned() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-3, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
    }
}

#[test]
fn progress_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.5), ease.apply(1.0));
    }
    assert_eq!(Ease::OutCubic.apply(f64::NAN), 0.0);
}

#[test]
fn out_back_overshoots_mid_curve() {
    let peak = (1..100)
        .map(|i| Ease::OutBack.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn monotonic_curves_do_not_overshoot() {
    for ease in [Ease::OutCubic, Ease::InOutQuart, Ease::OutExpo, Ease::InCubic] {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev - 1e-12, "{ease:?} decreased at {i}");
            assert!(v <= 1.0 + 1e-12);
            prev = v;
        }
    }
}

#[test]
fn in_out_curves_hit_half_at_midpoint() {
    for ease in [Ease::InOutQuad, Ease::InOutCubic, Ease::InOutQuart] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12);
    }
}

#[test]
fn interpolate_maps_range() {
    assert_eq!(interpolate(0.5, 10.0, 20.0, Ease::Linear), 15.0);
    assert_eq!(interpolate(0.0, -40.0, 0.0, Ease::OutExpo), -40.0);
    assert_eq!(interpolate(1.0, -40.0, 0.0, Ease::OutExpo), 0.0);
}

#[test]
fn interpolate_color_blends_channels() {
    assert_eq!(
        interpolate_color(0.5, "#000000", "#ffffff", Ease::Linear),
        "#808080"
    );
    assert_eq!(interpolate_color(0.0, "#f00", "#00f", Ease::Linear), "#ff0000");
    assert_eq!(interpolate_color(1.0, "ff0000", "0000ff", Ease::Linear), "#0000ff");
}

#[test]
fn interpolate_color_treats_garbage_as_black() {
    assert_eq!(
        interpolate_color(1.0, "#ffffff", "not-a-color", Ease::Linear),
        "#000000"
    );
    assert_eq!(parse_hex_rgb("#12345"), None);
    assert_eq!(parse_hex_rgb("#abc"), Some([0xaa, 0xbb, 0xcc]));
}

#[test]
fn hex_parsing_rejects_sign_characters() {
    assert_eq!(parse_hex_rgb("+f+f+f"), None);
    assert_eq!(parse_hex_rgb("#+ff"), None);
    assert_eq!(
        interpolate_color(1.0, "#000000", "+f+f+f", Ease::Linear),
        "#000000"
    );
}
