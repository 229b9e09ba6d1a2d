use super::*;
use crate::foundation::core::DEFAULT_FPS;

const PRESETS: [SpringConfig; 4] = [
    SpringConfig::GENTLE,
    SpringConfig::SMOOTH,
    SpringConfig::SNAPPY,
    SpringConfig::BOUNCY,
];

#[test]
fn springs_start_at_rest_and_reach_target() {
    for cfg in PRESETS {
        assert!(spring_progress(0, DEFAULT_FPS, &cfg).abs() < 1e-9, "{cfg:?}");
        let late = spring_progress(300, DEFAULT_FPS, &cfg);
        assert!((late - 1.0).abs() < 0.01, "{cfg:?} ended at {late}");
    }
}

#[test]
fn bouncy_overshoots_and_smooth_does_not() {
    let peak = |cfg: &SpringConfig| {
        (0..90)
            .map(|f| spring_progress(f, DEFAULT_FPS, cfg))
            .fold(f64::MIN, f64::max)
    };
    assert!(peak(&SpringConfig::BOUNCY) > 1.05);
    assert!(peak(&SpringConfig::SMOOTH) <= 1.0);
}

#[test]
fn critical_damping_is_monotonic() {
    let cfg = SpringConfig {
        damping: 2.0 * 100f64.sqrt(),
        stiffness: 100.0,
        mass: 1.0,
        overshoot_clamping: false,
    };
    assert!((cfg.damping_ratio() - 1.0).abs() < 1e-12);
    let mut prev = 0.0;
    for f in 0..120 {
        let v = spring_progress(f, DEFAULT_FPS, &cfg);
        assert!(v + 1e-12 >= prev);
        assert!(v <= 1.0 + 1e-12);
        prev = v;
    }
}

#[test]
fn degenerate_springs_snap_to_target() {
    let cfg = SpringConfig {
        mass: 0.0,
        ..SpringConfig::GENTLE
    };
    assert_eq!(spring_progress(0, DEFAULT_FPS, &cfg), 1.0);
    let cfg = SpringConfig {
        stiffness: f64::NAN,
        ..SpringConfig::GENTLE
    };
    assert_eq!(spring_progress(5, DEFAULT_FPS, &cfg), 1.0);
}

#[test]
fn settle_frames_orders_by_stiffness() {
    let snappy = spring_settle_frames(DEFAULT_FPS, &SpringConfig::SNAPPY);
    let bouncy = spring_settle_frames(DEFAULT_FPS, &SpringConfig::BOUNCY);
    assert!(snappy > 0);
    assert!(snappy < bouncy);
}

#[test]
fn stagger_delays_step_linearly() {
    assert_eq!(stagger_delays(4, 6, 3), vec![6, 9, 12, 15]);
    assert!(stagger_delays(0, 6, 3).is_empty());
}
