use super::*;
use crate::script::model::SceneType;

#[test]
fn known_names_resolve_case_insensitively() {
    assert_eq!(resolve_style("energetic").name, StyleName::Energetic);
    assert_eq!(resolve_style("  Professional ").name, StyleName::Professional);
    assert_eq!(resolve_style("MINIMAL").name, StyleName::Minimal);
}

#[test]
fn unknown_names_fall_back_to_minimal() {
    assert_eq!(resolve_style("retro-wave"), &MINIMAL);
    assert_eq!(resolve_style(""), &MINIMAL);
}

#[test]
fn resolution_returns_the_same_static_table() {
    assert!(std::ptr::eq(resolve_style("energetic"), &ENERGETIC));
    assert!(std::ptr::eq(StyleName::Professional.config(), &PROFESSIONAL));
}

#[test]
fn every_style_has_positive_timing() {
    for name in StyleName::ALL {
        let cfg = name.config();
        assert_eq!(cfg.name, name);
        assert!(cfg.transition_duration_frames > 0);
        assert!(cfg.text_enter_duration_frames > 0);
        for ty in SceneType::ALL {
            assert!(cfg.default_duration(ty) > cfg.min_scene_frames(), "{name} {ty}");
        }
    }
}

#[test]
fn styles_differ_in_degree() {
    let avg = |cfg: &StyleConfig| {
        SceneType::ALL
            .iter()
            .map(|&ty| cfg.default_duration(ty))
            .sum::<u64>()
            / 5
    };
    assert!(avg(&ENERGETIC) < avg(&MINIMAL));
    assert!(avg(&MINIMAL) < avg(&PROFESSIONAL));

    assert!(ENERGETIC.text.slide_distance_px > MINIMAL.text.slide_distance_px);
    assert!(MINIMAL.text.slide_distance_px > PROFESSIONAL.text.slide_distance_px);

    assert!(ENERGETIC.cta.pulse);
    assert!(!MINIMAL.cta.pulse);
    assert!(!PROFESSIONAL.cta.pulse);
    assert!(ENERGETIC.cta.border_radius_px > MINIMAL.cta.border_radius_px);
    assert!(MINIMAL.cta.border_radius_px > PROFESSIONAL.cta.border_radius_px);
}

#[test]
fn style_config_serializes_with_move_key() {
    let v = serde_json::to_value(&MINIMAL).unwrap();
    assert_eq!(v["name"], "minimal");
    assert_eq!(v["easing"]["move"], "in_out_cubic");
    assert_eq!(v["scene_defaults"]["cta"], 120);
}

#[test]
fn style_name_parse_rejects_unknown() {
    assert!("neon".parse::<StyleName>().is_err());
    assert_eq!(StyleName::Energetic.to_string(), "energetic");
}
