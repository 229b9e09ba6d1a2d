use crate::{
    animation::{ease::Ease, motion::SpringConfig},
    style::config::{
        CtaMotion, EasingSet, LogoMotion, SceneDefaults, ScreenshotMotion, StatsMotion,
        StyleConfig, StyleName, TextMotion,
    },
};

/// Cubic easing, medium pacing (~4-5s scenes), no CTA pulse.
pub static MINIMAL: StyleConfig = StyleConfig {
    name: StyleName::Minimal,
    transition_duration_frames: 15,
    text_enter_duration_frames: 20,
    scene_defaults: SceneDefaults {
        intro: 120,
        feature: 135,
        stats: 135,
        screenshot: 150,
        cta: 120,
    },
    easing: EasingSet {
        enter: Ease::OutCubic,
        exit: Ease::InCubic,
        move_: Ease::InOutCubic,
    },
    spring: SpringConfig::GENTLE,
    text: TextMotion {
        slide_distance_px: 30.0,
        stagger_frames: 6,
    },
    logo: LogoMotion {
        enter_frames: 24,
        scale_from: 0.9,
        rotate_from_deg: 0.0,
        spring: SpringConfig::GENTLE,
    },
    screenshot: ScreenshotMotion {
        enter_frames: 24,
        slide_distance_px: 40.0,
        scale_from: 0.96,
        drift_zoom: 1.03,
        corner_radius_px: 12.0,
    },
    cta: CtaMotion {
        enter_frames: 20,
        border_radius_px: 8.0,
        pulse: false,
        pulse_period_frames: 0,
        pulse_scale: 1.0,
    },
    stats: StatsMotion {
        stagger_frames: 8,
        count_up_frames: 36,
        count_up_ease: Ease::OutCubic,
    },
};

/// Short scenes (~3s), large motion, expo/back easing, pulsing pill CTA.
pub static ENERGETIC: StyleConfig = StyleConfig {
    name: StyleName::Energetic,
    transition_duration_frames: 10,
    text_enter_duration_frames: 12,
    scene_defaults: SceneDefaults {
        intro: 90,
        feature: 90,
        stats: 90,
        screenshot: 90,
        cta: 90,
    },
    easing: EasingSet {
        enter: Ease::OutExpo,
        exit: Ease::InExpo,
        move_: Ease::OutBack,
    },
    spring: SpringConfig::BOUNCY,
    text: TextMotion {
        slide_distance_px: 120.0,
        stagger_frames: 4,
    },
    logo: LogoMotion {
        enter_frames: 18,
        scale_from: 0.3,
        rotate_from_deg: -12.0,
        spring: SpringConfig::BOUNCY,
    },
    screenshot: ScreenshotMotion {
        enter_frames: 16,
        slide_distance_px: 200.0,
        scale_from: 0.8,
        drift_zoom: 1.1,
        corner_radius_px: 20.0,
    },
    cta: CtaMotion {
        enter_frames: 14,
        border_radius_px: 999.0,
        pulse: true,
        pulse_period_frames: 30,
        pulse_scale: 1.06,
    },
    stats: StatsMotion {
        stagger_frames: 5,
        count_up_frames: 24,
        count_up_ease: Ease::OutBack,
    },
};

/// Long scenes (~5-6s), subtle motion, quart easing, square-ish CTA.
pub static PROFESSIONAL: StyleConfig = StyleConfig {
    name: StyleName::Professional,
    transition_duration_frames: 20,
    text_enter_duration_frames: 28,
    scene_defaults: SceneDefaults {
        intro: 150,
        feature: 180,
        stats: 165,
        screenshot: 180,
        cta: 150,
    },
    easing: EasingSet {
        enter: Ease::OutQuart,
        exit: Ease::InOutQuart,
        move_: Ease::InOutQuart,
    },
    spring: SpringConfig::SMOOTH,
    text: TextMotion {
        slide_distance_px: 16.0,
        stagger_frames: 10,
    },
    logo: LogoMotion {
        enter_frames: 36,
        scale_from: 0.98,
        rotate_from_deg: 0.0,
        spring: SpringConfig::SMOOTH,
    },
    screenshot: ScreenshotMotion {
        enter_frames: 32,
        slide_distance_px: 20.0,
        scale_from: 0.99,
        drift_zoom: 1.02,
        corner_radius_px: 6.0,
    },
    cta: CtaMotion {
        enter_frames: 28,
        border_radius_px: 4.0,
        pulse: false,
        pulse_period_frames: 0,
        pulse_scale: 1.0,
    },
    stats: StatsMotion {
        stagger_frames: 12,
        count_up_frames: 48,
        count_up_ease: Ease::OutQuart,
    },
};

impl StyleName {
    /// Constant parameter table for this style.
    pub fn config(self) -> &'static StyleConfig {
        match self {
            Self::Minimal => &MINIMAL,
            Self::Energetic => &ENERGETIC,
            Self::Professional => &PROFESSIONAL,
        }
    }
}

/// Resolve a style name to its parameter table.
///
/// Total: names are matched case-insensitively and anything unrecognised resolves to
/// [`StyleName::Minimal`].
pub fn resolve_style(name: &str) -> &'static StyleConfig {
    match name.parse::<StyleName>() {
        Ok(style) => style.config(),
        Err(_) => {
            tracing::debug!(style = name, "unknown style, falling back to minimal");
            StyleName::default().config()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/presets.rs"]
mod tests;
