use std::str::FromStr;

use crate::{
    animation::{ease::Ease, motion::SpringConfig},
    foundation::error::ReelError,
    script::model::SceneType,
};

/// Named visual styles.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    /// Cubic easing, medium pacing, no CTA pulse.
    #[default]
    Minimal,
    /// Short scenes, large motion, expo/back easing, pulsing pill CTA.
    Energetic,
    /// Long scenes, subtle motion, quart easing.
    Professional,
}

impl StyleName {
    /// Every style, in declaration order.
    pub const ALL: [StyleName; 3] = [
        StyleName::Minimal,
        StyleName::Energetic,
        StyleName::Professional,
    ];

    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Energetic => "energetic",
            Self::Professional => "professional",
        }
    }
}

impl FromStr for StyleName {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "energetic" => Ok(Self::Energetic),
            "professional" => Ok(Self::Professional),
            other => Err(ReelError::config(format!("unknown style '{other}'"))),
        }
    }
}

impl std::fmt::Display for StyleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Default duration in frames for each scene type.
pub struct SceneDefaults {
    /// Intro default.
    pub intro: u64,
    /// Feature default.
    pub feature: u64,
    /// Stats default.
    pub stats: u64,
    /// Screenshot default.
    pub screenshot: u64,
    /// CTA default.
    pub cta: u64,
}

impl SceneDefaults {
    /// Default duration for `ty`.
    pub fn get(&self, ty: SceneType) -> u64 {
        match ty {
            SceneType::Intro => self.intro,
            SceneType::Feature => self.feature,
            SceneType::Stats => self.stats,
            SceneType::Screenshot => self.screenshot,
            SceneType::Cta => self.cta,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Easing bound to each kind of movement.
pub struct EasingSet {
    /// Elements entering the frame.
    pub enter: Ease,
    /// Elements leaving the frame.
    pub exit: Ease,
    /// Elements moving within the frame.
    #[serde(rename = "move")]
    pub move_: Ease,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Headline/body text entrance.
pub struct TextMotion {
    /// Vertical slide distance on entrance.
    pub slide_distance_px: f64,
    /// Delay between successive text elements.
    pub stagger_frames: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Logo entrance.
pub struct LogoMotion {
    /// Entrance length.
    pub enter_frames: u64,
    /// Starting scale.
    pub scale_from: f64,
    /// Starting rotation in degrees.
    pub rotate_from_deg: f64,
    /// Spring driving the scale.
    pub spring: SpringConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Screenshot presentation.
pub struct ScreenshotMotion {
    /// Entrance length.
    pub enter_frames: u64,
    /// Horizontal slide distance on entrance.
    pub slide_distance_px: f64,
    /// Starting scale.
    pub scale_from: f64,
    /// Slow zoom factor reached by the end of the scene.
    pub drift_zoom: f64,
    /// Frame corner rounding.
    pub corner_radius_px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// CTA button presentation.
pub struct CtaMotion {
    /// Entrance length.
    pub enter_frames: u64,
    /// Button corner rounding; large values give a pill.
    pub border_radius_px: f64,
    /// Whether the button pulses after entering.
    pub pulse: bool,
    /// Pulse period (ignored when `pulse` is false).
    pub pulse_period_frames: u64,
    /// Peak pulse scale.
    pub pulse_scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Stats scene presentation.
pub struct StatsMotion {
    /// Delay between successive stat items.
    pub stagger_frames: u64,
    /// Length of the number count-up.
    pub count_up_frames: u64,
    /// Easing for the count-up.
    pub count_up_ease: Ease,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fully resolved animation and timing parameters for one style.
///
/// Only `transition_duration_frames` and `scene_defaults` affect scheduling; the rest is
/// forwarded to the renderer.
pub struct StyleConfig {
    /// Style this config belongs to.
    pub name: StyleName,
    /// Frames two adjacent scenes overlap during a transition; always > 0.
    pub transition_duration_frames: u64,
    /// Length of text entrances.
    pub text_enter_duration_frames: u64,
    /// Per-type default scene durations.
    pub scene_defaults: SceneDefaults,
    /// Easing bindings.
    pub easing: EasingSet,
    /// General-purpose spring for element motion.
    pub spring: SpringConfig,
    /// Text entrance parameters.
    pub text: TextMotion,
    /// Logo entrance parameters.
    pub logo: LogoMotion,
    /// Screenshot parameters.
    pub screenshot: ScreenshotMotion,
    /// CTA parameters.
    pub cta: CtaMotion,
    /// Stats parameters.
    pub stats: StatsMotion,
}

impl StyleConfig {
    /// Smallest duration a scene may be scheduled with: one frame past its transition.
    pub fn min_scene_frames(&self) -> u64 {
        self.transition_duration_frames.saturating_add(1)
    }

    /// Base duration of `ty` when the script does not supply one.
    pub fn default_duration(&self, ty: SceneType) -> u64 {
        self.scene_defaults.get(ty)
    }
}
