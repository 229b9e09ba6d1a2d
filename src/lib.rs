//! reelplan is the timeline composition core for scripted promo videos.
//!
//! A [`VideoScript`] (an ordered list of typed scenes produced upstream) is turned into a
//! frame-accurate [`RenderPlan`] that an external renderer paints. This crate never touches
//! pixels, assets or the network.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: `VideoScript -> ValidationResult` (leveled findings, 0-100 score, `valid` gate)
//! 2. **Resolve style**: `style name -> &'static StyleConfig` (easing, springs, default durations)
//! 3. **Allocate**: `scenes + style + target frames -> Vec<SceneTiming>` (overlap-aware fitting)
//! 4. **Plan**: timings plus per-pair transitions, logo fallback and entrance delays
//!
//! Every step is pure and deterministic. Only input parsing ([`VideoScript::from_path`],
//! [`ValidationRules::from_path`]) can fail; scheduling, style resolution and validation are
//! total functions.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod effects;
mod foundation;
mod plan;
mod script;
mod style;
mod timeline;

pub use animation::ease::{Ease, interpolate, interpolate_color, parse_hex_rgb};
pub use animation::motion::{SpringConfig, spring_progress, spring_settle_frames, stagger_delays};
pub use effects::transitions::{SlideDirection, TransitionPresentation, select_transition};
pub use foundation::core::{DEFAULT_FPS, Fps};
pub use foundation::error::{ReelError, ReelResult};
pub use plan::render_plan::{PlannedScene, Prepared, RenderPlan, prepare_render};
pub use script::model::{
    ColorPalette, CtaScene, FeatureScene, IntroScene, SceneType, ScreenshotScene, StatItem,
    StatsScene, VideoScene, VideoScript,
};
pub use script::rules::{DurationBounds, ValidationRules};
pub use script::validate::{
    ValidationLevel, ValidationResult, ValidationWarning, effective_duration, validate_script,
};
pub use style::config::{
    CtaMotion, EasingSet, LogoMotion, SceneDefaults, ScreenshotMotion, StatsMotion, StyleConfig,
    StyleName, TextMotion,
};
pub use style::presets::{ENERGETIC, MINIMAL, PROFESSIONAL, resolve_style};
pub use timeline::allocate::{
    SceneTiming, TimelineSummary, allocate_timeline, base_duration, timeline_summary,
    transition_overlap,
};
