use std::{collections::BTreeMap, path::Path};

use crate::{
    foundation::{
        core::Fps,
        error::{ReelError, ReelResult},
    },
    script::model::SceneType,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Allowed duration range for one scene type, in seconds.
pub struct DurationBounds {
    /// Scenes shorter than this draw a warning.
    pub min_secs: f64,
    /// Scenes longer than this draw an info note.
    pub max_secs: f64,
}

impl DurationBounds {
    /// Build a bounds pair.
    pub const fn new(min_secs: f64, max_secs: f64) -> Self {
        Self { min_secs, max_secs }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Thresholds used by [`crate::validate_script`].
///
/// Every field has a default, so a rules file only needs the values it changes.
pub struct ValidationRules {
    /// Frame rate used to convert scene durations to seconds.
    pub fps: Fps,
    /// Scripts shorter than this draw `too-short`.
    pub min_total_secs: f64,
    /// Scripts longer than this draw `too-long`.
    pub max_total_secs: f64,
    /// Intros longer than this draw `hook-too-long`.
    pub hook_window_secs: f64,
    /// Whether a missing CTA is an error.
    pub require_cta: bool,
    /// More feature scenes than this draw `too-many-features`.
    pub max_features: usize,
    /// Per-type duration bounds; types without an entry are not checked.
    pub scene_bounds: BTreeMap<SceneType, DurationBounds>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            min_total_secs: 60.0,
            max_total_secs: 120.0,
            hook_window_secs: 15.0,
            require_cta: true,
            max_features: 5,
            scene_bounds: BTreeMap::from([
                (SceneType::Intro, DurationBounds::new(2.0, 15.0)),
                (SceneType::Feature, DurationBounds::new(3.0, 20.0)),
                (SceneType::Stats, DurationBounds::new(3.0, 15.0)),
                (SceneType::Screenshot, DurationBounds::new(3.0, 20.0)),
                (SceneType::Cta, DurationBounds::new(3.0, 15.0)),
            ]),
        }
    }
}

impl ValidationRules {
    /// Check that thresholds are finite, non-negative and ordered.
    pub fn validate(&self) -> ReelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        for (name, v) in [
            ("min_total_secs", self.min_total_secs),
            ("max_total_secs", self.max_total_secs),
            ("hook_window_secs", self.hook_window_secs),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ReelError::config(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.min_total_secs > self.max_total_secs {
            return Err(ReelError::config(
                "min_total_secs must be <= max_total_secs",
            ));
        }
        for (ty, b) in &self.scene_bounds {
            if !b.min_secs.is_finite() || !b.max_secs.is_finite() || b.min_secs < 0.0 {
                return Err(ReelError::config(format!(
                    "scene_bounds.{ty} must be finite and >= 0"
                )));
            }
            if b.min_secs > b.max_secs {
                return Err(ReelError::config(format!(
                    "scene_bounds.{ty}.min_secs must be <= max_secs"
                )));
            }
        }
        Ok(())
    }

    /// Parse and check a rules document.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let rules: Self = serde_json::from_str(s)
            .map_err(|e| ReelError::serde(format!("invalid rules json: {e}")))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Read, parse and check a rules file.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            ReelError::Other(anyhow::Error::new(e).context(format!("read '{}'", path.display())))
        })?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/rules.rs"]
mod tests;
