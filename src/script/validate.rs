use crate::{
    script::{
        model::{SceneType, VideoScene, VideoScript},
        rules::ValidationRules,
    },
    style::{config::StyleConfig, presets::resolve_style},
};

/// Severity of a validation finding.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Blocks rendering.
    Error,
    /// Hurts quality; rendering may proceed.
    Warning,
    /// Advisory note.
    Info,
}

impl ValidationLevel {
    /// Points subtracted from the score per finding at this level.
    pub fn penalty(self) -> u32 {
        match self {
            Self::Error => 20,
            Self::Warning => 10,
            Self::Info => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One finding from a rule check.
pub struct ValidationWarning {
    /// Severity.
    pub level: ValidationLevel,
    /// Stable rule identifier, e.g. `missing-cta`.
    pub rule: String,
    /// Human-readable explanation.
    pub message: String,
    /// Offending scene, for per-scene rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_index: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Outcome of [`validate_script`].
pub struct ValidationResult {
    /// `true` iff there are no error-level findings.
    pub valid: bool,
    /// Findings in rule order.
    pub warnings: Vec<ValidationWarning>,
    /// Advisory quality score in `[0, 100]`.
    pub score: u32,
}

impl ValidationResult {
    fn from_warnings(warnings: Vec<ValidationWarning>) -> Self {
        let penalty: u32 = warnings.iter().map(|w| w.level.penalty()).sum();
        Self {
            valid: !warnings.iter().any(|w| w.level == ValidationLevel::Error),
            score: 100u32.saturating_sub(penalty),
            warnings,
        }
    }

    /// Number of findings at `level`.
    pub fn count(&self, level: ValidationLevel) -> usize {
        self.warnings.iter().filter(|w| w.level == level).count()
    }

    /// Findings for a given rule identifier.
    pub fn by_rule<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a ValidationWarning> {
        self.warnings.iter().filter(move |w| w.rule == rule)
    }
}

struct Findings(Vec<ValidationWarning>);

impl Findings {
    fn push(
        &mut self,
        level: ValidationLevel,
        rule: &str,
        message: impl Into<String>,
        scene_index: Option<usize>,
    ) {
        self.0.push(ValidationWarning {
            level,
            rule: rule.to_string(),
            message: message.into(),
            scene_index,
        });
    }
}

/// Duration used by the rule checks: explicit durations, with zero meaning "style default".
pub fn effective_duration(scene: &VideoScene, style: &StyleConfig) -> u64 {
    match scene.duration() {
        Some(d) if d > 0 => d,
        _ => style.default_duration(scene.scene_type()),
    }
}

fn is_blank(v: Option<&str>) -> bool {
    v.is_none_or(|s| s.trim().is_empty())
}

/// Check a script against `rules` before any scheduling or rendering.
///
/// Never fails: every problem is reported as a [`ValidationWarning`]. The score starts at 100
/// and loses 20 per error, 10 per warning and 2 per info note, floored at 0.
#[tracing::instrument(skip(script, rules), fields(scenes = script.scenes.len(), style = %script.style))]
pub fn validate_script(script: &VideoScript, rules: &ValidationRules) -> ValidationResult {
    use ValidationLevel::{Error, Info, Warning};

    let style = resolve_style(&script.style);
    let secs = |frames: u64| rules.fps.frames_to_secs(frames);
    let mut out = Findings(Vec::new());

    if script.scenes.is_empty() {
        out.push(Error, "no-scenes", "script has no scenes", None);
    }

    // Total duration band.
    let total_frames: u64 = script
        .scenes
        .iter()
        .map(|s| effective_duration(s, style))
        .fold(0u64, |acc, d| acc.saturating_add(d));
    let total_secs = secs(total_frames);
    if total_secs < rules.min_total_secs {
        out.push(
            Warning,
            "too-short",
            format!(
                "video is {total_secs:.1}s, shorter than the {:.0}s minimum",
                rules.min_total_secs
            ),
            None,
        );
    } else if total_secs > rules.max_total_secs {
        out.push(
            Warning,
            "too-long",
            format!(
                "video is {total_secs:.1}s, longer than the {:.0}s maximum",
                rules.max_total_secs
            ),
            None,
        );
    }

    // Hook window.
    match script
        .scenes
        .iter()
        .position(|s| s.scene_type() == SceneType::Intro)
    {
        Some(i) => {
            let intro_secs = secs(effective_duration(&script.scenes[i], style));
            if intro_secs > rules.hook_window_secs {
                out.push(
                    Warning,
                    "hook-too-long",
                    format!(
                        "intro runs {intro_secs:.1}s; viewers decide within {:.0}s",
                        rules.hook_window_secs
                    ),
                    Some(i),
                );
            }
        }
        None => out.push(
            Info,
            "missing-intro",
            "script has no intro scene to hook viewers",
            None,
        ),
    }

    // CTA requirement.
    if rules.require_cta && script.count_of(SceneType::Cta) == 0 {
        out.push(
            Error,
            "missing-cta",
            "script must end with a call-to-action scene",
            None,
        );
    }

    // Feature density.
    let features = script.count_of(SceneType::Feature);
    if features > rules.max_features {
        out.push(
            Warning,
            "too-many-features",
            format!(
                "{features} feature scenes; at most {} keep the video focused",
                rules.max_features
            ),
            None,
        );
    }

    // Per-scene duration bounds.
    for (i, scene) in script.scenes.iter().enumerate() {
        let ty = scene.scene_type();
        let Some(bounds) = rules.scene_bounds.get(&ty) else {
            continue;
        };
        let scene_secs = secs(effective_duration(scene, style));
        if scene_secs < bounds.min_secs {
            out.push(
                Warning,
                "scene-too-short",
                format!(
                    "{ty} scene is {scene_secs:.1}s, below the {:.1}s minimum",
                    bounds.min_secs
                ),
                Some(i),
            );
        } else if scene_secs > bounds.max_secs {
            out.push(
                Info,
                "scene-too-long",
                format!(
                    "{ty} scene is {scene_secs:.1}s, above the {:.1}s maximum",
                    bounds.max_secs
                ),
                Some(i),
            );
        }
    }

    // Content completeness.
    for (i, scene) in script.scenes.iter().enumerate() {
        let missing = match scene {
            VideoScene::Intro(s) if s.headline.trim().is_empty() => {
                Some(("missing-headline", "intro scene needs a headline"))
            }
            VideoScene::Feature(s)
                if is_blank(s.title.as_deref()) && is_blank(s.description.as_deref()) =>
            {
                Some((
                    "missing-feature-content",
                    "feature scene needs a title or description",
                ))
            }
            VideoScene::Stats(s) if s.items.is_empty() => {
                Some(("empty-stats", "stats scene needs at least one item"))
            }
            VideoScene::Screenshot(s) if s.image_url.trim().is_empty() => {
                Some(("missing-image", "screenshot scene needs an image"))
            }
            VideoScene::Cta(s)
                if is_blank(s.headline.as_deref()) && is_blank(s.button_text.as_deref()) =>
            {
                Some((
                    "missing-cta-content",
                    "cta scene needs a headline or button text",
                ))
            }
            _ => None,
        };
        if let Some((rule, message)) = missing {
            out.push(Error, rule, message, Some(i));
        }
    }

    let result = ValidationResult::from_warnings(out.0);
    tracing::debug!(
        valid = result.valid,
        score = result.score,
        findings = result.warnings.len(),
        "script validated"
    );
    result
}

#[cfg(test)]
#[path = "../../tests/unit/script/validate.rs"]
mod tests;
