use crate::{
    animation::motion::stagger_delays,
    effects::transitions::{TransitionPresentation, select_transition},
    foundation::core::Fps,
    script::{
        model::{ColorPalette, VideoScene, VideoScript},
        rules::ValidationRules,
        validate::{ValidationLevel, ValidationResult, validate_script},
    },
    style::{config::StyleConfig, presets::resolve_style},
    timeline::allocate::{SceneTiming, TimelineSummary, allocate_timeline, timeline_summary},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One scheduled scene with everything the renderer needs to draw it.
pub struct PlannedScene {
    /// Slot on the timeline.
    pub timing: SceneTiming,
    /// Presentation of the overlap with the previous scene; `None` for the first scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_in: Option<TransitionPresentation>,
    /// Logo to draw: the scene's own, else the script-wide fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Entrance delay, relative to the slot start, of each content element in order.
    pub element_delays: Vec<u64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Everything handed to the external renderer.
pub struct RenderPlan {
    /// Resolved style parameters.
    pub style: StyleConfig,
    /// Frame rate the plan was built for.
    pub fps: Fps,
    /// Requested visible length.
    pub target_duration_frames: u64,
    /// Brand colors, passed through.
    pub palette: ColorPalette,
    /// Scenes in playback order.
    pub scenes: Vec<PlannedScene>,
    /// Frame accounting for the allocated timeline.
    pub summary: TimelineSummary,
}

fn element_delays(scene: &VideoScene, style: &StyleConfig) -> Vec<u64> {
    let count = scene.element_count();
    match scene {
        VideoScene::Stats(_) => stagger_delays(count, 0, style.stats.stagger_frames),
        VideoScene::Cta(_) | VideoScene::Intro(_) => {
            // Logo (intro) and button (cta) take the first beat; text follows.
            stagger_delays(count, style.text.stagger_frames, style.text.stagger_frames)
        }
        _ => stagger_delays(count, 0, style.text.stagger_frames),
    }
}

impl RenderPlan {
    /// Schedule `script` into `target_duration_frames` of visible playback.
    ///
    /// Does not validate; see [`prepare_render`] for the gated pipeline.
    #[tracing::instrument(skip(script), fields(scenes = script.scenes.len(), style = %script.style))]
    pub fn build(script: &VideoScript, fps: Fps, target_duration_frames: u64) -> Self {
        let style = resolve_style(&script.style);
        let timings = allocate_timeline(&script.scenes, style, target_duration_frames);
        let summary = timeline_summary(&timings, style);

        let mut prev_type = None;
        let scenes = timings
            .into_iter()
            .map(|timing| {
                let ty = timing.scene.scene_type();
                let transition_in = prev_type.map(|prev| select_transition(prev, ty));
                prev_type = Some(ty);
                let logo_url = timing
                    .scene
                    .logo_url()
                    .or(script.logo_url.as_deref())
                    .map(str::to_string);
                let element_delays = element_delays(&timing.scene, style);
                PlannedScene {
                    timing,
                    transition_in,
                    logo_url,
                    element_delays,
                }
            })
            .collect();

        tracing::debug!(
            visible_frames = summary.visible_frames,
            scene_sum = summary.scene_sum,
            "render plan built"
        );

        Self {
            style: style.clone(),
            fps,
            target_duration_frames,
            palette: script.palette.clone(),
            scenes,
            summary,
        }
    }

    /// Total length of the nominal slots (last slot end).
    pub fn slot_frames(&self) -> u64 {
        self.scenes.last().map_or(0, |s| s.timing.end())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Result of the validate-then-schedule pipeline.
pub struct Prepared {
    /// Validator findings.
    pub validation: ValidationResult,
    /// Present iff `validation.valid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<RenderPlan>,
}

/// Validate `script` and, when it is renderable, schedule it.
///
/// Rules' frame rate is used for the plan.
pub fn prepare_render(
    script: &VideoScript,
    rules: &ValidationRules,
    target_duration_frames: u64,
) -> Prepared {
    let validation = validate_script(script, rules);
    let plan = if validation.valid {
        Some(RenderPlan::build(script, rules.fps, target_duration_frames))
    } else {
        tracing::warn!(
            errors = validation.count(ValidationLevel::Error),
            "script rejected; skipping scheduling"
        );
        None
    };
    Prepared { validation, plan }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/render_plan.rs"]
mod tests;
