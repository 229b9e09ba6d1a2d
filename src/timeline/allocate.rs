use crate::{script::model::VideoScene, style::config::StyleConfig};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A scene's nominal slot on the timeline.
///
/// Slots are contiguous: `start` of scene `i + 1` is `start + duration` of scene `i`. Visual
/// playback overlaps adjacent slots by the style's transition duration.
pub struct SceneTiming {
    /// Position of the scene in the input script.
    pub index: usize,
    /// The scheduled scene.
    pub scene: VideoScene,
    /// First frame of the slot.
    pub start: u64,
    /// Slot length in frames; always > 0.
    pub duration: u64,
}

impl SceneTiming {
    /// Exclusive end frame of the slot.
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.duration)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Frame accounting for an allocated timeline.
pub struct TimelineSummary {
    /// Sum of all slot durations.
    pub scene_sum: u64,
    /// Frames hidden by transition overlap: `(scenes - 1) * transition_duration_frames`.
    pub transition_overlap: u64,
    /// Wall-clock length of playback: `scene_sum - transition_overlap`.
    pub visible_frames: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Branch {
    Degenerate,
    OverBudget { scale: f64 },
    WithinBudget,
}

/// Frames hidden by transitions between `scene_count` scenes.
pub fn transition_overlap(scene_count: usize, style: &StyleConfig) -> u64 {
    (scene_count.saturating_sub(1) as u64).saturating_mul(style.transition_duration_frames)
}

/// Duration a scene asks for before any fitting: its explicit duration, or the style default.
pub fn base_duration(scene: &VideoScene, style: &StyleConfig) -> u64 {
    scene
        .duration()
        .unwrap_or_else(|| style.default_duration(scene.scene_type()))
}

/// Fit `scenes` into `target_duration_frames` of visible playback.
///
/// Adjacent scenes overlap by `style.transition_duration_frames`, so the visible length is the
/// sum of slot durations minus the total overlap. Three cases, checked in order:
///
/// - every base duration is zero: the budget (target plus overlap) is split evenly;
/// - visible length exceeds the target: durations are scaled down proportionally and floored;
/// - otherwise base durations are kept.
///
/// Durations never drop below `transition_duration_frames + 1`, even when that pushes the
/// total past the target. Never fails; an empty input yields an empty timeline.
#[tracing::instrument(skip(scenes, style), fields(scenes = scenes.len(), style = %style.name))]
pub fn allocate_timeline(
    scenes: &[VideoScene],
    style: &StyleConfig,
    target_duration_frames: u64,
) -> Vec<SceneTiming> {
    if scenes.is_empty() {
        return Vec::new();
    }

    let min_frames = style.min_scene_frames();
    let overlap = transition_overlap(scenes.len(), style);
    let base: Vec<u64> = scenes.iter().map(|s| base_duration(s, style)).collect();
    let base_sum = base.iter().fold(0u64, |acc, &d| acc.saturating_add(d));
    let budget = target_duration_frames.saturating_add(overlap);

    let branch = if base_sum == 0 {
        Branch::Degenerate
    } else {
        match base_sum.checked_sub(overlap) {
            Some(effective) if effective > 0 && effective > target_duration_frames => {
                Branch::OverBudget {
                    scale: budget as f64 / base_sum as f64,
                }
            }
            _ => Branch::WithinBudget,
        }
    };
    tracing::debug!(?branch, base_sum, overlap, target_duration_frames, "allocating timeline");

    let durations: Vec<u64> = match branch {
        Branch::Degenerate => {
            let per_scene = (budget / scenes.len() as u64).max(min_frames);
            vec![per_scene; scenes.len()]
        }
        Branch::OverBudget { scale } => base
            .iter()
            .map(|&d| ((d as f64 * scale).floor() as u64).max(min_frames))
            .collect(),
        Branch::WithinBudget => base.iter().map(|&d| d.max(min_frames)).collect(),
    };

    let mut start = 0u64;
    scenes
        .iter()
        .zip(durations)
        .enumerate()
        .map(|(index, (scene, duration))| {
            let timing = SceneTiming {
                index,
                scene: scene.clone(),
                start,
                duration,
            };
            start = start.saturating_add(duration);
            timing
        })
        .collect()
}

/// Summarize slot and overlap accounting for an allocated timeline.
pub fn timeline_summary(timings: &[SceneTiming], style: &StyleConfig) -> TimelineSummary {
    let scene_sum = timings
        .iter()
        .fold(0u64, |acc, t| acc.saturating_add(t.duration));
    let transition_overlap = transition_overlap(timings.len(), style);
    TimelineSummary {
        scene_sum,
        transition_overlap,
        visible_frames: scene_sum.saturating_sub(transition_overlap),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/allocate.rs"]
mod tests;
