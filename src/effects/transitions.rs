use crate::script::model::SceneType;

/// Edge the incoming scene slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideDirection {
    /// Enters from the left edge.
    FromLeft,
    /// Enters from the right edge.
    FromRight,
    /// Enters from the top edge.
    FromTop,
    /// Enters from the bottom edge.
    FromBottom,
}

/// How the renderer presents the overlap between two adjacent scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "direction", rename_all = "lowercase")]
pub enum TransitionPresentation {
    /// Cross-fade.
    Fade,
    /// Incoming scene slides over the outgoing one.
    Slide(SlideDirection),
}

/// Pick the presentation for the transition from `current` into `next`.
///
/// Intro into feature slides from the right and stats into CTA slides from the bottom; every
/// other pair fades.
pub fn select_transition(current: SceneType, next: SceneType) -> TransitionPresentation {
    match (current, next) {
        (SceneType::Intro, SceneType::Feature) => {
            TransitionPresentation::Slide(SlideDirection::FromRight)
        }
        (SceneType::Stats, SceneType::Cta) => {
            TransitionPresentation::Slide(SlideDirection::FromBottom)
        }
        _ => TransitionPresentation::Fade,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
