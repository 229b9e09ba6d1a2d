use std::path::Path;

use crate::foundation::error::{ReelError, ReelResult};

/// The five scene kinds a script can contain.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SceneType {
    /// Opening scene with headline and logo.
    Intro,
    /// A single product feature.
    Feature,
    /// A list of headline numbers.
    Stats,
    /// A product screenshot.
    Screenshot,
    /// Closing call-to-action.
    Cta,
}

impl SceneType {
    /// All scene types in canonical order.
    pub const ALL: [SceneType; 5] = [
        SceneType::Intro,
        SceneType::Feature,
        SceneType::Stats,
        SceneType::Screenshot,
        SceneType::Cta,
    ];

    /// Lowercase identifier used in JSON and rule messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Feature => "feature",
            Self::Stats => "stats",
            Self::Screenshot => "screenshot",
            Self::Cta => "cta",
        }
    }
}

impl std::fmt::Display for SceneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Brand colors passed through to the renderer untouched.
pub struct ColorPalette {
    /// Main brand color.
    pub primary: String,
    /// Supporting brand color.
    pub secondary: String,
    /// Highlight color for buttons and numbers.
    pub accent: String,
    /// Canvas background.
    pub background: String,
    /// Body text color.
    pub text: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#1e293b".to_string(),
            accent: "#f59e0b".to_string(),
            background: "#0f172a".to_string(),
            text: "#f8fafc".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Opening scene.
pub struct IntroScene {
    /// Main line; must be non-empty.
    #[serde(default)]
    pub headline: String,
    /// Optional secondary line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Scene-specific logo; falls back to [`VideoScript::logo_url`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Explicit duration in frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Feature highlight; at least one of title or description is required.
pub struct FeatureScene {
    /// Feature name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Feature explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit duration in frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One number on a stats scene.
pub struct StatItem {
    /// Display value, e.g. `"10x"`.
    pub value: String,
    /// Caption under the value.
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Stats scene; `items` must be non-empty.
pub struct StatsScene {
    /// Ordered stat items.
    #[serde(default)]
    pub items: Vec<StatItem>,
    /// Explicit duration in frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Screenshot scene.
pub struct ScreenshotScene {
    /// Opaque asset identifier; must be non-empty.
    #[serde(default)]
    pub image_url: String,
    /// Optional caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Explicit duration in frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Call-to-action; at least one of headline or button text is required.
pub struct CtaScene {
    /// Closing line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Button label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Link shown under the button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Explicit duration in frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// One typed segment of the video.
pub enum VideoScene {
    /// See [`IntroScene`].
    Intro(IntroScene),
    /// See [`FeatureScene`].
    Feature(FeatureScene),
    /// See [`StatsScene`].
    Stats(StatsScene),
    /// See [`ScreenshotScene`].
    Screenshot(ScreenshotScene),
    /// See [`CtaScene`].
    Cta(CtaScene),
}

impl VideoScene {
    /// Discriminant of this scene.
    pub fn scene_type(&self) -> SceneType {
        match self {
            Self::Intro(_) => SceneType::Intro,
            Self::Feature(_) => SceneType::Feature,
            Self::Stats(_) => SceneType::Stats,
            Self::Screenshot(_) => SceneType::Screenshot,
            Self::Cta(_) => SceneType::Cta,
        }
    }

    /// Explicit duration in frames, if the generator supplied one.
    pub fn duration(&self) -> Option<u64> {
        match self {
            Self::Intro(s) => s.duration,
            Self::Feature(s) => s.duration,
            Self::Stats(s) => s.duration,
            Self::Screenshot(s) => s.duration,
            Self::Cta(s) => s.duration,
        }
    }

    /// Logo carried by the scene itself (only intros have one).
    pub fn logo_url(&self) -> Option<&str> {
        match self {
            Self::Intro(s) => s.logo_url.as_deref(),
            _ => None,
        }
    }

    /// Number of independently animated text/content elements, used for entrance staggering.
    pub fn element_count(&self) -> usize {
        fn present(v: &Option<String>) -> usize {
            usize::from(v.as_deref().is_some_and(|s| !s.trim().is_empty()))
        }
        match self {
            Self::Intro(s) => 1 + present(&s.tagline),
            Self::Feature(s) => present(&s.title) + present(&s.description),
            Self::Stats(s) => s.items.len(),
            Self::Screenshot(s) => 1 + present(&s.caption),
            Self::Cta(s) => present(&s.headline) + present(&s.button_text) + present(&s.url),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A complete script as produced by the upstream generator.
pub struct VideoScript {
    /// Scenes in playback order.
    pub scenes: Vec<VideoScene>,
    /// Brand colors.
    #[serde(default)]
    pub palette: ColorPalette,
    /// Style name; unknown names resolve to `minimal`.
    #[serde(default = "default_style_name")]
    pub style: String,
    /// Fallback logo for scenes without their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

fn default_style_name() -> String {
    "minimal".to_string()
}

impl VideoScript {
    /// Parse a script from JSON.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        serde_json::from_str(s).map_err(|e| ReelError::serde(format!("invalid script json: {e}")))
    }

    /// Read and parse a script from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            ReelError::Other(anyhow::Error::new(e).context(format!("read '{}'", path.display())))
        })?;
        Self::from_json_str(&s)
    }

    /// Count scenes of the given type.
    pub fn count_of(&self, ty: SceneType) -> usize {
        self.scenes.iter().filter(|s| s.scene_type() == ty).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/model.rs"]
mod tests;
