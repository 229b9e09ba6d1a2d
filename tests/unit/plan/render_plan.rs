use super::*;
use crate::effects::transitions::SlideDirection;
use crate::foundation::core::DEFAULT_FPS;
use crate::script::model::{CtaScene, FeatureScene, IntroScene, StatItem, StatsScene};

fn sample_script(style: &str) -> VideoScript {
    VideoScript {
        scenes: vec![
            VideoScene::Intro(IntroScene {
                headline: "Ship faster".to_string(),
                tagline: Some("Deploys in seconds".to_string()),
                logo_url: None,
                duration: Some(300),
            }),
            VideoScene::Feature(FeatureScene {
                title: Some("Previews".to_string()),
                description: Some("Every branch gets a URL".to_string()),
                duration: Some(600),
            }),
            VideoScene::Stats(StatsScene {
                items: vec![
                    StatItem {
                        value: "10x".to_string(),
                        label: "faster".to_string(),
                    },
                    StatItem {
                        value: "99.99%".to_string(),
                        label: "uptime".to_string(),
                    },
                    StatItem {
                        value: "0".to_string(),
                        label: "config".to_string(),
                    },
                ],
                duration: Some(600),
            }),
            VideoScene::Cta(CtaScene {
                headline: Some("Try it today".to_string()),
                button_text: Some("Start free".to_string()),
                url: None,
                duration: Some(300),
            }),
        ],
        palette: ColorPalette::default(),
        style: style.to_string(),
        logo_url: Some("asset://brand".to_string()),
    }
}

#[test]
fn plan_selects_transitions_between_neighbours() {
    let plan = RenderPlan::build(&sample_script("minimal"), DEFAULT_FPS, 1_800);
    let transitions: Vec<_> = plan.scenes.iter().map(|s| s.transition_in).collect();
    assert_eq!(
        transitions,
        vec![
            None,
            Some(TransitionPresentation::Slide(SlideDirection::FromRight)),
            Some(TransitionPresentation::Fade),
            Some(TransitionPresentation::Slide(SlideDirection::FromBottom)),
        ]
    );
}

#[test]
fn plan_falls_back_to_script_logo() {
    let mut script = sample_script("minimal");
    if let VideoScene::Intro(intro) = &mut script.scenes[0] {
        intro.logo_url = Some("asset://intro".to_string());
    }
    let plan = RenderPlan::build(&script, DEFAULT_FPS, 1_800);
    assert_eq!(plan.scenes[0].logo_url.as_deref(), Some("asset://intro"));
    assert_eq!(plan.scenes[1].logo_url.as_deref(), Some("asset://brand"));
}

#[test]
fn plan_rescales_into_target() {
    // 1800 frames of scenes, 45 overlap; target 900 -> budget 945.
    let plan = RenderPlan::build(&sample_script("minimal"), DEFAULT_FPS, 900);
    let durations: Vec<_> = plan.scenes.iter().map(|s| s.timing.duration).collect();
    assert_eq!(durations, vec![157, 315, 315, 157]);
    assert_eq!(plan.summary.transition_overlap, 45);
    assert!(plan.summary.scene_sum <= 945);
    assert_eq!(plan.slot_frames(), plan.summary.scene_sum);
}

#[test]
fn element_delays_follow_style_stagger() {
    let plan = RenderPlan::build(&sample_script("energetic"), DEFAULT_FPS, 1_800);
    // intro: headline + tagline after the logo beat
    assert_eq!(plan.scenes[0].element_delays, vec![4, 8]);
    // feature: title + description
    assert_eq!(plan.scenes[1].element_delays, vec![0, 4]);
    // stats: three items on the stats stagger
    assert_eq!(plan.scenes[2].element_delays, vec![0, 5, 10]);
    assert_eq!(plan.style.name, crate::style::config::StyleName::Energetic);
}

#[test]
fn prepare_gates_on_validity() {
    let rules = ValidationRules::default();
    let ok = prepare_render(&sample_script("professional"), &rules, 1_800);
    assert!(ok.validation.valid);
    let plan = ok.plan.expect("valid script should be planned");
    assert_eq!(plan.fps, rules.fps);
    assert_eq!(plan.target_duration_frames, 1_800);

    let mut broken = sample_script("professional");
    broken.scenes.pop();
    let rejected = prepare_render(&broken, &rules, 1_800);
    assert!(!rejected.validation.valid);
    assert!(rejected.plan.is_none());
}

#[test]
fn plan_json_carries_schedule() {
    let plan = RenderPlan::build(&sample_script("minimal"), DEFAULT_FPS, 1_800);
    let json = serde_json::to_string(&plan).unwrap();
    let back: RenderPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(back.scenes, plan.scenes);
    assert_eq!(back.summary, plan.summary);
    assert_eq!(back.style.name, plan.style.name);

    let v = serde_json::to_value(&plan).unwrap();
    assert!(v["scenes"][0].get("transition_in").is_none());
    assert_eq!(v["scenes"][1]["transition_in"]["kind"], "slide");
}
