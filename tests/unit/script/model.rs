use super::*;

#[test]
fn scenes_parse_from_tagged_camel_case_json() {
    let script = VideoScript::from_json_str(
        r##"{
          "style": "energetic",
          "logoUrl": "asset://logo",
          "scenes": [
            { "type": "intro", "headline": "Ship faster", "logoUrl": "asset://intro-logo" },
            { "type": "feature", "title": "Sync", "duration": 120 },
            { "type": "stats", "items": [{ "value": "10x", "label": "faster" }] },
            { "type": "screenshot", "imageUrl": "asset://shot" },
            { "type": "cta", "buttonText": "Try it" }
          ]
        }"##,
    )
    .unwrap();

    assert_eq!(script.style, "energetic");
    assert_eq!(script.palette, ColorPalette::default());
    let types: Vec<_> = script.scenes.iter().map(VideoScene::scene_type).collect();
    assert_eq!(types, SceneType::ALL.to_vec());
    assert_eq!(script.scenes[1].duration(), Some(120));
    assert_eq!(script.scenes[0].duration(), None);
    assert_eq!(script.scenes[0].logo_url(), Some("asset://intro-logo"));
    match &script.scenes[4] {
        VideoScene::Cta(c) => assert_eq!(c.button_text.as_deref(), Some("Try it")),
        other => panic!("expected cta, got {other:?}"),
    }
}

#[test]
fn missing_required_content_still_parses() {
    let script = VideoScript::from_json_str(
        r#"{ "scenes": [{ "type": "intro" }, { "type": "stats" }] }"#,
    )
    .unwrap();
    assert_eq!(script.style, "minimal");
    match &script.scenes[0] {
        VideoScene::Intro(i) => assert!(i.headline.is_empty()),
        other => panic!("expected intro, got {other:?}"),
    }
    assert_eq!(script.scenes[1].element_count(), 0);
}

#[test]
fn unknown_scene_type_is_a_serde_error() {
    let err = VideoScript::from_json_str(r#"{ "scenes": [{ "type": "outro" }] }"#).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn element_count_ignores_blank_fields() {
    let scene = VideoScene::Cta(CtaScene {
        headline: Some("Start today".to_string()),
        button_text: Some("  ".to_string()),
        url: Some("example.com".to_string()),
        duration: None,
    });
    assert_eq!(scene.element_count(), 2);
}

#[test]
fn count_of_counts_by_type() {
    let script = VideoScript {
        scenes: vec![
            VideoScene::Feature(FeatureScene::default()),
            VideoScene::Feature(FeatureScene::default()),
            VideoScene::Cta(CtaScene::default()),
        ],
        palette: ColorPalette::default(),
        style: "minimal".to_string(),
        logo_url: None,
    };
    assert_eq!(script.count_of(SceneType::Feature), 2);
    assert_eq!(script.count_of(SceneType::Intro), 0);
}

#[test]
fn scene_serializes_with_type_tag() {
    let v = serde_json::to_value(VideoScene::Screenshot(ScreenshotScene {
        image_url: "asset://a".to_string(),
        caption: None,
        duration: Some(90),
    }))
    .unwrap();
    assert_eq!(
        v,
        serde_json::json!({ "type": "screenshot", "imageUrl": "asset://a", "duration": 90 })
    );
}
