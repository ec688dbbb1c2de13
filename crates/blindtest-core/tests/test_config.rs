use std::path::PathBuf;

use blindtest_core::config::{LayoutConfig, SurveyConfig};
use blindtest_core::consts::SLOT_COUNT;
use blindtest_core::error::BlindTestError;
use blindtest_core::geometry::{ContainerPreset, Size};

#[test]
fn test_default_config_is_valid() {
    let config = SurveyConfig::default();
    config.validate().unwrap();
    assert_eq!(config.images.len(), SLOT_COUNT);
    assert_eq!(config.images[0], PathBuf::from("sampleimage/1.png"));
}

#[test]
fn test_presets_resolve_from_layout() {
    let layout = LayoutConfig::default();
    assert_eq!(ContainerPreset::Normal.size(&layout), Size::new(200.0, 260.0));
    assert_eq!(ContainerPreset::Expanded.size(&layout), Size::new(350.0, 500.0));
}

#[test]
fn test_toml_without_layout_uses_default_presets() {
    let text = r#"
        title = "Night shots"
        group_label = "night"
        total_groups = 5
        images = ["a.jpg", "b.jpg", "c.jpg", "d.jpg"]
    "#;
    let config: SurveyConfig = toml::from_str(text).unwrap();
    config.validate().unwrap();
    assert_eq!(config.total_groups, 5);
    assert_eq!(config.layout, LayoutConfig::default());
}

#[test]
fn test_default_config_survives_toml() {
    let config = SurveyConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    assert!(text.contains("expanded"), "got: {text}");
    let parsed: SurveyConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_wrong_image_count_rejected() {
    let config = SurveyConfig {
        images: vec![PathBuf::from("only.png")],
        ..SurveyConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        BlindTestError::ImageCountMismatch { expected: 4, actual: 1 }
    ));
}

#[test]
fn test_zero_groups_rejected() {
    let config = SurveyConfig {
        total_groups: 0,
        ..SurveyConfig::default()
    };
    assert!(matches!(config.validate(), Err(BlindTestError::NoGroups)));
}

#[test]
fn test_empty_container_rejected() {
    let mut config = SurveyConfig::default();
    config.layout.expanded = Size::new(350.0, 0.0);
    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "Invalid container size: 350x0");
}
