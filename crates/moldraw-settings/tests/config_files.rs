use moldraw_core::Color;
use moldraw_settings::{Config, ConfigError, OutputFormat, SettingsError};

#[test]
fn test_save_and_load_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::new();
    config.drawing.scale_factor = Some(25.0);
    config.render.background = Color::rgb(10, 20, 30);
    config.render.output_format = OutputFormat::Svg;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_json_with_missing_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "interaction": { "pick_tolerance": 4.5 } }"#).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.interaction.pick_tolerance, 4.5);
    assert_eq!(loaded.drawing, Config::default().drawing);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[drawing]\nscene_width = -5.0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::ValueOutOfRange { ref key, .. }) if key == "drawing.scene_width"
    ));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let err = Config::new().save_to_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::JsonError(_))
    ));
}

#[test]
fn test_load_or_default_with_explicit_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Config::load_or_default(Some(&path)),
        Err(SettingsError::IoError(_))
    ));
}
