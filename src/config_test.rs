use super::*;
use tempfile::TempDir;

#[test]
fn test_default_config_values() {
    let config = Config::default();

    assert_eq!(config.model.path, PathBuf::from("models/ggml-base.en.bin"));
    assert_eq!(config.model.language, "auto");
    assert!(!config.model.fp16);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn test_load_valid_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let toml_content = r#"
[model]
path = "/opt/models/ggml-small.bin"
language = "en"
fp16 = true

[logging]
level = "debug"
"#;

    std::fs::write(&config_path, toml_content).unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.model.path, PathBuf::from("/opt/models/ggml-small.bin"));
    assert_eq!(config.model.language, "en");
    assert!(config.model.fp16);
    assert_eq!(config.logging.level, LogLevel::Debug);
}

#[test]
fn test_missing_config_file_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent.toml");

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_toml_returns_error() {
    let invalid_toml = "this is not valid { toml [";

    let result = Config::parse(invalid_toml);

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("TOML"));
}

#[test]
fn test_invalid_log_level_returns_error() {
    let toml_content = r#"
[logging]
level = "loud"
"#;

    assert!(Config::parse(toml_content).is_err());
}

#[test]
fn test_partial_config_uses_defaults_for_missing() {
    let partial_toml = r#"
[model]
language = "de"
"#;

    let config = Config::parse(partial_toml).unwrap();

    assert_eq!(config.model.language, "de");
    assert_eq!(config.model.path, PathBuf::from("models/ggml-base.en.bin"));
    assert!(!config.model.fp16);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let original = Config {
        model: ModelConfig {
            path: PathBuf::from("/models/ggml-medium.bin"),
            language: "cs".to_string(),
            fp16: true,
        },
        logging: LoggingConfig {
            level: LogLevel::Trace,
        },
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested/dir/config.toml");

    let config = Config::default();
    config.save_to(&config_path).unwrap();

    assert!(config_path.exists());
}

#[test]
fn test_log_level_serialization() {
    let config = Config {
        logging: LoggingConfig {
            level: LogLevel::Warn,
        },
        ..Default::default()
    };

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("level = \"warn\""));
}

#[test]
fn test_log_level_directives() {
    assert_eq!(LogLevel::Info.as_directive(), "whisper_bridge=info");
    assert_eq!(LogLevel::Trace.as_directive(), "whisper_bridge=trace");
}

#[test]
fn test_language_hint() {
    let mut model = ModelConfig::default();
    assert_eq!(model.language_hint(), None);

    model.language = "en".to_string();
    assert_eq!(model.language_hint(), Some("en".to_string()));
}
