use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = MacrosConfig::default();
    assert_eq!(config.action_keyword, DEFAULT_ACTION_KEYWORD);
    assert_eq!(config.settings, Settings::default());
    assert_eq!(config.data_folder(), config.plugin_directory);
}

#[test]
fn test_icons_live_under_plugin_directory() {
    let config = MacrosConfig::new("/opt/macros", Settings::default());
    assert_eq!(config.app_icon(), PathBuf::from("/opt/macros").join(APP_ICON));
    assert_eq!(config.macro_icon(), PathBuf::from("/opt/macros").join(MACRO_ICON));
    assert_eq!(
        config.settings_path(),
        PathBuf::from("/opt/macros").join(SETTINGS_FILE_NAME)
    );
}

#[test]
fn test_configured_folder_overrides_plugin_directory() {
    let settings = Settings {
        folder_path: Some("/data/macros".to_string()),
    };
    let config = MacrosConfig::new("/opt/macros", settings).with_action_keyword("mm");
    assert_eq!(config.data_folder(), PathBuf::from("/data/macros"));
    assert_eq!(config.action_keyword, "mm");
}

#[test]
fn test_blank_folder_is_ignored() {
    let settings = Settings {
        folder_path: Some("   ".to_string()),
    };
    assert_eq!(settings.data_folder(), None);
}

#[test]
fn test_folder_path_tilde_is_expanded() {
    let settings = Settings {
        folder_path: Some("~/snippets".to_string()),
    };
    let folder = settings.data_folder().unwrap();
    assert!(!folder.to_string_lossy().starts_with('~'));
    assert!(folder.ends_with("snippets"));
}

#[test]
fn test_settings_serialization_uses_camel_case() {
    let settings = Settings {
        folder_path: Some("/tmp/x".to_string()),
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(json, r#"{"folderPath":"/tmp/x"}"#);

    let legacy: Settings = serde_json::from_str(r#"{"FolderPath":"/tmp/y"}"#).unwrap();
    assert_eq!(legacy.folder_path.as_deref(), Some("/tmp/y"));
}

#[test]
fn test_load_settings_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = load_settings(&dir.path().join("nope.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_settings_invalid_json_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(SETTINGS_FILE_NAME);
    std::fs::write(&path, "not json").unwrap();
    assert_eq!(load_settings(&path), Settings::default());
}

#[test]
fn test_save_and_load_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE_NAME);
    let settings = Settings {
        folder_path: Some("/srv/macros".to_string()),
    };

    save_settings(&path, &settings).unwrap();
    assert_eq!(load_settings(&path), settings);
    assert!(!path.with_extension("json.tmp").exists());
}
