#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use ryomen::config::{
    ApiConfig, ConfigError, ConfigFile, DEFAULT_MODELS, GeneralConfig, ResolveOptions,
    resolve_config,
};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        ryomen: GeneralConfig {
            models: Some(vec![
                "config-model-a".to_string(),
                "config-model-b".to_string(),
            ]),
            native: Some("ko".to_string()),
            foreign: Some("de".to_string()),
        },
        api: ApiConfig {
            endpoint: Some("http://config.local".to_string()),
            api_key: Some("test_key".to_string()),
            api_key_env: None,
        },
    }
}

fn keyed_empty_config() -> ConfigFile {
    ConfigFile {
        ryomen: GeneralConfig::default(),
        api: ApiConfig {
            endpoint: None,
            api_key: Some("test_key".to_string()),
            api_key_env: None,
        },
    }
}

#[test]
fn test_config_values_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.models, vec!["config-model-a", "config-model-b"]);
    assert_eq!(resolved.native, "ko");
    assert_eq!(resolved.foreign, "de");
    assert_eq!(resolved.languages.native, "Korean");
    assert_eq!(resolved.languages.foreign, "German");
    assert_eq!(resolved.endpoint, "http://config.local");
    assert_eq!(resolved.api_key, "test_key");
}

#[test]
fn test_builtin_defaults_fill_missing_values() {
    let resolved = resolve_config(&ResolveOptions::default(), &keyed_empty_config()).unwrap();

    assert_eq!(resolved.models, DEFAULT_MODELS);
    assert_eq!(resolved.native, "ja");
    assert_eq!(resolved.foreign, "en");
    assert!(resolved.endpoint.starts_with("https://generativelanguage.googleapis.com"));
}

#[test]
fn test_cli_models_replace_config_list() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        models: vec!["cli-model".to_string()], // CLI specifies one model
        ..Default::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    // The CLI list replaces the configured one rather than extending it
    assert_eq!(resolved.models, vec!["cli-model"]);
}

#[test]
fn test_cli_languages_override_config_languages() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        native: Some("ja".to_string()),
        foreign: Some("fr".to_string()),
        ..Default::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.native, "ja");
    assert_eq!(resolved.foreign, "fr");
    assert_eq!(resolved.languages.foreign, "French");
}

#[test]
fn test_cli_endpoint_overrides_config_endpoint() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("http://cli.local".to_string()),
        ..Default::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.endpoint, "http://cli.local");
}

#[test]
fn test_duplicate_models_keep_first_position() {
    let options = ResolveOptions {
        models: vec![
            "gemini-2.5-flash".to_string(),
            "gemini-2.0-flash".to_string(),
            "gemini-2.5-flash".to_string(),
        ],
        ..Default::default()
    };

    let resolved = resolve_config(&options, &keyed_empty_config()).unwrap();

    assert_eq!(resolved.models, vec!["gemini-2.5-flash", "gemini-2.0-flash"]);
}

#[test]
fn test_empty_model_list_is_config_error() {
    let mut config = keyed_empty_config();
    config.ryomen.models = Some(vec![]);

    let err = resolve_config(&ResolveOptions::default(), &config).unwrap_err();

    assert!(err.downcast_ref::<ConfigError>().is_some());
    assert!(err.to_string().contains("models"));
}

#[test]
fn test_invalid_language_is_config_error() {
    let options = ResolveOptions {
        native: Some("invalid_lang_xyz".to_string()),
        ..Default::default()
    };

    let err = resolve_config(&options, &keyed_empty_config()).unwrap_err();

    assert!(err.downcast_ref::<ConfigError>().is_some());
    assert!(err.to_string().contains("Invalid language code"));
}

#[test]
fn test_identical_languages_rejected() {
    let options = ResolveOptions {
        native: Some("en".to_string()),
        foreign: Some("en".to_string()),
        ..Default::default()
    };

    let result = resolve_config(&options, &keyed_empty_config());
    assert!(result.is_err());
}
