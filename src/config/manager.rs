use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs::atomic_write;
use crate::generation::DEFAULT_ENDPOINT;
use crate::language::{DEFAULT_FOREIGN, DEFAULT_NATIVE, LanguagePair};
use crate::paths;
use crate::ui::Style;

/// Models tried in order when none are configured.
pub const DEFAULT_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-2.5-flash-lite", "gemini-2.0-flash"];

/// Environment variables searched for an API key when none is configured.
pub const DEFAULT_API_KEY_ENVS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// A missing or invalid setting. Carries user-facing guidance.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ConfigError(pub String);

/// Settings in the `[ryomen]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Model priority list, most preferred first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
    /// Native language code (ISO 639-1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native: Option<String>,
    /// Foreign language code (ISO 639-1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign: Option<String>,
}

/// Settings in the `[api]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

impl ApiConfig {
    /// Gets the API key.
    ///
    /// A configured `api_key_env` wins over an inline `api_key`. With neither
    /// configured, the [`DEFAULT_API_KEY_ENVS`] are searched in order.
    pub fn get_api_key(&self) -> Option<String> {
        let from_env = |name: &str| std::env::var(name).ok().filter(|k| !k.is_empty());

        if let Some(env_var) = &self.api_key_env
            && let Some(key) = from_env(env_var)
        {
            return Some(key);
        }

        if self.api_key.is_some() {
            return self.api_key.clone();
        }

        if self.api_key_env.is_some() {
            return None;
        }

        DEFAULT_API_KEY_ENVS.iter().find_map(|name| from_env(name))
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/ryomen/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub ryomen: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Resolved configuration after merging CLI arguments, the config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Model priority list, deduplicated, never empty.
    pub models: Vec<String>,
    pub endpoint: String,
    pub api_key: String,
    pub native: String,
    pub foreign: String,
    pub languages: LanguagePair,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Replaces the configured model list when non-empty.
    pub models: Vec<String>,
    pub native: Option<String>,
    pub foreign: Option<String>,
    pub endpoint: Option<String>,
}

/// Resolves the model priority list.
///
/// CLI models replace the configured list, which replaces the defaults.
/// Duplicates are dropped (first occurrence wins) with a warning.
pub fn resolve_models(options: &ResolveOptions, config_file: &ConfigFile) -> Result<Vec<String>> {
    let candidates: Vec<String> = if options.models.is_empty() {
        config_file.ryomen.models.clone().unwrap_or_else(|| {
            DEFAULT_MODELS.iter().map(ToString::to_string).collect()
        })
    } else {
        options.models.clone()
    };

    let mut models: Vec<String> = Vec::with_capacity(candidates.len());
    for model in candidates {
        let model = model.trim().to_string();
        if model.is_empty() {
            continue;
        }
        if models.contains(&model) {
            crate::warn!(
                "{} Model '{model}' is listed more than once; keeping its first position",
                Style::warning("Warning:")
            );
            continue;
        }
        models.push(model);
    }

    if models.is_empty() {
        return Err(ConfigError(
            "Missing required configuration: 'models'\n\n\
             Please provide it via:\n  \
             - CLI option: ryomen --model <id> [--model <id> ...]\n  \
             - Config file: models = [\"gemini-2.5-flash\"] under [ryomen] in ~/.config/ryomen/config.toml"
                .to_string(),
        )
        .into());
    }

    Ok(models)
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let models = resolve_models(options, config_file)?;

    let native = options
        .native
        .clone()
        .or_else(|| config_file.ryomen.native.clone())
        .unwrap_or_else(|| DEFAULT_NATIVE.to_string());
    let foreign = options
        .foreign
        .clone()
        .or_else(|| config_file.ryomen.foreign.clone())
        .unwrap_or_else(|| DEFAULT_FOREIGN.to_string());
    let languages =
        LanguagePair::from_codes(&native, &foreign).map_err(|e| ConfigError(e.to_string()))?;

    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| config_file.api.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let api_key = config_file.api.get_api_key().ok_or_else(|| {
        let env_var = config_file
            .api
            .api_key_env
            .as_deref()
            .unwrap_or(DEFAULT_API_KEY_ENVS[0]);
        ConfigError(format!(
            "An API key is required\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key under [api] in ~/.config/ryomen/config.toml"
        ))
    })?;

    Ok(ResolvedConfig {
        models,
        endpoint,
        api_key,
        native,
        foreign,
        languages,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/ryomen/config.toml`
    /// or `~/.config/ryomen/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}
