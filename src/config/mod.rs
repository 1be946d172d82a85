//! Configuration file management and layered settings resolution.

mod manager;

pub use manager::{
    ApiConfig, ConfigError, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENVS, DEFAULT_MODELS,
    GeneralConfig, ResolveOptions, ResolvedConfig, resolve_config, resolve_models,
};
