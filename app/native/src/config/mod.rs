//! Tessera configuration.
//!
//! Settings are read from a JSONC file (comments allowed) the first time they
//! are needed and then shared for the lifetime of the process. A missing or
//! broken file never stops the engine; it falls back to [`TesseraConfig::default`].

pub mod template;
pub mod types;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub use types::{
    AxisDirection, ConfigError, LayoutAxis, TesseraConfig, TileConfig, config_paths,
    load_config as load_config_default, load_config_from_path,
};

/// Settings in effect, with the file they came from.
#[derive(Debug, Default)]
struct LoadedConfig {
    config: TesseraConfig,
    source: Option<PathBuf>,
}

static LOADED: OnceLock<LoadedConfig> = OnceLock::new();

/// Set by `--config`; consulted only on first load.
static OVERRIDE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Points the first load at `path` instead of the search paths.
///
/// Returns `false` when an override was already registered. Has no effect once
/// the configuration has been loaded.
pub fn set_custom_config_path(path: PathBuf) -> bool {
    if LOADED.get().is_some() {
        tracing::warn!(path = %path.display(), "configuration already loaded, override ignored");
    }
    OVERRIDE_PATH.set(path).is_ok()
}

fn load() -> LoadedConfig {
    let result = match OVERRIDE_PATH.get() {
        Some(path) => load_config_from_path(path),
        None => load_config_default(),
    };

    match result {
        Ok((config, source)) => {
            tracing::debug!(path = %source.display(), "configuration loaded");
            LoadedConfig { config, source: Some(source) }
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file, using defaults");
            LoadedConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable configuration");
            LoadedConfig::default()
        }
    }
}

/// Loads the configuration now rather than on first use. Idempotent.
pub fn init() -> &'static TesseraConfig { get_config() }

/// Returns the process-wide configuration, loading it on first use.
pub fn get_config() -> &'static TesseraConfig { &LOADED.get_or_init(load).config }

/// File the current configuration was read from, or `None` for defaults.
pub fn get_config_path() -> Option<&'static Path> {
    LOADED.get_or_init(load).source.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_config_defaults_to_tile_defaults() {
        let loaded = LoadedConfig::default();
        assert_eq!(loaded.config.tiling, TileConfig::default());
        assert!(loaded.source.is_none());
    }

    #[test]
    fn test_not_found_message_mentions_search() {
        assert!(ConfigError::NotFound.to_string().contains("No configuration file found"));
    }
}
