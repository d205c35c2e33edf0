use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `TUNESORT__`) and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TUNESORT")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Like [`Settings::load`], but a missing, unreadable or invalid config
    /// only produces a warning and the defaults are used instead.
    pub fn load_or_default() -> Self {
        let settings = match Self::load() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("failed to load config, using defaults: {e}");
                return Self::default();
            }
        };
        match settings.validate() {
            Ok(()) => settings,
            Err(msg) => {
                log::warn!("invalid config, using defaults: {msg}");
                Self::default()
            }
        }
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.scan.extension.trim_start_matches('.').is_empty() {
            return Err("scan.extension must not be empty".to_string());
        }
        let layout = &self.layout;
        for (key, value) in [
            ("layout.unknown_artist", &layout.unknown_artist),
            ("layout.unknown_album", &layout.unknown_album),
            ("layout.unknown_title", &layout.unknown_title),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{key} must not be empty"));
            }
        }
        Ok(())
    }
}

/// Resolve the config path from `TUNESORT_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TUNESORT_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tunesort/config.toml`
/// or `~/.config/tunesort/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tunesort").join("config.toml"))
}
