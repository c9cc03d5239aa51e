use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` layers an optional config file under environment
/// variables (prefix `ENCORE__`) and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("ENCORE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let volume = self.player.default_volume;
        if !(0.0..=1.0).contains(&volume) {
            return Err(format!("player.default_volume must be within [0, 1], got {volume}"));
        }
        let step = self.player.volume_step;
        if !(step > 0.0 && step <= 1.0) {
            return Err(format!("player.volume_step must be within (0, 1], got {step}"));
        }
        if self.player.scrub_seconds == 0 {
            return Err("player.scrub_seconds must be >= 1".to_string());
        }
        Ok(())
    }

    /// The catalog file to read: the configured path, or `albums.toml` in the
    /// config directory.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .path
            .clone()
            .or_else(|| config_home().map(|d| d.join("encore").join("albums.toml")))
    }
}

/// Resolve the config path from `ENCORE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("ENCORE_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    config_home().map(|d| d.join("encore").join("config.toml"))
}

/// `$XDG_CONFIG_HOME`, or `~/.config` when it is not set.
pub fn config_home() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// `$XDG_STATE_HOME`, or `~/.local/state` when it is not set.
pub fn state_home() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"])
}

fn xdg_dir(var: &str, home_fallback: &[&str]) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    env::var_os("HOME").map(|home| {
        home_fallback
            .iter()
            .fold(PathBuf::from(home), |acc, part| acc.join(part))
    })
}
