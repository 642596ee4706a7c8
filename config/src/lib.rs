//! Configuration for Hyperlink.
//!
//! Loaded from `~/.hyperlink/config.toml` (or `$HYPERLINK_CONFIG`). Every
//! section and key is optional; absent values fall back to the defaults below.
//!
//! ```toml
//! [app]
//! theme = "dark"
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [submission]
//! latency_ms = 1500
//! confirmation_ms = 3000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

use hyperlink_types::Theme;
use hyperlink_types::ui::UiOptions;
use serde::Deserialize;
use thiserror::Error;

/// Environment override for the config file location.
pub const CONFIG_PATH_ENV: &str = "HYPERLINK_CONFIG";
/// Any value other than empty, `0` or `false` forces reduced motion.
pub const REDUCED_MOTION_ENV: &str = "HYPERLINK_REDUCED_MOTION";

pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);
pub const DEFAULT_CONFIRMATION_WINDOW: Duration = Duration::from_millis(3000);

#[derive(Debug, Default, Deserialize)]
pub struct HyperlinkConfig {
    pub app: Option<AppConfig>,
    pub submission: Option<SubmissionConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Initial theme when no preference has been stored yet.
    pub theme: Option<Theme>,
    /// Use ASCII-only glyphs for icons and indicators.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable modal pop and slide reveal animations.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmissionConfig {
    pub latency_ms: Option<u64>,
    pub confirmation_ms: Option<u64>,
}

impl HyperlinkConfig {
    /// Load the config file. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn initial_theme(&self) -> Option<Theme> {
        self.app.as_ref().and_then(|app| app.theme)
    }

    #[must_use]
    pub fn submit_latency(&self) -> Duration {
        self.submission
            .as_ref()
            .and_then(|s| s.latency_ms)
            .map_or(DEFAULT_SUBMIT_LATENCY, Duration::from_millis)
    }

    #[must_use]
    pub fn confirmation_window(&self) -> Duration {
        self.submission
            .as_ref()
            .and_then(|s| s.confirmation_ms)
            .map_or(DEFAULT_CONFIRMATION_WINDOW, Duration::from_millis)
    }
}

/// Resolve UI options from an optional config plus the reduced-motion override.
#[must_use]
pub fn ui_options(config: Option<&HyperlinkConfig>, reduced_motion_env: Option<&str>) -> UiOptions {
    let app = config.and_then(|cfg| cfg.app.as_ref());
    UiOptions {
        ascii_only: app.is_some_and(|cfg| cfg.ascii_only),
        high_contrast: app.is_some_and(|cfg| cfg.high_contrast),
        reduced_motion: app.is_some_and(|cfg| cfg.reduced_motion)
            || reduced_motion_env.is_some_and(env_flag_enabled),
    }
}

/// [`ui_options`] reading the override from the process environment.
#[must_use]
pub fn ui_options_from_env(config: Option<&HyperlinkConfig>) -> UiOptions {
    let flag = env::var(REDUCED_MOTION_ENV).ok();
    ui_options(config, flag.as_deref())
}

fn env_flag_enabled(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

/// `~/.hyperlink`, where config, preferences and logs live.
#[must_use]
pub fn hyperlink_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".hyperlink"))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(custom) = env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(custom));
    }
    hyperlink_dir().map(|dir| dir.join("config.toml"))
}

/// Where the stored theme preference is kept.
#[must_use]
pub fn preferences_path() -> Option<PathBuf> {
    hyperlink_dir().map(|dir| dir.join("preferences.json"))
}
