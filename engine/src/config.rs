use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use janken_types::{Hand, ui::UiOptions};

/// Opponent refresh cadence when nothing is configured.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

const REFRESH_ENV: &str = "JANKEN_REFRESH_MS";
const INITIAL_HAND_ENV: &str = "JANKEN_INITIAL_HAND";

/// Contents of `~/.janken/config.toml`.
///
/// ```toml
/// [game]
/// refresh_ms = 100
/// initial_hand = "rock"
///
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct JankenConfig {
    pub app: Option<AppConfig>,
    pub game: Option<GameConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs and hand art.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the dialog pop-in animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameConfig {
    /// Milliseconds between opponent hand changes. Must be non-zero.
    pub refresh_ms: Option<u64>,
    /// Opponent hand shown before the first refresh.
    pub initial_hand: Option<Hand>,
}

impl JankenConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
            Ok(config) => Ok(config),
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
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".janken").join("config.toml"))
}

/// Settings resolved from config file and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub refresh_interval: Duration,
    pub initial_hand: Hand,
    pub ui_options: UiOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            initial_hand: Hand::Rock,
            ui_options: UiOptions::default(),
        }
    }
}

impl Settings {
    /// Environment variables take precedence over the config file.
    #[must_use]
    pub fn resolve(config: Option<&JankenConfig>) -> Self {
        Self::resolve_with(config, |key| env::var(key).ok())
    }

    fn resolve_with(config: Option<&JankenConfig>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let game = config.and_then(|cfg| cfg.game.as_ref());
        let app = config.and_then(|cfg| cfg.app.as_ref());

        let refresh_ms = match lookup(REFRESH_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(err) => {
                    tracing::warn!("Ignoring {REFRESH_ENV}={raw:?}: {err}");
                    game.and_then(|g| g.refresh_ms)
                }
            },
            None => game.and_then(|g| g.refresh_ms),
        };

        let initial_hand = match lookup(INITIAL_HAND_ENV) {
            Some(raw) => match raw.parse::<Hand>() {
                Ok(hand) => Some(hand),
                Err(err) => {
                    tracing::warn!("Ignoring {INITIAL_HAND_ENV}: {err}");
                    game.and_then(|g| g.initial_hand)
                }
            },
            None => game.and_then(|g| g.initial_hand),
        };

        let ui_options = app.map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        });

        Self {
            refresh_interval: refresh_interval_from_ms(refresh_ms),
            initial_hand: initial_hand.unwrap_or_default(),
            ui_options,
        }
    }
}

fn refresh_interval_from_ms(ms: Option<u64>) -> Duration {
    match ms {
        Some(0) => {
            tracing::warn!(
                "refresh interval must be non-zero; using {}ms",
                DEFAULT_REFRESH_INTERVAL.as_millis()
            );
            DEFAULT_REFRESH_INTERVAL
        }
        Some(ms) => Duration::from_millis(ms),
        None => DEFAULT_REFRESH_INTERVAL,
    }
}
