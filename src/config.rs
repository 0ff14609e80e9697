//! Reader configuration.
//!
//! Loaded from `<config_dir>/bookfolio/config.toml`. A missing file means
//! defaults; a malformed one is an error so typos do not go unnoticed.
//! Every field is optional in the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BookError, Result};
use crate::types::Page;

/// Config filename within the app's config directory.
const CONFIG_FILENAME: &str = "config.toml";

/// Upper bounds on the spring, relative to its mass.
const MAX_STIFFNESS_PER_MASS: f32 = 10_000.0;
const MAX_DAMPING_PER_MASS: f32 = 400.0;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page the reader opens on.
    pub start_page: Page,
    /// How long the cover stays up before turning to the index.
    pub cover_delay_ms: u64,
    /// Animation frame interval.
    pub frame_ms: u64,
    pub motion: MotionConfig,
    pub log: LogConfig,
}

/// Page-turn animation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// When false, turns settle instantly.
    pub enabled: bool,
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Opacity fade of the entering page.
    pub fade_in_ms: u64,
    /// Full exit of the leaving page.
    pub exit_ms: u64,
}

/// Log output. Nothing is logged unless `file` is set or `BOOKFOLIO_LOG` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "bookfolio=debug".
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_page: Page::Cover,
            cover_delay_ms: 2_000,
            frame_ms: 16,
            motion: MotionConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            enabled: true,
            stiffness: 50.0,
            damping: 20.0,
            mass: 1.0,
            fade_in_ms: 300,
            exit_ms: 400,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Default location: `<config_dir>/bookfolio/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bookfolio").join(CONFIG_FILENAME))
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        match Config::default_path() {
            Some(path) => Config::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => {
                return Err(BookError::ConfigRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let config: Config = toml::from_str(&contents).map_err(|e| BookError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.motion.validate().map_err(|reason| BookError::ConfigInvalid {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    pub fn cover_delay(&self) -> Duration {
        Duration::from_millis(self.cover_delay_ms)
    }

    /// Frame interval, never below one millisecond.
    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

impl MotionConfig {
    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    /// Check that the spring comes to rest.
    ///
    /// Stiffness, damping and mass must be finite and positive. The ratios
    /// to mass are bounded so the fixed integration step stays stable.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("motion.{} must be a positive number, got {}", name, value));
            }
        }
        if self.stiffness / self.mass > MAX_STIFFNESS_PER_MASS {
            return Err(format!(
                "motion.stiffness / motion.mass must be at most {}, got {}",
                MAX_STIFFNESS_PER_MASS,
                self.stiffness / self.mass
            ));
        }
        if self.damping / self.mass > MAX_DAMPING_PER_MASS {
            return Err(format!(
                "motion.damping / motion.mass must be at most {}, got {}",
                MAX_DAMPING_PER_MASS,
                self.damping / self.mass
            ));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
