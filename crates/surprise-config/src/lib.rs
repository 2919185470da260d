//! Runtime configuration loaded from `config.toml` in the platform config dir.
//!
//! Every key is optional. Missing keys fall back to [`Config::default`], so a
//! file can override just the values you care about:
//!
//! ```toml
//! star_count = 400
//! animation_speed = "fast"
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use surprise_core::AnimationSpeed;

/// Application name used for config and data directories.
pub const APP_NAME: &str = "space-surprise";

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// No home directory to derive platform paths from
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
}

/// Tunable parameters of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // ── Starfield ────────────────────────────────────────────────────────────
    /// Number of background stars.
    pub star_count: usize,

    // ── Space objects ────────────────────────────────────────────────────────
    /// Number of floating sprites per batch.
    pub object_count: usize,
    /// Radius around the center where no sprite may spawn.
    pub exclusion_radius: f32,
    /// Footprint subtracted from the viewport when sampling positions.
    pub object_margin: f32,
    /// Rejection-sampling attempts before falling back to the exclusion ring.
    pub max_placement_attempts: u32,

    // ── Transitions ──────────────────────────────────────────────────────────
    /// Delay between triggering the collapse and clearing the objects.
    pub collapse_clear_delay_ms: u64,

    // ── Rendering ────────────────────────────────────────────────────────────
    /// Target frames per second.
    pub frame_rate: u32,
    /// Surface units covered by one terminal column.
    pub cell_width: f32,
    /// Surface units covered by one terminal row.
    pub cell_height: f32,
    /// Initial animation speed.
    pub animation_speed: AnimationSpeed,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: 200,
            object_count: 30,
            exclusion_radius: 200.0,
            object_margin: 100.0,
            max_placement_attempts: 1000,
            collapse_clear_delay_ms: 2500,
            frame_rate: 60,
            cell_width: 8.0,
            cell_height: 16.0,
            animation_speed: AnimationSpeed::Medium,
        }
    }
}

impl Config {
    /// Parse a config from TOML text and clamp it into a usable range.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        Ok(config.validated())
    }

    /// Load a config from a file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load the user's config, falling back to defaults on any problem.
    ///
    /// A missing file is the normal case and is not reported as a warning.
    pub fn load_or_default() -> Self {
        let path = match config_path() {
            Ok(path) => path,
            Err(err) => {
                log::warn!("using default config: {err}");
                return Self::default();
            }
        };

        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("ignoring config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Clamp values that would stall or break the animation.
    pub fn validated(mut self) -> Self {
        self.frame_rate = self.frame_rate.clamp(1, 240);
        self.cell_width = sanitize_positive(self.cell_width, 8.0).max(1.0);
        self.cell_height = sanitize_positive(self.cell_height, 16.0).max(1.0);
        self.max_placement_attempts = self.max_placement_attempts.max(1);
        self.exclusion_radius = sanitize_positive(self.exclusion_radius, 0.0);
        self.object_margin = sanitize_positive(self.object_margin, 0.0);
        self
    }

    /// Interval between frames in milliseconds.
    pub fn frame_interval_ms(&self) -> u64 {
        (1000 / self.frame_rate.max(1)) as u64
    }
}

fn sanitize_positive(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", APP_NAME).ok_or(ConfigError::NoConfigDir)
}

/// Path of the user's config file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

/// Directory for runtime data such as the log file.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}
