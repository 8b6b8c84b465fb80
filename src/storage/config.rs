//! Application configuration.
//!
//! Defaults for the session designer and the tempo explorer, loaded from a
//! TOML file in the platform data directory.

use crate::limits;
use crate::metrics::intensity::{DEFAULT_LOAD_PERCENT, DEFAULT_REPS};
use crate::session::{SessionPlan, DEFAULT_TARGET_MINUTES};
use crate::tempo::TempoProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Session designer defaults
    pub session: SessionSettings,
    /// Tempo explorer defaults
    pub tempo: TempoSettings,
    /// Simulation clock settings
    pub simulation: SimulationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            session: SessionSettings::default(),
            tempo: TempoSettings::default(),
            simulation: SimulationSettings::default(),
        }
    }
}

impl AppConfig {
    /// Force every value into the range its control allows.
    pub fn clamped(mut self) -> Self {
        self.session.plan = self.session.plan.clamped();
        self.session.target_minutes = self.session.target_minutes.max(1);
        self.tempo.profile = self.tempo.profile.clamped();
        self.tempo.reps = limits::REPS_PER_SET.snap_u32(self.tempo.reps);
        self.tempo.load_percent = limits::LOAD_PERCENT.snap_u32(self.tempo.load_percent);
        self.simulation.tick_interval_ms = self
            .simulation
            .tick_interval_ms
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        self
    }
}

/// Session designer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Target session length in minutes
    pub target_minutes: u32,
    /// Starting plan
    pub plan: SessionPlan,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            target_minutes: DEFAULT_TARGET_MINUTES,
            plan: SessionPlan::default(),
        }
    }
}

/// Tempo explorer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TempoSettings {
    /// Repetitions in the simulated set
    pub reps: u32,
    /// Load as a percentage of 1RM
    pub load_percent: u32,
    /// Starting tempo
    pub profile: TempoProfile,
}

impl Default for TempoSettings {
    fn default() -> Self {
        Self {
            reps: DEFAULT_REPS,
            load_percent: DEFAULT_LOAD_PERCENT,
            profile: TempoProfile::default(),
        }
    }
}

const MIN_TICK_INTERVAL_MS: u64 = 5;
const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Simulation clock settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Interval between clock ticks in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        // Roughly one display frame
        Self {
            tick_interval_ms: 16,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "liftlab", "LiftLab")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load configuration from a specific file. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to a specific file, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
