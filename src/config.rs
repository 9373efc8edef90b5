//! Configuration management for fleetdeck
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    ACTION_LATENCY_DEFAULT_MS, ACTION_LATENCY_MAX_MS, CONFIG_GENERATED, ENTRANCE_DURATION_MS, ENTRANCE_OFFSET_ROWS,
    FILL_DURATION_MS, PULSE_PERIOD_MS, TICK_RATE_DEFAULT_MS, TICK_RATE_MAX_MS, TICK_RATE_MIN_MS, UI_COLUMNS_DEFAULT,
    UI_COLUMNS_MAX, UI_COLUMNS_MIN,
};
use crate::icons::IconTheme;
use crate::model::ActionKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub theme: ThemeConfig,
    pub fleet: FleetConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll / animation tick interval in milliseconds
    pub tick_rate_ms: u64,
    /// Number of card columns in the grid
    pub columns: u16,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
    /// Show the activity panel below the grid
    pub show_activity: bool,
}

/// Colors and animation timings
///
/// Colors accept names ("green", "dark_gray") or `#rrggbb`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub online: String,
    pub offline: String,
    pub pending: String,
    pub active: String,
    pub completed: String,
    pub tier_low: String,
    pub tier_mid: String,
    pub tier_high: String,
    pub fill_base: String,
    pub track: String,
    pub panel_border: String,
    pub panel_hover: String,
    pub panel_glow: String,
    pub text: String,
    pub muted: String,
    pub destructive: String,
    pub pulse_period_ms: u64,
    pub fill_duration_ms: u64,
    pub entrance_duration_ms: u64,
    pub entrance_offset_rows: u16,
}

/// Simulated fleet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// JSON file with an array of server records; built-in demo fleet when unset
    pub path: Option<PathBuf>,
    /// How long every simulated action takes
    pub action_latency_ms: u64,
    /// Actions that always fail, e.g. ["delete"]
    pub failing_actions: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file
    pub enabled: bool,
    /// Log level filter: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: TICK_RATE_DEFAULT_MS,
            columns: UI_COLUMNS_DEFAULT,
            mouse_enabled: true,
            icon_theme: IconTheme::default(),
            show_activity: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            online: "#22c55e".to_string(),
            offline: "#ef4444".to_string(),
            pending: "#eab308".to_string(),
            active: "#3b82f6".to_string(),
            completed: "#a855f7".to_string(),
            tier_low: "#22c55e".to_string(),
            tier_mid: "#eab308".to_string(),
            tier_high: "#ef4444".to_string(),
            fill_base: "#06b6d4".to_string(),
            track: "#334155".to_string(),
            panel_border: "#475569".to_string(),
            panel_hover: "#94a3b8".to_string(),
            panel_glow: "#8b5cf6".to_string(),
            text: "#f8fafc".to_string(),
            muted: "#94a3b8".to_string(),
            destructive: "#f87171".to_string(),
            pulse_period_ms: PULSE_PERIOD_MS,
            fill_duration_ms: FILL_DURATION_MS,
            entrance_duration_ms: ENTRANCE_DURATION_MS,
            entrance_offset_rows: ENTRANCE_OFFSET_ROWS,
        }
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            path: None,
            action_latency_ms: ACTION_LATENCY_DEFAULT_MS,
            failing_actions: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl FleetConfig {
    /// Failing actions parsed into kinds; unknown names are skipped
    pub fn failing_kinds(&self) -> Vec<ActionKind> {
        self.failing_actions.iter().filter_map(|name| ActionKind::parse(name)).collect()
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("fleetdeck.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("fleetdeck").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms < TICK_RATE_MIN_MS || self.ui.tick_rate_ms > TICK_RATE_MAX_MS {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        if self.ui.columns < UI_COLUMNS_MIN || self.ui.columns > UI_COLUMNS_MAX {
            anyhow::bail!(
                "columns must be between {} and {}, got {}",
                UI_COLUMNS_MIN,
                UI_COLUMNS_MAX,
                self.ui.columns
            );
        }

        if self.theme.pulse_period_ms == 0 {
            anyhow::bail!("pulse_period_ms must be greater than 0");
        }

        if self.fleet.action_latency_ms > ACTION_LATENCY_MAX_MS {
            anyhow::bail!("action_latency_ms cannot exceed {}", ACTION_LATENCY_MAX_MS);
        }

        for name in &self.fleet.failing_actions {
            if ActionKind::parse(name).is_none() {
                anyhow::bail!(
                    "Unknown action '{}' in failing_actions. Valid actions: start, stop, restart, delete, console",
                    name
                );
            }
        }

        if let Err(e) = self.logging.level.parse::<log::LevelFilter>() {
            anyhow::bail!("Invalid logging level '{}': {}", self.logging.level, e);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# fleetdeck Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("fleetdeck"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
