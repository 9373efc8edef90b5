//! Explicit style configuration handed to every component.

use crate::config::ThemeConfig;
use crate::utils::color::parse_color;
use ratatui::style::Color;
use std::time::Duration;

/// Colors and timings used by the dashboard components
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub online: Color,
    pub offline: Color,
    pub pending: Color,
    pub active: Color,
    pub completed: Color,
    pub tier_low: Color,
    pub tier_mid: Color,
    pub tier_high: Color,
    /// Start color of the progress fill gradient
    pub fill_base: Color,
    pub track: Color,
    pub panel_border: Color,
    pub panel_hover: Color,
    pub panel_glow: Color,
    pub text: Color,
    pub muted: Color,
    pub destructive: Color,
    pub pulse_period: Duration,
    pub fill_duration: Duration,
    pub entrance_duration: Duration,
    pub entrance_offset_rows: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    /// Build a theme from configuration; unparseable colors fall back to the defaults
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = ThemeConfig::default();
        let color = |value: &str, fallback: &str, slot: &str| {
            parse_color(value).unwrap_or_else(|| {
                log::warn!("Theme: invalid color '{}' for {}, using default", value, slot);
                parse_color(fallback).unwrap_or(Color::Reset)
            })
        };

        Self {
            online: color(&config.online, &defaults.online, "online"),
            offline: color(&config.offline, &defaults.offline, "offline"),
            pending: color(&config.pending, &defaults.pending, "pending"),
            active: color(&config.active, &defaults.active, "active"),
            completed: color(&config.completed, &defaults.completed, "completed"),
            tier_low: color(&config.tier_low, &defaults.tier_low, "tier_low"),
            tier_mid: color(&config.tier_mid, &defaults.tier_mid, "tier_mid"),
            tier_high: color(&config.tier_high, &defaults.tier_high, "tier_high"),
            fill_base: color(&config.fill_base, &defaults.fill_base, "fill_base"),
            track: color(&config.track, &defaults.track, "track"),
            panel_border: color(&config.panel_border, &defaults.panel_border, "panel_border"),
            panel_hover: color(&config.panel_hover, &defaults.panel_hover, "panel_hover"),
            panel_glow: color(&config.panel_glow, &defaults.panel_glow, "panel_glow"),
            text: color(&config.text, &defaults.text, "text"),
            muted: color(&config.muted, &defaults.muted, "muted"),
            destructive: color(&config.destructive, &defaults.destructive, "destructive"),
            pulse_period: Duration::from_millis(config.pulse_period_ms),
            fill_duration: Duration::from_millis(config.fill_duration_ms),
            entrance_duration: Duration::from_millis(config.entrance_duration_ms),
            entrance_offset_rows: config.entrance_offset_rows,
        }
    }
}
