//! Constants used throughout the application
//!
//! This module centralizes UI text, animation timings, and layout values.

// Animation timings (milliseconds)
/// Period of one pulse cycle for live status dots
pub const PULSE_PERIOD_MS: u64 = 2000;
/// Duration of the progress fill transition
pub const FILL_DURATION_MS: u64 = 800;
/// Duration of the panel entrance transition
pub const ENTRANCE_DURATION_MS: u64 = 300;
/// Rows a panel slides up by while entering
pub const ENTRANCE_OFFSET_ROWS: u16 = 1;
/// Delay between spinner frames
pub const SPINNER_FRAME_MS: u128 = 80;

// Progress tiers (percent, inclusive lower bounds)
pub const TIER_YELLOW_FROM: f64 = 50.0;
pub const TIER_RED_FROM: f64 = 80.0;
/// Default maximum for a progress meter
pub const METER_DEFAULT_MAX: f64 = 100.0;

// Layout
/// Total height of a server card, borders included
pub const CARD_HEIGHT: u16 = 10;
/// Height of the activity panel
pub const ACTIVITY_HEIGHT: u16 = 7;
pub const UI_COLUMNS_MIN: u16 = 1;
pub const UI_COLUMNS_MAX: u16 = 6;
pub const UI_COLUMNS_DEFAULT: u16 = 3;
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;
pub const TICK_RATE_DEFAULT_MS: u64 = 50;

// Simulated fleet
pub const ACTION_LATENCY_DEFAULT_MS: u64 = 1200;
pub const ACTION_LATENCY_MAX_MS: u64 = 60_000;

/// Maximum number of in-memory activity entries kept
pub const MAX_ACTIVITY_ENTRIES: usize = 500;

// UI text
pub const APP_TITLE: &str = " fleetdeck ";
pub const ACTIVITY_TITLE: &str = " Activity ";
pub const EMPTY_FLEET: &str = "No servers in this fleet";
pub const STATUS_HINTS: &str =
    "←↓↑→/hjkl: card • Tab: button • Enter: press • s/x/r/d/c: actions • i: icons • q: quit";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Activity messages
pub const LOG_ACTION_REQUESTED: &str = "⏳ Requested";
pub const LOG_ACTION_SUCCEEDED: &str = "✅ Finished";
pub const LOG_ACTION_FAILED: &str = "❌ Failed";
