//! fleetdeck - terminal dashboard components for a server fleet
//!
//! This library provides the presentation pieces of a server-management
//! dashboard rendered with Ratatui: a glassy panel container, an animated
//! tiered progress meter, a pulsing status indicator, and a server card that
//! combines them with a row of lifecycle action buttons. The card's action
//! dispatcher allows at most one outstanding action per card.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`fleet`] - Simulated fleet backing the bundled dashboard binary
//! * [`model`] - Server records and action kinds
//! * [`ui`] - Components, theme, animation and the dashboard host
//! * [`utils`] - Color helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Simulated server fleet and fleet file loading
pub mod fleet;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging to file and the in-memory activity log
pub mod logger;

/// Server records, statuses and action kinds
pub mod model;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colors and other helpers
pub mod utils;

pub use model::{ActionKind, ServerId, ServerRecord, ServerStatus};
