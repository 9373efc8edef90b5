//! Utility modules for fleetdeck.
//!
//! - [`color`] - Color parsing and blending used by the theme and animated widgets

pub mod color;
