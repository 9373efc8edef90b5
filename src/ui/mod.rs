//! UI module for fleetdeck
//!
//! The reusable dashboard components live in [`components`]; [`app`] hosts
//! them in a terminal dashboard and [`renderer`] drives the terminal.

pub mod animation;
pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use app::Dashboard;
pub use layout::LayoutManager;
pub use renderer::run_app;
pub use theme::Theme;
