//! Core UI functionality for fleetdeck.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Theme, icons and logger shared by components
//! - [`event_handler`] - Terminal input polling and ticks
//! - [`task_manager`] - Local background tasks for in-flight card actions

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
