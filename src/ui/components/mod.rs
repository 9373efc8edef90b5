//! Reusable UI components

pub mod action_dispatcher;
pub mod activity_panel;
pub mod panel;
pub mod progress_meter;
pub mod server_card;
pub mod status_bar;
pub mod status_indicator;

// Component exports
pub use action_dispatcher::{ActionBar, ActionDispatcher, BusyGuard, BusySlot, PendingAction, ServerActions};
pub use activity_panel::ActivityPanel;
pub use panel::PanelContainer;
pub use progress_meter::{MeterSize, ProgressMeter, Tier};
pub use server_card::{CardContext, ServerSummaryCard};
pub use status_bar::StatusBar;
pub use status_indicator::{StatusAppearance, StatusIndicator};
