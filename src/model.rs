//! Server records and the action vocabulary shared by the dashboard components.
//!
//! A [`ServerRecord`] is owned by the host application and handed to the card
//! components as an immutable snapshot for each render pass.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a managed server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(String);

impl ServerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Lifecycle status of a server.
///
/// The set is open: anything that is not one of the known values is kept
/// verbatim in [`ServerStatus::Other`] and rendered like `offline`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServerStatus {
    #[default]
    Online,
    Offline,
    Pending,
    Active,
    Completed,
    Other(String),
}

impl ServerStatus {
    /// Parse a status string. Never fails; matching is case-insensitive.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "online" => Self::Online,
            "offline" => Self::Offline,
            "pending" => Self::Pending,
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }

    /// Live statuses get the continuous pulse animation
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Online | Self::Active)
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Offline)
    }
}

impl From<String> for ServerStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for ServerStatus {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<ServerStatus> for String {
    fn from(status: ServerStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one managed server as supplied by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub id: ServerId,
    pub name: String,
    /// Network address, display only
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub status: ServerStatus,
    /// CPU utilization, nominally 0-100
    #[serde(default)]
    pub cpu: f64,
    /// Memory utilization, nominally 0-100
    #[serde(default)]
    pub ram: f64,
    #[serde(default)]
    pub plan: String,
    /// Creation timestamp as a display string; never parsed
    #[serde(default)]
    pub created_at: String,
}

/// The five lifecycle operations a card can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Start,
    Stop,
    Restart,
    Delete,
    Console,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [Self::Start, Self::Stop, Self::Restart, Self::Delete, Self::Console];

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Stop => "Stop",
            Self::Restart => "Restart",
            Self::Delete => "Delete",
            Self::Console => "Console",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Delete => "delete",
            Self::Console => "console",
        }
    }

    /// Keyboard shortcut that presses this action's button
    pub fn hotkey(self) -> char {
        match self {
            Self::Start => 's',
            Self::Stop => 'x',
            Self::Restart => 'r',
            Self::Delete => 'd',
            Self::Console => 'c',
        }
    }

    /// Destructive actions get distinct button styling
    #[must_use]
    pub fn is_destructive(self) -> bool {
        matches!(self, Self::Delete)
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn from_hotkey(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.hotkey() == key)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
