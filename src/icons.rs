//! Icon service for managing different icon themes
//!
//! Action buttons, status dots and the in-flight spinner all draw their glyphs
//! from here, so one setting switches the whole dashboard between emoji,
//! Unicode and plain ASCII.

use crate::constants::SPINNER_FRAME_MS;
use crate::model::ActionKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Action button icons
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub start: &'static str,
    pub stop: &'static str,
    pub restart: &'static str,
    pub delete: &'static str,
    pub console: &'static str,
}

/// Status dot glyphs; the pulsed glyph is the "scaled up" frame
#[derive(Debug, Clone)]
pub struct IndicatorIcons {
    pub dot: &'static str,
    pub dot_pulsed: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub actions: ActionIcons,
    pub indicator: IndicatorIcons,
    pub spinner: &'static [&'static str],
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            actions: ActionIcons {
                start: "🚀",
                stop: "🛑",
                restart: "🔄",
                delete: "❌",
                console: "💻",
            },
            indicator: IndicatorIcons {
                dot: "●",
                dot_pulsed: "⬤",
            },
            spinner: &["🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚", "🕛"],
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            actions: ActionIcons {
                start: "▶",
                stop: "■",
                restart: "↻",
                delete: "✗",
                console: "❯",
            },
            indicator: IndicatorIcons {
                dot: "•",
                dot_pulsed: "●",
            },
            spinner: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            actions: ActionIcons {
                start: ">",
                stop: "#",
                restart: "~",
                delete: "x",
                console: "$",
            },
            indicator: IndicatorIcons {
                dot: "o",
                dot_pulsed: "O",
            },
            spinner: &["|", "/", "-", "\\"],
        }
    }

    /// Icon shown on an action button while it is idle
    #[must_use]
    pub fn action(&self, kind: ActionKind) -> &'static str {
        let actions = self.icons().actions;
        match kind {
            ActionKind::Start => actions.start,
            ActionKind::Stop => actions.stop,
            ActionKind::Restart => actions.restart,
            ActionKind::Delete => actions.delete,
            ActionKind::Console => actions.console,
        }
    }

    #[must_use]
    pub fn status_dot(&self, pulsed: bool) -> &'static str {
        let indicator = self.icons().indicator;
        if pulsed {
            indicator.dot_pulsed
        } else {
            indicator.dot
        }
    }

    /// Spinner frame for the given time since the spinner appeared
    #[must_use]
    pub fn spinner_frame(&self, elapsed: Duration) -> &'static str {
        let frames = self.icons().spinner;
        let index = (elapsed.as_millis() / SPINNER_FRAME_MS) as usize % frames.len();
        frames[index]
    }
}
