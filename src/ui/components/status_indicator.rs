//! Colored status dot with an uppercase label.

use crate::icons::IconService;
use crate::model::ServerStatus;
use crate::ui::animation::Pulse;
use crate::ui::theme::Theme;
use crate::utils::color::dim;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use std::time::Instant;

/// Resolved color/label pair for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAppearance {
    pub color: Color,
    pub label: &'static str,
    /// Live statuses pulse continuously
    pub live: bool,
}

/// Look up the appearance of a status. Unknown statuses use the offline entry.
#[must_use]
pub fn resolve(status: &ServerStatus, theme: &Theme) -> StatusAppearance {
    let (color, label) = match status {
        ServerStatus::Online => (theme.online, "ONLINE"),
        ServerStatus::Active => (theme.active, "ACTIVE"),
        ServerStatus::Pending => (theme.pending, "PENDING"),
        ServerStatus::Completed => (theme.completed, "COMPLETED"),
        ServerStatus::Offline | ServerStatus::Other(_) => (theme.offline, "OFFLINE"),
    };

    StatusAppearance {
        color,
        label,
        live: status.is_live(),
    }
}

pub struct StatusIndicator<'a> {
    status: &'a ServerStatus,
    label: Option<&'a str>,
    theme: &'a Theme,
    icons: &'a IconService,
    origin: Instant,
    now: Instant,
}

impl<'a> StatusIndicator<'a> {
    pub fn new(status: &'a ServerStatus, theme: &'a Theme, icons: &'a IconService, now: Instant) -> Self {
        Self {
            status,
            label: None,
            theme,
            icons,
            origin: now,
            now,
        }
    }

    /// Override the label text; still rendered uppercase. Empty overrides are ignored.
    #[must_use]
    pub fn label(mut self, label: Option<&'a str>) -> Self {
        self.label = label;
        self
    }

    /// Instant the pulse cycle is measured from
    #[must_use]
    pub fn pulse_origin(mut self, origin: Instant) -> Self {
        self.origin = origin;
        self
    }

    pub fn appearance(&self) -> StatusAppearance {
        resolve(self.status, self.theme)
    }

    /// Label as displayed
    pub fn text(&self) -> String {
        match self.label.filter(|label| !label.is_empty()) {
            Some(label) => label.to_uppercase(),
            None => self.appearance().label.to_string(),
        }
    }

    /// Current pulse intensity; always 0 for static statuses
    pub fn intensity(&self) -> f64 {
        if self.appearance().live {
            Pulse::new(self.theme.pulse_period).intensity(self.origin, self.now)
        } else {
            0.0
        }
    }

    pub fn to_line(&self) -> Line<'static> {
        let appearance = self.appearance();
        let intensity = self.intensity();

        // Peak of the pulse: larger dot at half opacity
        let pulsed = intensity > 0.5;
        let mut dot_style = Style::default()
            .fg(dim(appearance.color, intensity * 0.5))
            .add_modifier(Modifier::BOLD);
        if pulsed {
            dot_style = dot_style.remove_modifier(Modifier::BOLD);
        }

        Line::from(vec![
            Span::styled(self.icons.status_dot(pulsed).to_string(), dot_style),
            Span::raw(" "),
            Span::styled(
                self.text(),
                Style::default().fg(appearance.color).add_modifier(Modifier::BOLD),
            ),
        ])
    }

    pub fn width(&self) -> u16 {
        self.to_line().width() as u16
    }
}

impl Widget for StatusIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.to_line().render(area, buf);
    }
}
