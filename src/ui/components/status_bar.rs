//! Status bar component

use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::STATUS_HINTS;
use crate::ui::theme::Theme;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: the latest error if any, otherwise in-flight count and shortcuts
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, in_flight: usize, error: Option<&str>, theme: &Theme) {
        let (status_text, status_color) = match error {
            Some(error) => (error.to_string(), theme.destructive),
            None if in_flight > 0 => (format!("⏳ {} action(s) in flight • {}", in_flight, STATUS_HINTS), theme.pending),
            None => (STATUS_HINTS.to_string(), theme.muted),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
