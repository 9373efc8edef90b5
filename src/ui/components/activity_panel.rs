//! Activity panel listing recent action outcomes, newest first

use crate::constants::{ACTIVITY_TITLE, LOG_ACTION_FAILED};
use crate::ui::components::panel::PanelContainer;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};
use std::time::Instant;

pub struct ActivityPanel;

impl ActivityPanel {
    pub fn render(f: &mut Frame, area: Rect, entries: &[String], theme: &Theme, now: Instant) {
        PanelContainer::new(theme, now)
            .title(ACTIVITY_TITLE)
            .hover(false)
            .render_with(f, area, |f, inner| {
                let items: Vec<ListItem> = entries
                    .iter()
                    .take(inner.height as usize)
                    .map(|entry| {
                        let color = if entry.contains(LOG_ACTION_FAILED) {
                            theme.destructive
                        } else {
                            theme.muted
                        };
                        ListItem::new(Line::from(Span::styled(entry.clone(), Style::default().fg(color))))
                    })
                    .collect();

                f.render_widget(List::new(items), inner);
            });
    }
}
