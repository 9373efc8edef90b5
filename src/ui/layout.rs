//! Layout management and calculations

use crate::constants::ACTIVITY_HEIGHT;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub grid: Rect,
    pub activity: Option<Rect>,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Header line, card grid, optional activity panel, status bar
    #[must_use]
    pub fn main_layout(area: Rect, show_activity: bool) -> MainLayout {
        // Give the grid priority on short terminals
        let activity_height = if show_activity && area.height > ACTIVITY_HEIGHT * 3 {
            ACTIVITY_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(activity_height),
                Constraint::Length(1),
            ])
            .split(area);

        MainLayout {
            header: chunks[0],
            grid: chunks[1],
            activity: (activity_height > 0).then_some(chunks[2]),
            status: chunks[3],
        }
    }

    /// Number of card rows that fit in the grid area
    #[must_use]
    pub fn visible_rows(grid: Rect, card_height: u16) -> usize {
        if card_height == 0 {
            return 0;
        }
        usize::from((grid.height / card_height).max(1))
    }

    /// First card row to draw so that the focused card stays on screen
    #[must_use]
    pub fn first_visible_row(focused: usize, columns: usize, visible_rows: usize) -> usize {
        let columns = columns.max(1);
        let focused_row = focused / columns;
        focused_row.saturating_sub(visible_rows.saturating_sub(1))
    }

    /// Rectangles of the cards `first_row * columns ..` in reading order
    #[must_use]
    pub fn grid_cells(grid: Rect, columns: usize, card_height: u16, count: usize, first_row: usize) -> Vec<Rect> {
        let columns = columns.max(1);
        let rows = Self::visible_rows(grid, card_height);
        let column_width = grid.width / columns as u16;
        let first = first_row * columns;

        (first..count.min(first + rows * columns))
            .map(|index| {
                let row = ((index - first) / columns) as u16;
                let column = (index % columns) as u16;
                let x = grid.x + column * column_width;
                // Last column absorbs the rounding remainder
                let width = if column as usize == columns - 1 {
                    grid.right().saturating_sub(x)
                } else {
                    column_width
                };
                let y = grid.y + row * card_height;
                Rect {
                    x,
                    y,
                    width,
                    height: card_height.min(grid.bottom().saturating_sub(y)),
                }
            })
            .collect()
    }
}
