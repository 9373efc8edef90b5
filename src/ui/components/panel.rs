//! Rounded, glassy container drawn around arbitrary content.
//!
//! Terminal stand-ins for the pointer affordances:
//!
//! - hover lift: thick border in the hover color and a bold title
//! - press: double border, dimmed
//! - glow: border color pulsing towards the glow color
//! - entrance: slides up from `entrance_offset_rows` below and fades in

use crate::ui::animation::{Easing, Pulse, Transition};
use crate::ui::theme::Theme;
use crate::utils::color::blend;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders},
    Frame,
};
use std::time::Instant;

pub struct PanelContainer<'a> {
    theme: &'a Theme,
    title: Option<Line<'a>>,
    style: Style,
    hover: bool,
    hovered: bool,
    glow: bool,
    clickable: bool,
    pressed: bool,
    entrance: Option<Transition>,
    glow_origin: Instant,
    now: Instant,
}

impl<'a> PanelContainer<'a> {
    pub fn new(theme: &'a Theme, now: Instant) -> Self {
        Self {
            theme,
            title: None,
            style: Style::default(),
            hover: true,
            hovered: false,
            glow: false,
            clickable: false,
            pressed: false,
            entrance: None,
            glow_origin: now,
            now,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pass-through style applied to the whole panel
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Enable the hover affordance (on by default)
    #[must_use]
    pub fn hover(mut self, enabled: bool) -> Self {
        self.hover = enabled;
        self
    }

    /// Whether the pointer or keyboard focus is currently over the panel
    #[must_use]
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    #[must_use]
    pub fn glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    #[must_use]
    pub fn glow_origin(mut self, origin: Instant) -> Self {
        self.glow_origin = origin;
        self
    }

    /// Make the panel itself clickable
    #[must_use]
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Press-down state; only shown on clickable panels
    #[must_use]
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// Run the entrance animation from the given mount instant
    #[must_use]
    pub fn entered_at(mut self, mounted_at: Instant) -> Self {
        self.entrance = Some(Transition::new(
            mounted_at,
            self.theme.entrance_duration,
            Easing::Linear,
        ));
        self
    }

    /// Entrance progress in [0, 1]; 1 when no entrance is running
    pub fn entrance_progress(&self) -> f64 {
        self.entrance.map_or(1.0, |transition| transition.progress(self.now))
    }

    /// Area actually occupied at `now`, shifted down while entering
    pub fn frame_area(&self, area: Rect) -> Rect {
        let remaining = 1.0 - self.entrance_progress();
        let offset = (f64::from(self.theme.entrance_offset_rows) * remaining).round() as u16;
        let offset = offset.min(area.height);
        Rect {
            y: area.y + offset,
            height: area.height - offset,
            ..area
        }
    }

    fn block(&self) -> Block<'a> {
        let lifted = self.hover && self.hovered;
        let pressed = self.clickable && self.pressed;

        let mut border_color = if lifted { self.theme.panel_hover } else { self.theme.panel_border };
        if self.glow {
            let intensity = Pulse::new(self.theme.pulse_period).intensity(self.glow_origin, self.now);
            border_color = blend(border_color, self.theme.panel_glow, intensity);
        }

        let border_type = if pressed {
            BorderType::Double
        } else if lifted {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let mut border_style = Style::default().fg(border_color);
        if pressed {
            border_style = border_style.add_modifier(Modifier::DIM);
        }

        let mut title_style = Style::default().fg(self.theme.text);
        if lifted {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .title_style(title_style)
            .style(self.style);
        if let Some(title) = &self.title {
            block = block.title(title.clone());
        }
        block
    }

    /// Inner content area for a panel drawn into `area`
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(self.frame_area(area))
    }

    /// Draw the panel and hand its inner area to `children`
    pub fn render_with<F>(self, f: &mut Frame, area: Rect, children: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let frame_area = self.frame_area(area);
        if frame_area.is_empty() {
            return;
        }

        let block = self.block();
        let inner = block.inner(frame_area);
        f.render_widget(block, frame_area);
        children(f, inner);

        // Still fading in: first half of the entrance is drawn dim
        if self.entrance_progress() < 0.5 {
            f.buffer_mut()
                .set_style(frame_area, Style::default().add_modifier(Modifier::DIM));
        }
    }

    /// Draw an empty panel
    pub fn render(self, f: &mut Frame, area: Rect) {
        self.render_with(f, area, |_, _| {});
    }
}
