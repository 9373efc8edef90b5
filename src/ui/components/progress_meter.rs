//! Tiered, animated progress bar.

use crate::constants::{METER_DEFAULT_MAX, TIER_RED_FROM, TIER_YELLOW_FROM};
use crate::ui::animation::Transition;
use crate::ui::theme::Theme;
use crate::utils::color::blend;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use std::time::Instant;

/// Clamped percentage of `value` over `max`.
///
/// Never fails: non-positive or non-finite `max` and NaN values yield 0.
#[must_use]
pub fn percentage(value: f64, max: f64) -> f64 {
    if max.is_nan() || max <= 0.0 || max.is_infinite() || value.is_nan() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Color bucket of a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Green,
    Yellow,
    Red,
}

impl Tier {
    /// Lower bounds are inclusive: 50 is yellow, 80 is red
    #[must_use]
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= TIER_RED_FROM {
            Self::Red
        } else if percentage >= TIER_YELLOW_FROM {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    pub fn color(self, theme: &Theme) -> Color {
        match self {
            Self::Green => theme.tier_low,
            Self::Yellow => theme.tier_mid,
            Self::Red => theme.tier_high,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

/// Bar thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeterSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl MeterSize {
    fn rows(self) -> u16 {
        match self {
            Self::Sm | Self::Default => 1,
            Self::Lg => 2,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Sm => "▄",
            Self::Default | Self::Lg => "█",
        }
    }
}

pub struct ProgressMeter<'a> {
    value: f64,
    max: f64,
    label: &'a str,
    show_percentage: bool,
    size: MeterSize,
    theme: &'a Theme,
    /// Fill animation: starting percentage and the running transition
    animation: Option<(f64, Transition)>,
    now: Instant,
}

impl<'a> ProgressMeter<'a> {
    pub fn new(value: f64, theme: &'a Theme, now: Instant) -> Self {
        Self {
            value,
            max: METER_DEFAULT_MAX,
            label: "",
            show_percentage: true,
            size: MeterSize::default(),
            theme,
            animation: None,
            now,
        }
    }

    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn show_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    #[must_use]
    pub fn size(mut self, size: MeterSize) -> Self {
        self.size = size;
        self
    }

    /// Animate the fill width from `from` percent towards the target
    #[must_use]
    pub fn animate(mut self, from: f64, transition: Transition) -> Self {
        self.animation = Some((from, transition));
        self
    }

    pub fn percentage(&self) -> f64 {
        percentage(self.value, self.max)
    }

    pub fn tier(&self) -> Tier {
        Tier::for_percentage(self.percentage())
    }

    /// Rounded percentage as shown in the header
    pub fn percentage_text(&self) -> String {
        format!("{}%", self.percentage().round() as u32)
    }

    /// Width of the fill at `now`, in percent
    pub fn displayed_percentage(&self) -> f64 {
        let target = self.percentage();
        match self.animation {
            Some((from, transition)) => transition
                .interpolate(from.clamp(0.0, 100.0), target, self.now)
                .clamp(0.0, 100.0),
            None => target,
        }
    }

    pub fn has_header(&self) -> bool {
        !self.label.is_empty() || self.show_percentage
    }

    /// Rows needed to draw the meter
    pub fn height(&self) -> u16 {
        u16::from(self.has_header()) + self.size.rows()
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        Line::from(Span::styled(self.label.to_string(), Style::default().fg(self.theme.muted))).render(area, buf);

        if self.show_percentage {
            Line::from(Span::styled(
                self.percentage_text(),
                Style::default()
                    .fg(self.tier().color(self.theme))
                    .add_modifier(Modifier::BOLD),
            ))
            .right_aligned()
            .render(area, buf);
        }
    }

    fn render_bar(&self, area: Rect, buf: &mut Buffer) {
        let tier_color = self.tier().color(self.theme);
        let filled = ((f64::from(area.width) * self.displayed_percentage() / 100.0).round() as u16).min(area.width);
        let glyph = self.size.glyph();

        for y in area.top()..area.bottom() {
            for offset in 0..area.width {
                let x = area.left() + offset;
                let style = if offset < filled {
                    // Gradient from the base hue to the tier color
                    let t = if filled > 1 {
                        f64::from(offset) / f64::from(filled - 1)
                    } else {
                        1.0
                    };
                    let mut style = Style::default().fg(blend(self.theme.fill_base, tier_color, t));
                    if offset + 1 == filled {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    style
                } else {
                    Style::default().fg(self.theme.track)
                };
                buf.set_string(x, y, glyph, style);
            }
        }
    }
}

impl Widget for ProgressMeter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let mut bar_area = area;
        if self.has_header() {
            let header = Rect { height: 1, ..area };
            self.render_header(header, buf);
            bar_area = Rect {
                y: area.y + 1,
                height: area.height.saturating_sub(1),
                ..area
            };
        }

        let bar_area = Rect {
            height: bar_area.height.min(self.size.rows()),
            ..bar_area
        };
        self.render_bar(bar_area, buf);
    }
}
