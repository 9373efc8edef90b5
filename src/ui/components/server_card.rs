//! Composite card for one managed server.

use crate::constants::CARD_HEIGHT;
use crate::icons::IconService;
use crate::model::{ActionKind, ServerId, ServerRecord};
use crate::ui::animation::{Easing, Transition};
use crate::ui::components::action_dispatcher::{
    available_actions, ActionBar, ActionDispatcher, PendingAction, ServerActions,
};
use crate::ui::components::panel::PanelContainer;
use crate::ui::components::progress_meter::{percentage, MeterSize, ProgressMeter};
use crate::ui::components::status_indicator::StatusIndicator;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};
use std::rc::Rc;
use std::time::Instant;

/// Fill animation state of one meter
#[derive(Debug, Clone, Copy)]
struct MeterAnimation {
    from: f64,
    to: f64,
    transition: Transition,
}

impl MeterAnimation {
    fn mount(to: f64, theme: &Theme, now: Instant) -> Self {
        Self {
            from: 0.0,
            to,
            transition: Transition::new(now, theme.fill_duration, Easing::EaseOut),
        }
    }

    fn current(&self, now: Instant) -> f64 {
        self.transition.interpolate(self.from, self.to, now)
    }

    /// Continue from wherever the fill is now towards a new target
    fn retarget(&mut self, to: f64, theme: &Theme, now: Instant) {
        if (to - self.to).abs() < f64::EPSILON {
            return;
        }
        self.from = self.current(now);
        self.to = to;
        self.transition = Transition::new(now, theme.fill_duration, Easing::EaseOut);
    }
}

/// Per-render inputs coming from the host
pub struct CardContext<'a> {
    pub theme: &'a Theme,
    pub icons: &'a IconService,
    pub now: Instant,
    pub focused: bool,
    /// Mouse button is held down over this card
    pub pressed: bool,
}

pub struct ServerSummaryCard {
    server: ServerRecord,
    dispatcher: ActionDispatcher,
    mounted_at: Instant,
    cpu: MeterAnimation,
    ram: MeterAnimation,
    focused_action: usize,
    busy_since: Option<Instant>,
}

impl ServerSummaryCard {
    pub fn new(server: ServerRecord, handlers: Rc<dyn ServerActions>, theme: &Theme, now: Instant) -> Self {
        let dispatcher = ActionDispatcher::new(server.id.clone(), handlers);
        Self {
            cpu: MeterAnimation::mount(percentage(server.cpu, 100.0), theme, now),
            ram: MeterAnimation::mount(percentage(server.ram, 100.0), theme, now),
            server,
            dispatcher,
            mounted_at: now,
            focused_action: 0,
            busy_since: None,
        }
    }

    pub fn server(&self) -> &ServerRecord {
        &self.server
    }

    pub fn id(&self) -> &ServerId {
        &self.server.id
    }

    pub fn dispatcher(&self) -> &ActionDispatcher {
        &self.dispatcher
    }

    pub fn mounted_at(&self) -> Instant {
        self.mounted_at
    }

    pub fn height() -> u16 {
        CARD_HEIGHT
    }

    /// Buttons currently offered, in display order
    pub fn actions(&self) -> Vec<ActionKind> {
        available_actions(&self.server.status)
    }

    /// Replace the record snapshot; meters animate towards the new values
    pub fn update_record(&mut self, server: ServerRecord, theme: &Theme, now: Instant) {
        self.cpu.retarget(percentage(server.cpu, 100.0), theme, now);
        self.ram.retarget(percentage(server.ram, 100.0), theme, now);
        self.server = server;
        self.focused_action = self.focused_action.min(self.actions().len().saturating_sub(1));
    }

    pub fn focused_action(&self) -> Option<ActionKind> {
        self.actions().get(self.focused_action).copied()
    }

    pub fn focus_next_action(&mut self) {
        let count = self.actions().len();
        if count > 0 {
            self.focused_action = (self.focused_action + 1) % count;
        }
    }

    pub fn focus_previous_action(&mut self) {
        let count = self.actions().len();
        if count > 0 {
            self.focused_action = (self.focused_action + count - 1) % count;
        }
    }

    /// Press a button. Kinds not currently offered and presses while busy are ignored.
    pub fn press(&mut self, kind: ActionKind, now: Instant) -> Option<PendingAction> {
        if !self.actions().contains(&kind) {
            log::debug!("Card {}: {} is not offered for status {}", self.server.name, kind, self.server.status);
            return None;
        }
        let pending = self.dispatcher.invoke(kind)?;
        self.busy_since = Some(now);
        Some(pending)
    }

    pub fn press_focused(&mut self, now: Instant) -> Option<PendingAction> {
        let kind = self.focused_action()?;
        self.press(kind, now)
    }

    fn panel<'a>(&self, ctx: &CardContext<'a>) -> PanelContainer<'a> {
        PanelContainer::new(ctx.theme, ctx.now)
            .hovered(ctx.focused)
            .clickable(true)
            .pressed(ctx.pressed)
            .glow(self.dispatcher.is_busy())
            .glow_origin(self.busy_since.unwrap_or(self.mounted_at))
            .entered_at(self.mounted_at)
    }

    fn action_bar<'a>(&self, actions: &'a [ActionKind], ctx: &CardContext<'a>) -> ActionBar<'a> {
        let focused = if ctx.focused { self.focused_action() } else { None };
        ActionBar::new(actions, &self.dispatcher, ctx.theme, ctx.icons, ctx.now)
            .focused(focused)
            .spinner_origin(self.busy_since.unwrap_or(ctx.now))
    }

    fn sections(inner: Rect) -> [Rect; 6] {
        Layout::vertical([
            Constraint::Length(1), // name + status
            Constraint::Length(1), // address
            Constraint::Length(2), // cpu
            Constraint::Length(2), // ram
            Constraint::Length(1), // plan / created
            Constraint::Length(1), // actions
        ])
        .areas(inner)
    }

    /// Button under a screen position, given the area the card was drawn into
    pub fn action_at(&self, area: Rect, column: u16, row: u16, ctx: &CardContext<'_>) -> Option<ActionKind> {
        let inner = self.panel(ctx).inner(area);
        let [.., actions_area] = Self::sections(inner);
        let actions = self.actions();
        self.action_bar(&actions, ctx).hit_test(actions_area, column, row)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, ctx: &CardContext<'_>) {
        let server = &self.server;
        let actions = self.actions();

        self.panel(ctx).render_with(f, area, |f, inner| {
            let [header, address, cpu, ram, meta, buttons] = Self::sections(inner);

            let indicator = StatusIndicator::new(&server.status, ctx.theme, ctx.icons, ctx.now)
                .pulse_origin(self.mounted_at);
            let indicator_width = indicator.width().min(header.width);
            let [name_area, status_area] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(indicator_width)]).areas(header);
            f.render_widget(
                Line::from(Span::styled(
                    server.name.clone(),
                    Style::default().fg(ctx.theme.text).add_modifier(Modifier::BOLD),
                )),
                name_area,
            );
            f.render_widget(indicator, status_area);

            f.render_widget(
                Line::from(Span::styled(server.ip.clone(), Style::default().fg(ctx.theme.muted))),
                address,
            );

            f.render_widget(
                ProgressMeter::new(server.cpu, ctx.theme, ctx.now)
                    .label("CPU")
                    .size(MeterSize::Sm)
                    .animate(self.cpu.from, self.cpu.transition),
                cpu,
            );
            f.render_widget(
                ProgressMeter::new(server.ram, ctx.theme, ctx.now)
                    .label("RAM")
                    .size(MeterSize::Sm)
                    .animate(self.ram.from, self.ram.transition),
                ram,
            );

            let muted = Style::default().fg(ctx.theme.muted);
            f.render_widget(
                Line::from(vec![
                    Span::styled("Plan ", muted),
                    Span::styled(server.plan.clone(), Style::default().fg(ctx.theme.text)),
                ]),
                meta,
            );
            f.render_widget(Line::from(Span::styled(server.created_at.clone(), muted)).right_aligned(), meta);

            f.render_widget(self.action_bar(&actions, ctx), buttons);
        });
    }
}
