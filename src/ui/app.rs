//! Dashboard: the host application around the server cards.
//!
//! Owns one [`ServerSummaryCard`] per fleet record, routes keyboard and mouse
//! input to the focused card, runs pressed actions on the local task set, and
//! surfaces their outcome in the activity panel and status bar.

use crate::config::Config;
use crate::constants::{
    APP_TITLE, CARD_HEIGHT, EMPTY_FLEET, LOG_ACTION_FAILED, LOG_ACTION_REQUESTED, LOG_ACTION_SUCCEEDED,
};
use crate::fleet::SimulatedFleet;
use crate::logger::Logger;
use crate::model::{ActionKind, ServerId};
use crate::ui::components::{
    action_dispatcher::ServerActions, ActivityPanel, CardContext, ServerSummaryCard, StatusBar,
};
use crate::ui::core::{Action, AppContext, Component, TaskManager};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;
use tokio::sync::mpsc;

pub struct Dashboard {
    cards: Vec<ServerSummaryCard>,
    fleet: Rc<SimulatedFleet>,
    context: AppContext,

    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    columns: usize,
    show_activity: bool,
    mouse_enabled: bool,

    focused: usize,
    /// Card index and area from the last frame, for mouse hit-testing
    card_areas: Vec<(usize, Rect)>,
    /// Card under a held left mouse button
    pressed_card: Option<usize>,
    last_error: Option<String>,
    should_quit: bool,
}

impl Dashboard {
    pub fn new(fleet: Rc<SimulatedFleet>, config: &Config, logger: Logger) -> Self {
        let context = AppContext::new(config, logger);
        let (task_manager, background_action_rx) = TaskManager::new();
        let handlers: Rc<dyn ServerActions> = fleet.clone();
        let now = Instant::now();

        let cards = fleet
            .snapshot()
            .into_iter()
            .map(|server| ServerSummaryCard::new(server, Rc::clone(&handlers), &context.theme, now))
            .collect();

        Self {
            cards,
            fleet,
            context,
            task_manager,
            background_action_rx,
            columns: usize::from(config.ui.columns.max(1)),
            show_activity: config.ui.show_activity,
            mouse_enabled: config.ui.mouse_enabled,
            focused: 0,
            card_areas: Vec::new(),
            pressed_card: None,
            last_error: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn cards(&self) -> &[ServerSummaryCard] {
        &self.cards
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_card(&self) -> Option<&ServerSummaryCard> {
        self.cards.get(self.focused)
    }

    pub fn card(&self, id: &ServerId) -> Option<&ServerSummaryCard> {
        self.cards.iter().find(|card| card.id() == id)
    }

    pub fn pressed_card(&self) -> Option<usize> {
        self.pressed_card
    }

    /// Card index and area under a screen position, as of the last frame
    fn card_at(&self, column: u16, row: u16) -> Option<(usize, Rect)> {
        self.card_areas
            .iter()
            .find(|(_, area)| area.contains((column, row).into()))
            .copied()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn logger(&self) -> &Logger {
        &self.context.logger
    }

    /// Number of actions whose handlers have not settled yet
    pub fn in_flight(&self) -> usize {
        self.cards.iter().filter(|card| card.dispatcher().is_busy()).count()
    }

    /// Reconcile cards with the fleet: update, add, and drop deleted servers
    pub fn sync_cards(&mut self, now: Instant) {
        let focused_id = self.focused_card().map(|card| card.id().clone());
        let handlers: Rc<dyn ServerActions> = self.fleet.clone();

        let mut existing: HashMap<ServerId, ServerSummaryCard> = self
            .cards
            .drain(..)
            .map(|card| (card.id().clone(), card))
            .collect();

        for server in self.fleet.snapshot() {
            let card = match existing.remove(&server.id) {
                Some(mut card) => {
                    if card.server() != &server {
                        card.update_record(server, &self.context.theme, now);
                    }
                    card
                }
                None => ServerSummaryCard::new(server, Rc::clone(&handlers), &self.context.theme, now),
            };
            self.cards.push(card);
        }

        for (id, card) in existing {
            log::debug!("Dashboard: unmounting card for {} ({})", card.server().name, id);
        }

        self.focused = focused_id
            .and_then(|id| self.cards.iter().position(|card| card.id() == &id))
            .unwrap_or(self.focused)
            .min(self.cards.len().saturating_sub(1));
        self.pressed_card = self.pressed_card.filter(|&index| index < self.cards.len());
    }

    /// Press a button on the focused card
    fn press(&mut self, kind: Option<ActionKind>, now: Instant) {
        let Some(card) = self.cards.get_mut(self.focused) else {
            return;
        };

        let pending = match kind {
            Some(kind) => card.press(kind, now),
            None => card.press_focused(now),
        };
        let Some(pending) = pending else {
            return;
        };
        let Some(kind) = card.dispatcher().active_action() else {
            return;
        };

        let server_id = card.id().clone();
        let server_name = card.server().name.clone();
        self.last_error = None;
        self.context
            .logger
            .log(format!("{} {} on {}", LOG_ACTION_REQUESTED, kind, server_name));
        self.task_manager.spawn_action(server_id, server_name, kind, pending);
    }

    fn click(&mut self, column: u16, row: u16, now: Instant) {
        let Some((index, area)) = self.card_at(column, row) else {
            return;
        };

        self.focused = index;
        let ctx = CardContext {
            theme: &self.context.theme,
            icons: &self.context.icons,
            now,
            focused: true,
            pressed: self.pressed_card == Some(index),
        };
        let kind = self.cards[index].action_at(area, column, row, &ctx);
        if let Some(kind) = kind {
            self.press(Some(kind), now);
        }
    }

    fn settle(&mut self, server_name: &str, kind: ActionKind, error: Option<String>, now: Instant) {
        match error {
            Some(error) => {
                let message = format!("{} {} on {}: {}", LOG_ACTION_FAILED, kind, server_name, error);
                log::warn!("{}", message);
                self.context.logger.log(message.clone());
                self.last_error = Some(message);
            }
            None => {
                self.context
                    .logger
                    .log(format!("{} {} on {}", LOG_ACTION_SUCCEEDED, kind, server_name));
            }
        }
        self.sync_cards(now);
    }

    /// Apply results reported by background actions
    pub fn process_background_actions(&mut self) {
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.update(action);
        }
        self.task_manager.cleanup_finished_tasks();
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.cards.len() as isize;
        if count == 0 {
            return;
        }
        let target = self.focused as isize + delta;
        if (0..count).contains(&target) {
            self.focused = target as usize;
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let total = self.cards.len();
        let live = self
            .cards
            .iter()
            .filter(|card| card.server().status.is_live())
            .count();
        let header = Line::from(vec![
            Span::styled(
                APP_TITLE,
                Style::default().fg(self.context.theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} servers • {} live", total, live),
                Style::default().fg(self.context.theme.muted),
            ),
        ]);
        f.render_widget(Paragraph::new(header), area);
    }
}

impl Component for Dashboard {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Right | KeyCode::Char('l') => Action::FocusNextCard,
            KeyCode::Left | KeyCode::Char('h') => Action::FocusPreviousCard,
            KeyCode::Down | KeyCode::Char('j') => Action::FocusCardBelow,
            KeyCode::Up | KeyCode::Char('k') => Action::FocusCardAbove,
            KeyCode::Tab => Action::NextButton,
            KeyCode::BackTab => Action::PreviousButton,
            KeyCode::Enter | KeyCode::Char(' ') => Action::PressFocused,
            KeyCode::Char('i') => Action::CycleIcons,
            // Only bare letters press buttons; Ctrl/Alt chords are left alone
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                ActionKind::from_hotkey(c).map_or(Action::None, Action::Press)
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed_card = self.card_at(mouse.column, mouse.row).map(|(index, _)| index);
                Action::Click {
                    column: mouse.column,
                    row: mouse.row,
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pressed_card = None;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let now = Instant::now();
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::FocusNextCard => self.move_focus(1),
            Action::FocusPreviousCard => self.move_focus(-1),
            Action::FocusCardBelow => self.move_focus(self.columns as isize),
            Action::FocusCardAbove => self.move_focus(-(self.columns as isize)),
            Action::NextButton => {
                if let Some(card) = self.cards.get_mut(self.focused) {
                    card.focus_next_action();
                }
            }
            Action::PreviousButton => {
                if let Some(card) = self.cards.get_mut(self.focused) {
                    card.focus_previous_action();
                }
            }
            Action::PressFocused => self.press(None, now),
            Action::Press(kind) => self.press(Some(kind), now),
            Action::Click { column, row } => self.click(column, row, now),
            Action::ActionSettled {
                server_name,
                kind,
                error,
                ..
            } => self.settle(&server_name, kind, error, now),
            Action::CycleIcons => {
                self.context.icons.cycle_icon_theme();
                log::debug!("Dashboard: icon theme is now {:?}", self.context.icons.theme());
            }
            Action::Tick => self.sync_cards(now),
            Action::None => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let now = Instant::now();
        let layout = LayoutManager::main_layout(rect, self.show_activity);

        self.render_header(f, layout.header);

        self.card_areas.clear();
        if self.cards.is_empty() {
            f.render_widget(
                Paragraph::new(EMPTY_FLEET).style(Style::default().fg(self.context.theme.muted)),
                layout.grid,
            );
        } else {
            let visible_rows = LayoutManager::visible_rows(layout.grid, CARD_HEIGHT);
            let first_row = LayoutManager::first_visible_row(self.focused, self.columns, visible_rows);
            let cells =
                LayoutManager::grid_cells(layout.grid, self.columns, CARD_HEIGHT, self.cards.len(), first_row);

            for (offset, area) in cells.into_iter().enumerate() {
                let index = first_row * self.columns + offset;
                let ctx = CardContext {
                    theme: &self.context.theme,
                    icons: &self.context.icons,
                    now,
                    focused: index == self.focused,
                    pressed: self.pressed_card == Some(index),
                };
                self.cards[index].render(f, area, &ctx);
                self.card_areas.push((index, area));
            }
        }

        if let Some(activity) = layout.activity {
            let entries = self.context.logger.get_logs();
            ActivityPanel::render(f, activity, &entries, &self.context.theme, now);
        }

        StatusBar::render(
            f,
            layout.status,
            self.in_flight(),
            self.last_error.as_deref(),
            &self.context.theme,
        );
    }
}
