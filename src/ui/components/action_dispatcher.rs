//! Per-card action dispatcher and its button row.
//!
//! A card owns exactly one [`BusySlot`]. Pressing a button acquires the slot
//! synchronously; the resulting [`BusyGuard`] travels inside the pending
//! handler future and releases the slot when that future finishes, fails or
//! is dropped. While the slot is taken every other press is ignored, not
//! queued.

use crate::icons::IconService;
use crate::model::{ActionKind, ServerId, ServerStatus};
use crate::ui::theme::Theme;
use async_trait::async_trait;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};
use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Instant;

/// Lifecycle handlers supplied by the host application.
///
/// Errors are returned to whoever awaits the [`PendingAction`]; the dispatcher
/// never inspects them.
#[async_trait(?Send)]
pub trait ServerActions {
    async fn start(&self, id: &ServerId) -> anyhow::Result<()>;
    async fn stop(&self, id: &ServerId) -> anyhow::Result<()>;
    async fn restart(&self, id: &ServerId) -> anyhow::Result<()>;
    async fn delete(&self, id: &ServerId) -> anyhow::Result<()>;
    async fn console(&self, id: &ServerId) -> anyhow::Result<()>;
}

/// Route an action kind to the matching handler
pub async fn run_handler(handlers: &dyn ServerActions, kind: ActionKind, id: &ServerId) -> anyhow::Result<()> {
    match kind {
        ActionKind::Start => handlers.start(id).await,
        ActionKind::Stop => handlers.stop(id).await,
        ActionKind::Restart => handlers.restart(id).await,
        ActionKind::Delete => handlers.delete(id).await,
        ActionKind::Console => handlers.console(id).await,
    }
}

/// Single-occupancy record of the action in flight
#[derive(Debug, Clone, Default)]
pub struct BusySlot {
    active: Rc<Cell<Option<ActionKind>>>,
}

impl BusySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ActionKind> {
        self.active.get()
    }

    pub fn is_busy(&self) -> bool {
        self.active.get().is_some()
    }

    /// Occupy the slot, or `None` if another action already holds it
    pub fn try_acquire(&self, kind: ActionKind) -> Option<BusyGuard> {
        if self.is_busy() {
            return None;
        }
        self.active.set(Some(kind));
        Some(BusyGuard {
            slot: Rc::clone(&self.active),
            kind,
        })
    }
}

/// Holds the busy slot; releases it on drop
#[must_use = "dropping the guard releases the slot immediately"]
#[derive(Debug)]
pub struct BusyGuard {
    slot: Rc<Cell<Option<ActionKind>>>,
    kind: ActionKind,
}

impl BusyGuard {
    pub fn kind(&self) -> ActionKind {
        self.kind
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.slot.set(None);
    }
}

/// Handler invocation that is already holding the busy slot
pub type PendingAction = Pin<Box<dyn Future<Output = anyhow::Result<()>>>>;

/// Actions offered for a given status: start replaces stop while offline
#[must_use]
pub fn available_actions(status: &ServerStatus) -> Vec<ActionKind> {
    let power = if status.is_offline() {
        ActionKind::Start
    } else {
        ActionKind::Stop
    };
    vec![power, ActionKind::Restart, ActionKind::Console, ActionKind::Delete]
}

pub struct ActionDispatcher {
    server_id: ServerId,
    handlers: Rc<dyn ServerActions>,
    slot: BusySlot,
}

impl ActionDispatcher {
    pub fn new(server_id: ServerId, handlers: Rc<dyn ServerActions>) -> Self {
        Self {
            server_id,
            handlers,
            slot: BusySlot::new(),
        }
    }

    pub fn server_id(&self) -> &ServerId {
        &self.server_id
    }

    /// The action currently in flight, if any
    pub fn active_action(&self) -> Option<ActionKind> {
        self.slot.active()
    }

    pub fn is_busy(&self) -> bool {
        self.slot.is_busy()
    }

    /// Start `kind` unless another action is in flight.
    ///
    /// The slot is taken before this returns. `None` means the press was
    /// ignored because the card is busy.
    pub fn invoke(&self, kind: ActionKind) -> Option<PendingAction> {
        let Some(guard) = self.slot.try_acquire(kind) else {
            log::debug!(
                "Dispatcher: ignoring {} for {} while {:?} is in flight",
                kind,
                self.server_id,
                self.slot.active()
            );
            return None;
        };

        log::debug!("Dispatcher: invoking {} for {}", kind, self.server_id);
        let handlers = Rc::clone(&self.handlers);
        let server_id = self.server_id.clone();

        Some(Box::pin(async move {
            let _guard = guard;
            run_handler(handlers.as_ref(), kind, &server_id).await
        }))
    }
}

/// Row of action buttons for one card
pub struct ActionBar<'a> {
    actions: &'a [ActionKind],
    active: Option<ActionKind>,
    focused: Option<ActionKind>,
    theme: &'a Theme,
    icons: &'a IconService,
    spinner_origin: Instant,
    now: Instant,
}

impl<'a> ActionBar<'a> {
    pub fn new(
        actions: &'a [ActionKind],
        dispatcher: &ActionDispatcher,
        theme: &'a Theme,
        icons: &'a IconService,
        now: Instant,
    ) -> Self {
        Self {
            actions,
            active: dispatcher.active_action(),
            focused: None,
            theme,
            icons,
            spinner_origin: now,
            now,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: Option<ActionKind>) -> Self {
        self.focused = focused;
        self
    }

    /// Instant the in-flight spinner started turning
    #[must_use]
    pub fn spinner_origin(mut self, origin: Instant) -> Self {
        self.spinner_origin = origin;
        self
    }

    fn caption(&self, kind: ActionKind, compact: bool) -> String {
        let icon = if self.active == Some(kind) {
            self.icons
                .spinner_frame(self.now.saturating_duration_since(self.spinner_origin))
        } else {
            self.icons.action(kind)
        };
        if compact {
            format!(" {} ", icon)
        } else {
            format!(" {} {} ", icon, kind.label())
        }
    }

    /// Screen rectangles of each button when drawn into `area`
    pub fn layout(&self, area: Rect) -> Vec<(ActionKind, Rect)> {
        let full = self.button_rects(area, false);
        let fits = full
            .last()
            .is_some_and(|(_, rect)| rect.right() <= area.right());
        if fits {
            full
        } else {
            self.button_rects(area, true)
        }
    }

    fn button_rects(&self, area: Rect, compact: bool) -> Vec<(ActionKind, Rect)> {
        let mut x = area.x;
        let mut rects = Vec::with_capacity(self.actions.len());
        for &kind in self.actions {
            let width = Line::from(self.caption(kind, compact)).width() as u16;
            rects.push((
                kind,
                Rect {
                    x,
                    y: area.y,
                    width,
                    height: 1.min(area.height),
                },
            ));
            x = x.saturating_add(width + 1);
        }
        rects
    }

    /// Button under a screen position
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<ActionKind> {
        self.layout(area)
            .into_iter()
            .find(|(_, rect)| rect.intersection(area).contains((column, row).into()))
            .map(|(kind, _)| kind)
    }

    fn button_style(&self, kind: ActionKind) -> Style {
        let busy = self.active.is_some();
        let mut style = if kind.is_destructive() {
            Style::default().fg(self.theme.destructive)
        } else {
            Style::default().fg(self.theme.text)
        };

        if self.active == Some(kind) {
            style = style.add_modifier(Modifier::BOLD);
        } else if busy {
            // Disabled while any action is in flight
            style = Style::default().fg(self.theme.muted).add_modifier(Modifier::DIM);
        }

        if self.focused == Some(kind) && !busy {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl Widget for ActionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let compact = self
            .button_rects(area, false)
            .last()
            .is_some_and(|(_, rect)| rect.right() > area.right());

        for (kind, rect) in self.layout(area) {
            let visible = rect.intersection(area);
            if visible.is_empty() {
                continue;
            }
            buf.set_stringn(
                visible.x,
                visible.y,
                self.caption(kind, compact),
                visible.width as usize,
                self.button_style(kind),
            );
        }
    }
}
