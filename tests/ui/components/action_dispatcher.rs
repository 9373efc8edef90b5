use async_trait::async_trait;
use fleetdeck::icons::{IconService, IconTheme};
use fleetdeck::model::{ActionKind, ServerId, ServerStatus};
use fleetdeck::ui::components::action_dispatcher::{available_actions, ActionBar, ActionDispatcher, BusySlot, ServerActions};
use fleetdeck::ui::Theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier, widgets::Widget};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Handlers that sleep, record each call and fail for one kind
struct ScriptedHandlers {
    delay: Duration,
    failing: Option<ActionKind>,
    calls: RefCell<Vec<(ActionKind, ServerId)>>,
}

impl ScriptedHandlers {
    fn new(delay: Duration, failing: Option<ActionKind>) -> Rc<Self> {
        Rc::new(Self {
            delay,
            failing,
            calls: RefCell::new(Vec::new()),
        })
    }

    fn kinds(&self) -> Vec<ActionKind> {
        self.calls.borrow().iter().map(|(kind, _)| *kind).collect()
    }

    async fn run(&self, kind: ActionKind, id: &ServerId) -> anyhow::Result<()> {
        self.calls.borrow_mut().push((kind, id.clone()));
        tokio::time::sleep(self.delay).await;
        if self.failing == Some(kind) {
            anyhow::bail!("{} rejected by backend", kind);
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ServerActions for ScriptedHandlers {
    async fn start(&self, id: &ServerId) -> anyhow::Result<()> {
        self.run(ActionKind::Start, id).await
    }
    async fn stop(&self, id: &ServerId) -> anyhow::Result<()> {
        self.run(ActionKind::Stop, id).await
    }
    async fn restart(&self, id: &ServerId) -> anyhow::Result<()> {
        self.run(ActionKind::Restart, id).await
    }
    async fn delete(&self, id: &ServerId) -> anyhow::Result<()> {
        self.run(ActionKind::Delete, id).await
    }
    async fn console(&self, id: &ServerId) -> anyhow::Result<()> {
        self.run(ActionKind::Console, id).await
    }
}

fn dispatcher(handlers: &Rc<ScriptedHandlers>) -> ActionDispatcher {
    let handlers: Rc<dyn ServerActions> = handlers.clone();
    ActionDispatcher::new(ServerId::new("srv-1"), handlers)
}

#[test]
fn test_busy_slot_single_occupancy() {
    let slot = BusySlot::new();
    assert!(!slot.is_busy());

    let guard = slot.try_acquire(ActionKind::Stop).unwrap();
    assert_eq!(guard.kind(), ActionKind::Stop);
    assert_eq!(slot.active(), Some(ActionKind::Stop));
    assert!(slot.try_acquire(ActionKind::Restart).is_none());

    drop(guard);
    assert_eq!(slot.active(), None);
    assert!(slot.try_acquire(ActionKind::Restart).is_some());
}

#[test]
fn test_available_actions_follow_status() {
    let offline = available_actions(&ServerStatus::Offline);
    assert!(offline.contains(&ActionKind::Start));
    assert!(!offline.contains(&ActionKind::Stop));

    for status in [
        ServerStatus::Online,
        ServerStatus::Pending,
        ServerStatus::Other("rebooting".to_string()),
    ] {
        let actions = available_actions(&status);
        assert!(actions.contains(&ActionKind::Stop));
        assert!(!actions.contains(&ActionKind::Start));
    }

    for status in [ServerStatus::Offline, ServerStatus::Online] {
        let actions = available_actions(&status);
        assert!(actions.contains(&ActionKind::Restart));
        assert!(actions.contains(&ActionKind::Console));
        assert!(actions.contains(&ActionKind::Delete));
        assert_eq!(actions.len(), 4);
    }
}

#[tokio::test(start_paused = true)]
async fn test_invoke_marks_busy_before_handler_runs() {
    let handlers = ScriptedHandlers::new(Duration::from_millis(10), None);
    let dispatcher = dispatcher(&handlers);
    assert_eq!(dispatcher.active_action(), None);

    let pending = dispatcher.invoke(ActionKind::Restart).unwrap();
    assert_eq!(dispatcher.active_action(), Some(ActionKind::Restart));
    assert!(dispatcher.is_busy());
    // Not polled yet
    assert!(handlers.kinds().is_empty());

    pending.await.unwrap();
    assert_eq!(dispatcher.active_action(), None);
    assert_eq!(handlers.calls.borrow()[0], (ActionKind::Restart, ServerId::new("srv-1")));
}

#[tokio::test(start_paused = true)]
async fn test_presses_while_busy_are_ignored() {
    let handlers = ScriptedHandlers::new(Duration::from_millis(10), None);
    let dispatcher = dispatcher(&handlers);

    let pending = dispatcher.invoke(ActionKind::Stop).unwrap();
    for kind in ActionKind::ALL {
        assert!(dispatcher.invoke(kind).is_none());
    }
    assert_eq!(dispatcher.active_action(), Some(ActionKind::Stop));

    pending.await.unwrap();
    assert_eq!(handlers.kinds(), vec![ActionKind::Stop]);
}

#[tokio::test(start_paused = true)]
async fn test_rejecting_handler_releases_slot_and_propagates() {
    let handlers = ScriptedHandlers::new(Duration::from_millis(10), Some(ActionKind::Delete));
    let dispatcher = dispatcher(&handlers);

    let pending = dispatcher.invoke(ActionKind::Delete).unwrap();
    assert_eq!(dispatcher.active_action(), Some(ActionKind::Delete));

    let during = async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        let still_busy = dispatcher.active_action();
        let restart_ignored = dispatcher.invoke(ActionKind::Restart).is_none();
        let stop_ignored = dispatcher.invoke(ActionKind::Stop).is_none();
        (still_busy, restart_ignored, stop_ignored)
    };
    let (result, (still_busy, restart_ignored, stop_ignored)) = tokio::join!(pending, during);

    assert_eq!(still_busy, Some(ActionKind::Delete));
    assert!(restart_ignored);
    assert!(stop_ignored);

    let error = result.unwrap_err();
    assert!(error.to_string().contains("delete rejected by backend"));
    assert_eq!(dispatcher.active_action(), None);
    assert_eq!(handlers.kinds(), vec![ActionKind::Delete]);

    // Idle again: the next press goes through
    let pending = dispatcher.invoke(ActionKind::Restart).unwrap();
    pending.await.unwrap();
    assert_eq!(handlers.kinds(), vec![ActionKind::Delete, ActionKind::Restart]);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_pending_action_releases_slot() {
    let handlers = ScriptedHandlers::new(Duration::from_millis(10), None);
    let dispatcher = dispatcher(&handlers);

    let pending = dispatcher.invoke(ActionKind::Console).unwrap();
    assert!(dispatcher.is_busy());
    drop(pending);
    assert!(!dispatcher.is_busy());
}

#[tokio::test(start_paused = true)]
async fn test_dispatchers_are_independent() {
    let handlers = ScriptedHandlers::new(Duration::from_millis(10), None);
    let first = dispatcher(&handlers);
    let shared: Rc<dyn ServerActions> = handlers.clone();
    let second = ActionDispatcher::new(ServerId::new("srv-2"), shared);

    let a = first.invoke(ActionKind::Stop).unwrap();
    let b = second.invoke(ActionKind::Restart).unwrap();
    assert_eq!(first.active_action(), Some(ActionKind::Stop));
    assert_eq!(second.active_action(), Some(ActionKind::Restart));

    let (a, b) = tokio::join!(a, b);
    assert!(a.is_ok() && b.is_ok());
    assert!(!first.is_busy() && !second.is_busy());
}

fn bar_text(buffer: &Buffer) -> String {
    (0..buffer.area.width).map(|x| buffer[(x, 0)].symbol()).collect()
}

#[test]
fn test_action_bar_layout_and_hit_test() {
    let handlers = ScriptedHandlers::new(Duration::ZERO, None);
    let dispatcher = dispatcher(&handlers);
    let theme = Theme::default();
    let icons = IconService::new(IconTheme::Ascii);
    let actions = available_actions(&ServerStatus::Online);
    let area = Rect::new(2, 5, 60, 1);

    let bar = ActionBar::new(&actions, &dispatcher, &theme, &icons, Instant::now());
    let layout = bar.layout(area);
    assert_eq!(layout.len(), 4);
    assert_eq!(layout[0], (ActionKind::Stop, Rect::new(2, 5, 8, 1)));

    assert_eq!(bar.hit_test(area, 3, 5), Some(ActionKind::Stop));
    assert_eq!(bar.hit_test(area, 10, 5), None);
    assert_eq!(bar.hit_test(area, 12, 5), Some(ActionKind::Restart));
    assert_eq!(bar.hit_test(area, 3, 6), None);
}

#[test]
fn test_action_bar_falls_back_to_icons_when_narrow() {
    let handlers = ScriptedHandlers::new(Duration::ZERO, None);
    let dispatcher = dispatcher(&handlers);
    let theme = Theme::default();
    let icons = IconService::new(IconTheme::Ascii);
    let actions = available_actions(&ServerStatus::Offline);

    let area = Rect::new(0, 0, 20, 1);
    let mut buffer = Buffer::empty(area);
    ActionBar::new(&actions, &dispatcher, &theme, &icons, Instant::now()).render(area, &mut buffer);
    assert_eq!(bar_text(&buffer), " >   ~   $   x      ");
}

#[tokio::test(start_paused = true)]
async fn test_action_bar_shows_spinner_and_disables_others() {
    let handlers = ScriptedHandlers::new(Duration::from_millis(10), None);
    let dispatcher = dispatcher(&handlers);
    let theme = Theme::default();
    let icons = IconService::new(IconTheme::Ascii);
    let actions = available_actions(&ServerStatus::Online);

    let pending = dispatcher.invoke(ActionKind::Restart).unwrap();

    let area = Rect::new(0, 0, 60, 1);
    let mut buffer = Buffer::empty(area);
    let now = Instant::now();
    ActionBar::new(&actions, &dispatcher, &theme, &icons, now)
        .focused(Some(ActionKind::Stop))
        .spinner_origin(now)
        .render(area, &mut buffer);

    assert!(bar_text(&buffer).starts_with(" # Stop  | Restart "));
    // Stop is disabled, so focus is not shown
    assert!(buffer[(1, 0)].modifier.contains(Modifier::DIM));
    assert!(!buffer[(1, 0)].modifier.contains(Modifier::REVERSED));
    assert!(buffer[(11, 0)].modifier.contains(Modifier::BOLD));

    pending.await.unwrap();
}

#[test]
fn test_action_bar_focus_and_destructive_style() {
    let handlers = ScriptedHandlers::new(Duration::ZERO, None);
    let dispatcher = dispatcher(&handlers);
    let theme = Theme::default();
    let icons = IconService::new(IconTheme::Ascii);
    let actions = available_actions(&ServerStatus::Online);

    let area = Rect::new(0, 0, 60, 1);
    let mut buffer = Buffer::empty(area);
    ActionBar::new(&actions, &dispatcher, &theme, &icons, Instant::now())
        .focused(Some(ActionKind::Stop))
        .render(area, &mut buffer);

    assert!(buffer[(1, 0)].modifier.contains(Modifier::REVERSED));
    let delete_x = bar_text(&buffer).find("x Delete").unwrap() as u16;
    assert_eq!(buffer[(delete_x, 0)].fg, theme.destructive);
}
