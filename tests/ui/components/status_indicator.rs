use fleetdeck::icons::{IconService, IconTheme};
use fleetdeck::model::ServerStatus;
use fleetdeck::ui::components::status_indicator::{resolve, StatusIndicator};
use fleetdeck::ui::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::time::{Duration, Instant};

#[test]
fn test_known_statuses_resolve_to_their_entries() {
    let theme = Theme::default();

    let online = resolve(&ServerStatus::Online, &theme);
    assert_eq!(online.label, "ONLINE");
    assert_eq!(online.color, theme.online);
    assert!(online.live);

    let pending = resolve(&ServerStatus::Pending, &theme);
    assert_eq!(pending.label, "PENDING");
    assert_eq!(pending.color, theme.pending);
    assert!(!pending.live);

    assert!(resolve(&ServerStatus::Active, &theme).live);
    assert!(!resolve(&ServerStatus::Completed, &theme).live);
}

#[test]
fn test_unknown_status_uses_offline_appearance() {
    let theme = Theme::default();
    let unknown = resolve(&ServerStatus::parse("hibernating"), &theme);
    assert_eq!(unknown, resolve(&ServerStatus::Offline, &theme));
}

#[test]
fn test_label_override_is_uppercased() {
    let theme = Theme::default();
    let icons = IconService::new(IconTheme::Ascii);
    let status = ServerStatus::Online;

    let indicator = StatusIndicator::new(&status, &theme, &icons, Instant::now()).label(Some("Up"));
    assert_eq!(indicator.text(), "UP");
    // Color still follows the status
    assert_eq!(indicator.appearance().color, theme.online);

    let indicator = StatusIndicator::new(&status, &theme, &icons, Instant::now()).label(Some(""));
    assert_eq!(indicator.text(), "ONLINE");
}

#[test]
fn test_only_live_statuses_pulse() {
    let theme = Theme::default();
    let icons = IconService::new(IconTheme::Ascii);
    let origin = Instant::now();
    let half_period = origin + theme.pulse_period / 2;

    let online = ServerStatus::Online;
    let indicator = StatusIndicator::new(&online, &theme, &icons, half_period).pulse_origin(origin);
    assert!(indicator.intensity() > 0.99);

    let pending = ServerStatus::Pending;
    let indicator = StatusIndicator::new(&pending, &theme, &icons, half_period).pulse_origin(origin);
    assert_eq!(indicator.intensity(), 0.0);
}

#[test]
fn test_render_dot_and_label() {
    let theme = Theme::default();
    let icons = IconService::new(IconTheme::Ascii);
    let status = ServerStatus::Offline;
    let area = Rect::new(0, 0, 12, 1);
    let mut buffer = Buffer::empty(area);

    StatusIndicator::new(&status, &theme, &icons, Instant::now()).render(area, &mut buffer);

    let text: String = (0..area.width).map(|x| buffer[(x, 0)].symbol()).collect();
    assert_eq!(text, "o OFFLINE   ");
}

#[test]
fn test_pulse_peak_uses_larger_dot() {
    let theme = Theme::default();
    let icons = IconService::new(IconTheme::Ascii);
    let status = ServerStatus::Active;
    let origin = Instant::now();
    let now = origin + theme.pulse_period / 2 + Duration::from_millis(1);

    let line = StatusIndicator::new(&status, &theme, &icons, now)
        .pulse_origin(origin)
        .to_line();
    assert_eq!(line.spans[0].content, "O");
    assert_eq!(line.spans[2].content, "ACTIVE");
}
