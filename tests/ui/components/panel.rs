use fleetdeck::ui::components::PanelContainer;
use fleetdeck::ui::Theme;
use ratatui::{backend::TestBackend, layout::Rect, style::Modifier, Terminal};
use std::time::{Duration, Instant};

fn draw(panel: PanelContainer<'_>) -> (ratatui::buffer::Buffer, Option<Rect>) {
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    let mut inner = None;
    terminal
        .draw(|f| {
            let area = f.area();
            panel.render_with(f, area, |_, rect| inner = Some(rect));
        })
        .unwrap();
    (terminal.backend().buffer().clone(), inner)
}

#[test]
fn test_default_panel_is_rounded() {
    let theme = Theme::default();
    let (buffer, inner) = draw(PanelContainer::new(&theme, Instant::now()));

    assert_eq!(buffer[(0, 0)].symbol(), "╭");
    assert_eq!(buffer[(19, 5)].symbol(), "╯");
    assert_eq!(buffer[(0, 0)].fg, theme.panel_border);
    assert_eq!(inner, Some(Rect::new(1, 1, 18, 4)));
}

#[test]
fn test_hovered_panel_lifts() {
    let theme = Theme::default();
    let (buffer, _) = draw(PanelContainer::new(&theme, Instant::now()).hovered(true));
    assert_eq!(buffer[(0, 0)].symbol(), "┏");
    assert_eq!(buffer[(0, 0)].fg, theme.panel_hover);

    // Hover affordance can be switched off
    let (buffer, _) = draw(PanelContainer::new(&theme, Instant::now()).hover(false).hovered(true));
    assert_eq!(buffer[(0, 0)].symbol(), "╭");
}

#[test]
fn test_press_only_applies_to_clickable_panels() {
    let theme = Theme::default();
    let (buffer, _) = draw(PanelContainer::new(&theme, Instant::now()).clickable(true).pressed(true));
    assert_eq!(buffer[(0, 0)].symbol(), "╔");
    assert!(buffer[(0, 0)].modifier.contains(Modifier::DIM));

    let (buffer, _) = draw(PanelContainer::new(&theme, Instant::now()).pressed(true));
    assert_eq!(buffer[(0, 0)].symbol(), "╭");
}

#[test]
fn test_title_is_drawn_on_border() {
    let theme = Theme::default();
    let (buffer, _) = draw(PanelContainer::new(&theme, Instant::now()).title("web-01"));
    let top: String = (1..7).map(|x| buffer[(x, 0)].symbol()).collect();
    assert_eq!(top, "web-01");
}

#[test]
fn test_entrance_slides_up_and_fades_in() {
    let theme = Theme::default();
    let mounted = Instant::now();
    let area = Rect::new(0, 0, 20, 6);

    let entering = PanelContainer::new(&theme, mounted).entered_at(mounted);
    assert_eq!(entering.entrance_progress(), 0.0);
    assert_eq!(entering.frame_area(area), Rect::new(0, 1, 20, 5));

    let (buffer, inner) = draw(PanelContainer::new(&theme, mounted).entered_at(mounted));
    assert_eq!(buffer[(0, 1)].symbol(), "╭");
    assert!(buffer[(0, 1)].modifier.contains(Modifier::DIM));
    assert_eq!(inner, Some(Rect::new(1, 2, 18, 3)));

    let settled_at = mounted + theme.entrance_duration + Duration::from_millis(1);
    let settled = PanelContainer::new(&theme, settled_at).entered_at(mounted);
    assert_eq!(settled.entrance_progress(), 1.0);
    assert_eq!(settled.frame_area(area), area);

    let (buffer, _) = draw(PanelContainer::new(&theme, settled_at).entered_at(mounted));
    assert_eq!(buffer[(0, 0)].symbol(), "╭");
    assert!(!buffer[(0, 0)].modifier.contains(Modifier::DIM));
}

#[test]
fn test_glow_pulses_border_color() {
    let theme = Theme::default();
    let origin = Instant::now();
    let peak = origin + theme.pulse_period / 2;

    let (buffer, _) = draw(PanelContainer::new(&theme, peak).glow(true).glow_origin(origin));
    assert_eq!(buffer[(0, 0)].fg, theme.panel_glow);

    let (buffer, _) = draw(PanelContainer::new(&theme, origin).glow(true).glow_origin(origin));
    assert_eq!(buffer[(0, 0)].fg, theme.panel_border);
}
