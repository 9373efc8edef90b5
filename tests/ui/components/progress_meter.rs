use fleetdeck::ui::animation::{Easing, Transition};
use fleetdeck::ui::components::progress_meter::{percentage, MeterSize, ProgressMeter, Tier};
use fleetdeck::ui::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::time::{Duration, Instant};

fn row_text(buffer: &Buffer, y: u16) -> String {
    (buffer.area.left()..buffer.area.right())
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[test]
fn test_percentage_is_clamped() {
    assert_eq!(percentage(55.0, 100.0), 55.0);
    assert_eq!(percentage(150.0, 100.0), 100.0);
    assert_eq!(percentage(-10.0, 100.0), 0.0);
    assert_eq!(percentage(3.0, 4.0), 75.0);
    assert_eq!(percentage(f64::NAN, 100.0), 0.0);
}

#[test]
fn test_degenerate_max_yields_zero() {
    assert_eq!(percentage(50.0, 0.0), 0.0);
    assert_eq!(percentage(50.0, -5.0), 0.0);
    assert_eq!(percentage(50.0, f64::NAN), 0.0);
    assert_eq!(percentage(50.0, f64::INFINITY), 0.0);
}

#[test]
fn test_percentage_is_monotonic_and_bounded() {
    for max in [1.0, 37.5, 100.0, 1e6] {
        let values: Vec<f64> = (-200..=400).map(|step| max * f64::from(step) / 100.0).collect();
        let mut previous = f64::NEG_INFINITY;
        for value in values {
            let current = percentage(value, max);
            assert!((0.0..=100.0).contains(&current), "{value}/{max} gave {current}");
            assert!(current >= previous, "{value}/{max} dropped from {previous} to {current}");
            previous = current;
        }
    }
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(Tier::for_percentage(0.0), Tier::Green);
    assert_eq!(Tier::for_percentage(49.999), Tier::Green);
    assert_eq!(Tier::for_percentage(50.0), Tier::Yellow);
    assert_eq!(Tier::for_percentage(79.999), Tier::Yellow);
    assert_eq!(Tier::for_percentage(80.0), Tier::Red);
    assert_eq!(Tier::for_percentage(100.0), Tier::Red);
}

#[test]
fn test_tier_never_steps_down_as_value_grows() {
    let rank = |tier: Tier| match tier {
        Tier::Green => 0,
        Tier::Yellow => 1,
        Tier::Red => 2,
    };
    let mut previous = 0;
    for step in 0..=1000 {
        let current = rank(Tier::for_percentage(percentage(f64::from(step) / 10.0, 100.0)));
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_tier_colors_come_from_theme() {
    let theme = Theme::default();
    assert_eq!(Tier::Green.color(&theme), theme.tier_low);
    assert_eq!(Tier::Yellow.color(&theme), theme.tier_mid);
    assert_eq!(Tier::Red.color(&theme), theme.tier_high);
}

#[test]
fn test_mid_load_renders_yellow_with_text() {
    let theme = Theme::default();
    let meter = ProgressMeter::new(55.0, &theme, Instant::now()).label("CPU");
    assert_eq!(meter.tier(), Tier::Yellow);
    assert_eq!(meter.percentage_text(), "55%");

    let area = Rect::new(0, 0, 20, 2);
    let mut buffer = Buffer::empty(area);
    meter.render(area, &mut buffer);

    let header = row_text(&buffer, 0);
    assert!(header.starts_with("CPU"));
    assert!(header.ends_with("55%"));
    assert_eq!(buffer[(19, 0)].fg, theme.tier_mid);

    // 55% of 20 columns, rounded
    let filled = (0..20).filter(|&x| buffer[(x, 1)].fg != theme.track).count();
    assert_eq!(filled, 11);
}

#[test]
fn test_over_range_value_renders_full() {
    let theme = Theme::default();
    let meter = ProgressMeter::new(150.0, &theme, Instant::now()).label("RAM");
    assert_eq!(meter.percentage(), 100.0);
    assert_eq!(meter.percentage_text(), "100%");
    assert_eq!(meter.tier(), Tier::Red);

    let area = Rect::new(0, 0, 10, 2);
    let mut buffer = Buffer::empty(area);
    meter.render(area, &mut buffer);
    assert!(row_text(&buffer, 0).ends_with("100%"));
    assert!((0..10).all(|x| buffer[(x, 1)].fg != theme.track));
}

#[test]
fn test_custom_max() {
    let theme = Theme::default();
    let meter = ProgressMeter::new(6.0, &theme, Instant::now()).max(8.0);
    assert_eq!(meter.percentage(), 75.0);
    assert_eq!(meter.tier(), Tier::Yellow);
}

#[test]
fn test_header_is_omitted_without_label_or_percentage() {
    let theme = Theme::default();
    let meter = ProgressMeter::new(30.0, &theme, Instant::now()).show_percentage(false);
    assert!(!meter.has_header());
    assert_eq!(meter.height(), 1);

    let meter = ProgressMeter::new(30.0, &theme, Instant::now()).size(MeterSize::Lg);
    assert_eq!(meter.height(), 3);
}

#[test]
fn test_fill_animates_towards_target() {
    let theme = Theme::default();
    let start = Instant::now();
    let transition = Transition::new(start, Duration::from_millis(800), Easing::EaseOut);

    let at_start = ProgressMeter::new(60.0, &theme, start).animate(0.0, transition);
    assert_eq!(at_start.displayed_percentage(), 0.0);
    // Text and tier always reflect the target, not the animated width
    assert_eq!(at_start.percentage_text(), "60%");

    let midway = ProgressMeter::new(60.0, &theme, start + Duration::from_millis(400)).animate(0.0, transition);
    let shown = midway.displayed_percentage();
    assert!(shown > 30.0 && shown < 60.0);

    let done = ProgressMeter::new(60.0, &theme, start + Duration::from_secs(1)).animate(0.0, transition);
    assert_eq!(done.displayed_percentage(), 60.0);
}

#[test]
fn test_zero_sized_area_is_ignored() {
    let theme = Theme::default();
    let area = Rect::new(0, 0, 0, 0);
    let mut buffer = Buffer::empty(area);
    ProgressMeter::new(50.0, &theme, Instant::now()).render(area, &mut buffer);
}
