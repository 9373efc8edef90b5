use fleetdeck::config::Config;
use fleetdeck::icons::IconTheme;
use fleetdeck::logger::Logger;
use fleetdeck::ui::core::context::AppContext;
use ratatui::style::Color;

#[test]
fn test_app_context_follows_config() {
    let mut config = Config::default();
    config.ui.icon_theme = IconTheme::Ascii;
    config.theme.online = "#010203".to_string();

    let context = AppContext::new(&config, Logger::new());
    assert_eq!(context.icons.theme(), IconTheme::Ascii);
    assert_eq!(context.theme.online, Color::Rgb(1, 2, 3));
}

#[test]
fn test_invalid_theme_color_falls_back_to_default() {
    let mut config = Config::default();
    config.theme.offline = "not-a-color".to_string();

    let context = AppContext::new(&config, Logger::new());
    assert_eq!(context.theme.offline, Color::Rgb(0xef, 0x44, 0x44));
}
