//! Terminal setup and the main UI loop

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::rc::Rc;
use std::time::Duration;
use tokio::task::LocalSet;

use super::app::Dashboard;
use super::core::{Component, EventHandler, EventType};
use crate::config::Config;
use crate::fleet::SimulatedFleet;
use crate::logger::Logger;

/// Run the dashboard until the user quits
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    let fleet = Rc::new(SimulatedFleet::from_config(&config.fleet, logger.clone())?);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut dashboard = Dashboard::new(fleet, &config, logger);
    let mut events = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));

    // Action handlers hold `Rc`s, so they run on a local task set
    let local = LocalSet::new();
    let res = local
        .run_until(run_ui(&mut terminal, &mut dashboard, &mut events))
        .await;

    // Cleanup
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    dashboard: &mut Dashboard,
    events: &mut EventHandler,
) -> Result<()> {
    dashboard.init()?;

    loop {
        if events.should_render() {
            terminal.draw(|f| {
                let area = f.area();
                dashboard.render(f, area);
            })?;
            events.mark_rendered();
        }

        match events.next_event().await? {
            EventType::Input(event) => {
                let action = dashboard.handle_events(Some(event));
                dashboard.update(action);
            }
            EventType::Tick => {
                dashboard.update(crate::ui::core::Action::Tick);
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }

        dashboard.process_background_actions();

        if dashboard.should_quit() {
            break;
        }
    }

    Ok(())
}
