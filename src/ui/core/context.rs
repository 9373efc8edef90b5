use crate::{config::Config, icons::IconService, logger::Logger, ui::theme::Theme};

/// Services shared by every component of the dashboard
pub struct AppContext {
    pub theme: Theme,
    pub icons: IconService,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(config: &Config, logger: Logger) -> Self {
        Self {
            theme: Theme::from_config(&config.theme),
            icons: IconService::new(config.ui.icon_theme),
            logger,
        }
    }
}
