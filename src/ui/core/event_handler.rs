use crossterm::event::{poll, Event};
use tokio::time::{Duration, Instant};

/// Polls the terminal without blocking the local task set.
///
/// When no input is pending the handler sleeps for one tick, which lets
/// in-flight action handlers make progress and drives the animations.
pub struct EventHandler {
    tick_rate: Duration,
    /// `None` until the first frame is drawn
    last_render_time: Option<Instant>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_render_time: None,
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                Event::Key(key) => EventType::Input(Event::Key(key)),
                Event::Mouse(mouse) => EventType::Input(Event::Mouse(mouse)),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            });
        }

        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }

    /// Record that a frame was just drawn
    pub fn mark_rendered(&mut self) {
        self.last_render_time = Some(Instant::now());
    }

    /// Get the time since last render for frame timing
    pub fn time_since_last_render(&self) -> Duration {
        self.last_render_time.map_or(Duration::MAX, |at| at.elapsed())
    }

    /// Check if we should render based on timing
    pub fn should_render(&self) -> bool {
        self.time_since_last_render() >= Duration::from_millis(16) // Cap at ~60 FPS
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Input(Event),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::constants::TICK_RATE_DEFAULT_MS))
    }
}
