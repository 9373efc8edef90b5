//! Time-parameterised animation values.
//!
//! Nothing here owns a timer. Components are handed `now` at render time and
//! ask a [`Transition`] or [`Pulse`] where they are at that instant.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::time::{Duration, Instant};

/// Easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, gentle landing
    #[default]
    EaseOut,
    /// Sine ease-in-out
    EaseInOut,
}

impl Easing {
    /// Map linear progress in [0, 1] to eased progress in [0, 1]
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// A one-shot transition that started at a fixed instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    pub fn new(started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            started_at,
            duration,
            easing,
        }
    }

    /// Eased progress at `now`; zero-length transitions are always complete
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        self.easing
            .apply(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Value between `from` and `to` at `now`
    #[must_use]
    pub fn interpolate(&self, from: f64, to: f64, now: Instant) -> f64 {
        from + (to - from) * self.progress(now)
    }
}

/// An infinite oscillation, 0 at rest and 1 at the peak of each cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    period: Duration,
}

impl Pulse {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    #[must_use]
    pub fn intensity(&self, origin: Instant, now: Instant) -> f64 {
        if self.period.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(origin).as_secs_f64();
        let period = self.period.as_secs_f64();
        let phase = (elapsed % period) / period;
        let triangle = if phase < 0.5 { phase * 2.0 } else { (1.0 - phase) * 2.0 };
        Easing::EaseInOut.apply(triangle)
    }
}
