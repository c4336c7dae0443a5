//! Transient success indicator shown after a fetch lands.

use std::time::{Duration, Instant};

pub const INDICATOR_HOLD: Duration = Duration::from_millis(400);
pub const INDICATOR_FADE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorPhase {
    Hidden,
    Visible,
    Fading,
}

/// Tracks when the indicator was last triggered and derives its phase from
/// the clock; it carries no timer of its own.
#[derive(Debug, Default)]
pub struct SuccessIndicator {
    shown_at: Option<Instant>,
}

impl SuccessIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn phase(&self, now: Instant) -> IndicatorPhase {
        let Some(shown_at) = self.shown_at else {
            return IndicatorPhase::Hidden;
        };
        let elapsed = now.saturating_duration_since(shown_at);
        if elapsed < INDICATOR_HOLD {
            IndicatorPhase::Visible
        } else if elapsed < INDICATOR_HOLD + INDICATOR_FADE {
            IndicatorPhase::Fading
        } else {
            IndicatorPhase::Hidden
        }
    }

    /// Opacity for renderers that fade: 1.0 through the hold, then a linear
    /// ramp down to 0.0 over the fade window.
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(shown_at) = self.shown_at else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(shown_at);
        if elapsed < INDICATOR_HOLD {
            return 1.0;
        }
        let faded = elapsed - INDICATOR_HOLD;
        if faded >= INDICATOR_FADE {
            return 0.0;
        }
        1.0 - faded.as_secs_f32() / INDICATOR_FADE.as_secs_f32()
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.phase(now) != IndicatorPhase::Hidden
    }
}
