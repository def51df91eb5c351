//! Automatic gain from a slowly decaying peak ceiling.
//!
//! The ceiling follows loud input immediately (less a headroom margin) and
//! sinks back towards silence at a fixed rate, so the gain that cancels it
//! brings the recent peak to just below the top of the dynamic range.

use follower_component::level::SILENCE_DB;

/// How fast the ceiling sinks back towards silence.
pub const CEILING_DECAY_DB_PER_SECOND: f32 = 0.6;

/// Headroom left above the ceiling, as a fraction of the dynamic range.
pub const HEADROOM_FRACTION: f32 = 0.05;

#[derive(Debug, Clone)]
pub struct AutoGain {
    ceiling_db: f32,
}

impl Default for AutoGain {
    fn default() -> Self {
        Self {
            ceiling_db: SILENCE_DB,
        }
    }
}

impl AutoGain {
    /// Advance the ceiling by `delta_time` seconds given the current input level,
    /// returning the gain that maps the ceiling to 0 dB.
    pub fn update(&mut self, input_db: f32, dynamic_range_db: f32, delta_time: f32) -> f32 {
        let decayed = (self.ceiling_db - CEILING_DECAY_DB_PER_SECOND * delta_time).max(SILENCE_DB);
        let margin = dynamic_range_db * HEADROOM_FRACTION;
        // `max` then `min` rather than `clamp`, since the lower bound can exceed 0.
        self.ceiling_db = (input_db - margin).max(decayed).min(0.0);
        -self.ceiling_db
    }

    pub fn ceiling_db(&self) -> f32 {
        self.ceiling_db
    }

    pub fn reset(&mut self) {
        self.ceiling_db = SILENCE_DB;
    }
}
