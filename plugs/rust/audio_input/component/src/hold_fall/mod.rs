//! A meter-style envelope that holds its peak then falls with growing speed.

#[derive(Debug, Clone, Default)]
pub struct HoldAndFallDown {
    amplitude: f32,
    velocity: f32,
}

/// The rate `velocity` grows at, per second, for a speed in `[0, 1]`.
fn acceleration(speed: f32) -> f32 {
    10f32.powf(1.0 + 2.0 * speed)
}

impl HoldAndFallDown {
    /// Advance by `delta_time` seconds towards `target`, returning the new amplitude.
    ///
    /// Louder targets are taken immediately; quieter ones are approached by falling.
    pub fn update(&mut self, target: f32, speed: f32, delta_time: f32) -> f32 {
        self.velocity += acceleration(speed) * delta_time;
        self.amplitude -= self.velocity * delta_time;
        if self.amplitude < target {
            self.amplitude = target;
            self.velocity = 0.0;
        }
        self.amplitude
    }

    /// Follow `target` exactly, without smoothing.
    pub fn bypass(&mut self, target: f32) -> f32 {
        self.amplitude = target;
        self.velocity = 0.0;
        self.amplitude
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests;
