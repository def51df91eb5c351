//! Conversions between linear amplitude and decibels.

use num_traits::AsPrimitive;

/// Convert a linear amplitude to decibels relative to full scale.
///
/// Zero maps to negative infinity.
#[must_use]
pub fn amplitude_to_db(amplitude: f32) -> f32 {
    20.0 * amplitude.abs().log10()
}

/// Convert decibels relative to full scale to a linear amplitude.
#[must_use]
pub fn db_to_amplitude(db: f32) -> f32 {
    10f32.powf(db / 20.0)
}

/// The largest absolute sample of `samples`, in decibels, never below `floor_db`.
///
/// An empty block reads as `floor_db`.
#[must_use]
pub fn peak_db(samples: &[f32], floor_db: f32) -> f32 {
    let peak = samples.iter().copied().map(f32::abs).fold(0.0, f32::max);
    amplitude_to_db(peak).max(floor_db)
}

/// The root-mean-square of `samples`, in decibels, never below `floor_db`.
///
/// An empty block reads as `floor_db`.
#[must_use]
pub fn rms_db(samples: &[f32], floor_db: f32) -> f32 {
    if samples.is_empty() {
        return floor_db;
    }
    let sum: f32 = samples.iter().map(|x| x * x).sum();
    let len: f32 = samples.len().as_();
    let rms = (sum / len).sqrt();
    amplitude_to_db(rms).max(floor_db)
}

#[cfg(test)]
mod tests;
