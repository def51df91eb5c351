/// Clamp `input` to `[0, 1]`, mapping NaN to 0.
#[must_use]
pub fn clamp01(input: f32) -> f32 {
    if input.is_nan() {
        0.0
    } else {
        input.clamp(0.0, 1.0)
    }
}

/// `input` if it is strictly positive, otherwise 0.
///
/// NaN maps to 0.
#[must_use]
pub fn positive_or_zero(input: f32) -> f32 {
    if input > 0.0 { input } else { 0.0 }
}
