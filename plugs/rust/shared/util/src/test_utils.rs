#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

pub fn fill_with_white_noise(buffer: &mut [f32]) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(420);
    for sample in buffer.iter_mut() {
        *sample = rng.gen_range(-1.0..1.0);
    }
}

#[must_use]
pub fn white_noise(len: usize) -> Vec<f32> {
    let mut buffer = vec![0.0; len];
    fill_with_white_noise(&mut buffer);
    buffer
}

#[must_use]
pub fn sine(len: usize, increment: f32) -> Vec<f32> {
    let mut buffer = vec![0f32; len];
    let mut phase = 0f64;
    let increment = f64::from(increment) * std::f64::consts::TAU;
    for sample in &mut buffer {
        *sample = phase.sin() as f32;
        phase += increment;
    }
    buffer
}

/// A sequence of decibel levels moving linearly from `start_db` to `end_db` over `len` ticks.
#[must_use]
pub fn db_ramp(len: usize, start_db: f32, end_db: f32) -> Vec<f32> {
    if len < 2 {
        return vec![start_db; len];
    }
    let step = (end_db - start_db) / (len - 1) as f32;
    (0..len).map(|i| start_db + step * i as f32).collect()
}
