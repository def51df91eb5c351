use assert_approx_eq::assert_approx_eq;
use proptest::prelude::*;

use super::{amplitude_to_db, db_to_amplitude, peak_db, rms_db};
use crate::test_utils::sine;

#[test]
fn full_scale_is_zero_db() {
    assert_approx_eq!(amplitude_to_db(1.0), 0.0);
    assert_approx_eq!(amplitude_to_db(-1.0), 0.0);
    assert_approx_eq!(amplitude_to_db(0.5), -6.0206, 1e-3);
    assert_eq!(amplitude_to_db(0.0), f32::NEG_INFINITY);
}

#[test]
fn silence_reads_as_floor() {
    assert_eq!(peak_db(&[0.0; 64], -60.0), -60.0);
    assert_eq!(rms_db(&[0.0; 64], -60.0), -60.0);
    assert_eq!(peak_db(&[], -60.0), -60.0);
    assert_eq!(rms_db(&[], -60.0), -60.0);
}

#[test]
#[cfg_attr(miri, ignore)]
fn sine_levels() {
    let signal: Vec<_> = sine(48000, 440. / 48000.)
        .iter()
        .map(|x| x * 0.5)
        .collect();
    assert_approx_eq!(peak_db(&signal, -60.0), -6.0206, 1e-2);
    // RMS of a sine is 3 dB below its peak.
    assert_approx_eq!(rms_db(&signal, -60.0), -9.0309, 1e-2);
}

proptest! {
    #[test]
    #[cfg_attr(miri, ignore)]
    fn db_round_trip(db in -120f32..20f32) {
        prop_assert!((amplitude_to_db(db_to_amplitude(db)) - db).abs() < 1e-3);
    }
}

proptest! {
    #[test]
    #[cfg_attr(miri, ignore)]
    fn rms_never_exceeds_peak(samples in prop::collection::vec(-1f32..1f32, 1..200)) {
        prop_assert!(rms_db(&samples, -60.0) <= peak_db(&samples, -60.0) + 1e-4);
    }
}
