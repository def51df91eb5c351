use super::*;
use assert_approx_eq::assert_approx_eq;
use itertools::Itertools;
use more_asserts::assert_gt;

const DT: f32 = 1. / 60.;

#[test]
fn louder_input_is_taken_immediately() {
    let mut env = HoldAndFallDown::default();
    assert_eq!(env.update(0.8, 0.3, DT), 0.8);
    assert_eq!(env.velocity(), 0.0);
}

#[test]
fn pull_up_resets_velocity() {
    let mut env = HoldAndFallDown::default();
    env.update(1.0, 0.3, DT);
    for _ in 0..5 {
        env.update(0.0, 0.3, DT);
    }
    assert_gt!(env.velocity(), 0.0);
    assert_eq!(env.update(1.0, 0.3, DT), 1.0);
    assert_eq!(env.velocity(), 0.0);
}

#[test]
fn first_fall_step() {
    let mut env = HoldAndFallDown::default();
    env.update(1.0, 0.0, DT);
    // Speed 0 accelerates at 10 per second per second.
    let out = env.update(0.0, 0.0, DT);
    assert_approx_eq!(env.velocity(), 10.0 * DT);
    assert_approx_eq!(out, 1.0 - 10.0 * DT * DT);
}

#[test]
fn falls_ever_faster() {
    let mut env = HoldAndFallDown::default();
    env.update(1.0, 0.3, DT);
    let levels = std::iter::once(1.0)
        .chain((0..8).map(|_| env.update(0.0, 0.3, DT)))
        .collect::<Vec<_>>();
    let drops = levels.iter().tuple_windows().map(|(a, b)| a - b).collect::<Vec<_>>();
    for (a, b) in drops.iter().tuple_windows() {
        assert_gt!(b, a);
    }
}

#[test]
fn faster_speed_falls_further() {
    let mut slow = HoldAndFallDown::default();
    let mut fast = HoldAndFallDown::default();
    slow.update(1.0, 0.0, DT);
    fast.update(1.0, 1.0, DT);
    for _ in 0..3 {
        slow.update(0.0, 0.0, DT);
        fast.update(0.0, 1.0, DT);
    }
    assert_gt!(slow.amplitude(), fast.amplitude());
}

#[test]
fn never_falls_below_target() {
    let mut env = HoldAndFallDown::default();
    env.update(1.0, 1.0, DT);
    for _ in 0..100 {
        env.update(0.25, 1.0, DT);
    }
    assert_eq!(env.amplitude(), 0.25);
}

#[test]
fn zero_delta_time_holds() {
    let mut env = HoldAndFallDown::default();
    env.update(0.7, 0.3, DT);
    assert_eq!(env.update(0.0, 0.3, 0.0), 0.7);
}

#[test]
fn bypass_and_reset() {
    let mut env = HoldAndFallDown::default();
    env.update(1.0, 0.3, DT);
    env.update(0.0, 0.3, DT);
    assert_eq!(env.bypass(0.4), 0.4);
    assert_eq!(env.velocity(), 0.0);
    env.reset();
    assert_eq!(env.amplitude(), 0.0);
    assert_eq!(env.velocity(), 0.0);
}
