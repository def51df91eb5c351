use std::{cell::Cell, rc::Rc};

use super::{AmplitudeStatistic, ConstantLevel, FilterKind, LevelSource};

#[test]
fn filter_kind_indices_round_trip() {
    for kind in FilterKind::ALL {
        assert_eq!(FilterKind::from_index(kind.index()), Some(kind));
    }
    assert_eq!(FilterKind::from_index(4), None);
    assert_eq!(FilterKind::default(), FilterKind::LowPass);
}

#[test]
fn statistic_indices_round_trip() {
    for statistic in AmplitudeStatistic::ALL {
        assert_eq!(AmplitudeStatistic::from_index(statistic.index()), Some(statistic));
    }
    assert_eq!(AmplitudeStatistic::from_index(2), None);
    assert_eq!(AmplitudeStatistic::default(), AmplitudeStatistic::Rms);
}

#[test]
fn constant_level_ignores_band() {
    let source = ConstantLevel(-12.0);
    for kind in FilterKind::ALL {
        assert_eq!(source.level_db(kind, AmplitudeStatistic::Peak), -12.0);
    }
}

#[test]
fn shared_cell_source_sees_updates() {
    let level = Rc::new(Cell::new(-30.0));
    let source = Rc::clone(&level);
    assert_eq!(
        source.level_db(FilterKind::Bypass, AmplitudeStatistic::Rms),
        -30.0
    );
    level.set(-3.0);
    assert_eq!(
        source.level_db(FilterKind::Bypass, AmplitudeStatistic::Rms),
        -3.0
    );
}
