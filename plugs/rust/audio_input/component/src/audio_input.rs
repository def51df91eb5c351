use std::rc::Rc;

use follower_component::{
    Processor,
    events::{AmplitudeListener, Broadcaster, ListenerId},
    level::{AmplitudeStatistic, FilterKind, LevelSource, SILENCE_DB},
    parameters,
};
use util::f32::{clamp01, positive_or_zero};

use crate::agc::AutoGain;
use crate::hold_fall::HoldAndFallDown;

/// The smallest dynamic range accepted, in decibels.
///
/// Smaller values are raised to this to keep normalization finite.
pub const MIN_DYNAMIC_RANGE_DB: f32 = 1e-3;

/// Follows the level reported by a [`LevelSource`], producing a value in `[0, 1]` each tick.
///
/// Each tick the level is gained up (either automatically, from a decaying
/// peak ceiling, or by a fixed amount), mapped so that the top
/// `dynamic_range_db` decibels below full scale span `[0, 1]`, and then
/// optionally smoothed so that it holds its peak and falls with growing speed.
///
/// The result is returned from [`Processor::tick`] and broadcast to every
/// subscribed [`AmplitudeListener`].
#[derive(Debug)]
pub struct AudioInput<S> {
    source: S,
    processing: bool,

    filter_kind: FilterKind,
    statistic: AmplitudeStatistic,
    auto_gain_enabled: bool,
    manual_gain_db: f32,
    external_gain_db: f32,
    dynamic_range_db: f32,
    hold_and_fall_enabled: bool,
    fall_speed: f32,

    auto_gain: AutoGain,
    envelope: HoldAndFallDown,
    input_db: f32,

    listeners: Broadcaster,
}

fn finite_or_warn(name: &str, value: f32) -> Option<f32> {
    if value.is_finite() {
        Some(value)
    } else {
        log::warn!("ignoring non-finite {name}: {value}");
        None
    }
}

impl<S: LevelSource> AudioInput<S> {
    /// Create a follower reading from `source`, with every setting at its default.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            processing: true,
            filter_kind: FilterKind::default(),
            statistic: AmplitudeStatistic::default(),
            auto_gain_enabled: true,
            manual_gain_db: 6.0,
            external_gain_db: 0.0,
            dynamic_range_db: 12.0,
            hold_and_fall_enabled: true,
            fall_speed: 0.3,
            auto_gain: AutoGain::default(),
            envelope: HoldAndFallDown::default(),
            input_db: SILENCE_DB,
            listeners: Broadcaster::default(),
        }
    }

    /// Drop the auto-gain ceiling back to silence.
    ///
    /// Takes effect on the next tick; nothing else is touched.
    pub fn reset_auto_gain(&mut self) {
        self.auto_gain.reset();
    }

    /// Subscribe `listener` to the output of every subsequent tick.
    pub fn add_listener<L: AmplitudeListener + 'static>(&mut self, listener: &Rc<L>) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unsubscribe a listener. Returns `false` if it was not subscribed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn set_filter_kind(&mut self, filter_kind: FilterKind) {
        self.filter_kind = filter_kind;
    }

    #[must_use]
    pub fn filter_kind(&self) -> FilterKind {
        self.filter_kind
    }

    pub fn set_amplitude_statistic(&mut self, statistic: AmplitudeStatistic) {
        self.statistic = statistic;
    }

    #[must_use]
    pub fn amplitude_statistic(&self) -> AmplitudeStatistic {
        self.statistic
    }

    pub fn set_auto_gain_enabled(&mut self, enabled: bool) {
        self.auto_gain_enabled = enabled;
    }

    #[must_use]
    pub fn auto_gain_enabled(&self) -> bool {
        self.auto_gain_enabled
    }

    /// Gain applied while auto gain is off, in decibels.
    pub fn set_manual_gain_db(&mut self, gain_db: f32) {
        if let Some(gain_db) = finite_or_warn("manual gain", gain_db) {
            self.manual_gain_db = gain_db;
        }
    }

    #[must_use]
    pub fn manual_gain_db(&self) -> f32 {
        self.manual_gain_db
    }

    /// Extra gain added to the manual gain, in decibels.
    ///
    /// This is a runtime control, not a stored parameter.
    pub fn set_external_gain_db(&mut self, gain_db: f32) {
        if let Some(gain_db) = finite_or_warn("external gain", gain_db) {
            self.external_gain_db = gain_db;
        }
    }

    #[must_use]
    pub fn external_gain_db(&self) -> f32 {
        self.external_gain_db
    }

    /// How many decibels below the gained-up ceiling map to `[0, 1]`.
    ///
    /// Raised to [`MIN_DYNAMIC_RANGE_DB`] if smaller.
    pub fn set_dynamic_range_db(&mut self, dynamic_range_db: f32) {
        let Some(dynamic_range_db) = finite_or_warn("dynamic range", dynamic_range_db) else {
            return;
        };
        if dynamic_range_db < MIN_DYNAMIC_RANGE_DB {
            log::warn!("dynamic range {dynamic_range_db} dB raised to {MIN_DYNAMIC_RANGE_DB} dB");
        }
        self.dynamic_range_db = dynamic_range_db.max(MIN_DYNAMIC_RANGE_DB);
    }

    #[must_use]
    pub fn dynamic_range_db(&self) -> f32 {
        self.dynamic_range_db
    }

    pub fn set_hold_and_fall_enabled(&mut self, enabled: bool) {
        self.hold_and_fall_enabled = enabled;
    }

    #[must_use]
    pub fn hold_and_fall_enabled(&self) -> bool {
        self.hold_and_fall_enabled
    }

    /// How quickly the output falls after a peak, from 0 (slowest) to 1 (fastest).
    pub fn set_fall_speed(&mut self, speed: f32) {
        let Some(speed) = finite_or_warn("fall speed", speed) else {
            return;
        };
        if !(0.0..=1.0).contains(&speed) {
            log::warn!("fall speed {speed} clamped to [0, 1]");
        }
        self.fall_speed = speed.clamp(0.0, 1.0);
    }

    #[must_use]
    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    /// The level read on the last tick, in decibels.
    #[must_use]
    pub fn input_amplitude_db(&self) -> f32 {
        self.input_db
    }

    /// The gain the next tick starts from, in decibels.
    ///
    /// With auto gain on this cancels the peak ceiling, otherwise it is the
    /// manual gain plus the external gain.
    #[must_use]
    pub fn calculated_gain_db(&self) -> f32 {
        if self.auto_gain_enabled {
            -self.auto_gain.ceiling_db()
        } else {
            self.manual_gain_db + self.external_gain_db
        }
    }

    /// The output of the last tick.
    #[must_use]
    pub fn output_amplitude(&self) -> f32 {
        self.envelope.amplitude()
    }

    #[must_use]
    pub fn peak_ceiling_db(&self) -> f32 {
        self.auto_gain.ceiling_db()
    }

    #[must_use]
    pub fn fall_velocity(&self) -> f32 {
        self.envelope.velocity()
    }

    fn reset(&mut self) {
        self.auto_gain.reset();
        self.envelope.reset();
        self.input_db = SILENCE_DB;
    }
}

impl<S: LevelSource> Processor for AudioInput<S> {
    fn set_processing(&mut self, processing: bool) {
        if !processing {
            self.reset();
        }
        self.processing = processing;
    }

    fn handle_parameters<P: parameters::States>(&mut self, parameters: P) {
        if let Some(filter_kind) = parameters
            .get_enum("filter_type")
            .and_then(FilterKind::from_index)
        {
            self.set_filter_kind(filter_kind);
        }
        if let Some(statistic) = parameters
            .get_enum("amplitude_type")
            .and_then(AmplitudeStatistic::from_index)
        {
            self.set_amplitude_statistic(statistic);
        }
        if let Some(enabled) = parameters.get_switch("auto_gain") {
            self.set_auto_gain_enabled(enabled);
        }
        if let Some(gain_db) = parameters.get_numeric("gain") {
            self.set_manual_gain_db(gain_db);
        }
        if let Some(dynamic_range_db) = parameters.get_numeric("dynamic_range") {
            self.set_dynamic_range_db(dynamic_range_db);
        }
        if let Some(enabled) = parameters.get_switch("hold_and_fall_down") {
            self.set_hold_and_fall_enabled(enabled);
        }
        if let Some(speed) = parameters.get_numeric("fall_down_speed") {
            self.set_fall_speed(speed);
        }
    }

    fn tick(&mut self, delta_time: f32) -> f32 {
        if !self.processing {
            return self.envelope.amplitude();
        }
        let delta_time = positive_or_zero(delta_time);

        let level_db = self.source.level_db(self.filter_kind, self.statistic);
        self.input_db = if level_db.is_nan() {
            SILENCE_DB
        } else {
            level_db
        };

        if self.auto_gain_enabled {
            self.auto_gain
                .update(self.input_db, self.dynamic_range_db, delta_time);
        }
        let gain_db = self.calculated_gain_db();

        let normalized = clamp01((self.input_db + gain_db) / self.dynamic_range_db + 1.0);

        let amplitude = if self.hold_and_fall_enabled {
            self.envelope
                .update(normalized, self.fall_speed, delta_time)
        } else {
            self.envelope.bypass(normalized)
        };
        self.listeners.broadcast(amplitude);
        amplitude
    }
}
