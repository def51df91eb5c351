//! The collaborator that supplies decibel levels to a follower.

/// The decibel level treated as silence.
///
/// Levels at or below this are indistinguishable from no signal.
pub const SILENCE_DB: f32 = -60.0;

/// Which band-limited version of the input signal to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKind {
    /// The unfiltered signal.
    Bypass,

    /// The low band of the signal.
    #[default]
    LowPass,

    /// The middle band of the signal.
    BandPass,

    /// The high band of the signal.
    HighPass,
}

impl FilterKind {
    /// Every filter kind, in parameter index order.
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Bypass,
        FilterKind::LowPass,
        FilterKind::BandPass,
        FilterKind::HighPass,
    ];

    /// Look up a filter kind by its parameter index.
    #[must_use]
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The parameter index of this filter kind.
    #[must_use]
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Which summary statistic of the signal to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AmplitudeStatistic {
    /// The largest absolute sample value.
    Peak,

    /// The root-mean-square of the samples.
    #[default]
    Rms,
}

impl AmplitudeStatistic {
    /// Every statistic, in parameter index order.
    pub const ALL: [AmplitudeStatistic; 2] = [AmplitudeStatistic::Peak, AmplitudeStatistic::Rms];

    /// Look up a statistic by its parameter index.
    #[must_use]
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The parameter index of this statistic.
    #[must_use]
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Supplies the current level of the input signal.
///
/// A follower queries this once per tick. Implementations are expected
/// to return a decibel value where 0 dB is full scale and
/// [`SILENCE_DB`] is silence; values outside that range are tolerated.
pub trait LevelSource {
    /// The current level in decibels of the `filter` band, summarized by `statistic`.
    fn level_db(&self, filter: FilterKind, statistic: AmplitudeStatistic) -> f32;
}

impl<T: LevelSource + ?Sized> LevelSource for &T {
    fn level_db(&self, filter: FilterKind, statistic: AmplitudeStatistic) -> f32 {
        (**self).level_db(filter, statistic)
    }
}

impl<T: LevelSource + ?Sized> LevelSource for std::rc::Rc<T> {
    fn level_db(&self, filter: FilterKind, statistic: AmplitudeStatistic) -> f32 {
        (**self).level_db(filter, statistic)
    }
}

impl<T: LevelSource + ?Sized> LevelSource for Box<T> {
    fn level_db(&self, filter: FilterKind, statistic: AmplitudeStatistic) -> f32 {
        (**self).level_db(filter, statistic)
    }
}

/// A source that always reports the same level, regardless of band or statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantLevel(pub f32);

impl LevelSource for ConstantLevel {
    fn level_db(&self, _: FilterKind, _: AmplitudeStatistic) -> f32 {
        self.0
    }
}

impl LevelSource for std::cell::Cell<f32> {
    fn level_db(&self, _: FilterKind, _: AmplitudeStatistic) -> f32 {
        self.get()
    }
}

#[cfg(test)]
mod tests;
