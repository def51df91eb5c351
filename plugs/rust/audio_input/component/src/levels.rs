use follower_component::level::{AmplitudeStatistic, FilterKind, LevelSource, SILENCE_DB};
use util::db::{peak_db, rms_db};

/// A [`LevelSource`] that summarizes the latest block of samples of each band.
///
/// Band-limiting is up to the caller: each [`FilterKind`] reads whatever block
/// was last stored for it. A band with no block reads as silence.
#[derive(Debug, Clone, Default)]
pub struct BlockLevels {
    blocks: [Vec<f32>; FilterKind::ALL.len()],
}

impl BlockLevels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the block of samples read for `filter`.
    pub fn set_block(&mut self, filter: FilterKind, samples: &[f32]) {
        let block = &mut self.blocks[filter.index() as usize];
        block.clear();
        block.extend_from_slice(samples);
    }

    /// Forget every block, so that all bands read as silence.
    pub fn clear(&mut self) {
        for block in &mut self.blocks {
            block.clear();
        }
    }
}

impl LevelSource for BlockLevels {
    fn level_db(&self, filter: FilterKind, statistic: AmplitudeStatistic) -> f32 {
        let samples = &self.blocks[filter.index() as usize];
        match statistic {
            AmplitudeStatistic::Peak => peak_db(samples, SILENCE_DB),
            AmplitudeStatistic::Rms => rms_db(samples, SILENCE_DB),
        }
    }
}
