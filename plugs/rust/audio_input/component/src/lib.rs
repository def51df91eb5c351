//! The Audio Input level follower.
//!
//! Reads a decibel level once per tick, applies automatic gain and a
//! hold-and-fall-down envelope, and broadcasts a value in `[0, 1]`.

#![warn(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    clippy::pedantic,
    clippy::todo
)]
#![allow(
    clippy::type_complexity,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::default_trait_access
)]

use follower_component::level::LevelSource;
use follower_component::parameters::{self, Flags, InfoRef, StaticInfoRef, TypeSpecificInfoRef};
use follower_component::Component as ComponentT;

mod agc;
mod audio_input;
mod hold_fall;
mod levels;

pub use agc::{CEILING_DECAY_DB_PER_SECOND, HEADROOM_FRACTION};
pub use audio_input::{AudioInput, MIN_DYNAMIC_RANGE_DB};
pub use levels::BlockLevels;

/// Every parameter of the Audio Input follower.
pub const PARAMETERS: [StaticInfoRef; 7] = [
    InfoRef {
        title: "Filter Type",
        short_title: "Filter",
        unique_id: "filter_type",
        flags: Flags { automatable: false },
        type_specific: TypeSpecificInfoRef::Enum {
            default: 1,
            values: &["Bypass", "LowPass", "BandPass", "HighPass"],
        },
    },
    InfoRef {
        title: "Amplitude Type",
        short_title: "Amplitude",
        unique_id: "amplitude_type",
        flags: Flags { automatable: false },
        type_specific: TypeSpecificInfoRef::Enum {
            default: 1,
            values: &["Peak", "RMS"],
        },
    },
    InfoRef {
        title: "Auto Gain",
        short_title: "Auto Gain",
        unique_id: "auto_gain",
        flags: Flags { automatable: true },
        type_specific: TypeSpecificInfoRef::Switch { default: true },
    },
    InfoRef {
        title: "Gain",
        short_title: "Gain",
        unique_id: "gain",
        flags: Flags { automatable: true },
        type_specific: TypeSpecificInfoRef::Numeric {
            default: 6.0,
            valid_range: -10.0..=40.0,
            units: Some("dB"),
        },
    },
    InfoRef {
        title: "Dynamic Range",
        short_title: "Dyn. Range",
        unique_id: "dynamic_range",
        flags: Flags { automatable: true },
        type_specific: TypeSpecificInfoRef::Numeric {
            default: 12.0,
            valid_range: 1.0..=40.0,
            units: Some("dB"),
        },
    },
    InfoRef {
        title: "Hold And Fall Down",
        short_title: "Hold",
        unique_id: "hold_and_fall_down",
        flags: Flags { automatable: true },
        type_specific: TypeSpecificInfoRef::Switch { default: true },
    },
    InfoRef {
        title: "Fall Down Speed",
        short_title: "Fall Speed",
        unique_id: "fall_down_speed",
        flags: Flags { automatable: true },
        type_specific: TypeSpecificInfoRef::Numeric {
            default: 0.3,
            valid_range: 0.0..=1.0,
            units: None,
        },
    },
];

/// Creates [`AudioInput`] processors.
#[derive(Clone, Debug, Default)]
pub struct Component {}

impl ComponentT for Component {
    type Processor<S: LevelSource> = AudioInput<S>;

    fn parameter_infos(&self) -> Vec<parameters::Info> {
        parameters::to_infos(&PARAMETERS)
    }

    fn create_processor<S: LevelSource>(&self, source: S) -> Self::Processor<S> {
        AudioInput::new(source)
    }
}
