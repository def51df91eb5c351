//! Basic abstractions for frame-driven level followers.
//!
//! A level follower reads a decibel level from a [`level::LevelSource`] once
//! per simulation tick, conditions it, and broadcasts a normalized value to
//! any number of [`events::AmplitudeListener`]s.
//!
//! Followers are described by a [`Component`], which knows the
//! [`parameters`] the follower exposes and can create a [`Processor`] that
//! does the actual per-tick work.

pub mod events;
pub mod level;
pub mod parameters;

/// A level follower as seen from the outside.
///
/// [`Component`]s contain information about the parameters of a processor
/// as well as the ability to create a processor reading from a given
/// [`level::LevelSource`].
pub trait Component {
    /// The processor that this component creates.
    type Processor<S: level::LevelSource>: Processor;

    /// Get information about the parameters of this component
    ///
    /// This must return the same value every time it is called.
    fn parameter_infos(&self) -> Vec<parameters::Info> {
        Default::default()
    }

    /// Create the processor that will follow the levels reported by `source`.
    ///
    /// The processor starts with every parameter at its default value.
    fn create_processor<S: level::LevelSource>(&self, source: S) -> Self::Processor<S>;
}

/// A processor that advances once per simulation tick.
pub trait Processor {
    /// Enable or disable processing.
    ///
    /// Processors are created with processing on, matching activation of
    /// the owning component.
    ///
    /// Turning processing off discards all filter state, so that after
    /// toggling on -> off -> on we generate the _exact_ same output as the
    /// first time we were turned on - i.e., this acts as a reset.
    fn set_processing(&mut self, processing: bool);

    /// Apply the current state of the parameters.
    ///
    /// Parameters missing from `parameters` keep their current values.
    /// Changes take effect starting with the next call to `tick`.
    fn handle_parameters<P: parameters::States>(&mut self, parameters: P);

    /// Advance by one tick of `delta_time` seconds and return the output value.
    ///
    /// Non-positive `delta_time` is treated as zero.
    /// While processing is off this does nothing and returns the current output.
    fn tick(&mut self, delta_time: f32) -> f32;
}
