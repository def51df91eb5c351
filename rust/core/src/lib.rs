//! Code shared between hosts of level followers.
//!
//! This holds an in-memory [`parameters::store::ParameterStore`] and the
//! snapshot format used to save and restore a component's parameters.

pub mod parameters;
