//! Parameter state that lives outside of a processor.

use std::collections::HashMap;

use follower_component::parameters::Value;

pub mod serialization;

pub mod store;

/// This represents the current state of all parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// The value of each parameter, keyed by unique id.
    pub values: HashMap<String, Value>,
}
