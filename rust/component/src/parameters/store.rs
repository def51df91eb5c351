use std::rc;

use super::Value;

/// Receives notifications when a value in a [`Store`] changes.
pub trait Listener {
    /// Called after `unique_id` was set to `value`.
    fn parameter_changed(&self, unique_id: &str, value: &Value);
}

/// Reasons a [`Store::set`] call can be rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetError {
    /// No parameter with the given id exists.
    #[error("no such parameter")]
    NotFound,

    /// The value does not match the parameter's type.
    #[error("value has the wrong type for this parameter")]
    WrongType,

    /// The value is outside the parameter's valid range or values.
    #[error("value is not valid for this parameter")]
    InvalidValue,
}

/// Holds the current value of every parameter of a component.
pub trait Store {
    /// Get the current value of a parameter, `None` if there is no such parameter.
    fn get(&self, unique_id: &str) -> Option<Value>;

    /// Get the metadata of a parameter, `None` if there is no such parameter.
    fn get_info(&self, unique_id: &str) -> Option<super::Info>;

    /// Set a parameter value
    ///
    /// # Errors
    ///
    ///  - Returns `NotFound` if the no parameter with the given `unique_id` is in the store.
    ///  - Returns `WrongType` if the parameter with the given `unique_id` does not have a type that matches `value`.
    ///  - Returns `InvalidValue` if the provided `value` is out of the valid range for the parameter with the given `unique_id`.
    fn set(&mut self, unique_id: &str, value: Value) -> Result<(), SetError>;

    /// Note that there can only be one listener at a time!
    fn set_listener(&mut self, listener: rc::Weak<dyn Listener>);
}
