//! Saving and restoring the state of a set of parameters.
//!
//! Saved snapshots are backwards compatible but _not_ forwards compatible:
//! a newer component can load the state of an older one, but not the other
//! way round.
//!
//! The following changes to a component's parameters need no migration:
//!
//! - Adding a parameter (the new parameter takes its default value).
//! - Removing a parameter (its saved value is ignored).
//! - Changing the default value of a parameter.
//! - Re-ordering enum values, or adding new enum values, since enums are
//!   saved by name rather than by index.
//! - Widening the range of a numeric parameter.
//!
//! Changing the type of a parameter makes older snapshots unreadable.

use std::collections::HashMap;

use follower_component::parameters::{Info, TypeSpecificInfo, Value as ParameterValue};
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Value {
    Numeric(f32),
    Enum(String),
    Switch(bool),
}

/// The serializable form of a [`super::Snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    values: HashMap<String, Value>,
}

/// The metadata needed to write a parameter.
///
/// Note in particular this does not contain the range or default
/// of the parameter - this ensures that increasing the range or
/// changing the default value of a parameter does not require
/// a migration!
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteInfo {
    /// A numeric parameter.
    Numeric,
    /// An enum parameter.
    Enum,
    /// A switch parameter.
    Switch,
}

impl From<&TypeSpecificInfo> for WriteInfo {
    fn from(info: &TypeSpecificInfo) -> Self {
        match info {
            TypeSpecificInfo::Numeric { .. } => Self::Numeric,
            TypeSpecificInfo::Enum { .. } => Self::Enum,
            TypeSpecificInfo::Switch { .. } => Self::Switch,
        }
    }
}

/// The snapshot does not match the parameters it is being read against.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapshotCorruptionError {
    /// Changing the type of a parameter requires a migration, so it's an error
    /// if we try to load a snapshot that has a different type for a parameter.
    #[error("parameter `{0}` was saved with a different type")]
    IncompatibleType(String),

    /// A parameter's own metadata is inconsistent (e.g. an enum default out of range).
    #[error("parameter `{0}` has invalid metadata")]
    InvalidInfo(String),
}

/// Reasons a saved snapshot can't be read.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeserializationError {
    /// The snapshot was saved with a newer version of the component, so it's not
    /// compatible with this version.
    #[error("snapshot was saved by a newer version")]
    VersionTooNew,

    /// The snapshot is inconsistent with this component's parameters.
    #[error("snapshot is corrupted: {0}")]
    Corrupted(#[from] SnapshotCorruptionError),
}

/// Reasons raw bytes can't be read as a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The bytes are not a valid encoded snapshot.
    #[error("malformed snapshot data: {0}")]
    Malformed(#[from] rmp_serde::decode::Error),

    /// The snapshot was decoded but doesn't fit the parameters.
    #[error(transparent)]
    Deserialization(#[from] DeserializationError),
}

impl super::Snapshot {
    /// Convert a snapshot to a serialized snapshot.
    ///
    /// Returns `None` if there is an inconsistency between the snapshot and the
    /// provided info - a value with no info, or a value of the wrong type.
    pub fn into_serialize(self, lookup: impl Fn(&str) -> Option<WriteInfo>) -> Option<Snapshot> {
        let mut values = HashMap::with_capacity(self.values.len());
        for (id, value) in self.values {
            let serialized_value = match (lookup(id.as_str())?, value) {
                (WriteInfo::Numeric, ParameterValue::Numeric(value)) => Value::Numeric(value),
                (WriteInfo::Enum, ParameterValue::Enum(value)) => Value::Enum(value),
                (WriteInfo::Switch, ParameterValue::Switch(value)) => Value::Switch(value),
                _ => return None,
            };
            values.insert(id, serialized_value);
        }
        Some(Snapshot { values })
    }

    /// Convert a snapshot to a serialized snapshot, looking parameters up in `infos`.
    pub fn into_serialize_with_infos(self, infos: &[Info]) -> Option<Snapshot> {
        self.into_serialize(|id| {
            infos
                .iter()
                .find(|info| info.unique_id == id)
                .map(|info| (&info.type_specific).into())
        })
    }
}

impl Snapshot {
    /// Convert a serialized snapshot back to a snapshot of every parameter in `infos`.
    ///
    /// Parameters missing from the serialized snapshot take their default value,
    /// and saved values for parameters not in `infos` are dropped.
    ///
    /// # Errors
    ///
    /// Will return `DeserializationError::VersionTooNew` if the serialized snapshot has
    /// values that are out of range or unknown enum values, or
    /// `DeserializationError::Corrupted` if any parameters were the wrong type.
    pub fn into_snapshot(
        mut self,
        infos: &[Info],
    ) -> Result<super::Snapshot, DeserializationError> {
        let mut values = HashMap::with_capacity(infos.len());
        for info in infos {
            let id = info.unique_id.as_str();
            let value = match (&info.type_specific, self.values.remove(id)) {
                (TypeSpecificInfo::Numeric { valid_range, .. }, Some(Value::Numeric(value))) => {
                    if valid_range.contains(&value) {
                        ParameterValue::Numeric(value)
                    } else {
                        log::warn!("saved value {value} for `{id}` is outside {valid_range:?}");
                        return Err(DeserializationError::VersionTooNew);
                    }
                }
                (TypeSpecificInfo::Enum { values: choices, .. }, Some(Value::Enum(value))) => {
                    if choices.contains(&value) {
                        ParameterValue::Enum(value)
                    } else {
                        log::warn!("saved value `{value}` for `{id}` is not a known choice");
                        return Err(DeserializationError::VersionTooNew);
                    }
                }
                (TypeSpecificInfo::Switch { .. }, Some(Value::Switch(value))) => {
                    ParameterValue::Switch(value)
                }
                (type_specific, None) => type_specific.default_value().ok_or_else(|| {
                    SnapshotCorruptionError::InvalidInfo(id.to_string())
                })?,
                // Note that changing parameter types requires a migration, so
                // if the type in the snapshot doesn't match the type in the info,
                // it's invalid.
                _ => {
                    return Err(SnapshotCorruptionError::IncompatibleType(id.to_string()).into());
                }
            };

            values.insert(id.to_owned(), value);
        }

        if !self.values.is_empty() {
            log::debug!(
                "ignoring {} saved value(s) for parameters that no longer exist",
                self.values.len()
            );
        }

        Ok(super::Snapshot { values })
    }
}

/// Encode a serialized snapshot as `MessagePack` bytes.
///
/// # Errors
///
/// Fails only if the underlying serializer fails, which does not happen
/// when writing to memory.
pub fn encode(snapshot: &Snapshot) -> Result<Vec<u8>, rmp_serde::encode::Error> {
    let mut ret = Vec::with_capacity(128);
    snapshot.serialize(&mut rmp_serde::Serializer::new(&mut ret).with_struct_map())?;
    Ok(ret)
}

/// Decode bytes written by [`encode`] and read them against `infos`.
///
/// # Errors
///
/// Returns `DecodeError::Malformed` if `bytes` are not an encoded snapshot, or
/// `DecodeError::Deserialization` if the snapshot doesn't fit `infos`.
pub fn decode(bytes: &[u8], infos: &[Info]) -> Result<super::Snapshot, DecodeError> {
    let snapshot: Snapshot = rmp_serde::from_read(bytes)?;
    Ok(snapshot.into_snapshot(infos)?)
}
