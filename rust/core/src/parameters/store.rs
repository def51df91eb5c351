//! An in-memory parameter store.

use std::{collections::HashMap, rc};

use follower_component::parameters::store::{Listener, SetError, Store};
use follower_component::parameters::{
    hash_id, IdHash, Info, InternalValue, States, TypeSpecificInfo, Value,
};

use super::Snapshot;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
struct Entry {
    info: Info,
    value: InternalValue,
}

/// Holds the value of every parameter of a component, validating each change.
///
/// The store implements [`States`], so it can be handed straight to
/// [`follower_component::Processor::handle_parameters`].
pub struct ParameterStore {
    entries: Vec<Entry>,
    index: HashMap<IdHash, usize>,
    listener: Option<rc::Weak<dyn Listener>>,
}

impl std::fmt::Debug for ParameterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

fn default_internal(info: &Info) -> InternalValue {
    match &info.type_specific {
        TypeSpecificInfo::Enum { default, .. } => InternalValue::Enum(*default),
        TypeSpecificInfo::Numeric { default, .. } => InternalValue::Numeric(*default),
        TypeSpecificInfo::Switch { default } => InternalValue::Switch(*default),
    }
}

fn to_internal(info: &Info, value: &Value) -> Result<InternalValue, SetError> {
    match (&info.type_specific, value) {
        (TypeSpecificInfo::Numeric { valid_range, .. }, Value::Numeric(v)) => {
            if valid_range.contains(v) {
                Ok(InternalValue::Numeric(*v))
            } else {
                Err(SetError::InvalidValue)
            }
        }
        (TypeSpecificInfo::Enum { values, .. }, Value::Enum(v)) => values
            .iter()
            .position(|candidate| candidate == v)
            .and_then(|index| u32::try_from(index).ok())
            .map(InternalValue::Enum)
            .ok_or(SetError::InvalidValue),
        (TypeSpecificInfo::Switch { .. }, Value::Switch(v)) => Ok(InternalValue::Switch(*v)),
        _ => Err(SetError::WrongType),
    }
}

fn to_value(info: &Info, value: InternalValue) -> Option<Value> {
    match (&info.type_specific, value) {
        (TypeSpecificInfo::Numeric { .. }, InternalValue::Numeric(v)) => Some(Value::Numeric(v)),
        (TypeSpecificInfo::Enum { values, .. }, InternalValue::Enum(v)) => {
            values.get(v as usize).cloned().map(Value::Enum)
        }
        (TypeSpecificInfo::Switch { .. }, InternalValue::Switch(v)) => Some(Value::Switch(v)),
        _ => None,
    }
}

impl ParameterStore {
    /// Create a store holding the default value of every parameter in `infos`.
    ///
    /// If two parameters share an id, the later one wins.
    #[must_use]
    pub fn new(infos: impl IntoIterator<Item = Info>) -> Self {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        for info in infos {
            let entry = Entry {
                value: default_internal(&info),
                info,
            };
            let hash = hash_id(&entry.info.unique_id);
            if let Some(existing) = index.get(&hash) {
                log::warn!("duplicate parameter id `{}`", entry.info.unique_id);
                entries[*existing] = entry;
            } else {
                index.insert(hash, entries.len());
                entries.push(entry);
            }
        }
        Self {
            entries,
            index,
            listener: None,
        }
    }

    fn entry(&self, unique_id: &str) -> Option<&Entry> {
        self.index.get(&hash_id(unique_id)).map(|i| &self.entries[*i])
    }

    /// The current value of a parameter, `None` if there is no such parameter.
    ///
    /// This is the same as [`Store::get`], usable without naming the trait.
    #[must_use]
    pub fn value(&self, unique_id: &str) -> Option<Value> {
        self.entry(unique_id)
            .and_then(|entry| to_value(&entry.info, entry.value))
    }

    /// The metadata of every parameter, in the order given to [`ParameterStore::new`].
    pub fn infos(&self) -> impl Iterator<Item = &Info> + '_ {
        self.entries.iter().map(|entry| &entry.info)
    }

    /// Take a snapshot of every parameter's current value.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self
                .entries
                .iter()
                .filter_map(|entry| {
                    to_value(&entry.info, entry.value).map(|v| (entry.info.unique_id.clone(), v))
                })
                .collect(),
        }
    }

    /// Apply every value in `snapshot`.
    ///
    /// The snapshot is validated in full before anything changes, so on error
    /// the store is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the first [`SetError`] encountered.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SetError> {
        let mut updates = Vec::with_capacity(snapshot.values.len());
        for (id, value) in &snapshot.values {
            let index = *self.index.get(&hash_id(id)).ok_or(SetError::NotFound)?;
            updates.push((index, to_internal(&self.entries[index].info, value)?));
        }
        for (index, value) in updates {
            self.entries[index].value = value;
        }
        for (id, value) in &snapshot.values {
            self.notify(id, value);
        }
        Ok(())
    }

    fn notify(&self, unique_id: &str, value: &Value) {
        if let Some(listener) = self.listener.as_ref().and_then(rc::Weak::upgrade) {
            listener.parameter_changed(unique_id, value);
        }
    }
}

impl States for ParameterStore {
    fn get_by_hash(&self, id_hash: IdHash) -> Option<InternalValue> {
        self.index.get(&id_hash).map(|i| self.entries[*i].value)
    }
}

impl Store for ParameterStore {
    fn get(&self, unique_id: &str) -> Option<Value> {
        self.value(unique_id)
    }

    fn get_info(&self, unique_id: &str) -> Option<Info> {
        self.entry(unique_id).map(|entry| entry.info.clone())
    }

    fn set(&mut self, unique_id: &str, value: Value) -> Result<(), SetError> {
        let index = *self
            .index
            .get(&hash_id(unique_id))
            .ok_or(SetError::NotFound)?;
        let entry = &mut self.entries[index];
        match to_internal(&entry.info, &value) {
            Ok(internal) => entry.value = internal,
            Err(e) => {
                log::debug!("rejected {value:?} for `{unique_id}`: {e}");
                return Err(e);
            }
        }
        self.notify(unique_id, &value);
        Ok(())
    }

    fn set_listener(&mut self, listener: rc::Weak<dyn Listener>) {
        self.listener = Some(listener);
    }
}
