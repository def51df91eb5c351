use std::{cell::RefCell, rc::Rc};

use follower_component::parameters::store::{Listener, SetError, Store};
use follower_component::parameters::{
    to_infos, Flags, InfoRef, States, StaticInfoRef, TypeSpecificInfoRef, Value,
};

use super::ParameterStore;
use crate::parameters::Snapshot;

static INFOS: [StaticInfoRef; 3] = [
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
        title: "Amplitude Type",
        short_title: "Amplitude",
        unique_id: "amplitude_type",
        flags: Flags { automatable: true },
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
];

fn store() -> ParameterStore {
    ParameterStore::new(to_infos(&INFOS))
}

#[derive(Default)]
struct RecordingListener {
    changes: RefCell<Vec<(String, Value)>>,
}

impl Listener for RecordingListener {
    fn parameter_changed(&self, unique_id: &str, value: &Value) {
        self.changes
            .borrow_mut()
            .push((unique_id.to_string(), value.clone()));
    }
}

#[test]
fn starts_at_defaults() {
    let store = store();
    assert_eq!(store.value("dynamic_range"), Some(Value::Numeric(12.0)));
    assert_eq!(
        store.value("amplitude_type"),
        Some(Value::Enum("RMS".to_string()))
    );
    assert_eq!(store.value("auto_gain"), Some(Value::Switch(true)));
    assert_eq!(store.value("missing"), None);
    assert_eq!(store.infos().count(), 3);
}

#[test]
fn set_validates() {
    let mut store = store();
    assert_eq!(
        store.set("missing", Value::Numeric(1.0)),
        Err(SetError::NotFound)
    );
    assert_eq!(
        store.set("dynamic_range", Value::Switch(true)),
        Err(SetError::WrongType)
    );
    assert_eq!(
        store.set("dynamic_range", Value::Numeric(0.0)),
        Err(SetError::InvalidValue)
    );
    assert_eq!(
        store.set("amplitude_type", Value::Enum("Loudness".to_string())),
        Err(SetError::InvalidValue)
    );
    assert_eq!(store.value("dynamic_range"), Some(Value::Numeric(12.0)));
}

#[test]
fn set_is_visible_through_states() {
    let mut store = store();
    store.set("dynamic_range", Value::Numeric(24.0)).unwrap();
    store
        .set("amplitude_type", Value::Enum("Peak".to_string()))
        .unwrap();
    store.set("auto_gain", Value::Switch(false)).unwrap();

    assert_eq!(store.get_numeric("dynamic_range"), Some(24.0));
    assert_eq!(store.get_enum("amplitude_type"), Some(0));
    assert_eq!(store.get_switch("auto_gain"), Some(false));
}

#[test]
fn listener_hears_changes() {
    let mut store = store();
    let listener = Rc::new(RecordingListener::default());
    let weak: Rc<dyn Listener> = listener.clone();
    store.set_listener(Rc::downgrade(&weak));

    store.set("auto_gain", Value::Switch(false)).unwrap();
    let _ = store.set("auto_gain", Value::Numeric(1.0));

    assert_eq!(
        *listener.changes.borrow(),
        vec![("auto_gain".to_string(), Value::Switch(false))]
    );
}

#[test]
fn snapshot_round_trip() {
    let mut store = store();
    store.set("dynamic_range", Value::Numeric(30.0)).unwrap();
    let snapshot = store.snapshot();

    let mut other = self::store();
    other.apply_snapshot(&snapshot).unwrap();
    assert_eq!(other.value("dynamic_range"), Some(Value::Numeric(30.0)));
    assert_eq!(other.snapshot(), snapshot);
}

#[test]
fn bad_snapshot_changes_nothing() {
    let mut store = store();
    let snapshot = Snapshot {
        values: [
            ("dynamic_range".to_string(), Value::Numeric(20.0)),
            ("auto_gain".to_string(), Value::Numeric(1.0)),
        ]
        .into(),
    };
    assert_eq!(store.apply_snapshot(&snapshot), Err(SetError::WrongType));
    assert_eq!(store.value("dynamic_range"), Some(Value::Numeric(12.0)));
}
