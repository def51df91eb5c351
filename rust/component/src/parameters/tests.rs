use super::{
    hash_id, to_infos, IdHash, Info, InfoRef, InternalValue, States, StatesMap, StaticInfoRef,
    TypeSpecificInfo, TypeSpecificInfoRef, Value,
};

struct MyState {}
impl States for MyState {
    fn get_by_hash(&self, param_hash: IdHash) -> Option<InternalValue> {
        if param_hash == hash_id("numeric") {
            Some(InternalValue::Numeric(0.5))
        } else if param_hash == hash_id("enum") {
            Some(InternalValue::Enum(2))
        } else if param_hash == hash_id("switch") {
            Some(InternalValue::Switch(true))
        } else {
            None
        }
    }
}

static INFOS: [StaticInfoRef; 3] = [
    InfoRef {
        title: "Numeric",
        short_title: "Num",
        unique_id: "numeric",
        flags: super::Flags { automatable: true },
        type_specific: TypeSpecificInfoRef::Numeric {
            default: 6.0,
            valid_range: -10.0..=40.0,
            units: Some("dB"),
        },
    },
    InfoRef {
        title: "Enum",
        short_title: "Enum",
        unique_id: "enum",
        flags: super::Flags { automatable: true },
        type_specific: TypeSpecificInfoRef::Enum {
            default: 1,
            values: &["Peak", "RMS"],
        },
    },
    InfoRef {
        title: "Switch",
        short_title: "Switch",
        unique_id: "switch",
        flags: super::Flags { automatable: false },
        type_specific: TypeSpecificInfoRef::Switch { default: true },
    },
];

#[test]
fn parameter_states_default_functions() {
    let state = MyState {};
    assert_eq!(state.get_numeric("numeric"), Some(0.5));
    assert_eq!(state.get_numeric("enum"), None);
    assert_eq!(state.get_enum("numeric"), None);
    assert_eq!(state.get_enum("enum"), Some(2));
    assert_eq!(state.get_switch("switch"), Some(true));
    assert_eq!(state.get_switch("numeric"), None);
    assert_eq!(state.get("missing"), None);
}

#[test]
fn states_through_reference() {
    let state = MyState {};
    let by_ref = &state;
    assert_eq!(by_ref.get_enum("enum"), Some(2));
}

#[test]
fn hash_is_stable_and_positive() {
    assert_eq!(hash_id("gain"), hash_id("gain"));
    assert_eq!(hash_id("gain").internal_hash() & 0x8000_0000, 0);
}

#[test]
fn to_infos_copies_metadata() {
    let infos = to_infos(&INFOS);
    assert_eq!(infos.len(), 3);
    assert_eq!(
        infos[1].type_specific,
        TypeSpecificInfo::Enum {
            default: 1,
            values: vec!["Peak".to_string(), "RMS".to_string()],
        }
    );
    assert!(!infos[2].flags.automatable);
}

#[test]
fn default_values() {
    let infos: Vec<Info> = to_infos(&INFOS);
    assert_eq!(
        infos
            .iter()
            .map(|info| info.type_specific.default_value())
            .collect::<Vec<_>>(),
        vec![
            Some(Value::Numeric(6.0)),
            Some(Value::Enum("RMS".to_string())),
            Some(Value::Switch(true)),
        ]
    );
}

#[test]
fn out_of_range_enum_default_has_no_value() {
    let info = TypeSpecificInfo::Enum {
        default: 5,
        values: vec!["a".to_string(), "b".to_string()],
    };
    assert_eq!(info.default_value(), None);
}

#[test]
fn states_map_defaults_and_overrides() {
    let mut map = StatesMap::from_defaults(INFOS.iter());
    assert_eq!(map.get_numeric("numeric"), Some(6.0));
    assert_eq!(map.get_enum("enum"), Some(1));
    assert_eq!(map.get_switch("switch"), Some(true));

    map.set("numeric", InternalValue::Numeric(12.0));
    assert_eq!(map.get_numeric("numeric"), Some(12.0));
}

#[test]
fn states_map_from_iter() {
    let map: StatesMap = [("switch", InternalValue::Switch(false))]
        .into_iter()
        .collect();
    assert_eq!(map.get_switch("switch"), Some(false));
    assert_eq!(map.get_numeric("numeric"), None);
}
