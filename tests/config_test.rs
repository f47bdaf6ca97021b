use std::collections::HashMap;

use tui_rooms::config::{check_display, Config};
use tui_rooms::core::DoorPolicy;
use tui_rooms::types::{MAP_FACTOR, ROOM_COUNT, ROOM_MAX};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_without_environment() {
    let config = Config::from_lookup(|_| None);
    assert_eq!(config.seed, None);
    assert_eq!(config.room_count, ROOM_COUNT);
    assert_eq!(config.room_max, ROOM_MAX);
    assert_eq!(config.map_factor, MAP_FACTOR);
    assert_eq!(config.door_policy, DoorPolicy::AllSides);
    assert_eq!(config.log_path, None);
}

#[test]
fn environment_values_are_read() {
    let config = Config::from_lookup(lookup_from(&[
        ("ROOMS_SEED", "42"),
        ("ROOMS_COUNT", " 7 "),
        ("ROOMS_ROOM_MAX", "9"),
        ("ROOMS_MAP_FACTOR", "3"),
        ("ROOMS_DOORS", "legacy"),
        ("ROOMS_LOG_PATH", "/tmp/rooms.jsonl"),
    ]));

    assert_eq!(config.seed, Some(42));
    assert_eq!(config.room_count, 7);
    assert_eq!(config.room_max, 9);
    assert_eq!(config.map_factor, 3);
    assert_eq!(config.door_policy, DoorPolicy::Legacy);
    assert_eq!(config.log_path.as_deref(), Some("/tmp/rooms.jsonl"));
    assert_eq!(config.resolve_seed(), 42);
}

#[test]
fn flags_override_environment() {
    let mut config = Config::from_lookup(lookup_from(&[
        ("ROOMS_SEED", "42"),
        ("ROOMS_DOORS", "legacy"),
    ]));
    config
        .apply_args(&args(&[
            "--seed", "5", "--rooms", "12", "--map-factor", "4", "--doors", "all", "--log",
            "events.jsonl",
        ]))
        .unwrap();

    assert_eq!(config.seed, Some(5));
    assert_eq!(config.room_count, 12);
    assert_eq!(config.map_factor, 4);
    assert_eq!(config.door_policy, DoorPolicy::AllSides);
    assert_eq!(config.log_path.as_deref(), Some("events.jsonl"));

    let generator = config.generator();
    assert_eq!(generator.count, 12);
    assert_eq!(generator.door_policy, DoorPolicy::AllSides);
}

#[test]
fn invalid_flags_are_errors() {
    let cases: &[&[&str]] = &[
        &["--seed", "minus-one"],
        &["--rooms", "-3"],
        &["--map-factor", "0"],
        &["--doors", "sideways"],
        &["--verbose"],
        &["--log"],
    ];
    for case in cases {
        let mut config = Config::default();
        assert!(config.apply_args(&args(case)).is_err(), "{:?}", case);
    }
}

#[test]
fn door_policy_names() {
    assert_eq!(DoorPolicy::from_str("all"), Some(DoorPolicy::AllSides));
    assert_eq!(DoorPolicy::from_str("legacy"), Some(DoorPolicy::Legacy));
    assert_eq!(DoorPolicy::from_str("none"), None);
    assert_eq!(DoorPolicy::Legacy.as_str(), "legacy");
}

#[test]
fn display_must_fit_status_line() {
    assert!(check_display(1, 2).is_ok());
    let err = check_display(40, 1).unwrap_err();
    assert!(err.to_string().contains("terminal too small"));
}
