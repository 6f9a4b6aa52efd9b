use std::collections::HashSet;

use dinomuseum_core::{BROKEN_CONNECTION_SENTINEL, DinosaurList, RoomList};
use serde_json::Value;

#[test]
fn bundled_dinosaur_ids_are_unique() {
    let dinosaurs = DinosaurList::from_json(include_str!("../assets/data/dinosaurs.json")).unwrap();
    let ids: HashSet<&str> = dinosaurs.iter().map(|d| d.dinosaur_id.as_str()).collect();
    assert_eq!(ids.len(), dinosaurs.len());
}

#[test]
fn bundled_rooms_are_well_formed() {
    let rooms = RoomList::from_json(include_str!("../assets/data/rooms.json")).unwrap();
    let ids: HashSet<&str> = rooms.iter().map(|r| r.room_id.as_str()).collect();
    assert_eq!(ids.len(), rooms.len(), "duplicate room ids");

    for room in &rooms {
        assert!(
            !room.has_connection(BROKEN_CONNECTION_SENTINEL),
            "{} carries the broken reference",
            room.name
        );
        for target in &room.connects_to {
            assert!(ids.contains(target.as_str()), "{} -> {target}", room.name);
        }
    }
}

#[test]
fn room_records_keep_camel_case_on_output() {
    let rooms = RoomList::from_json(include_str!("../assets/data/rooms.json")).unwrap();
    let value = serde_json::to_value(&rooms).unwrap();
    let Value::Array(entries) = value else {
        panic!("room list should serialize as an array");
    };
    let first = entries[0].as_object().unwrap();
    assert!(first.contains_key("roomId"));
    assert!(first.contains_key("connectsTo"));
    assert!(!first.contains_key("requiresTicket"));
}
