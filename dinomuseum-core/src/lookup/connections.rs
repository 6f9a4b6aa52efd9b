use super::{ConnectedRooms, LookupError};
use crate::constants::BROKEN_CONNECTION_SENTINEL;
use crate::data::Room;

/// Names of every room whose connection list contains `room_id`, in input
/// order. Duplicate connection entries do not duplicate a room.
///
/// Any room carrying the broken-reference sentinel fails the whole lookup,
/// whatever `room_id` was asked for.
///
/// # Errors
///
/// [`LookupError::InvalidConnectionReference`] when the sentinel appears in
/// any connection list, [`LookupError::RoomNotFound`] when no room connects
/// to `room_id`.
pub fn resolve_connected_rooms<'r>(
    rooms: &'r [Room],
    room_id: &str,
) -> Result<Vec<&'r str>, LookupError> {
    // Checked before room_id is considered.
    if let Some(broken) = rooms
        .iter()
        .find(|room| room.has_connection(BROKEN_CONNECTION_SENTINEL))
    {
        log::warn!(
            "room {} ({}) has a broken connection reference",
            broken.room_id,
            broken.name
        );
        return Err(LookupError::InvalidConnectionReference {
            room_id: BROKEN_CONNECTION_SENTINEL.to_string(),
        });
    }

    let names: Vec<&str> = rooms
        .iter()
        .filter(|room| room.has_connection(room_id))
        .map(|room| room.name.as_str())
        .collect();

    if names.is_empty() {
        log::debug!("no room connects to {room_id:?}");
        return Err(LookupError::RoomNotFound {
            room_id: room_id.to_string(),
        });
    }
    Ok(names)
}

/// Connecting room names for `room_id`, or the failure's message.
#[must_use]
pub fn connected_room_names_by_id(rooms: &[Room], room_id: &str) -> ConnectedRooms {
    resolve_connected_rooms(rooms, room_id).into()
}
