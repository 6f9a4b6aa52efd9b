use super::LookupError;
use crate::data::{Dinosaur, Room};

/// Find the name of the room housing the dinosaur called `dinosaur_name`.
///
/// Names match exactly and case-sensitively. When several dinosaurs share
/// the name only the first one is looked up, and the first room listing its
/// id wins.
///
/// # Errors
///
/// [`LookupError::DinosaurNotFound`] when no dinosaur has that name,
/// [`LookupError::DinosaurNotHoused`] when no room lists its id.
pub fn resolve_dinosaur_room<'r>(
    dinosaurs: &[Dinosaur],
    rooms: &'r [Room],
    dinosaur_name: &str,
) -> Result<&'r str, LookupError> {
    let Some(dinosaur) = dinosaurs.iter().find(|d| d.name == dinosaur_name) else {
        log::debug!("no dinosaur named {dinosaur_name:?}");
        return Err(LookupError::DinosaurNotFound {
            name: dinosaur_name.to_string(),
        });
    };

    rooms
        .iter()
        .find(|room| room.houses(&dinosaur.dinosaur_id))
        .map(|room| room.name.as_str())
        .ok_or_else(|| {
            log::debug!(
                "dinosaur {dinosaur_name:?} ({}) is not housed in any room",
                dinosaur.dinosaur_id
            );
            LookupError::DinosaurNotHoused {
                name: dinosaur_name.to_string(),
            }
        })
}

/// Room name for `dinosaur_name`, or the failure's message as the result.
#[must_use]
pub fn room_by_dinosaur_name(dinosaurs: &[Dinosaur], rooms: &[Room], dinosaur_name: &str) -> String {
    match resolve_dinosaur_room(dinosaurs, rooms, dinosaur_name) {
        Ok(name) => name.to_string(),
        Err(err) => err.to_string(),
    }
}
