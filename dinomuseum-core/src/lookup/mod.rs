//! Read-only lookups over borrowed museum collections.
//!
//! Each lookup comes in two forms: a typed `resolve_*` function returning
//! [`LookupError`] on failure, and a boundary function that renders the
//! failure as its literal message so callers get a plain string back.

mod connections;
mod dinosaur_room;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use connections::{connected_room_names_by_id, resolve_connected_rooms};
pub use dinosaur_room::{resolve_dinosaur_room, room_by_dinosaur_name};

/// Reasons a single lookup can fail. The `Display` text is the message
/// callers of the boundary functions receive verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Dinosaur with name '{name}' cannot be found.")]
    DinosaurNotFound { name: String },
    #[error("Dinosaur with name '{name}' cannot be found in any rooms.")]
    DinosaurNotHoused { name: String },
    #[error("Room with ID of '{room_id}' could not be found.")]
    InvalidConnectionReference { room_id: String },
    #[error("Room with ID of '{room_id}' could not be found.")]
    RoomNotFound { room_id: String },
}

/// Outcome of [`connected_room_names_by_id`]: either the connecting room
/// names or an error message. Serializes as `string[]` or `string`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConnectedRooms {
    Names(Vec<String>),
    Message(String),
}

impl ConnectedRooms {
    #[must_use]
    pub fn names(&self) -> Option<&[String]> {
        match self {
            Self::Names(names) => Some(names),
            Self::Message(_) => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Names(_) => None,
            Self::Message(message) => Some(message),
        }
    }
}

impl From<Result<Vec<&str>, LookupError>> for ConnectedRooms {
    fn from(result: Result<Vec<&str>, LookupError>) -> Self {
        match result {
            Ok(names) => Self::Names(names.into_iter().map(str::to_owned).collect()),
            Err(err) => Self::Message(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_match_museum_wording() {
        let cases = [
            (
                LookupError::DinosaurNotFound {
                    name: "Pterodactyl".into(),
                },
                "Dinosaur with name 'Pterodactyl' cannot be found.",
            ),
            (
                LookupError::DinosaurNotHoused {
                    name: "Stegosaurus".into(),
                },
                "Dinosaur with name 'Stegosaurus' cannot be found in any rooms.",
            ),
            (
                LookupError::InvalidConnectionReference {
                    room_id: "incorrect-id".into(),
                },
                "Room with ID of 'incorrect-id' could not be found.",
            ),
            (
                LookupError::RoomNotFound {
                    room_id: "nope".into(),
                },
                "Room with ID of 'nope' could not be found.",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn connected_rooms_serializes_untagged() {
        let names = ConnectedRooms::Names(vec!["Ticket Center".into()]);
        assert_eq!(serde_json::to_string(&names).unwrap(), r#"["Ticket Center"]"#);

        let message = ConnectedRooms::Message("Room with ID of 'x' could not be found.".into());
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            r#""Room with ID of 'x' could not be found.""#
        );
        assert_eq!(message.names(), None);
        assert_eq!(
            message.message(),
            Some("Room with ID of 'x' could not be found.")
        );
    }
}
