use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DINOSAURS_ASSET, ROOMS_ASSET};
use crate::lookup::{self, ConnectedRooms};

/// A dinosaur on display (or in storage) at the museum.
///
/// Only the fields the lookups need are modelled; descriptive extras in the
/// museum data (`pronunciation`, `diet`, ...) are ignored on parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dinosaur {
    pub dinosaur_id: String,
    pub name: String,
}

impl Dinosaur {
    pub fn new(dinosaur_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            dinosaur_id: dinosaur_id.into(),
            name: name.into(),
        }
    }
}

/// A museum room, the dinosaurs it houses and the room ids it opens onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(alias = "id")]
    pub room_id: String,
    pub name: String,
    #[serde(default)]
    pub dinosaurs: Vec<String>,
    #[serde(default)]
    pub connects_to: Vec<String>,
}

impl Room {
    pub fn new(room_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            name: name.into(),
            dinosaurs: Vec::new(),
            connects_to: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dinosaurs<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dinosaurs.extend(ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_connections<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connects_to.extend(ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn houses(&self, dinosaur_id: &str) -> bool {
        self.dinosaurs.iter().any(|id| id == dinosaur_id)
    }

    #[must_use]
    pub fn has_connection(&self, room_id: &str) -> bool {
        self.connects_to.iter().any(|id| id == room_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DinosaurList(pub Vec<Dinosaur>);

impl DinosaurList {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Load dinosaur records from a JSON array
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an array of dinosaur records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Dinosaur] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dinosaur> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a DinosaurList {
    type Item = &'a Dinosaur;
    type IntoIter = std::slice::Iter<'a, Dinosaur>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RoomList(pub Vec<Room>);

impl RoomList {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Load room records from a JSON array
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an array of room records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn get_by_id(&self, room_id: &str) -> Option<&Room> {
        self.0.iter().find(|r| r.room_id == room_id)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Room] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoomList {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Errors raised while parsing museum data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse dinosaur data from {source_name}: {source}")]
    Dinosaurs {
        source_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse room data from {source_name}: {source}")]
    Rooms {
        source_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Dinosaur and room collections loaded together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MuseumData {
    pub dinosaurs: DinosaurList,
    pub rooms: RoomList,
}

impl MuseumData {
    #[must_use]
    pub const fn new(dinosaurs: DinosaurList, rooms: RoomList) -> Self {
        Self { dinosaurs, rooms }
    }

    /// Parse both collections from their JSON documents
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] naming the collection that failed to parse.
    pub fn from_json(dinosaurs_json: &str, rooms_json: &str) -> Result<Self, DataError> {
        Self::parse("input", dinosaurs_json, "input", rooms_json)
    }

    /// Load the dataset bundled with the crate
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if a bundled asset does not parse.
    pub fn load_from_static() -> Result<Self, DataError> {
        Self::parse(
            DINOSAURS_ASSET,
            include_str!("../assets/data/dinosaurs.json"),
            ROOMS_ASSET,
            include_str!("../assets/data/rooms.json"),
        )
    }

    fn parse(
        dinosaurs_name: &'static str,
        dinosaurs_json: &str,
        rooms_name: &'static str,
        rooms_json: &str,
    ) -> Result<Self, DataError> {
        let dinosaurs =
            DinosaurList::from_json(dinosaurs_json).map_err(|source| DataError::Dinosaurs {
                source_name: dinosaurs_name,
                source,
            })?;
        let rooms = RoomList::from_json(rooms_json).map_err(|source| DataError::Rooms {
            source_name: rooms_name,
            source,
        })?;
        log::debug!(
            "loaded museum data: {} dinosaurs, {} rooms",
            dinosaurs.len(),
            rooms.len()
        );
        Ok(Self { dinosaurs, rooms })
    }

    /// Name of the room housing `dinosaur_name`, or the lookup's error message.
    #[must_use]
    pub fn room_by_dinosaur_name(&self, dinosaur_name: &str) -> String {
        lookup::room_by_dinosaur_name(
            self.dinosaurs.as_slice(),
            self.rooms.as_slice(),
            dinosaur_name,
        )
    }

    /// Names of the rooms connecting to `room_id`, or the lookup's error message.
    #[must_use]
    pub fn connected_room_names_by_id(&self, room_id: &str) -> ConnectedRooms {
        lookup::connected_room_names_by_id(self.rooms.as_slice(), room_id)
    }
}
