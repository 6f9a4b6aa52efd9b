//! Dinosaur museum lookups
//!
//! Answers two questions over the museum's dinosaur and room records: which
//! room houses a dinosaur, and which rooms connect to a given room. The
//! lookups borrow caller-owned collections and keep no state between calls.

pub mod constants;
pub mod data;
pub mod lookup;

pub use constants::BROKEN_CONNECTION_SENTINEL;
pub use data::{DataError, Dinosaur, DinosaurList, MuseumData, Room, RoomList};
pub use lookup::{
    ConnectedRooms, LookupError, connected_room_names_by_id, resolve_connected_rooms,
    resolve_dinosaur_room, room_by_dinosaur_name,
};

/// Trait for abstracting where museum records come from
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the dinosaur records
    ///
    /// # Errors
    ///
    /// Returns an error if the dinosaur records cannot be loaded.
    fn load_dinosaurs(&self) -> Result<DinosaurList, Self::Error>;

    /// Load the room records
    ///
    /// # Errors
    ///
    /// Returns an error if the room records cannot be loaded.
    fn load_rooms(&self) -> Result<RoomList, Self::Error>;
}

impl MuseumData {
    /// Load both collections through `loader`
    ///
    /// # Errors
    ///
    /// Returns the loader's error if either collection cannot be loaded.
    pub fn load<L: DataLoader>(loader: &L) -> Result<Self, L::Error> {
        let dinosaurs = loader.load_dinosaurs()?;
        let rooms = loader.load_rooms()?;
        Ok(Self::new(dinosaurs, rooms))
    }
}

/// Loader serving the dataset bundled with this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataLoader;

impl DataLoader for StaticDataLoader {
    type Error = DataError;

    fn load_dinosaurs(&self) -> Result<DinosaurList, Self::Error> {
        MuseumData::load_from_static().map(|data| data.dinosaurs)
    }

    fn load_rooms(&self) -> Result<RoomList, Self::Error> {
        MuseumData::load_from_static().map(|data| data.rooms)
    }
}
