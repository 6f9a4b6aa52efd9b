//! Fixed values shared by the lookups and the bundled dataset.

/// Connection id the museum data uses for a known-broken room reference.
pub const BROKEN_CONNECTION_SENTINEL: &str = "incorrect-id";

/// Bundled dinosaur records, relative to the crate root.
pub const DINOSAURS_ASSET: &str = "assets/data/dinosaurs.json";
/// Bundled room records, relative to the crate root.
pub const ROOMS_ASSET: &str = "assets/data/rooms.json";
