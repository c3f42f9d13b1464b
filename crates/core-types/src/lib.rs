pub mod enums;
pub mod error;
pub mod season;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::EventType;
pub use error::CoreError;
pub use season::SeasonWindowPolicy;
pub use structs::{DateWindow, HomeRunEvent, PlateAppearanceRecord, PlayerId, RosterEntry, Team};
