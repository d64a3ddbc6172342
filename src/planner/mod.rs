//! Editable carpool state and its persisted snapshot.

pub mod roster;
pub mod snapshot;
pub mod trip;

pub use roster::Roster;
pub use snapshot::{Snapshot, SNAPSHOT_KEY};
pub use trip::TripPlanner;
