//! Level catalog: static level specifications and id lookup.
//!
//! Pure data with no dependencies beyond content ids. The presentation
//! layer lists levels to fill a chooser and looks one up when the player
//! picks it.

pub mod catalog;
pub mod spec;

pub use catalog::LevelCatalog;
pub use spec::{LevelId, LevelSpec, PairingMode};
