//! Card system: content descriptors, registry, counterparts and instances.
//!
//! ## Key Types
//!
//! - `ContentId`: Identifier for a displayable face
//! - `ContentDescriptor`: Label and image for a face
//! - `ContentRegistry`: Descriptor lookup
//! - `CounterpartMap`: Subject → counterpart assignments for story levels
//! - `MatchKey`: Pairing criterion, decoupled from the face
//! - `Card`: One dealt slot with its flip/match flags

pub mod counterparts;
pub mod definition;
pub mod instance;
pub mod registry;

pub use counterparts::{Counterpart, CounterpartMap};
pub use definition::{ContentDescriptor, ContentId};
pub use instance::{Card, MatchKey};
pub use registry::ContentRegistry;
