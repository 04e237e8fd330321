//! Content registry for descriptor lookup.
//!
//! The `ContentRegistry` stores every displayable face known to the game.
//! Levels and counterpart maps reference content by id only; the deck
//! builder checks those ids against the registry before building.

use rustc_hash::FxHashMap;

use super::definition::{ContentDescriptor, ContentId};
use crate::core::error::{MatchError, Result};

/// Registry of content descriptors.
///
/// Lookup is by hash; iteration follows registration order.
///
/// ## Example
///
/// ```
/// use keepsake_match::cards::{ContentRegistry, ContentDescriptor, ContentId};
///
/// let mut registry = ContentRegistry::new();
/// registry
///     .register(ContentDescriptor::new("raven", "Raven", "assets/characters/raven.png"))
///     .unwrap();
///
/// let found = registry.get(&ContentId::new("raven")).unwrap();
/// assert_eq!(found.label, "Raven");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    entries: FxHashMap<ContentId, ContentDescriptor>,
    order: Vec<ContentId>,
}

impl ContentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from descriptors, rejecting duplicate ids.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ContentDescriptor>) -> Result<Self> {
        let mut registry = Self::new();
        for desc in descriptors {
            registry.register(desc)?;
        }
        Ok(registry)
    }

    /// Register a descriptor.
    ///
    /// Fails with `DuplicateContentId` if the id is already present.
    pub fn register(&mut self, desc: ContentDescriptor) -> Result<()> {
        if self.entries.contains_key(&desc.id) {
            return Err(MatchError::DuplicateContentId(desc.id));
        }
        self.order.push(desc.id.clone());
        self.entries.insert(desc.id.clone(), desc);
        Ok(())
    }

    /// Get a descriptor by id.
    #[must_use]
    pub fn get(&self, id: &ContentId) -> Option<&ContentDescriptor> {
        self.entries.get(id)
    }

    /// Get a descriptor, failing with `UnknownContentId` on a miss.
    pub fn require(&self, id: &ContentId) -> Result<&ContentDescriptor> {
        self.entries
            .get(id)
            .ok_or_else(|| MatchError::UnknownContentId(id.clone()))
    }

    /// Check that every id is registered.
    ///
    /// Reports the first unknown id in iteration order.
    pub fn require_all<'a>(&self, ids: impl IntoIterator<Item = &'a ContentId>) -> Result<()> {
        for id in ids {
            self.require(id)?;
        }
        Ok(())
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: &ContentId) -> bool {
        self.entries.contains_key(id)
    }

    /// Get the number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentDescriptor> {
        self.order.iter().filter_map(move |id| self.entries.get(id))
    }
}
