//! Subject → counterpart pairing for story levels.
//!
//! In a story level a character ("subject") is matched to the item assigned
//! to it ("counterpart"), so the two cards of a pair show different faces.
//! The map is ordered: the deck builder emits story pairs in map order,
//! which keeps decks reproducible for a given seed.

use serde::{Deserialize, Serialize};

use super::definition::ContentId;

/// One subject/counterpart assignment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counterpart {
    pub subject: ContentId,
    pub counterpart: ContentId,
}

/// Ordered subject → counterpart map.
///
/// ```
/// use keepsake_match::cards::{CounterpartMap, ContentId};
///
/// let map = CounterpartMap::new()
///     .with("raven", "security-blanket")
///     .with("willow", "feather");
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.counterpart_of(&ContentId::new("willow")), Some(&ContentId::new("feather")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterpartMap {
    entries: Vec<Counterpart>,
}

impl CounterpartMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an assignment (builder pattern).
    #[must_use]
    pub fn with(mut self, subject: impl Into<ContentId>, counterpart: impl Into<ContentId>) -> Self {
        self.insert(subject, counterpart);
        self
    }

    /// Assign a counterpart to a subject.
    ///
    /// Re-assigning an existing subject keeps its original position.
    pub fn insert(&mut self, subject: impl Into<ContentId>, counterpart: impl Into<ContentId>) {
        let subject = subject.into();
        let counterpart = counterpart.into();

        match self.entries.iter_mut().find(|e| e.subject == subject) {
            Some(entry) => entry.counterpart = counterpart,
            None => self.entries.push(Counterpart { subject, counterpart }),
        }
    }

    /// Look up a subject's counterpart.
    #[must_use]
    pub fn counterpart_of(&self, subject: &ContentId) -> Option<&ContentId> {
        self.entries
            .iter()
            .find(|e| &e.subject == subject)
            .map(|e| &e.counterpart)
    }

    /// Iterate over `(subject, counterpart)` in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContentId, &ContentId)> {
        self.entries.iter().map(|e| (&e.subject, &e.counterpart))
    }

    /// Every id the map references, subjects and counterparts.
    pub fn referenced_ids(&self) -> impl Iterator<Item = &ContentId> {
        self.entries
            .iter()
            .flat_map(|e| [&e.subject, &e.counterpart])
    }

    /// Number of natural story pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
