//! Content descriptors - static display data for a card face.
//!
//! A `ContentDescriptor` says what a face looks like (label, image). It says
//! nothing about pairing: the same content can be a subject in one level,
//! a counterpart in another and a decoy in a third.

use serde::{Deserialize, Serialize};

/// Identifier for a displayable character or item.
///
/// Content ids are the strings used by the asset registry, e.g. `"raven"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub String);

impl ContentId {
    /// Create a new content id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display metadata for one piece of content.
///
/// ## Example
///
/// ```
/// use keepsake_match::cards::ContentDescriptor;
///
/// let raven = ContentDescriptor::new("raven", "Raven", "assets/characters/raven.png");
/// assert_eq!(raven.id.as_str(), "raven");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDescriptor {
    /// Registry key.
    pub id: ContentId,

    /// Human-readable label.
    #[serde(alias = "name")]
    pub label: String,

    /// Image reference, opaque to the engine.
    #[serde(alias = "img", alias = "src")]
    pub image: String,
}

impl ContentDescriptor {
    /// Create a new descriptor.
    #[must_use]
    pub fn new(id: impl Into<ContentId>, label: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            image: image.into(),
        }
    }
}
