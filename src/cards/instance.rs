//! Card instances - one slot of a dealt deck.
//!
//! A `Card` pairs a face (`content_id`) with the key that decides what it
//! matches (`match_key`). Keeping the two apart lets a story pair show two
//! different faces, and lets two decoy pairs show the same face without
//! cross-matching.

use serde::{Deserialize, Serialize};

use super::definition::ContentId;

/// Pairing criterion: two cards match iff their keys are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchKey(pub String);

impl MatchKey {
    /// Key for an identical pair: `same:<id>`.
    #[must_use]
    pub fn same(id: &ContentId) -> Self {
        Self(format!("same:{}", id))
    }

    /// Key for a story pair, named after its subject: `story:<subject>`.
    #[must_use]
    pub fn story(subject: &ContentId) -> Self {
        Self(format!("story:{}", subject))
    }

    /// Key for a decoy pair: `same:<id>:<pair index>`.
    ///
    /// The pair index makes two draws of the same content distinct.
    #[must_use]
    pub fn decoy(id: &ContentId, pair_index: usize) -> Self {
        Self(format!("same:{}:{}", id, pair_index))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// 0-based index into the rendered grid, unique within a deck.
    pub position: usize,

    /// Face shown when flipped.
    pub content_id: ContentId,

    /// Pairing criterion.
    pub match_key: MatchKey,

    /// Face up, either selected or awaiting mismatch resolution.
    pub is_flipped: bool,

    /// Part of a completed pair.
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(position: usize, content_id: ContentId, match_key: MatchKey) -> Self {
        Self {
            position,
            content_id,
            match_key,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Check whether two cards form a pair.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.match_key == other.match_key
    }

    /// Is the face visible (flipped or matched)?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }

    /// Turn face down and clear the matched flag.
    pub fn reset(&mut self) {
        self.is_flipped = false;
        self.is_matched = false;
    }
}
