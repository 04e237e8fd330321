//! Level specifications.
//!
//! A `LevelSpec` is static data: grid size, pairing mode, the content pool
//! and the card back to render. Levels are loaded once and never mutated.

use serde::{Deserialize, Serialize};

use crate::cards::ContentId;
use crate::core::error::{MatchError, Result};

/// Unique, ordered level identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(pub u32);

impl LevelId {
    /// Create a new level ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

/// How the two cards of a pair relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingMode {
    /// Two cards of the same content.
    Identical,
    /// A subject matched to its designated counterpart.
    #[serde(alias = "story")]
    StoryMatch,
    /// Story pairs topped up with identical decoy pairs.
    #[serde(alias = "story+decoys")]
    StoryWithDecoys,
}

impl PairingMode {
    /// Does this mode consume the counterpart map?
    #[must_use]
    pub const fn uses_counterparts(self) -> bool {
        matches!(self, Self::StoryMatch | Self::StoryWithDecoys)
    }
}

impl std::fmt::Display for PairingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Identical => "identical",
            Self::StoryMatch => "story_match",
            Self::StoryWithDecoys => "story_with_decoys",
        };
        f.write_str(name)
    }
}

fn default_back_image() -> String {
    LevelSpec::DEFAULT_BACK_IMAGE.to_string()
}

/// Static definition of one level.
///
/// ## Example
///
/// ```
/// use keepsake_match::levels::{LevelSpec, LevelId, PairingMode};
///
/// let level = LevelSpec::new(LevelId::new(1), "Cozy Start", 4, 2, PairingMode::Identical)
///     .with_pool(["raven", "willow", "salem", "bo"]);
///
/// assert_eq!(level.slot_count(), 8);
/// assert_eq!(level.pair_count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub id: LevelId,

    /// Name for level choosers.
    #[serde(rename = "name")]
    pub display_name: String,

    #[serde(alias = "cols")]
    pub columns: u32,

    pub rows: u32,

    pub mode: PairingMode,

    /// Content ids to deal from. Decoy pool in `StoryWithDecoys`; unused
    /// by `StoryMatch`.
    #[serde(rename = "pool", default)]
    pub content_pool: Vec<ContentId>,

    /// Card back image reference.
    #[serde(rename = "back", default = "default_back_image")]
    pub back_image: String,
}

impl LevelSpec {
    /// Back image used when a level does not name one.
    pub const DEFAULT_BACK_IMAGE: &'static str = "assets/backs/raven-seal.png";

    /// Create a new level with an empty pool and the default back.
    #[must_use]
    pub fn new(
        id: LevelId,
        display_name: impl Into<String>,
        columns: u32,
        rows: u32,
        mode: PairingMode,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            columns,
            rows,
            mode,
            content_pool: Vec::new(),
            back_image: default_back_image(),
        }
    }

    /// Set the content pool.
    #[must_use]
    pub fn with_pool<I, S>(mut self, pool: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ContentId>,
    {
        self.content_pool = pool.into_iter().map(Into::into).collect();
        self
    }

    /// Set the card back image.
    #[must_use]
    pub fn with_back_image(mut self, back: impl Into<String>) -> Self {
        self.back_image = back.into();
        self
    }

    /// Number of grid slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Number of pairs the grid holds.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.slot_count() / 2
    }

    /// Check the grid holds a positive, whole number of pairs.
    pub fn validate_grid(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(MatchError::invalid_level(format!(
                "{} has an empty {}x{} grid",
                self.id, self.columns, self.rows
            )));
        }
        if self.slot_count() % 2 != 0 {
            return Err(MatchError::invalid_level(format!(
                "{} grid {}x{} has an odd number of slots",
                self.id, self.columns, self.rows
            )));
        }
        Ok(())
    }

    /// Check the content pool names each id at most once.
    ///
    /// A repeated id would let a truncated permutation deal the same
    /// identical pair twice.
    pub fn validate_pool(&self) -> Result<()> {
        let mut seen = std::collections::BTreeSet::new();
        if let Some(dup) = self.content_pool.iter().find(|id| !seen.insert(*id)) {
            return Err(MatchError::invalid_level(format!(
                "{} pool repeats content id {}",
                self.id, dup
            )));
        }
        Ok(())
    }

    /// Grid and pool checks together.
    pub fn validate(&self) -> Result<()> {
        self.validate_grid()?;
        self.validate_pool()
    }
}
