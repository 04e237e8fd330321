//! Game configuration loaded from JSON.
//!
//! The presentation layer ships its content registry, story assignments
//! and level list as data. `GameData` is the serialized form; converting
//! it into a [`GameLibrary`] validates everything once at startup so
//! later lookups and deck builds only fail on genuine misuse.
//!
//! ```
//! use keepsake_match::core::{GameData, GameRng};
//! use keepsake_match::levels::LevelId;
//!
//! let json = r#"{
//!     "content": [
//!         {"id": "raven", "label": "Raven", "image": "assets/characters/raven.png"},
//!         {"id": "willow", "label": "Willow", "image": "assets/characters/willow.png"}
//!     ],
//!     "levels": [
//!         {"id": 1, "name": "Cozy Start", "columns": 2, "rows": 2,
//!          "mode": "identical", "pool": ["raven", "willow"]}
//!     ]
//! }"#;
//!
//! let library = GameData::from_json(json).unwrap().into_library().unwrap();
//! let deck = library.build_deck(LevelId::new(1), &mut GameRng::new(7)).unwrap();
//! assert_eq!(deck.len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::Result;
use super::rng::RandomSource;
use crate::cards::{ContentDescriptor, ContentRegistry, CounterpartMap};
use crate::deck::{build_deck, Deck};
use crate::levels::{LevelCatalog, LevelId, LevelSpec};

/// Serialized game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    /// Every displayable face.
    #[serde(default)]
    pub content: Vec<ContentDescriptor>,

    /// Subject → counterpart assignments for story levels.
    #[serde(default)]
    pub counterparts: CounterpartMap,

    /// Levels, in any order.
    #[serde(default)]
    pub levels: Vec<LevelSpec>,
}

impl GameData {
    /// Parse configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and index the configuration.
    ///
    /// ## Errors
    ///
    /// - `DuplicateContentId` for a repeated content id
    /// - `InvalidLevel` for a bad grid or repeated level id
    /// - `UnknownContentId` for pool or counterpart ids missing from content
    pub fn into_library(self) -> Result<GameLibrary> {
        let registry = ContentRegistry::from_descriptors(self.content)?;
        registry.require_all(self.counterparts.referenced_ids())?;

        let catalog = LevelCatalog::new(self.levels)?;
        for level in catalog.iter() {
            registry.require_all(&level.content_pool)?;
        }

        debug!(
            content = registry.len(),
            counterparts = self.counterparts.len(),
            levels = catalog.len(),
            "game data loaded"
        );

        Ok(GameLibrary {
            catalog,
            registry,
            counterparts: self.counterparts,
        })
    }
}

/// Validated configuration: catalog, registry and counterparts together.
#[derive(Clone, Debug, Default)]
pub struct GameLibrary {
    pub catalog: LevelCatalog,
    pub registry: ContentRegistry,
    pub counterparts: CounterpartMap,
}

impl GameLibrary {
    /// Look up a level and deal a deck for it.
    pub fn build_deck<R: RandomSource + ?Sized>(&self, level: LevelId, rng: &mut R) -> Result<Deck> {
        let spec = self.catalog.get_level(level)?;
        build_deck(spec, &self.registry, &self.counterparts, rng)
    }
}
