//! Ordered level catalog.

use tracing::debug;

use super::spec::{LevelId, LevelSpec};
use crate::core::error::{MatchError, Result};

/// Immutable, id-ordered list of levels.
///
/// Construction validates every grid and pool and rejects duplicate ids, so
/// every level handed out by the catalog holds a whole number of pairs
/// drawn from distinct content.
///
/// ```
/// use keepsake_match::levels::{LevelCatalog, LevelSpec, LevelId, PairingMode};
///
/// let catalog = LevelCatalog::new(vec![
///     LevelSpec::new(LevelId::new(2), "Second", 4, 3, PairingMode::Identical),
///     LevelSpec::new(LevelId::new(1), "First", 2, 2, PairingMode::Identical),
/// ])
/// .unwrap();
///
/// let names: Vec<_> = catalog.list_levels().iter().map(|l| l.display_name.as_str()).collect();
/// assert_eq!(names, vec!["First", "Second"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LevelCatalog {
    levels: Vec<LevelSpec>,
}

impl LevelCatalog {
    /// Build a catalog, ordering levels by id.
    pub fn new(mut levels: Vec<LevelSpec>) -> Result<Self> {
        levels.sort_by_key(|l| l.id);

        for level in &levels {
            level.validate()?;
        }
        if let Some(dup) = levels.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(MatchError::invalid_level(format!(
                "duplicate level id {}",
                dup[0].id
            )));
        }

        debug!(levels = levels.len(), "level catalog loaded");
        Ok(Self { levels })
    }

    /// All levels in catalog order.
    #[must_use]
    pub fn list_levels(&self) -> &[LevelSpec] {
        &self.levels
    }

    /// Look up a level by id.
    pub fn get_level(&self, id: LevelId) -> Result<&LevelSpec> {
        self.levels
            .binary_search_by_key(&id, |l| l.id)
            .map(|idx| &self.levels[idx])
            .map_err(|_| MatchError::NotFound(id))
    }

    /// The level after `id` in catalog order, if any.
    #[must_use]
    pub fn next_level(&self, id: LevelId) -> Option<&LevelSpec> {
        self.levels.iter().find(|l| l.id > id)
    }

    /// Iterate over levels.
    pub fn iter(&self) -> impl Iterator<Item = &LevelSpec> {
        self.levels.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::PairingMode;

    fn level(id: u32, columns: u32, rows: u32) -> LevelSpec {
        LevelSpec::new(LevelId::new(id), format!("Level {}", id), columns, rows, PairingMode::Identical)
    }

    #[test]
    fn test_list_is_id_ordered() {
        let catalog = LevelCatalog::new(vec![level(3, 4, 4), level(1, 4, 2), level(2, 4, 3)]).unwrap();

        let ids: Vec<_> = catalog.list_levels().iter().map(|l| l.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_get_level() {
        let catalog = LevelCatalog::new(vec![level(1, 4, 2), level(5, 5, 4)]).unwrap();

        assert_eq!(catalog.get_level(LevelId::new(5)).unwrap().slot_count(), 20);
        assert_eq!(
            catalog.get_level(LevelId::new(2)).unwrap_err(),
            MatchError::NotFound(LevelId::new(2))
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = LevelCatalog::new(vec![level(1, 2, 2), level(1, 4, 2)]);
        assert!(matches!(result, Err(MatchError::InvalidLevel { .. })));
    }

    #[test]
    fn test_odd_grid_rejected() {
        let result = LevelCatalog::new(vec![level(1, 2, 2), level(2, 3, 3)]);
        assert!(matches!(result, Err(MatchError::InvalidLevel { .. })));
    }

    #[test]
    fn test_repeated_pool_id_rejected() {
        let echo = level(2, 2, 2).with_pool(["a", "a", "b"]);
        let result = LevelCatalog::new(vec![level(1, 2, 2), echo]);
        assert!(matches!(result, Err(MatchError::InvalidLevel { .. })));
    }

    #[test]
    fn test_next_level() {
        let catalog = LevelCatalog::new(vec![level(1, 2, 2), level(4, 4, 4)]).unwrap();

        assert_eq!(catalog.next_level(LevelId::new(1)).map(|l| l.id), Some(LevelId::new(4)));
        assert!(catalog.next_level(LevelId::new(4)).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = LevelCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get_level(LevelId::new(1)).is_err());
    }
}
