//! Match state: the deck plus selection, lock and counters.
//!
//! Uses `im` persistent vectors so [`MatchState`] clones in O(1); the
//! engine hands out snapshots freely for rendering and comparisons.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::error::{MatchError, Result};

/// Lifecycle of one engine instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnginePhase {
    /// No active deck.
    #[default]
    Idle,
    /// Deck active, zero or one card selected.
    Playing,
    /// Two mismatched cards selected, awaiting `resolve_mismatch`.
    Evaluating,
    /// Every pair found. Terminal for this attempt.
    LevelComplete,
}

/// Observable state of an attempt.
///
/// ## Invariants
///
/// - `match_count <= total_pairs`
/// - `is_locked` iff two cards are selected and awaiting evaluation
/// - `selection.len()` is 0, 1 or 2
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchState {
    pub deck: Vector<Card>,
    pub selection: SmallVec<[usize; 2]>,
    pub is_locked: bool,
    pub move_count: u32,
    pub match_count: u32,
    pub total_pairs: u32,
}

impl MatchState {
    /// Fresh state for a deck, with every card face down.
    ///
    /// Fails with `InvalidLevel` if the pair count does not fit the `u32`
    /// counters.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let deck: Vector<Card> = cards
            .into_iter()
            .map(|mut card| {
                card.reset();
                card
            })
            .collect();
        let total_pairs = pair_total(deck.len())?;

        Ok(Self {
            deck,
            selection: SmallVec::new(),
            is_locked: false,
            move_count: 0,
            match_count: 0,
            total_pairs,
        })
    }

    /// Pairs still to find.
    #[must_use]
    pub fn remaining_pairs(&self) -> u32 {
        self.total_pairs - self.match_count
    }

    /// Every pair found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_pairs > 0 && self.match_count == self.total_pairs
    }

    pub(crate) fn set_flipped(&mut self, position: usize, flipped: bool) {
        if let Some(card) = self.deck.get_mut(position) {
            card.is_flipped = flipped;
        }
    }

    pub(crate) fn set_matched(&mut self, position: usize) {
        if let Some(card) = self.deck.get_mut(position) {
            card.is_matched = true;
        }
    }
}

fn pair_total(cards: usize) -> Result<u32> {
    u32::try_from(cards / 2).map_err(|_| {
        MatchError::invalid_level(format!("deck of {} cards exceeds the pair counter", cards))
    })
}
