//! Deck builder for the three pairing modes.
//!
//! ## Pipeline
//!
//! 1. Validate the grid, the pool and every referenced content id
//! 2. Build the pair list for the level's mode
//! 3. Flatten pairs to cards and Fisher-Yates shuffle the whole sequence
//! 4. Assign `position = index`
//!
//! ## Story repetition
//!
//! `StoryMatch` repeats its base pair list cyclically and truncates to the
//! slot count, so a grid larger than the natural story pairs deals some
//! keys to four (or more) cards. The cut always lands between pairs, but
//! decks report odd key counts via [`Deck::split_keys`] rather than
//! repairing them; a deck assembled with [`Deck::from_cards`] may carry one.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::cards::{Card, ContentId, ContentRegistry, CounterpartMap, MatchKey};
use crate::core::error::{MatchError, Result};
use crate::core::rng::RandomSource;
use crate::levels::{LevelSpec, PairingMode};

/// A face and its pairing key, before a position is assigned.
type Slot = (ContentId, MatchKey);

/// Uniform in-place Fisher-Yates shuffle.
///
/// Walks `i` from the last index down to 1, swapping with an index drawn
/// from `0..=i`.
pub fn fisher_yates<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

/// A dealt deck: cards in grid order with `position == index`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Assemble a deck from existing cards.
    ///
    /// Positions are renumbered to match order and all flags are cleared.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards = cards
            .into_iter()
            .enumerate()
            .map(|(position, mut card)| {
                card.position = position;
                card.reset();
                card
            })
            .collect();
        Self { cards }
    }

    fn from_slots(slots: Vec<Slot>) -> Self {
        let cards = slots
            .into_iter()
            .enumerate()
            .map(|(position, (content_id, match_key))| Card::new(position, content_id, match_key))
            .collect();
        Self { cards }
    }

    /// Cards in grid order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Occurrences of each match key.
    #[must_use]
    pub fn key_counts(&self) -> BTreeMap<&MatchKey, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(&card.match_key).or_insert(0) += 1;
        }
        counts
    }

    /// Keys held by an odd number of cards, i.e. pairs cut by truncation.
    #[must_use]
    pub fn split_keys(&self) -> Vec<MatchKey> {
        self.key_counts()
            .into_iter()
            .filter(|(_, count)| count % 2 != 0)
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Can every card be matched?
    #[must_use]
    pub fn is_winnable(&self) -> bool {
        self.split_keys().is_empty()
    }
}

/// Build a shuffled deck for a level.
///
/// ## Errors
///
/// - `InvalidLevel` for an empty or odd grid, or a pool repeating an id
/// - `UnknownContentId` if the pool (or, in story modes, the counterpart
///   map) references content missing from `registry`
/// - `InsufficientPool` if the mode cannot fill the grid
pub fn build_deck<R: RandomSource + ?Sized>(
    level: &LevelSpec,
    registry: &ContentRegistry,
    counterparts: &CounterpartMap,
    rng: &mut R,
) -> Result<Deck> {
    level.validate()?;
    registry.require_all(&level.content_pool)?;
    if level.mode.uses_counterparts() {
        registry.require_all(counterparts.referenced_ids())?;
    }

    let mut slots = match level.mode {
        PairingMode::Identical => identical_slots(level, rng)?,
        PairingMode::StoryMatch => story_slots(level, counterparts)?,
        PairingMode::StoryWithDecoys => story_with_decoy_slots(level, counterparts, rng)?,
    };
    fisher_yates(&mut slots, rng);

    let deck = Deck::from_slots(slots);
    let split = deck.split_keys();
    debug!(
        level = %level.id,
        mode = %level.mode,
        cards = deck.len(),
        split_pairs = split.len(),
        "deck built"
    );
    if !split.is_empty() {
        warn!(level = %level.id, ?split, "deck has unpaired cards; level cannot be completed");
    }

    Ok(deck)
}

/// Pick `pair_count` distinct pool entries via a truncated permutation.
fn identical_slots<R: RandomSource + ?Sized>(level: &LevelSpec, rng: &mut R) -> Result<Vec<Slot>> {
    let pair_count = level.pair_count();
    if level.content_pool.len() < pair_count {
        return Err(MatchError::InsufficientPool {
            needed: pair_count,
            available: level.content_pool.len(),
        });
    }

    let mut pool = level.content_pool.clone();
    fisher_yates(&mut pool, rng);
    pool.truncate(pair_count);

    Ok(pool
        .into_iter()
        .flat_map(|id| {
            let key = MatchKey::same(&id);
            [(id.clone(), key.clone()), (id, key)]
        })
        .collect())
}

fn story_pairs(counterparts: &CounterpartMap) -> Vec<[Slot; 2]> {
    counterparts
        .iter()
        .map(|(subject, counterpart)| {
            let key = MatchKey::story(subject);
            [(subject.clone(), key.clone()), (counterpart.clone(), key)]
        })
        .collect()
}

/// Cycle the base story list until it covers the grid, then cut to size.
fn story_slots(level: &LevelSpec, counterparts: &CounterpartMap) -> Result<Vec<Slot>> {
    if counterparts.is_empty() {
        return Err(MatchError::InsufficientPool {
            needed: level.pair_count(),
            available: 0,
        });
    }

    let base: Vec<Slot> = story_pairs(counterparts).into_iter().flatten().collect();
    Ok(base.iter().cycle().take(level.slot_count()).cloned().collect())
}

/// Story pairs first, then decoys drawn with replacement from the pool.
fn story_with_decoy_slots<R: RandomSource + ?Sized>(
    level: &LevelSpec,
    counterparts: &CounterpartMap,
    rng: &mut R,
) -> Result<Vec<Slot>> {
    let pair_count = level.pair_count();
    let mut pairs = story_pairs(counterparts);

    if pairs.len() < pair_count && level.content_pool.is_empty() {
        return Err(MatchError::InsufficientPool {
            needed: pair_count - pairs.len(),
            available: 0,
        });
    }

    while pairs.len() < pair_count {
        let id = &level.content_pool[rng.next_below(level.content_pool.len())];
        let key = MatchKey::decoy(id, pairs.len());
        pairs.push([(id.clone(), key.clone()), (id.clone(), key)]);
    }
    pairs.truncate(pair_count);

    Ok(pairs.into_iter().flatten().collect())
}
