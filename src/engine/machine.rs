//! The gameplay state machine.
//!
//! ## Transitions
//!
//! ```text
//! Idle ──start──▶ Playing ──select (2nd, mismatch)──▶ Evaluating
//!   ▲               │  ▲                                   │
//!   │               │  └──────── resolve_mismatch ─────────┘
//!   │               └──select (last pair)──▶ LevelComplete ──start──▶ Playing
//!   └──────────────────────── reset (from any phase) ──────────────────┘
//! ```
//!
//! The engine never schedules time. A mismatch leaves the board locked
//! until the caller, after whatever display delay it wants, calls
//! [`MatchEngine::resolve_mismatch`].

use im::Vector;
use tracing::{debug, info, trace};

use super::outcome::{IgnoreReason, SelectionOutcome, SelectionRecord};
use super::state::{EnginePhase, MatchState};
use crate::cards::Card;
use crate::core::error::{MatchError, Result};
use crate::deck::Deck;

/// One play session's engine. Owned by the caller; no shared state.
///
/// ## Example
///
/// ```
/// use keepsake_match::cards::{Card, ContentId, MatchKey};
/// use keepsake_match::deck::Deck;
/// use keepsake_match::engine::{MatchEngine, SelectionOutcome};
///
/// let a = ContentId::new("a");
/// let deck = Deck::from_cards(vec![
///     Card::new(0, a.clone(), MatchKey::same(&a)),
///     Card::new(1, a.clone(), MatchKey::same(&a)),
/// ]);
///
/// let mut engine = MatchEngine::new();
/// engine.start(deck).unwrap();
///
/// assert_eq!(engine.select_card(0).unwrap(), SelectionOutcome::AwaitingSecond(0));
/// assert!(matches!(engine.select_card(1).unwrap(), SelectionOutcome::LevelWon { moves: 1, .. }));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchEngine {
    phase: EnginePhase,
    state: MatchState,
    history: Vector<SelectionRecord>,
}

impl MatchEngine {
    /// Create an idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin an attempt with a fresh deck.
    ///
    /// Valid from `Idle` or `LevelComplete`. A running attempt must be
    /// `reset` first.
    pub fn start(&mut self, deck: Deck) -> Result<MatchState> {
        if !matches!(self.phase, EnginePhase::Idle | EnginePhase::LevelComplete) {
            return Err(MatchError::invalid_state(format!(
                "cannot start while {:?}; reset first",
                self.phase
            )));
        }
        if deck.is_empty() || deck.len() % 2 != 0 {
            return Err(MatchError::invalid_level(format!(
                "deck of {} cards does not hold whole pairs",
                deck.len()
            )));
        }

        self.state = MatchState::new(deck.into_cards())?;
        self.history = Vector::new();
        self.phase = EnginePhase::Playing;

        debug!(cards = self.state.deck.len(), pairs = self.state.total_pairs, "attempt started");
        Ok(self.state.clone())
    }

    /// Player selects the card at `position`.
    ///
    /// Locked boards, matched cards and face-up cards are ignored without
    /// error. Selecting before `start`, or a position outside the deck, is
    /// `InvalidState`.
    pub fn select_card(&mut self, position: usize) -> Result<SelectionOutcome> {
        if self.phase == EnginePhase::Idle {
            return Err(MatchError::invalid_state("select_card called before start"));
        }
        let Some(card) = self.state.deck.get(position) else {
            return Err(MatchError::invalid_state(format!(
                "position {} outside deck of {} cards",
                position,
                self.state.deck.len()
            )));
        };

        let ignored = if self.phase == EnginePhase::LevelComplete {
            Some(IgnoreReason::LevelComplete)
        } else if self.state.is_locked {
            Some(IgnoreReason::Locked)
        } else if card.is_matched {
            Some(IgnoreReason::AlreadyMatched)
        } else if card.is_flipped || self.state.selection.contains(&position) {
            Some(IgnoreReason::AlreadyFlipped)
        } else {
            None
        };
        if let Some(reason) = ignored {
            trace!(position, ?reason, "selection ignored");
            return Ok(SelectionOutcome::Ignored(reason));
        }

        self.state.set_flipped(position, true);
        self.state.selection.push(position);

        let outcome = match self.selected_pair() {
            Some(pair) => self.evaluate(pair),
            None => SelectionOutcome::AwaitingSecond(position),
        };

        self.record(position, outcome);
        trace!(position, ?outcome, moves = self.state.move_count, "selection accepted");
        Ok(outcome)
    }

    fn evaluate(&mut self, pair: [usize; 2]) -> SelectionOutcome {
        self.state.move_count += 1;
        self.state.is_locked = true;

        if !self.cards_match(pair) {
            self.phase = EnginePhase::Evaluating;
            return SelectionOutcome::Mismatched(pair);
        }

        for position in pair {
            self.state.set_matched(position);
        }
        self.state.match_count += 1;
        self.state.selection.clear();
        self.state.is_locked = false;

        if self.state.match_count == self.state.total_pairs {
            self.phase = EnginePhase::LevelComplete;
            info!(
                moves = self.state.move_count,
                pairs = self.state.total_pairs,
                "level complete"
            );
            return SelectionOutcome::LevelWon {
                positions: pair,
                moves: self.state.move_count,
            };
        }
        SelectionOutcome::Matched(pair)
    }

    fn selected_pair(&self) -> Option<[usize; 2]> {
        match (self.state.selection.first(), self.state.selection.get(1)) {
            (Some(&a), Some(&b)) => Some([a, b]),
            _ => None,
        }
    }

    fn cards_match(&self, [a, b]: [usize; 2]) -> bool {
        match (self.state.deck.get(a), self.state.deck.get(b)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        }
    }

    fn record(&mut self, position: usize, outcome: SelectionOutcome) {
        self.history.push_back(SelectionRecord {
            sequence: self.history.len(),
            position,
            outcome,
        });
    }

    /// Turn a pending mismatch face down and unlock the board.
    ///
    /// Returns the two positions turned down. Fails with `InvalidState`
    /// unless the last outcome was an unresolved `Mismatched`.
    pub fn resolve_mismatch(&mut self) -> Result<[usize; 2]> {
        if self.phase != EnginePhase::Evaluating {
            return Err(MatchError::invalid_state(format!(
                "no pending mismatch to resolve (phase {:?})",
                self.phase
            )));
        }
        let pair = self.selected_pair().ok_or_else(|| {
            MatchError::invalid_state("pending mismatch without two selected cards")
        })?;

        for position in pair {
            self.state.set_flipped(position, false);
        }
        self.state.selection.clear();
        self.state.is_locked = false;
        self.phase = EnginePhase::Playing;

        trace!(?pair, "mismatch resolved");
        Ok(pair)
    }

    /// Discard the deck and return to `Idle`, whatever is pending.
    pub fn reset(&mut self) {
        debug!(phase = ?self.phase, "engine reset");
        *self = Self::default();
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Current deck; empty while idle.
    #[must_use]
    pub fn current_deck(&self) -> &Vector<Card> {
        &self.state.deck
    }

    /// Card at a position.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.state.deck.get(position)
    }

    /// Positions currently selected, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.state.selection
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    #[must_use]
    pub fn match_count(&self) -> u32 {
        self.state.match_count
    }

    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.state.total_pairs
    }

    #[must_use]
    pub fn remaining_pairs(&self) -> u32 {
        self.state.remaining_pairs()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state.is_locked
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == EnginePhase::LevelComplete
    }

    /// Borrow the full state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// O(1) copy of the full state.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    /// Accepted selections of the current attempt.
    #[must_use]
    pub fn history(&self) -> &Vector<SelectionRecord> {
        &self.history
    }
}
