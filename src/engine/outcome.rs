//! Selection outcomes and history records.

use serde::{Deserialize, Serialize};

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Two cards are awaiting mismatch resolution.
    Locked,
    /// The card is already part of a pair.
    AlreadyMatched,
    /// The card is already face up (including a repeat of the first pick).
    AlreadyFlipped,
    /// Every pair has been found.
    LevelComplete,
}

/// Result of one `select_card` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// No-op; the state is unchanged.
    Ignored(IgnoreReason),
    /// First card of a pair is face up.
    AwaitingSecond(usize),
    /// The two cards matched and stay face up.
    Matched([usize; 2]),
    /// The two cards differ. The board stays locked until
    /// `resolve_mismatch` is called.
    Mismatched([usize; 2]),
    /// The final pair matched.
    LevelWon {
        positions: [usize; 2],
        moves: u32,
    },
}

impl SelectionOutcome {
    /// Did the call change state?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }

    /// Positions evaluated as a pair, if this outcome completed a move.
    #[must_use]
    pub fn pair(&self) -> Option<[usize; 2]> {
        match *self {
            Self::Matched(p) | Self::Mismatched(p) => Some(p),
            Self::LevelWon { positions, .. } => Some(positions),
            Self::Ignored(_) | Self::AwaitingSecond(_) => None,
        }
    }
}

/// One accepted selection, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRecord {
    /// 0-based index among accepted selections of this attempt.
    pub sequence: usize,
    pub position: usize,
    pub outcome: SelectionOutcome,
}
