//! # keepsake-match
//!
//! The engine behind a matching-pair memory game.
//!
//! ## Design Principles
//!
//! 1. **Pure State Transitions**: No timers, no rendering, no I/O. The
//!    presentation layer calls in and renders what comes back.
//!
//! 2. **Injectable Randomness**: Every random choice goes through
//!    `RandomSource`, so a seed (or a script) reproduces a deck exactly.
//!
//! 3. **Explicit Ownership**: Each attempt is a `MatchEngine` value owned
//!    by the caller. Two games never share state.
//!
//! ## Control Flow
//!
//! ```text
//! LevelCatalog::list_levels ─▶ player picks ─▶ build_deck ─▶ MatchEngine::start
//!                                                               │
//!                  presentation ◀── SelectionOutcome ◀── select_card / resolve_mismatch
//! ```
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, JSON configuration
//! - `cards`: Content descriptors, registry, counterparts, card instances
//! - `levels`: Level specifications and the catalog
//! - `deck`: Deck building for each pairing mode
//! - `engine`: The selection state machine

pub mod core;
pub mod cards;
pub mod levels;
pub mod deck;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    GameData, GameLibrary,
    GameRng, GameRngState, RandomSource, ScriptedRng,
    MatchError, Result,
};

pub use crate::cards::{
    Card, ContentDescriptor, ContentId, ContentRegistry, Counterpart, CounterpartMap, MatchKey,
};

pub use crate::levels::{LevelCatalog, LevelId, LevelSpec, PairingMode};

pub use crate::deck::{build_deck, fisher_yates, Deck};

pub use crate::engine::{
    EnginePhase, IgnoreReason, MatchEngine, MatchState, SelectionOutcome, SelectionRecord,
};
