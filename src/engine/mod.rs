//! Match engine: the two-card selection cycle.
//!
//! ## Key Types
//!
//! - `MatchEngine`: owns one attempt's deck and drives every transition
//! - `MatchState`: deck, selection, lock and counters (O(1) snapshots)
//! - `EnginePhase`: Idle / Playing / Evaluating / LevelComplete
//! - `SelectionOutcome`: what one `select_card` call did
//!
//! ## Mismatch Protocol
//!
//! A mismatch returns `Mismatched` and leaves the board locked. The
//! presentation layer shows both faces for as long as it likes, then calls
//! `resolve_mismatch`. Any scheduler works: a real timer, a test clock, or
//! an immediate call.

pub mod machine;
pub mod outcome;
pub mod state;

pub use machine::MatchEngine;
pub use outcome::{IgnoreReason, SelectionOutcome, SelectionRecord};
pub use state::{EnginePhase, MatchState};
