//! Deck building: level + registry + counterparts → shuffled cards.
//!
//! All randomness flows through a caller-supplied [`RandomSource`], so a
//! seeded or scripted source yields an exact, reproducible deck.
//!
//! [`RandomSource`]: crate::core::RandomSource

pub mod builder;

pub use builder::{build_deck, fisher_yates, Deck};
