//! Core engine types: errors, randomness and configuration.
//!
//! This module holds the pieces every other module leans on. Nothing here
//! knows about pairing modes or the selection cycle.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameData, GameLibrary};
pub use error::{MatchError, Result};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
