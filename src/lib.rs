//! # chip-market
//!
//! Turn and action rule engine for a two-player chip collection card game.
//! Players take colored chips or spend them on cards worth points,
//! alternating turns.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: `ActionProcessor` owns the live `GameState` and is
//!    the only thing that mutates it. Presentation layers build `Action`s
//!    and read state back.
//!
//! 2. **Validate, Then Apply**: `validate` never mutates and `execute` is
//!    infallible, so an action is applied fully or not at all.
//!
//! 3. **Recomputed Phase**: the chip sub-turn state machine (`TokenPhase`)
//!    is derived from this turn's counts on every call, never stored.
//!
//! ## Modules
//!
//! - `core`: Colors, chip bags, players, actions, state
//! - `cards`: Card data and the starting table
//! - `rules`: `RulesEngine` trait, standard rules, the sub-turn phases
//! - `game`: The action processor
//! - `persistence`: Text save format and file store

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::{Action, Color, GameState, Player, PlayerId, TokenBag, COLOR_COUNT, PLAYER_COUNT};

pub use crate::cards::{starting_table, Card, CardId, STARTING_TABLE_SIZE};

pub use crate::rules::{DoneReason, RulesEngine, StandardRules, TokenPhase};

pub use crate::game::{ActionError, ActionProcessor, Outcome};

pub use crate::persistence::PersistenceError;
