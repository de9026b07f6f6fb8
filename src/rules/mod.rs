//! Rules: what may be done, and when a turn is over.
//!
//! `RulesEngine` is the seam the action processor calls through.
//! `StandardRules` is the only rule set shipped; `TokenPhase` spells out the
//! chip sub-turn state machine it is built on.
//!
//! Nothing in this module mutates game state.

pub mod engine;
pub mod phase;

pub use engine::{RulesEngine, StandardRules};
pub use phase::{DoneReason, TokenPhase, MAX_DISTINCT_COLORS, MAX_SAME_COLOR};
