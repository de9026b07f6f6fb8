//! Game orchestration.
//!
//! `ActionProcessor` ties state, rules and persistence together: it checks
//! each request against a `RulesEngine`, applies it, and decides when the
//! turn passes.

mod error;
mod processor;

pub use error::ActionError;
pub use processor::{ActionProcessor, Outcome};
