//! Core engine types: colors, chip bags, players, actions, state.
//!
//! Everything here is plain data. Rules live in `rules`; orchestration
//! lives in `game`.

pub mod color;
pub mod player;
pub mod action;
pub mod state;

pub use color::{Color, TokenBag, COLOR_COUNT};
pub use player::{Player, PlayerId, PLAYER_COUNT};
pub use action::Action;
pub use state::GameState;
