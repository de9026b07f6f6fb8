//! Action requests.
//!
//! An `Action` is a transient request built by a presentation layer and
//! consumed by the action processor. It names cards only by id; it is never
//! stored in game state.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::cards::CardId;

/// A single player request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take one chip of the given color.
    TakeToken(Color),
    /// Buy the card in play with this id.
    BuyCard(CardId),
}

impl Action {
    /// True if applying this action always ends the turn.
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, Action::BuyCard(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::TakeToken(color) => write!(f, "take {color}"),
            Action::BuyCard(id) => write!(f, "buy {id}"),
        }
    }
}
