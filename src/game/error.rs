//! Reasons an action is rejected.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::color::{Color, TokenBag};
use crate::rules::TokenPhase;

/// Why an action failed validation.
///
/// Rejection is an expected outcome. Nothing was changed; the message is
/// meant for the player.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no game in progress")]
    NoGame,

    #[error("cannot take a {color} chip this turn")]
    IllegalTokenTake { color: Color, phase: TokenPhase },

    #[error("{0} is not on the table")]
    UnknownCard(CardId),

    #[error("not enough chips to buy {card}")]
    Unaffordable {
        card: CardId,
        cost: TokenBag,
        held: TokenBag,
    },
}
