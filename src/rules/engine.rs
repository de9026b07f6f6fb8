//! Rules engine trait and the standard rule set.
//!
//! The action processor asks a `RulesEngine` three questions:
//! - May this chip be taken now?
//! - Can this player afford this card?
//! - Has chip taking ended the turn?
//!
//! Implementations are read-only: the same inputs always give the same
//! answer and nothing is mutated.

use crate::cards::Card;
use crate::core::action::Action;
use crate::core::color::{Color, TokenBag};
use crate::core::player::Player;
use crate::core::state::GameState;

use super::phase::TokenPhase;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `can_take_token`: judged against this turn's chip counts in `state`
/// - `can_buy`: no partial payment, no substituting one color for another
/// - `turn_complete`: only the chip sub-turn; buying ends a turn separately
pub trait RulesEngine {
    /// Is taking one chip of `color` legal right now?
    fn can_take_token(&self, state: &GameState, color: Color) -> bool;

    /// Can `player` pay the full cost of `card`?
    fn can_buy(&self, player: &Player, card: &Card) -> bool;

    /// Has the chip sub-turn reached a terminal state?
    fn turn_complete(&self, taken: &TokenBag) -> bool;

    // === Convenience Methods ===

    /// Enumerate every legal action for the player to move.
    ///
    /// Chip takes come first in color order, then affordable cards in table
    /// order. Empty before a game has started.
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let Some(player) = state.current_player() else {
            return Vec::new();
        };

        let takes = Color::ALL
            .iter()
            .copied()
            .filter(|&c| self.can_take_token(state, c))
            .map(Action::TakeToken);

        let buys = state
            .cards()
            .iter()
            .filter(|card| self.can_buy(player, card))
            .map(|card| Action::BuyCard(card.id()));

        takes.chain(buys).collect()
    }
}

/// The standard rules: two of one color or three different colors per
/// turn, and cards cost exactly what they say.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRules;

impl RulesEngine for StandardRules {
    fn can_take_token(&self, state: &GameState, color: Color) -> bool {
        let taken = state.taken_this_turn();
        TokenPhase::of(&taken).allows(&taken, color)
    }

    fn can_buy(&self, player: &Player, card: &Card) -> bool {
        player.tokens().covers(&card.cost())
    }

    fn turn_complete(&self, taken: &TokenBag) -> bool {
        TokenPhase::of(taken).is_done()
    }
}
