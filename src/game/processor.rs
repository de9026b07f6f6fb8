//! Action processor.
//!
//! Owns the live `GameState` and drives every change to it. A presentation
//! layer hands in `Action`s and reads the state back; it never mutates
//! players or cards itself.
//!
//! ## Turn flow
//!
//! ```text
//! validate ──► execute ──► TakeToken: finalize_turn_if_complete
//!                          BuyCard:   end_turn_now
//! ```
//!
//! `submit` runs the whole sequence. The steps stay public for callers
//! that drive them one at a time.
//!
//! Not synchronized: callers serialize access (one action at a time).

use std::path::Path;

use tracing::{debug, info, warn};

use super::error::ActionError;
use crate::core::action::Action;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::persistence::{self, PersistenceError};
use crate::rules::{RulesEngine, StandardRules, TokenPhase};

/// What `submit` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The action that was applied.
    pub action: Action,
    /// Whether the turn passed as a result.
    pub turn_ended: bool,
    /// Seat to move next.
    pub next_player: Option<PlayerId>,
}

/// Validates and applies actions against the live game state.
///
/// ## Example
///
/// ```
/// use chip_market::core::{Action, Color, PlayerId};
/// use chip_market::game::ActionProcessor;
///
/// let mut game = ActionProcessor::new();
/// game.new_game();
///
/// game.submit(Action::TakeToken(Color::Red)).unwrap();
/// let outcome = game.submit(Action::TakeToken(Color::Red)).unwrap();
///
/// assert!(outcome.turn_ended);
/// assert_eq!(outcome.next_player, Some(PlayerId::new(1)));
/// assert!(game.state().taken_this_turn().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ActionProcessor<R: RulesEngine = StandardRules> {
    state: GameState,
    rules: R,
}

impl ActionProcessor<StandardRules> {
    /// A processor with the standard rules and an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(StandardRules)
    }
}

impl Default for ActionProcessor<StandardRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RulesEngine> ActionProcessor<R> {
    /// A processor with a custom rule set and an empty state.
    #[must_use]
    pub fn with_rules(rules: R) -> Self {
        Self {
            state: GameState::new(),
            rules,
        }
    }

    /// The live state, for display and saving.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Every action `validate` would accept right now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    // === Validation ===

    /// Is `action` legal right now? Never mutates.
    #[must_use]
    pub fn validate(&self, action: &Action) -> bool {
        self.rejection(action).is_none()
    }

    /// Why `action` is illegal right now, or `None` if it is legal.
    #[must_use]
    pub fn rejection(&self, action: &Action) -> Option<ActionError> {
        let Some(player) = self.state.current_player() else {
            return Some(ActionError::NoGame);
        };

        match *action {
            Action::TakeToken(color) => {
                if self.rules.can_take_token(&self.state, color) {
                    None
                } else {
                    Some(ActionError::IllegalTokenTake {
                        color,
                        phase: TokenPhase::of(&self.state.taken_this_turn()),
                    })
                }
            }
            Action::BuyCard(id) => {
                let Some(card) = self.state.card(id) else {
                    return Some(ActionError::UnknownCard(id));
                };
                if self.rules.can_buy(player, card) {
                    None
                } else {
                    Some(ActionError::Unaffordable {
                        card: id,
                        cost: card.cost(),
                        held: player.tokens(),
                    })
                }
            }
        }
    }

    // === Application ===

    /// Apply an action already accepted by `validate`.
    ///
    /// Only guards against a missing player or card; rule checks are the
    /// caller's job.
    pub fn execute(&mut self, action: &Action) {
        match *action {
            Action::TakeToken(color) => {
                let Some(player) = self.state.current_player_mut() else {
                    return;
                };
                player.add_token(color);
                self.state.record_token_taken(color);
            }
            Action::BuyCard(id) => {
                let Some(card) = self.state.card(id).cloned() else {
                    return;
                };
                let Some(player) = self.state.current_player_mut() else {
                    return;
                };
                for (color, amount) in card.cost_colors() {
                    player.remove_tokens(color, amount);
                }
                player.add_score(card.points());
                self.state.remove_card(id);
            }
        }
        debug!(
            player = self.state.current_index(),
            %action,
            taken = ?self.state.taken_this_turn(),
            "applied action"
        );
    }

    /// Pass the turn if chip taking has reached a terminal state.
    ///
    /// Returns `true` if the turn passed.
    pub fn finalize_turn_if_complete(&mut self) -> bool {
        if self.rules.turn_complete(&self.state.taken_this_turn()) {
            self.end_turn_now();
            true
        } else {
            false
        }
    }

    /// Pass the turn unconditionally.
    pub fn end_turn_now(&mut self) {
        self.state.advance_to_next_player();
        debug!(player = self.state.current_index(), "turn passed");
    }

    /// Validate, apply, and close the turn if the action ends it.
    pub fn submit(&mut self, action: Action) -> Result<Outcome, ActionError> {
        if let Some(err) = self.rejection(&action) {
            debug!(%action, %err, "rejected action");
            return Err(err);
        }

        self.execute(&action);
        let turn_ended = if action.ends_turn() {
            self.end_turn_now();
            true
        } else {
            self.finalize_turn_if_complete()
        };

        Ok(Outcome {
            action,
            turn_ended,
            next_player: self.state.current_player_id(),
        })
    }

    // === Lifecycle ===

    /// Start over: two fresh players, the starting table, seat 0 to move.
    pub fn new_game(&mut self) {
        self.state.new_game();
        info!(cards = self.state.cards().len(), "new game");
    }

    /// Write the live state to `path`.
    pub fn save_game(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        match persistence::save(&self.state, path) {
            Ok(()) => {
                info!(path = %path.display(), "game saved");
                Ok(())
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "save failed");
                Err(err)
            }
        }
    }

    /// Replace the live state with the one stored at `path`.
    ///
    /// On failure the live state is left exactly as it was.
    pub fn load_game(&mut self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        match persistence::load(path) {
            Ok(state) => {
                self.state = state;
                info!(path = %path.display(), "game loaded");
                Ok(())
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "load failed, keeping current game");
                Err(err)
            }
        }
    }
}
