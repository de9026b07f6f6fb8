//! Game state.
//!
//! `GameState` is the whole of the live game: seats in turn order, the cards
//! still in play, whose turn it is, and the chips taken so far this turn.
//!
//! Players and cards are held in `im` persistent vectors, so `snapshot()`
//! is O(1) and yields a copy that shares nothing observable with the live
//! state. Borrowed accessors are read-only; all mutation is crate-private
//! and driven by the action processor.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::{Color, TokenBag};
use super::player::{Player, PlayerId, PLAYER_COUNT};
use crate::cards::{starting_table, Card, CardId};

/// Complete game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: Vector<Player>,
    cards: Vector<Card>,
    current: usize,
    taken_this_turn: TokenBag,
}

impl GameState {
    /// An empty state: no players, no cards. Call `new_game` to populate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a state from decoded parts.
    ///
    /// Callers guarantee unique card ids and an in-range index.
    pub(crate) fn from_parts(
        players: Vector<Player>,
        cards: Vector<Card>,
        current: usize,
        taken_this_turn: TokenBag,
    ) -> Self {
        debug_assert!(players.is_empty() || current < players.len());
        Self {
            players,
            cards,
            current,
            taken_this_turn,
        }
    }

    /// Reset to two fresh players, the starting table, seat 0 to move.
    pub(crate) fn new_game(&mut self) {
        self.players = (0..PLAYER_COUNT).map(|_| Player::new()).collect();
        self.cards = starting_table();
        self.current = 0;
        self.taken_this_turn = TokenBag::new();
    }

    // === Read access ===

    /// An independent copy of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Cards in play, in table order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Find a card in play by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Seat whose turn it is, or `None` before a game has started.
    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        (!self.players.is_empty()).then(|| PlayerId::new(self.current as u8))
    }

    /// The player whose turn it is, or `None` before a game has started.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Chips taken so far this turn.
    #[must_use]
    pub fn taken_this_turn(&self) -> TokenBag {
        self.taken_this_turn
    }

    /// Seat with the strictly highest score; `None` on a tie or empty state.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        let best = self.players.iter().map(Player::score).max()?;
        let mut leaders = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.score() == best);
        let (index, _) = leaders.next()?;
        if leaders.next().is_some() {
            return None;
        }
        Some(PlayerId::new(index as u8))
    }

    // === Mutation ===

    pub(crate) fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.current)
    }

    /// Record one chip of `color` taken this turn.
    pub(crate) fn record_token_taken(&mut self, color: Color) {
        self.taken_this_turn.add(color, 1);
    }

    /// Pass the turn to the next seat and clear the per-turn counter.
    pub(crate) fn advance_to_next_player(&mut self) {
        if !self.players.is_empty() {
            self.current = (self.current + 1) % self.players.len();
        }
        self.taken_this_turn = TokenBag::new();
    }

    /// Take a card out of play. No-op if it is not in play.
    ///
    /// Returns the removed card.
    pub(crate) fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.id() == id)?;
        Some(self.cards.remove(pos))
    }
}
