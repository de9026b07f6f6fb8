//! Player identification and per-player holdings.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seats are 0-based: the first player is `PlayerId(0)`.
//!
//! ## Player
//!
//! Score plus chip holdings. Only the action processor and the save-file
//! codec mutate a player, so the mutators are crate-private.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::color::{Color, TokenBag};

/// Number of seats in a game.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use chip_market::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's score and chips.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    score: u32,
    tokens: TokenBag,
}

impl Player {
    /// A fresh player: zero score, no chips.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a player from stored values.
    pub(crate) fn restore(score: u32, tokens: TokenBag) -> Self {
        Self { score, tokens }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Snapshot of the player's chips.
    #[must_use]
    pub fn tokens(&self) -> TokenBag {
        self.tokens
    }

    /// Add one chip of `color`. Unbounded here; limits belong to the rules.
    pub(crate) fn add_token(&mut self, color: Color) {
        self.tokens.add(color, 1);
    }

    /// Remove `amount` chips of `color`, flooring at zero.
    ///
    /// Callers validate affordability first. Hitting the floor means that
    /// validation was skipped, so it is logged and trips a debug assertion.
    pub(crate) fn remove_tokens(&mut self, color: Color, amount: u32) {
        let held = self.tokens.get(color);
        if self.tokens.sub_clamped(color, amount) {
            warn!(%color, held, amount, "chip removal clamped at zero");
            debug_assert!(
                false,
                "removed {amount} {color} chips from a player holding {held}"
            );
        }
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
