//! Card data.
//!
//! A `Card` is immutable once created: an id, a chip cost, and the points
//! it is worth. Ids are assigned at creation and never reused.

use serde::{Deserialize, Serialize};

use crate::core::color::{Color, TokenBag};

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A purchasable card.
///
/// ## Example
///
/// ```
/// use chip_market::cards::{Card, CardId};
/// use chip_market::core::{Color, TokenBag};
///
/// let card = Card::new(CardId::new(1), TokenBag::new().with(Color::Blue, 3), 1);
/// assert_eq!(card.cost().get(Color::Blue), 3);
/// assert_eq!(card.points(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    cost: TokenBag,
    points: u32,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, cost: TokenBag, points: u32) -> Self {
        Self { id, cost, points }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Snapshot of the chip cost.
    #[must_use]
    pub fn cost(&self) -> TokenBag {
        self.cost
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Colors this card asks for, with amounts.
    pub fn cost_colors(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        self.cost.nonzero()
    }
}
