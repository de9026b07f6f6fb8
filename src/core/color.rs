//! Chip colors and per-color counts.
//!
//! ## Color
//!
//! The five chip denominations. Declaration order is the serialization
//! order used by the save format; otherwise colors are unordered.
//!
//! ## TokenBag
//!
//! A complete mapping from every `Color` to a count. Backed by a fixed
//! array so it is `Copy`: every read hands out an independent snapshot.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Number of chip colors.
pub const COLOR_COUNT: usize = 5;

/// A chip color.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
pub enum Color {
    Red,
    Blue,
    Green,
    Black,
    White,
}

impl Color {
    /// All colors in serialization order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Black,
        Color::White,
    ];

    /// Dense slot index (0..5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Count of chips per color.
///
/// ## Example
///
/// ```
/// use chip_market::core::{Color, TokenBag};
///
/// let cost = TokenBag::new().with(Color::Red, 2).with(Color::Blue, 1);
/// assert_eq!(cost.get(Color::Red), 2);
/// assert_eq!(cost.get(Color::White), 0);
/// assert_eq!(cost.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenBag {
    counts: [u32; COLOR_COUNT],
}

impl TokenBag {
    /// An all-zero bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; COLOR_COUNT],
        }
    }

    /// Builder form of `set`.
    #[must_use]
    pub fn with(mut self, color: Color, count: u32) -> Self {
        self.set(color, count);
        self
    }

    #[must_use]
    pub fn get(&self, color: Color) -> u32 {
        self.counts[color.index()]
    }

    pub fn set(&mut self, color: Color, count: u32) {
        self.counts[color.index()] = count;
    }

    /// Increment one color by `amount`.
    pub fn add(&mut self, color: Color, amount: u32) {
        let slot = &mut self.counts[color.index()];
        *slot = slot.saturating_add(amount);
    }

    /// Decrement one color by `amount`, flooring at zero.
    ///
    /// Returns `true` if the floor was hit, i.e. the bag held fewer than
    /// `amount` chips of that color.
    pub fn sub_clamped(&mut self, color: Color, amount: u32) -> bool {
        let slot = &mut self.counts[color.index()];
        let clamped = *slot < amount;
        *slot = slot.saturating_sub(amount);
        clamped
    }

    /// Sum over all colors.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Largest single-color count.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Number of colors with a nonzero count.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// True if, for every color, this bag holds at least as many as `cost`.
    #[must_use]
    pub fn covers(&self, cost: &TokenBag) -> bool {
        self.counts
            .iter()
            .zip(cost.counts.iter())
            .all(|(have, need)| have >= need)
    }

    /// Iterate over `(Color, count)` in serialization order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        Color::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Iterate over colors with a nonzero count.
    pub fn nonzero(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        self.iter().filter(|&(_, n)| n > 0)
    }
}

impl FromIterator<(Color, u32)> for TokenBag {
    fn from_iter<I: IntoIterator<Item = (Color, u32)>>(iter: I) -> Self {
        let mut bag = TokenBag::new();
        for (color, count) in iter {
            bag.set(color, count);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_color_names_round_trip() {
        for color in Color::ALL {
            let name = color.to_string();
            assert_eq!(Color::from_str(&name).unwrap(), color);
        }
        assert_eq!(Color::Black.to_string(), "Black");
        assert!(Color::from_str("Purple").is_err());
        assert!(Color::from_str("red").is_err());
    }

    #[test]
    fn test_color_index_matches_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_new_bag_defines_every_color() {
        let bag = TokenBag::new();
        assert_eq!(bag.iter().count(), COLOR_COUNT);
        assert!(bag.iter().all(|(_, n)| n == 0));
        assert!(bag.is_empty());
    }

    #[test]
    fn test_aggregates() {
        let bag = TokenBag::new()
            .with(Color::Red, 2)
            .with(Color::Green, 1)
            .with(Color::White, 3);

        assert_eq!(bag.total(), 6);
        assert_eq!(bag.max(), 3);
        assert_eq!(bag.distinct(), 3);
        assert_eq!(
            bag.nonzero().collect::<Vec<_>>(),
            vec![(Color::Red, 2), (Color::Green, 1), (Color::White, 3)]
        );
    }

    #[test]
    fn test_sub_clamped() {
        let mut bag = TokenBag::new().with(Color::Blue, 2);

        assert!(!bag.sub_clamped(Color::Blue, 2));
        assert_eq!(bag.get(Color::Blue), 0);

        assert!(bag.sub_clamped(Color::Blue, 1));
        assert_eq!(bag.get(Color::Blue), 0);
    }

    #[test]
    fn test_covers() {
        let held = TokenBag::new().with(Color::Red, 2).with(Color::Blue, 1);

        assert!(held.covers(&TokenBag::new()));
        assert!(held.covers(&TokenBag::new().with(Color::Red, 2)));
        assert!(held.covers(&held));
        assert!(!held.covers(&TokenBag::new().with(Color::Red, 3)));
        // No substitution between colors
        assert!(!held.covers(&TokenBag::new().with(Color::Green, 1)));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = TokenBag::new().with(Color::Red, 1);
        let mut copy = original;
        copy.add(Color::Red, 5);

        assert_eq!(original.get(Color::Red), 1);
        assert_eq!(copy.get(Color::Red), 6);
    }

    #[test]
    fn test_bag_serialization() {
        let bag = TokenBag::new().with(Color::Black, 4);
        let json = serde_json::to_string(&bag).unwrap();
        let deserialized: TokenBag = serde_json::from_str(&json).unwrap();
        assert_eq!(bag, deserialized);
    }
}
