//! The starting table.
//!
//! Fifteen cards, ids `0..15`, each costing one or two colors (1-3 of each)
//! and worth 1-5 points. Cheaper single-color cards come first.

use im::Vector;

use super::definition::{Card, CardId};
use crate::core::color::{Color, TokenBag};

/// Number of cards on a fresh table.
pub const STARTING_TABLE_SIZE: usize = 15;

type Cost = &'static [(Color, u32)];

/// (points, cost) per card, in id order.
const TABLE: [(u32, Cost); STARTING_TABLE_SIZE] = [
    (1, &[(Color::Red, 2)]),
    (1, &[(Color::Blue, 3)]),
    (1, &[(Color::Green, 2)]),
    (1, &[(Color::Black, 1), (Color::White, 2)]),
    (2, &[(Color::Red, 2), (Color::Blue, 1)]),
    (2, &[(Color::Green, 1), (Color::Black, 2)]),
    (2, &[(Color::White, 3)]),
    (3, &[(Color::Black, 3)]),
    (3, &[(Color::Red, 3)]),
    (3, &[(Color::Blue, 2), (Color::Green, 2)]),
    (4, &[(Color::White, 2), (Color::Red, 3)]),
    (4, &[(Color::Black, 3), (Color::Blue, 2)]),
    (4, &[(Color::Green, 3), (Color::White, 2)]),
    (5, &[(Color::Red, 3), (Color::Black, 3)]),
    (5, &[(Color::Blue, 3), (Color::Green, 3)]),
];

/// Build the starting table in table order.
#[must_use]
pub fn starting_table() -> Vector<Card> {
    TABLE
        .iter()
        .enumerate()
        .map(|(id, &(points, cost))| {
            Card::new(
                CardId::new(id as u32),
                cost.iter().copied().collect::<TokenBag>(),
                points,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_table_size_and_ids() {
        let table = starting_table();
        assert_eq!(table.len(), STARTING_TABLE_SIZE);

        let ids: FxHashSet<CardId> = table.iter().map(Card::id).collect();
        assert_eq!(ids.len(), STARTING_TABLE_SIZE);
        for (i, card) in table.iter().enumerate() {
            assert_eq!(card.id(), CardId::new(i as u32));
        }
    }

    #[test]
    fn test_table_shape() {
        for card in starting_table() {
            let colors = card.cost().distinct();
            assert!((1..=2).contains(&colors), "{} has {colors} colors", card.id());
            assert!(card.cost_colors().all(|(_, n)| (1..=3).contains(&n)));
            assert!((1..=5).contains(&card.points()));
        }
    }

    #[test]
    fn test_table_reference_values() {
        let table = starting_table();

        assert_eq!(table[0].points(), 1);
        assert_eq!(table[0].cost(), TokenBag::new().with(Color::Red, 2));

        assert_eq!(table[3].points(), 1);
        assert_eq!(
            table[3].cost(),
            TokenBag::new().with(Color::Black, 1).with(Color::White, 2)
        );

        assert_eq!(table[9].points(), 3);
        assert_eq!(
            table[9].cost(),
            TokenBag::new().with(Color::Blue, 2).with(Color::Green, 2)
        );

        assert_eq!(table[14].points(), 5);
        assert_eq!(
            table[14].cost(),
            TokenBag::new().with(Color::Blue, 3).with(Color::Green, 3)
        );

        let total_points: u32 = table.iter().map(Card::points).sum();
        assert_eq!(total_points, 41);
    }
}
