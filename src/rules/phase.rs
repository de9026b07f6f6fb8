//! Token sub-turn state machine.
//!
//! The chip-taking part of a turn moves through these states:
//!
//! ```text
//!            take c              take c (again)
//!   Start ──────────► Single(c) ─────────────────► Done(SameColor)
//!                        │
//!                        │ take c2 != c
//!                        ▼
//!                     Distinct ──────────────────► Done(ThreeColors)
//!                              take c3 not yet taken
//! ```
//!
//! No stored phase exists. `TokenPhase::of` recomputes it from the
//! per-turn counts every time, so counts and phase cannot drift apart.
//! Legality reduces to: reject when `max >= 2` or `total >= 3`; otherwise,
//! with more than one color taken, allow only untaken colors; otherwise
//! allow anything.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::color::{Color, TokenBag, COLOR_COUNT};

/// Chips of one color that end the sub-turn.
pub const MAX_SAME_COLOR: u32 = 2;

/// Chips of distinct colors that end the sub-turn.
pub const MAX_DISTINCT_COLORS: u32 = 3;

/// Which terminal condition closed the sub-turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoneReason {
    /// Two chips of one color.
    SameColor,
    /// Three chips of three different colors.
    ThreeColors,
}

/// Progress through the current turn's chip taking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenPhase {
    /// Nothing taken yet.
    Start,
    /// Exactly one chip taken, of this color.
    Single(Color),
    /// One chip each of two different colors.
    Distinct,
    /// No further chips may be taken this turn.
    Done(DoneReason),
}

impl TokenPhase {
    /// Derive the phase from this turn's counts.
    #[must_use]
    pub fn of(taken: &TokenBag) -> Self {
        if taken.max() >= MAX_SAME_COLOR {
            return TokenPhase::Done(DoneReason::SameColor);
        }
        if taken.total() >= MAX_DISTINCT_COLORS {
            return TokenPhase::Done(DoneReason::ThreeColors);
        }
        let mut colors = taken.nonzero().map(|(c, _)| c);
        match (colors.next(), colors.next()) {
            (None, _) => TokenPhase::Start,
            (Some(color), None) => TokenPhase::Single(color),
            (Some(_), Some(_)) => TokenPhase::Distinct,
        }
    }

    /// True once no further chip may be taken.
    #[must_use]
    pub fn is_done(self) -> bool {
        matches!(self, TokenPhase::Done(_))
    }

    /// Whether `color` may be taken next, given the counts this phase came from.
    #[must_use]
    pub fn allows(self, taken: &TokenBag, color: Color) -> bool {
        match self {
            TokenPhase::Start | TokenPhase::Single(_) => true,
            TokenPhase::Distinct => taken.get(color) == 0,
            TokenPhase::Done(_) => false,
        }
    }

    /// Every color that may be taken next.
    #[must_use]
    pub fn takable(self, taken: &TokenBag) -> SmallVec<[Color; COLOR_COUNT]> {
        Color::ALL
            .iter()
            .copied()
            .filter(|&c| self.allows(taken, c))
            .collect()
    }
}

impl std::fmt::Display for TokenPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenPhase::Start => Ok(()),
            TokenPhase::Single(_) | TokenPhase::Distinct => write!(f, "taking different"),
            TokenPhase::Done(DoneReason::SameColor) => write!(f, "2 same - DONE"),
            TokenPhase::Done(DoneReason::ThreeColors) => write!(f, "3 diff - DONE"),
        }
    }
}
