//! Line-oriented text format for saved games.
//!
//! ## Layout
//!
//! ```text
//! CURRENT_PLAYER_INDEX:<int>
//! CHIPS_TAKEN:<Color>=<int>;...;
//! PLAYER_COUNT:<int>
//! PLAYER:<index>        (then SCORE and CHIPS, once per player)
//! SCORE:<int>
//! CHIPS:<Color>=<int>;...;
//! CARD_COUNT:<int>
//! CARD:<id>             (then POINTS and COST, once per card)
//! POINTS:<int>
//! COST:<Color>=<int>;...;
//! ```
//!
//! ## Tolerance
//!
//! Decoding skips what it cannot read rather than failing: unknown line
//! prefixes, unknown colors and unparseable numbers are dropped field by
//! field, and a color missing from a mapping reads as zero. Only a result
//! that cannot be a game (wrong number of players, current index out of
//! range) is an error.

use std::fmt;
use std::str::FromStr;

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::error::{PersistenceError, Result};
use crate::cards::{Card, CardId};
use crate::core::color::{Color, TokenBag};
use crate::core::player::{Player, PLAYER_COUNT};
use crate::core::state::GameState;

const CURRENT_PLAYER_INDEX: &str = "CURRENT_PLAYER_INDEX";
const CHIPS_TAKEN: &str = "CHIPS_TAKEN";
const PLAYER_COUNT_KEY: &str = "PLAYER_COUNT";
const PLAYER: &str = "PLAYER";
const SCORE: &str = "SCORE";
const CHIPS: &str = "CHIPS";
const CARD_COUNT: &str = "CARD_COUNT";
const CARD: &str = "CARD";
const POINTS: &str = "POINTS";
const COST: &str = "COST";

/// Render a state in the save format.
#[must_use]
pub fn encode(state: &GameState) -> String {
    SaveFile(state).to_string()
}

/// Parse a state from the save format.
pub fn decode(text: &str) -> Result<GameState> {
    let mut decoder = Decoder::default();
    for (number, line) in text.lines().enumerate() {
        decoder.line(number + 1, line);
    }
    decoder.finish()
}

struct SaveFile<'a>(&'a GameState);

impl fmt::Display for SaveFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f, "{CURRENT_PLAYER_INDEX}:{}", state.current_index())?;
        writeln!(f, "{CHIPS_TAKEN}:{}", Bag(&state.taken_this_turn()))?;

        writeln!(f, "{PLAYER_COUNT_KEY}:{}", state.player_count())?;
        for (index, player) in state.players().iter().enumerate() {
            writeln!(f, "{PLAYER}:{index}")?;
            writeln!(f, "{SCORE}:{}", player.score())?;
            writeln!(f, "{CHIPS}:{}", Bag(&player.tokens()))?;
        }

        writeln!(f, "{CARD_COUNT}:{}", state.cards().len())?;
        for card in state.cards() {
            writeln!(f, "{CARD}:{}", card.id().raw())?;
            writeln!(f, "{POINTS}:{}", card.points())?;
            writeln!(f, "{COST}:{}", Bag(&card.cost()))?;
        }
        Ok(())
    }
}

/// `Color=count;` for every color, in color order.
struct Bag<'a>(&'a TokenBag);

impl fmt::Display for Bag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (color, count) in self.0.iter() {
            write!(f, "{color}={count};")?;
        }
        Ok(())
    }
}

struct PendingCard {
    id: CardId,
    points: u32,
    cost: TokenBag,
}

#[derive(Default)]
struct Decoder {
    current: usize,
    taken: TokenBag,
    players: Vector<Player>,
    cards: Vector<Card>,
    seen_cards: FxHashSet<CardId>,
    player: Option<Player>,
    card: Option<PendingCard>,
    declared_players: Option<usize>,
    declared_cards: Option<usize>,
}

impl Decoder {
    fn line(&mut self, number: usize, line: &str) {
        let Some((key, value)) = line.split_once(':') else {
            if !line.trim().is_empty() {
                debug!(line = number, "skipping line without a prefix");
            }
            return;
        };

        match key {
            CURRENT_PLAYER_INDEX => {
                if let Some(index) = parse_number(number, key, value) {
                    self.current = index;
                }
            }
            CHIPS_TAKEN => self.taken = parse_bag(number, value),
            PLAYER_COUNT_KEY => self.declared_players = parse_number(number, key, value),
            PLAYER => {
                self.flush_player();
                self.player = Some(Player::new());
            }
            SCORE => {
                if let Some(score) = parse_number(number, key, value) {
                    if let Some(player) = self.player.as_mut() {
                        *player = Player::restore(score, player.tokens());
                    }
                }
            }
            CHIPS => {
                if let Some(player) = self.player.as_mut() {
                    *player = Player::restore(player.score(), parse_bag(number, value));
                }
            }
            CARD_COUNT => {
                self.flush_player();
                self.declared_cards = parse_number(number, key, value);
            }
            CARD => {
                self.flush_player();
                self.flush_card();
                self.card = parse_number(number, key, value).map(|id| PendingCard {
                    id: CardId::new(id),
                    points: 0,
                    cost: TokenBag::new(),
                });
            }
            POINTS => {
                if let Some(points) = parse_number(number, key, value) {
                    if let Some(card) = self.card.as_mut() {
                        card.points = points;
                    }
                }
            }
            COST => {
                if let Some(card) = self.card.as_mut() {
                    card.cost = parse_bag(number, value);
                }
            }
            _ => debug!(line = number, key, "skipping unknown record"),
        }
    }

    fn flush_player(&mut self) {
        if let Some(player) = self.player.take() {
            self.players.push_back(player);
        }
    }

    fn flush_card(&mut self) {
        let Some(pending) = self.card.take() else {
            return;
        };
        if !self.seen_cards.insert(pending.id) {
            warn!(card = %pending.id, "dropping duplicate card record");
            return;
        }
        self.cards
            .push_back(Card::new(pending.id, pending.cost, pending.points));
    }

    fn finish(mut self) -> Result<GameState> {
        self.flush_player();
        self.flush_card();

        if let Some(declared) = self.declared_players {
            if declared != self.players.len() {
                warn!(declared, found = self.players.len(), "player count mismatch");
            }
        }
        if let Some(declared) = self.declared_cards {
            if declared != self.cards.len() {
                warn!(declared, found = self.cards.len(), "card count mismatch");
            }
        }

        if self.players.len() != PLAYER_COUNT {
            return Err(PersistenceError::Malformed(format!(
                "expected {PLAYER_COUNT} players, found {}",
                self.players.len()
            )));
        }
        if self.current >= self.players.len() {
            return Err(PersistenceError::Malformed(format!(
                "current player index {} out of range",
                self.current
            )));
        }

        Ok(GameState::from_parts(
            self.players,
            self.cards,
            self.current,
            self.taken,
        ))
    }
}

fn parse_number<T: FromStr>(number: usize, key: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(line = number, key, value, "skipping unparseable number");
            None
        }
    }
}

/// Parse `Color=count;...`. Unreadable pairs are skipped; missing colors are zero.
fn parse_bag(number: usize, data: &str) -> TokenBag {
    let mut bag = TokenBag::new();
    for pair in data.split(';').filter(|p| !p.trim().is_empty()) {
        let parsed = pair
            .split_once('=')
            .filter(|(_, count)| !count.contains('='))
            .and_then(|(name, count)| {
                let color = Color::from_str(name.trim()).ok()?;
                let count = count.trim().parse::<u32>().ok()?;
                Some((color, count))
            });
        match parsed {
            Some((color, count)) => bag.set(color, count),
            None => debug!(line = number, pair, "skipping unreadable chip entry"),
        }
    }
    bag
}
