//! Card system: card data and the starting table.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card, unique within a game
//! - `Card`: Immutable cost and point value
//! - `starting_table`: The fixed fifteen-card layout used by every new game

pub mod definition;
pub mod table;

pub use definition::{Card, CardId};
pub use table::{starting_table, STARTING_TABLE_SIZE};
