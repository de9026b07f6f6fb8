//! Saving and loading games.
//!
//! - `codec`: the line-oriented text format
//! - `store`: file I/O around the codec
//! - `error`: what can go wrong

pub mod codec;
pub mod error;
pub mod store;

pub use codec::{decode, encode};
pub use error::{PersistenceError, Result};
pub use store::{load, save};
