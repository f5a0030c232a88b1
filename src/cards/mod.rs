//! Cards, decks, and the unknown-card universe.
//!
//! - [`Card`] — A face (1..=13) and a [`Suit`], encoded in one byte
//! - [`Deck`] — A shuffled stack supporting draws and reshuffles
//! - [`Hand`] — Cards held by one player, valued under blackjack rules
//! - [`Universe`] — Multiset of faces not yet observed
mod card;
mod deck;
mod hand;
mod suit;
mod universe;

pub use card::*;
pub use deck::*;
pub use hand::*;
pub use suit::*;
pub use universe::*;
