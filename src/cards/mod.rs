//! Card system: identities, play state, and the reusable deck.
//!
//! ## Key Types
//!
//! - `CardId`: one of the 52 identities (suit/rank/colour derived from it)
//! - `Card`: identity plus transient play state (face down, playable,
//!   renderer offsets)
//! - `Deck`: the 52 `Card` instances, built once and reused every game

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Colour, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT};
pub use deck::Deck;
