//! Playing card identity and transient play state.
//!
//! ## Identity Encoding
//!
//! The 52 cards are identified by a single `CardId` in `0..52`:
//! - `suit = id / 13` (Hearts, Diamonds, Clubs, Spades)
//! - `rank = id % 13` (Ace..King)
//! - `colour = Red` if `id < 26`, else `Black`
//!
//! Identity is immutable once created. Everything else on a `Card` is
//! transient play state that a new deal wipes via [`Card::reset`].

use serde::{Deserialize, Serialize};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Unique identifier for one of the 52 playing cards.
///
/// The raw value encodes suit, rank, and colour; see the module docs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card ID from its raw value.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The card's suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match self.0 / RANKS_PER_SUIT {
            0 => Suit::Hearts,
            1 => Suit::Diamonds,
            2 => Suit::Clubs,
            _ => Suit::Spades,
        }
    }

    /// The card's rank (Ace..King).
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::from_index(self.0 % RANKS_PER_SUIT)
    }

    /// The card's colour. Hearts and Diamonds are red, Clubs and Spades black.
    #[must_use]
    pub const fn colour(self) -> Colour {
        if self.0 < 2 * RANKS_PER_SUIT {
            Colour::Red
        } else {
            Colour::Black
        }
    }

    /// Iterate over all 52 card identities in order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.suit().letter(), self.rank().symbol())
    }
}

/// A card's suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Single-letter abbreviation used in display output.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

/// A card's colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    Red,
    Black,
}

/// A card's rank, Ace low through King high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Build a rank from its 0-based index (`0` = Ace, `12` = King).
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Rank::Ace,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            _ => Rank::King,
        }
    }

    /// The rank's 0-based index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Short symbol used in display output.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// One playing card in a game: immutable identity plus transient play state.
///
/// The offset scalars are carried for the renderer (visual stacking) and
/// never read by game logic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Immutable identity.
    pub id: CardId,

    /// Is this card face down?
    pub face_down: bool,

    /// Can this card currently be moved or clicked?
    pub playable: bool,

    /// Renderer offset while face down.
    pub face_down_offset: f64,

    /// Renderer offset while face up.
    pub face_up_offset: f64,
}

impl Card {
    /// Create a card in its dealt state: face down, not playable.
    #[must_use]
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            face_down: true,
            playable: false,
            face_down_offset: 0.0,
            face_up_offset: 0.0,
        }
    }

    /// Reset transient state to the dealt defaults. Identity is untouched.
    pub fn reset(&mut self) {
        self.playable = false;
        self.face_down = true;
        self.face_down_offset = 0.0;
        self.face_up_offset = 0.0;
    }
}
