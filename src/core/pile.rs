//! Pile storage: named ordered card sequences addressed by stable handle.
//!
//! The `GameTable` tracks which pile every card sits in. Piles are
//! referenced by `PileId` rather than by aliased references, so undo
//! entries recorded before a reset can never dangle.
//!
//! Index 0 of a pile is its bottom; the last index is its top.

use rustc_hash::FxHashMap;

use crate::cards::CardId;

/// Pile identifier. Variants define what piles exist.
///
/// The engine doesn't interpret pile IDs - they're opaque handles whose
/// meaning (stock, waste, foundation, tableau column) the variant assigns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PileId(pub u16);

impl PileId {
    /// Create a new pile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// The set of piles making up one game layout.
///
/// Invariant maintained by the engine: the union of all piles always equals
/// the deck contents, with no duplication or loss.
#[derive(Clone, Debug, Default)]
pub struct GameTable {
    piles: FxHashMap<PileId, Vec<CardId>>,
}

impl GameTable {
    /// Create a table with no piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pile handle. Idempotent.
    pub fn add_pile(&mut self, pile: PileId) {
        self.piles.entry(pile).or_default();
    }

    /// Check whether a pile handle is registered.
    #[must_use]
    pub fn has_pile(&self, pile: PileId) -> bool {
        self.piles.contains_key(&pile)
    }

    /// Empty every pile, keeping the handles registered.
    pub fn clear_cards(&mut self) {
        for cards in self.piles.values_mut() {
            cards.clear();
        }
    }

    /// Push a card onto the top of a pile.
    ///
    /// Panics on an unknown handle; layouts register their piles before
    /// dealing, so that is a programmer error.
    pub fn push(&mut self, pile: PileId, card: CardId) {
        self.pile_mut(pile).push(card);
    }

    /// Append a run onto the top of a pile, preserving its relative order.
    pub fn extend(&mut self, pile: PileId, run: &[CardId]) {
        self.pile_mut(pile).extend_from_slice(run);
    }

    /// The cards in a pile, bottom to top. Empty for unknown handles.
    #[must_use]
    pub fn cards(&self, pile: PileId) -> &[CardId] {
        self.piles.get(&pile).map_or(&[], |v| v.as_slice())
    }

    /// The top card of a pile.
    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<CardId> {
        self.piles.get(&pile)?.last().copied()
    }

    /// Remove and return the top card of a pile.
    pub fn pop_top(&mut self, pile: PileId) -> Option<CardId> {
        self.piles.get_mut(&pile)?.pop()
    }

    /// Number of cards in a pile.
    #[must_use]
    pub fn len(&self, pile: PileId) -> usize {
        self.cards(pile).len()
    }

    /// True when a pile holds no cards.
    #[must_use]
    pub fn is_empty(&self, pile: PileId) -> bool {
        self.cards(pile).is_empty()
    }

    /// Find the pile a card currently sits in.
    ///
    /// A linear scan over at most 52 cards; cheap enough that no separate
    /// location index needs to be kept in sync.
    #[must_use]
    pub fn pile_of(&self, card: CardId) -> Option<PileId> {
        self.piles
            .iter()
            .find(|(_, cards)| cards.contains(&card))
            .map(|(&pile, _)| pile)
    }

    /// The contiguous run from `card` up to the top of `pile`.
    ///
    /// Returns `None` when the card is not in the pile.
    #[must_use]
    pub fn run_from(&self, pile: PileId, card: CardId) -> Option<&[CardId]> {
        let cards = self.piles.get(&pile)?;
        let start = cards.iter().position(|&c| c == card)?;
        Some(&cards[start..])
    }

    /// Detach the run from `card` to the top of `pile`, preserving order.
    pub fn take_run(&mut self, pile: PileId, card: CardId) -> Option<Vec<CardId>> {
        let cards = self.piles.get_mut(&pile)?;
        let start = cards.iter().position(|&c| c == card)?;
        Some(cards.split_off(start))
    }

    /// Remove the given cards from a pile, wherever they sit in it.
    pub fn remove_cards(&mut self, pile: PileId, run: &[CardId]) {
        if let Some(cards) = self.piles.get_mut(&pile) {
            cards.retain(|c| !run.contains(c));
        }
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.values().map(Vec::len).sum()
    }

    /// Iterate over registered pile handles.
    pub fn pile_ids(&self) -> impl Iterator<Item = PileId> + '_ {
        self.piles.keys().copied()
    }

    fn pile_mut(&mut self, pile: PileId) -> &mut Vec<CardId> {
        self.piles
            .get_mut(&pile)
            .unwrap_or_else(|| panic!("unknown pile handle {pile}"))
    }
}
