//! Variant contract: the rules trait concrete solitaire games implement.
//!
//! The engine is generic over the three shipped variants (Klondike,
//! Spider, FreeCell). A variant supplies:
//! - the initial layout after a shuffle
//! - the legality decision for a requested move
//! - the win predicate
//!
//! Legality is expressed as an `Option<MovePlan>`: `None` rejects the move
//! with zero side effects, `Some` describes every pile transfer and face-up
//! flip that the one user gesture cascades into, plus the score each
//! transfer is worth. Evaluation is pure - the engine applies the plan, so
//! a check-only query never observes any mutation.

use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::PileId;
use crate::engine::EngineCore;

/// One pile-to-pile transfer inside a move plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedTransfer {
    /// Source pile.
    pub from: PileId,
    /// Destination pile.
    pub to: PileId,
    /// The run being moved, bottom to top.
    /// SmallVec keeps short runs (the common case) off the heap.
    pub run: SmallVec<[CardId; 8]>,
    /// Score this transfer is worth. May be negative.
    pub score: i32,
}

/// The full consequence of one legal user gesture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovePlan {
    /// Transfers to apply, in order. A plain move has one; auto-move
    /// cascades have several.
    pub transfers: Vec<PlannedTransfer>,

    /// Cards to turn face up after the transfers (e.g. a newly exposed
    /// tableau card). Each flip is individually reverted on undo.
    pub flips: Vec<CardId>,
}

impl MovePlan {
    /// An empty plan. Useful as a builder start.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A plan consisting of a single transfer.
    #[must_use]
    pub fn single(from: PileId, to: PileId, run: &[CardId], score: i32) -> Self {
        Self::new().with_transfer(from, to, run, score)
    }

    /// Append a transfer.
    #[must_use]
    pub fn with_transfer(mut self, from: PileId, to: PileId, run: &[CardId], score: i32) -> Self {
        self.transfers.push(PlannedTransfer {
            from,
            to,
            run: SmallVec::from_slice(run),
            score,
        });
        self
    }

    /// Append a face-up flip.
    #[must_use]
    pub fn with_flip(mut self, card: CardId) -> Self {
        self.flips.push(card);
        self
    }

    /// Sum of the transfer scores.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.transfers.iter().map(|t| t.score).sum()
    }
}

/// Rules trait. Variants implement this to define their game.
///
/// ## Implementation Notes
///
/// - `layout` receives the freshly shuffled ordering and distributes it
///   into piles it registers on the table
/// - `evaluate` must not mutate anything; it only describes the move
/// - `is_won` is checked by the engine after every applied move
pub trait Rules {
    /// Display name of the variant.
    fn name(&self) -> &'static str;

    /// Register piles and deal `order` into them.
    ///
    /// Called once per game, after the deck reset and shuffle.
    fn layout(&self, core: &mut EngineCore, order: &[CardId]);

    /// Decide whether moving `card` from `from` to `to` is legal.
    ///
    /// Returns the plan for a legal move, `None` otherwise. Must be pure.
    fn evaluate(&self, core: &EngineCore, from: PileId, to: PileId, card: CardId)
        -> Option<MovePlan>;

    /// Has this game been won?
    fn is_won(&self, core: &EngineCore) -> bool;
}
