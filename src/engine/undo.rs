//! Reversible operation log.
//!
//! Every successful user gesture pushes one [`OperationBatch`] onto the
//! [`UndoStack`]. A batch holds the atomic operations the gesture cascaded
//! into; undoing pops the batch and reverts its operations in reverse
//! order, whole, never partially.
//!
//! ## Operation Kinds
//!
//! - `Transfer` - a pile-to-pile run move with its score delta. Reverting
//!   restores exact source/destination membership and subtracts the score
//!   delta.
//! - `Generic` - an arbitrary reversal closure for gestures that are not a
//!   simple transfer (recycling a waste pile into the stock, face flips).
//!   Reverting just invokes the closure; it does not touch score or moves.
//!
//! The move count is batch-level bookkeeping: a gesture registers one move
//! no matter how many transfers it cascades into, so undoing it must give
//! exactly one move back. `EngineCore::undo_move` handles that once per
//! popped batch rather than once per transfer.
//!
//! Operations reference piles by [`PileId`] handle, never by aliased
//! references, so a reset cannot leave dangling entries.

use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::PileId;

use super::core::EngineCore;

/// Reversal closure for a [`Operation::Generic`] entry.
pub type RevertFn = Box<dyn FnOnce(&mut EngineCore)>;

/// One reversible atomic operation.
pub enum Operation {
    /// A pile-to-pile run transfer.
    Transfer {
        /// Pile the run came from.
        from: PileId,
        /// Pile the run went to.
        to: PileId,
        /// The moved run, in original relative order.
        run: SmallVec<[CardId; 8]>,
        /// Score gained by the transfer.
        score: i32,
    },
    /// An arbitrary reversal action.
    Generic(RevertFn),
}

impl Operation {
    /// Revert this operation against the engine core.
    pub fn revert(self, core: &mut EngineCore) {
        match self {
            Operation::Transfer { from, to, run, score } => {
                core.add_score(-score);
                core.table.remove_cards(to, &run);
                core.table.extend(from, &run);
            }
            Operation::Generic(action) => action(core),
        }
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Transfer { from, to, run, score } => f
                .debug_struct("Transfer")
                .field("from", from)
                .field("to", to)
                .field("run", run)
                .field("score", score)
                .finish(),
            Operation::Generic(_) => f.write_str("Generic(..)"),
        }
    }
}

/// One undo-stack entry: the operations of a single user-visible gesture.
#[derive(Debug, Default)]
pub struct OperationBatch {
    ops: Vec<Operation>,
}

impl OperationBatch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation.
    pub fn push(&mut self, op: Operation) {
        self.ops.push(op);
    }

    /// Record a transfer operation.
    pub fn push_transfer(&mut self, from: PileId, to: PileId, run: &[CardId], score: i32) {
        self.ops.push(Operation::Transfer {
            from,
            to,
            run: SmallVec::from_slice(run),
            score,
        });
    }

    /// Record a generic reversal.
    pub fn push_generic(&mut self, revert: impl FnOnce(&mut EngineCore) + 'static) {
        self.ops.push(Operation::Generic(Box::new(revert)));
    }

    /// Number of operations in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True when the batch records nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Consume the batch, yielding its operations in recorded order.
    pub(crate) fn into_ops(self) -> Vec<Operation> {
        self.ops
    }
}

/// Stack of operation batches, most recent gesture on top.
#[derive(Debug, Default)]
pub struct UndoStack {
    batches: Vec<OperationBatch>,
}

impl UndoStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one gesture's batch.
    pub fn push(&mut self, batch: OperationBatch) {
        self.batches.push(batch);
    }

    /// Pop the most recent batch.
    pub fn pop(&mut self) -> Option<OperationBatch> {
        self.batches.pop()
    }

    /// Drop every recorded batch. Called on a new deal.
    pub fn clear(&mut self) {
        self.batches.clear();
    }

    /// Number of undoable gestures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// True when nothing can be undone.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}
