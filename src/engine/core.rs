//! Shared per-game mutable state.
//!
//! `EngineCore` is the component every variant engine owns: the deck, the
//! pile table, the undo stack, the timer, and the score/move bookkeeping.
//! It is deliberately rules-free - the [`GameEngine`](super::GameEngine)
//! wrapper pairs it with a [`Rules`](crate::rules::Rules) implementation.
//!
//! Variants reach the table and deck directly (their layouts and custom
//! gestures need to), but score, move count, and the undo stack only move
//! through the methods here so the bookkeeping invariants hold.

use std::time::{Duration, Instant};

use crate::cards::Deck;
use crate::core::{GameTable, GameTimer};
use crate::stats::GameSummary;

use super::undo::{Operation, OperationBatch, UndoStack};

/// Deck, piles, undo log, timer, and score bookkeeping for one game.
#[derive(Debug, Default)]
pub struct EngineCore {
    /// The 52 reusable cards. Built once, reset every deal.
    pub deck: Deck,

    /// The piles of the current layout.
    pub table: GameTable,

    undo: UndoStack,
    timer: GameTimer,
    score: i32,
    moves: u32,
    won: bool,
}

impl EngineCore {
    /// Create a core with a fresh deck and an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the undo stack, stop the timer, and zero elapsed time, score,
    /// move count, and the win flag. Pile handles stay registered.
    pub fn reset_internal_state(&mut self) {
        self.undo.clear();
        self.timer.reset();
        self.table.clear_cards();
        self.score = 0;
        self.moves = 0;
        self.won = false;
    }

    /// Push one gesture's operation batch onto the undo stack.
    pub fn record_moves(&mut self, batch: OperationBatch) {
        self.undo.push(batch);
    }

    /// Undo the most recent gesture. No-op when nothing is recorded.
    ///
    /// Operations revert in reverse order; the batch is undone whole. A
    /// gesture that contained any transfer registered exactly one move, so
    /// the move count comes back once per batch, not once per transfer.
    /// Generic-only gestures keep their registered move.
    pub fn undo_move(&mut self) {
        if let Some(batch) = self.undo.pop() {
            let ops = batch.into_ops();
            let had_transfer = ops
                .iter()
                .any(|op| matches!(op, Operation::Transfer { .. }));
            for op in ops.into_iter().rev() {
                op.revert(self);
            }
            if had_transfer {
                self.decrement_moves();
            }
        }
    }

    /// Book one successful gesture: bump the move count, add its score,
    /// and start the timer if this was the first move of the game.
    pub fn register_move(&mut self, score_delta: i32, now: Instant) {
        if self.moves == 0 {
            self.timer.start(now);
        }
        self.moves += 1;
        self.score += score_delta;
    }

    /// Mark the game won and freeze the timer.
    pub fn mark_won(&mut self) {
        self.won = true;
        self.timer.stop();
    }

    /// Stop the timer without touching the win flag (navigation away).
    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    /// Post a cooperative timer tick.
    pub fn tick(&mut self, now: Instant) {
        self.timer.tick(now);
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Number of successful gestures this game.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Has the win predicate fired this game?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Elapsed play time.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    /// Number of undoable gestures.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// End-of-game snapshot consumed by the statistics aggregator.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            won: self.won,
            score: self.score,
            elapsed: self.timer.elapsed(),
        }
    }

    pub(crate) fn add_score(&mut self, delta: i32) {
        self.score += delta;
    }

    pub(crate) fn decrement_moves(&mut self) {
        self.moves = self.moves.saturating_sub(1);
    }
}
