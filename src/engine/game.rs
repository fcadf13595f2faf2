//! The variant-generic game engine.
//!
//! `GameEngine<R>` pairs an [`EngineCore`] with a [`Rules`] implementation
//! and owns the variant's [`GameStatistics`] instance. It orchestrates one
//! game at a time through the state machine
//! `Dealt -> InProgress -> {Won, Abandoned}`:
//!
//! - `deal` resets internal state, shuffles, and lets the variant lay out
//! - `check_and_move_card` delegates legality to the variant and applies
//!   the resulting plan as one undoable gesture
//! - winning freezes the timer, records statistics once, and queues a
//!   [`EngineEvent::GameWon`] for the host to drain
//! - `leave_game` records an attempted-but-unfinished game as a loss
//!
//! All operations are synchronous; the engine is mutated from one logical
//! control thread only.

use std::time::{Duration, Instant};

use crate::cards::CardId;
use crate::core::{DealRng, PileId};
use crate::rules::Rules;
use crate::stats::GameStatistics;

use super::core::EngineCore;
use super::undo::{OperationBatch, RevertFn};

/// Notification queued for external collaborators (navigation, UI).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// The current game ended in a win.
    GameWon,
}

/// A solitaire engine for one variant.
pub struct GameEngine<R: Rules> {
    core: EngineCore,
    rules: R,
    stats: GameStatistics,
    rng: DealRng,
    events: Vec<EngineEvent>,
    /// Set once the current game has been folded into the statistics.
    stats_recorded: bool,
}

impl<R: Rules> GameEngine<R> {
    /// Create an engine seeded from OS entropy.
    #[must_use]
    pub fn new(rules: R) -> Self {
        Self::with_rng(rules, DealRng::from_entropy())
    }

    /// Create an engine with a fixed deal seed. Deterministic; for tests
    /// and daily-deal style features.
    #[must_use]
    pub fn with_seed(rules: R, seed: u64) -> Self {
        Self::with_rng(rules, DealRng::new(seed))
    }

    fn with_rng(rules: R, rng: DealRng) -> Self {
        Self {
            core: EngineCore::new(),
            rules,
            stats: GameStatistics::new(),
            rng,
            events: Vec::new(),
            stats_recorded: false,
        }
    }

    /// Deal a new game: reset internal state, shuffle, and lay out.
    pub fn deal(&mut self) {
        self.core.reset_internal_state();
        self.stats_recorded = false;
        let order = self.core.deck.new_shuffled_order(&mut self.rng);
        self.rules.layout(&mut self.core, &order);
    }

    /// Check a move, and unless `check_only`, perform it.
    ///
    /// Legality is delegated to the variant. With `check_only` the decision
    /// is evaluated with zero observable mutation regardless of outcome.
    /// Otherwise a legal move applies every planned transfer and flip,
    /// records one operation batch, updates score and move count, and
    /// checks the win predicate. Returns whether the move was legal.
    pub fn check_and_move_card(
        &mut self,
        from: PileId,
        to: PileId,
        card: CardId,
        check_only: bool,
    ) -> bool {
        let Some(plan) = self.rules.evaluate(&self.core, from, to, card) else {
            return false;
        };
        if check_only {
            return true;
        }

        let mut batch = OperationBatch::new();
        for transfer in &plan.transfers {
            self.core.table.remove_cards(transfer.from, &transfer.run);
            self.core.table.extend(transfer.to, &transfer.run);
            batch.push_transfer(transfer.from, transfer.to, &transfer.run, transfer.score);
        }
        for &card in &plan.flips {
            self.core.deck.card_mut(card).face_down = false;
            batch.push_generic(move |core: &mut EngineCore| {
                core.deck.card_mut(card).face_down = true;
            });
        }

        self.core.register_move(plan.total_score(), Instant::now());
        self.core.record_moves(batch);

        if self.rules.is_won(&self.core) {
            self.fire_game_won();
        }
        true
    }

    /// Push one gesture's operation batch.
    ///
    /// Used by variant-specific gestures (stock draws, recycles) that
    /// mutate the core directly and record their own reversal.
    pub fn record_moves(&mut self, batch: OperationBatch) {
        self.core.record_moves(batch);
    }

    /// Book a variant-driven gesture that bypassed `check_and_move_card`.
    pub fn register_move(&mut self, score_delta: i32) {
        self.core.register_move(score_delta, Instant::now());
    }

    /// Undo the most recent gesture. No-op when nothing is recorded.
    pub fn undo_move(&mut self) {
        self.core.undo_move();
    }

    /// Mark the game won: freeze the timer, fold the result into the
    /// statistics exactly once, and queue [`EngineEvent::GameWon`].
    pub fn fire_game_won(&mut self) {
        self.core.mark_won();
        self.update_statistics();
        self.events.push(EngineEvent::GameWon);
    }

    /// Leave the current game (navigation away).
    ///
    /// An attempted game - any move made - is recorded in the statistics
    /// even without a win, so abandoning counts as a loss. A game already
    /// recorded (won) is not recorded twice.
    pub fn leave_game(&mut self) {
        self.core.stop_timer();
        if self.core.moves() > 0 {
            self.update_statistics();
        }
    }

    fn update_statistics(&mut self) {
        if self.stats_recorded {
            return;
        }
        self.stats_recorded = true;
        self.stats.update(&self.core.summary());
    }

    /// Post a cooperative timer tick from the host event loop.
    pub fn tick(&mut self, now: Instant) {
        self.core.tick(now);
    }

    /// Drain queued notifications.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Record a generic reversal as a single-operation gesture batch.
    pub fn record_generic(&mut self, revert: RevertFn) {
        let mut batch = OperationBatch::new();
        batch.push(super::undo::Operation::Generic(revert));
        self.core.record_moves(batch);
    }

    /// The shared game state. Variants read piles and cards through this.
    #[must_use]
    pub fn core(&self) -> &EngineCore {
        &self.core
    }

    /// Mutable access for variant layouts and custom gestures.
    ///
    /// Same trust boundary as the rules trait itself: variants mutate
    /// piles, the engine keeps the bookkeeping.
    pub fn core_mut(&mut self) -> &mut EngineCore {
        &mut self.core
    }

    /// The variant's rules.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// This variant's statistics.
    #[must_use]
    pub fn stats(&self) -> &GameStatistics {
        &self.stats
    }

    /// Mutable statistics access (state restore, reset).
    pub fn stats_mut(&mut self) -> &mut GameStatistics {
        &mut self.stats
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.core.score()
    }

    /// Moves made this game.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.core.moves()
    }

    /// Elapsed play time.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.core.elapsed()
    }

    /// Has this game been won?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.core.is_won()
    }
}
