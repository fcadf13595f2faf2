//! Per-variant statistics aggregation.
//!
//! One `GameStatistics` instance exists per variant. It consumes an
//! end-of-game [`GameSummary`] snapshot from the engine - it never owns or
//! polls the engine itself - and maintains running counters: games
//! played/won/lost, the signed streak, streak highs, score totals, and
//! time totals.
//!
//! Averages are always recomputed from the cumulative counters, never
//! stored independently of them.
//!
//! ## Streak Semantics
//!
//! `current_streak` is positive for consecutive wins, negative for
//! consecutive losses; a sign flip resets the magnitude to 1. The
//! highest-streak update is a single mutually-exclusive branch: a call
//! updates the winning high, **or else** the losing high, never both.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// End-of-game snapshot read from the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// Did the game end in a win?
    pub won: bool,
    /// Final score.
    pub score: i32,
    /// Elapsed play time.
    pub elapsed: Duration,
}

/// Running statistics counters for one variant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameStatistics {
    games_played: u32,
    games_won: u32,
    games_lost: u32,
    highest_winning_streak: u32,
    highest_losing_streak: u32,
    current_streak: i32,
    cumulative_score: i32,
    highest_score: i32,
    cumulative_game_time: Duration,
}

impl GameStatistics {
    /// Create zeroed statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into the counters.
    ///
    /// The caller triggers this exactly once per game end; the engine
    /// guards against double-recording.
    pub fn update(&mut self, summary: &GameSummary) {
        self.games_played += 1;
        if summary.won {
            self.games_won += 1;
        } else {
            self.games_lost += 1;
        }

        // Sign flips reset the streak magnitude to 1.
        self.current_streak = if summary.won {
            if self.current_streak < 0 { 1 } else { self.current_streak + 1 }
        } else if self.current_streak > 0 {
            -1
        } else {
            self.current_streak - 1
        };

        // Mutually exclusive: at most one high can change per call.
        if self.current_streak > self.highest_winning_streak as i32 {
            self.highest_winning_streak = self.current_streak as u32;
        } else if self.current_streak.unsigned_abs() > self.highest_losing_streak {
            self.highest_losing_streak = self.current_streak.unsigned_abs();
        }

        // Only won games contribute to the score counters.
        if summary.won {
            if summary.score > self.highest_score {
                self.highest_score = summary.score;
            }
            self.cumulative_score += summary.score;
        }

        self.cumulative_game_time += summary.elapsed;
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Games played.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Games won.
    #[must_use]
    pub fn games_won(&self) -> u32 {
        self.games_won
    }

    /// Games lost.
    #[must_use]
    pub fn games_lost(&self) -> u32 {
        self.games_lost
    }

    /// Longest run of consecutive wins ever recorded.
    #[must_use]
    pub fn highest_winning_streak(&self) -> u32 {
        self.highest_winning_streak
    }

    /// Longest run of consecutive losses ever recorded.
    #[must_use]
    pub fn highest_losing_streak(&self) -> u32 {
        self.highest_losing_streak
    }

    /// Signed current streak: positive wins, negative losses.
    #[must_use]
    pub fn current_streak(&self) -> i32 {
        self.current_streak
    }

    /// Total score over all won games.
    #[must_use]
    pub fn cumulative_score(&self) -> i32 {
        self.cumulative_score
    }

    /// Best score of any won game.
    #[must_use]
    pub fn highest_score(&self) -> i32 {
        self.highest_score
    }

    /// Mean score per won game. Zero before the first win.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            f64::from(self.cumulative_score) / f64::from(self.games_won)
        }
    }

    /// Total play time over all completed games.
    #[must_use]
    pub fn cumulative_game_time(&self) -> Duration {
        self.cumulative_game_time
    }

    /// Mean play time per completed game. Zero before the first game.
    #[must_use]
    pub fn average_game_time(&self) -> Duration {
        let completed = self.games_won + self.games_lost;
        if completed == 0 {
            Duration::ZERO
        } else {
            self.cumulative_game_time / completed
        }
    }

    /// Snapshot every counter for persistence.
    #[must_use]
    pub fn state(&self) -> GameStatisticsState {
        GameStatisticsState {
            games_played: self.games_played,
            games_won: self.games_won,
            games_lost: self.games_lost,
            highest_winning_streak: self.highest_winning_streak,
            highest_losing_streak: self.highest_losing_streak,
            current_streak: self.current_streak,
            cumulative_score: self.cumulative_score,
            highest_score: self.highest_score,
            average_score: self.average_score(),
            cumulative_game_time: self.cumulative_game_time,
            average_game_time: self.average_game_time(),
        }
    }

    /// Restore every counter from a snapshot.
    ///
    /// The snapshot's stored averages are ignored; averages are always
    /// recomputed from the cumulative counters on read.
    pub fn apply_state(&mut self, state: &GameStatisticsState) {
        self.games_played = state.games_played;
        self.games_won = state.games_won;
        self.games_lost = state.games_lost;
        self.highest_winning_streak = state.highest_winning_streak;
        self.highest_losing_streak = state.highest_losing_streak;
        self.current_streak = state.current_streak;
        self.cumulative_score = state.cumulative_score;
        self.highest_score = state.highest_score;
        self.cumulative_game_time = state.cumulative_game_time;
    }
}

/// Serializable snapshot of one variant's counters.
///
/// Field names and shapes are the persistence contract; changing them is a
/// breaking change (there is no versioning or migration).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStatisticsState {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub highest_winning_streak: u32,
    pub highest_losing_streak: u32,
    pub current_streak: i32,
    pub cumulative_score: i32,
    pub highest_score: i32,
    pub average_score: f64,
    pub cumulative_game_time: Duration,
    pub average_game_time: Duration,
}
