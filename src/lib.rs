//! # solitaire-core
//!
//! A solitaire card-game runtime shared by three variants (Klondike,
//! Spider, FreeCell). The crate is the game's hard core: deck lifecycle,
//! move legality delegation, a reversible operation log, timing, scoring,
//! and per-variant statistics. Rendering, input, and navigation live with
//! the host and talk to this crate through plain types.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic**: the engine never hardcodes a rule set. Variants
//!    implement [`rules::Rules`], supplying the layout, the legality
//!    decision, and the win predicate.
//!
//! 2. **Reversible by Construction**: every successful gesture records one
//!    [`engine::OperationBatch`]; undo replays it backwards, whole.
//!
//! 3. **Handles Over References**: piles are addressed by
//!    [`core::PileId`], so resets can never leave dangling undo entries.
//!
//! 4. **Pure State at the Edges**: persistence sees only
//!    `state()`/`apply_state()` snapshots; all I/O failure is absorbed at
//!    the storage gateway.
//!
//! ## Modules
//!
//! - `cards`: card identities, play state, and the reusable 52-card deck
//! - `core`: deal randomness, pile storage, game timing
//! - `engine`: the operation log and the variant-generic engine
//! - `rules`: the variant contract
//! - `stats`: per-variant statistics aggregation
//! - `persist`: the save-file payload and storage gateway
//! - `games`: the minimal validation variant

pub mod cards;
pub mod core;
pub mod engine;
pub mod games;
pub mod persist;
pub mod rules;
pub mod stats;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, Colour, Deck, Rank, Suit, DECK_SIZE};

pub use crate::core::{DealRng, GameTable, GameTimer, PileId, TICK_INTERVAL};

pub use crate::engine::{EngineCore, EngineEvent, GameEngine, Operation, OperationBatch, UndoStack};

pub use crate::rules::{MovePlan, PlannedTransfer, Rules};

pub use crate::stats::{GameStatistics, GameStatisticsState, GameSummary};

pub use crate::persist::{
    load_state, save_state, Difficulty, DrawMode, FileStorage, PersistentState, Settings,
    StorageError, StorageProvider, SETTINGS_KEY,
};
