//! Engine: the reversible operation log and the variant-generic
//! orchestrator built on it.

pub mod core;
pub mod game;
pub mod undo;

pub use self::core::EngineCore;
pub use game::{EngineEvent, GameEngine};
pub use undo::{Operation, OperationBatch, RevertFn, UndoStack};
