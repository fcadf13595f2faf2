//! Persistence: the save-file payload, settings, and the storage gateway.

pub mod state;
pub mod storage;

pub use state::{Difficulty, DrawMode, PersistentState, Settings};
pub use storage::{
    load_state, save_state, FileStorage, StorageError, StorageProvider, SETTINGS_KEY,
};
