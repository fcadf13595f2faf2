//! Storage gateway: opaque key/value save and load of the persisted state.
//!
//! The engine and aggregator only expose pure `state()`/`apply_state()`
//! transforms; all I/O goes through a [`StorageProvider`]. Failure policy
//! at this edge:
//!
//! - a missing save on first run is a normal, non-error outcome
//! - any other load failure is logged and treated as "no saved state"
//! - a failed save is logged and dropped
//!
//! Nothing propagates to gameplay code. Callers sequence saves themselves
//! (on navigation away, never mid-move).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::state::PersistentState;

/// Storage key for the consolidated settings-and-statistics blob.
pub const SETTINGS_KEY: &str = "mainSettings";

/// Failure at the storage edge. Absorbed by the gateway, never raised to
/// gameplay code.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying I/O failed.
    Io(io::Error),
    /// The payload could not be encoded or decoded.
    Encoding(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage i/o error: {e}"),
            StorageError::Encoding(e) => write!(f, "storage encoding error: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Encoding(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Encoding(e)
    }
}

/// Opaque key/value persistence for the save-file payload.
pub trait StorageProvider {
    /// Save the payload under `key`.
    fn save(&self, key: &str, state: &PersistentState) -> Result<(), StorageError>;

    /// Load the payload stored under `key`.
    ///
    /// `Ok(None)` means no saved state exists - the normal first-run case.
    fn load(&self, key: &str) -> Result<Option<PersistentState>, StorageError>;
}

/// File-backed provider: one JSON document per key under a root directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a provider rooted at `root`. The directory is created on the
    /// first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StorageProvider for FileStorage {
    fn save(&self, key: &str, state: &PersistentState) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_vec(state)?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<PersistentState>, StorageError> {
        let bytes = match fs::read(self.path_for(key)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

/// Save through the provider, absorbing any failure.
pub fn save_state(provider: &dyn StorageProvider, key: &str, state: &PersistentState) {
    if let Err(e) = provider.save(key, state) {
        warn!("failed to save state under '{key}': {e}");
    }
}

/// Load through the provider, absorbing any failure.
///
/// Returns defaults when nothing is stored or the load fails.
pub fn load_state(provider: &dyn StorageProvider, key: &str) -> PersistentState {
    match provider.load(key) {
        Ok(Some(state)) => state,
        Ok(None) => {
            debug!("no saved state under '{key}', using defaults");
            PersistentState::default()
        }
        Err(e) => {
            warn!("failed to load state under '{key}': {e}");
            PersistentState::default()
        }
    }
}
