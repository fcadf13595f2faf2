//! The persisted payload: settings plus per-variant statistics snapshots.
//!
//! The whole payload is one atomic blob; there are no partial writes of
//! sub-fields, and no versioning or migration - any change to these shapes
//! is a breaking change.

use serde::{Deserialize, Serialize};

use crate::stats::GameStatisticsState;

/// Game difficulty setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// One suit only.
    #[default]
    Easy,
    /// Two suits only.
    Medium,
    /// Four suits.
    Hard,
}

impl Difficulty {
    /// The next difficulty in the Easy -> Medium -> Hard -> Easy cycle.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// How many cards a stock draw turns over.
///
/// Persisted as its card count (1 or 3).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DrawMode {
    /// Draw one card.
    #[default]
    One,
    /// Draw three cards.
    Three,
}

impl DrawMode {
    /// Cards turned over per draw.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            DrawMode::One => DrawMode::Three,
            DrawMode::Three => DrawMode::One,
        }
    }
}

impl From<DrawMode> for u8 {
    fn from(mode: DrawMode) -> Self {
        mode.card_count() as u8
    }
}

impl TryFrom<u8> for DrawMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DrawMode::One),
            3 => Ok(DrawMode::Three),
            other => Err(format!("invalid draw mode {other}, expected 1 or 3")),
        }
    }
}

/// User settings shared across variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub draw_mode: DrawMode,
}

/// The full save-file payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistentState {
    /// Shared settings.
    pub settings: Settings,
    /// Klondike statistics snapshot.
    pub klondike: GameStatisticsState,
    /// Spider statistics snapshot.
    pub spider: GameStatisticsState,
    /// FreeCell statistics snapshot.
    pub freecell: GameStatisticsState,
}
