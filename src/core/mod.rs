//! Core building blocks shared by every variant: deal randomness, pile
//! storage by stable handle, and game timing.

pub mod pile;
pub mod rng;
pub mod timer;

pub use pile::{GameTable, PileId};
pub use rng::DealRng;
pub use timer::{GameTimer, TICK_INTERVAL};
