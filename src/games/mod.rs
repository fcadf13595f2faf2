//! Concrete rule sets.
//!
//! The shipped variants (Klondike, Spider, FreeCell) live with their
//! presentation layers and plug in through [`crate::rules::Rules`]; this
//! module holds the minimal variant used to validate the engine.

pub mod simple;

pub use simple::SimpleSolitaire;
