//! Shared value types: grid coordinates, movement directions, and percepts.
//!
//! # Invariants
//! - All types are plain `Copy` data with no reference to engine state.
//! - Coordinates are unsigned; bounds are checked against a grid size by the caller.

pub mod types;

pub use types::{Coord, Direction, ParseDirectionError, Percept, Perceptions};
