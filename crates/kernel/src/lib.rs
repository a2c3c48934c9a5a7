//! World Kernel: authoritative wumpus world state and the rules that mutate it.
//!
//! # Invariants
//! - All state mutations flow through `World::move_agent` and `World::shoot_arrow`.
//! - Once the game is over, no command changes any field.
//! - Placement randomness comes only from the injected RNG, so a seeded RNG
//!   reproduces the same world.

pub mod layout;
pub mod rules;
pub mod world;

pub use layout::{Layout, LayoutError};
pub use world::{GameError, Outcome, ReplayError, Signal, Status, World, WorldEvent};
