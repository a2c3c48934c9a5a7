use std::fmt;
use wumpus_common::{Coord, Direction};
use wumpus_kernel::{GameError, Outcome, World};

/// A world-changing command that any presentation layer can produce.
///
/// The kernel consumes actions, never raw keystrokes or text, so the
/// interactive and scripted front ends share the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step the agent one cell.
    Move(Direction),
    /// Loose the arrow at a cell.
    Shoot(Coord),
}

impl Action {
    /// Run this action against the world.
    pub fn apply(self, world: &mut World) -> Result<Outcome, GameError> {
        tracing::trace!(action = %self, "applying action");
        match self {
            Action::Move(direction) => world.move_agent(direction),
            Action::Shoot(target) => world.shoot_arrow(target),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(direction) => write!(f, "{direction}"),
            Action::Shoot(target) => write!(f, "shoot {} {}", target.row, target.col),
        }
    }
}
