use rand::Rng;
use serde::Serialize;
use std::fmt;
use wumpus_common::{Coord, Direction, Perceptions};

use crate::layout::{Layout, LayoutError};
use crate::rules;

/// Where the game stands. `Dead` and `Won` are both terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    Active,
    Dead,
    Won,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::Active
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Active => f.write_str("active"),
            Status::Dead => f.write_str("dead"),
            Status::Won => f.write_str("won"),
        }
    }
}

/// Something noteworthy that a command caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Signal {
    WumpusKilled,
    ShotMissed,
    EatenByWumpus,
    FellInPit,
    GoldFound,
    Escaped,
}

/// An event record produced by every successful command.
///
/// Moves and shots are the inputs needed to replay a game from its layout;
/// signals record what those inputs caused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldEvent {
    /// The agent stepped one cell.
    Moved {
        from: Coord,
        to: Coord,
        direction: Direction,
    },
    /// An arrow was loosed at the target cell.
    ArrowShot { target: Coord },
    /// A rule fired as a consequence of the preceding move or shot.
    Signaled(Signal),
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Agent location after the command.
    pub location: Coord,
    /// Score after the command.
    pub score: i64,
    /// Signals raised, in the order the rules fired.
    pub signals: Vec<Signal>,
}

impl Outcome {
    pub fn has(&self, signal: Signal) -> bool {
        self.signals.contains(&signal)
    }
}

/// Rejected commands. None of them change the world.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("cannot move {direction} from {from}: edge of the grid")]
    InvalidMove { from: Coord, direction: Direction },
    #[error("no arrows left")]
    NoArrows,
}

/// Errors from rebuilding a world out of its event log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("event {index} was rejected: {source}")]
    Rejected { index: usize, source: GameError },
    #[error("event {index} has the agent at {actual}, log says {expected}")]
    Diverged {
        index: usize,
        expected: Coord,
        actual: Coord,
    },
}

/// The authoritative world state.
///
/// All mutations go through `move_agent` and `shoot_arrow`. The kernel owns
/// the truth; renderers and the presentation layer only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    layout: Layout,
    agent: Coord,
    /// `None` once the wumpus has been shot.
    wumpus: Option<Coord>,
    arrows: u32,
    has_gold: bool,
    status: Status,
    score: i64,
    action_count: u64,
    /// Append-only event log of all successful commands.
    event_log: Vec<WorldEvent>,
}

impl World {
    /// Create a `size` x `size` world with hazards placed by `rng`.
    pub fn new<R: Rng>(size: usize, rng: &mut R) -> Result<Self, LayoutError> {
        Self::from_layout(Layout::random(size, rng)?)
    }

    /// Create a world from an explicit placement, checking every constraint.
    pub fn from_layout(layout: Layout) -> Result<Self, LayoutError> {
        layout.validate()?;
        tracing::info!(size = layout.size, "new world");
        Ok(Self {
            wumpus: Some(layout.wumpus),
            layout,
            agent: Coord::ORIGIN,
            arrows: rules::STARTING_ARROWS,
            has_gold: false,
            status: Status::Active,
            score: 0,
            action_count: 0,
            event_log: Vec::new(),
        })
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.layout.size
    }

    /// The placement this world started from. The wumpus entry keeps its
    /// original cell even after it has been shot.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn agent(&self) -> Coord {
        self.agent
    }

    /// Current wumpus cell, or `None` once it has been shot.
    pub fn wumpus(&self) -> Option<Coord> {
        self.wumpus
    }

    pub fn pits(&self) -> &[Coord] {
        &self.layout.pits
    }

    pub fn gold(&self) -> Coord {
        self.layout.gold
    }

    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    pub fn has_gold(&self) -> bool {
        self.has_gold
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// False once the agent has died or escaped.
    pub fn is_alive(&self) -> bool {
        self.status == Status::Active
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Number of moves made. Shots do not count.
    pub fn action_count(&self) -> u64 {
        self.action_count
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Orthogonal neighbours of `location` inside the grid, ordered up, down, left, right.
    pub fn adjacent(&self, location: Coord) -> Vec<Coord> {
        location.neighbors(self.size())
    }

    /// What the agent senses from its current cell.
    pub fn perceptions(&self) -> Perceptions {
        let adjacent = self.adjacent(self.agent);
        Perceptions {
            stench: self.wumpus.is_some_and(|w| adjacent.contains(&w)),
            breeze: self.layout.pits.iter().any(|p| adjacent.contains(p)),
        }
    }

    /// Step the agent one cell, pay the move cost, then resolve whatever is there.
    pub fn move_agent(&mut self, direction: Direction) -> Result<Outcome, GameError> {
        self.ensure_active()?;
        let from = self.agent;
        let to = from
            .step(direction, self.size())
            .ok_or(GameError::InvalidMove { from, direction })?;

        self.agent = to;
        self.score -= rules::MOVE_COST;
        self.action_count += 1;
        self.event_log.push(WorldEvent::Moved {
            from,
            to,
            direction,
        });
        tracing::debug!(%from, %to, score = self.score, "agent moved");

        let mut signals = Vec::new();
        self.resolve_encounter(&mut signals);
        Ok(self.finish(signals))
    }

    /// Spend an arrow on `target`.
    ///
    /// Any cell may be targeted; the engine does not require it to be next to
    /// the agent. A target off the grid can never hold the wumpus and counts
    /// as a miss.
    pub fn shoot_arrow(&mut self, target: Coord) -> Result<Outcome, GameError> {
        self.ensure_active()?;
        if self.arrows == 0 {
            return Err(GameError::NoArrows);
        }

        self.arrows -= 1;
        self.event_log.push(WorldEvent::ArrowShot { target });

        let mut signals = Vec::new();
        if self.wumpus == Some(target) {
            self.wumpus = None;
            self.score += rules::KILL_REWARD;
            signals.push(Signal::WumpusKilled);
            tracing::debug!(%target, "wumpus killed");
            self.resolve_encounter(&mut signals);
        } else {
            self.score -= rules::MISS_PENALTY;
            signals.push(Signal::ShotMissed);
            tracing::debug!(%target, "shot missed");
        }
        Ok(self.finish(signals))
    }

    /// Rebuild a world by re-applying the moves and shots in `events` to a
    /// fresh world built from `layout`. Signal records are re-derived, not read.
    pub fn replay(layout: Layout, events: &[WorldEvent]) -> Result<Self, ReplayError> {
        let mut world = Self::from_layout(layout)?;
        for (index, event) in events.iter().enumerate() {
            match *event {
                WorldEvent::Moved {
                    from,
                    to,
                    direction,
                } => {
                    if world.agent != from {
                        return Err(ReplayError::Diverged {
                            index,
                            expected: from,
                            actual: world.agent,
                        });
                    }
                    let outcome = world
                        .move_agent(direction)
                        .map_err(|source| ReplayError::Rejected { index, source })?;
                    if outcome.location != to {
                        return Err(ReplayError::Diverged {
                            index,
                            expected: to,
                            actual: outcome.location,
                        });
                    }
                }
                WorldEvent::ArrowShot { target } => {
                    world
                        .shoot_arrow(target)
                        .map_err(|source| ReplayError::Rejected { index, source })?;
                }
                WorldEvent::Signaled(_) => {}
            }
        }
        Ok(world)
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    /// Death, then gold pickup, then escape. Applies the end-of-game
    /// adjustment if any of them ended the game.
    fn resolve_encounter(&mut self, signals: &mut Vec<Signal>) {
        if self.wumpus == Some(self.agent) {
            self.status = Status::Dead;
            self.score -= rules::DEATH_PENALTY;
            signals.push(Signal::EatenByWumpus);
        } else if self.layout.pits.contains(&self.agent) {
            self.status = Status::Dead;
            self.score -= rules::DEATH_PENALTY;
            signals.push(Signal::FellInPit);
        } else {
            if self.agent == self.layout.gold && !self.has_gold {
                self.has_gold = true;
                self.score += rules::GOLD_REWARD;
                signals.push(Signal::GoldFound);
            }
            if self.agent == Coord::ORIGIN && self.has_gold {
                self.status = Status::Won;
                self.score += rules::ESCAPE_REWARD;
                signals.push(Signal::Escaped);
            }
        }

        if self.status.is_over() {
            self.score += rules::terminal_adjustment(self.action_count, self.arrows);
            tracing::info!(
                status = %self.status,
                score = self.score,
                moves = self.action_count,
                "game over"
            );
        }
    }

    fn finish(&mut self, signals: Vec<Signal>) -> Outcome {
        self.event_log
            .extend(signals.iter().copied().map(WorldEvent::Signaled));
        Outcome {
            location: self.agent,
            score: self.score,
            signals,
        }
    }
}
