use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cell on the square grid, addressed by row then column.
///
/// Row 0 is the top edge and column 0 the left edge, so the agent's start
/// cell is `Coord::ORIGIN`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// The agent's start cell and escape hatch.
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this cell lies inside a `size` x `size` grid.
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The neighbouring cell one step in `direction`, or `None` if that step
    /// would leave a `size` x `size` grid.
    pub fn step(self, direction: Direction, size: usize) -> Option<Coord> {
        let Coord { row, col } = self;
        let next = match direction {
            Direction::Up => Coord::new(row.checked_sub(1)?, col),
            Direction::Down => Coord::new(row + 1, col),
            Direction::Left => Coord::new(row, col.checked_sub(1)?),
            Direction::Right => Coord::new(row, col + 1),
        };
        next.in_bounds(size).then_some(next)
    }

    /// Orthogonal neighbours inside the grid, always in up, down, left, right order.
    pub fn neighbors(self, size: usize) -> Vec<Coord> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.step(d, size))
            .collect()
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four grid-orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order neighbours are reported.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?} (expected up, down, left or right)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" | "north" | "n" => Ok(Direction::Up),
            "down" | "d" | "south" | "s" => Ok(Direction::Down),
            "left" | "l" | "west" | "w" => Ok(Direction::Left),
            "right" | "r" | "east" | "e" => Ok(Direction::Right),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// A sensory cue picked up from a neighbouring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Percept {
    /// The wumpus is in an adjacent cell.
    Stench,
    /// A pit is in an adjacent cell.
    Breeze,
}

impl fmt::Display for Percept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percept::Stench => f.write_str("Stench"),
            Percept::Breeze => f.write_str("Breeze"),
        }
    }
}

/// The set of percepts sensed at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Perceptions {
    pub stench: bool,
    pub breeze: bool,
}

impl Perceptions {
    pub fn contains(&self, percept: Percept) -> bool {
        match percept {
            Percept::Stench => self.stench,
            Percept::Breeze => self.breeze,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.stench && !self.breeze
    }

    /// Percepts in reporting order: stench before breeze.
    pub fn iter(&self) -> impl Iterator<Item = Percept> + '_ {
        [(self.stench, Percept::Stench), (self.breeze, Percept::Breeze)]
            .into_iter()
            .filter_map(|(present, p)| present.then_some(p))
    }
}

impl fmt::Display for Perceptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let names: Vec<String> = self.iter().map(|p| p.to_string()).collect();
        f.write_str(&names.join(", "))
    }
}
