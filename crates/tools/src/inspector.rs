use serde::Serialize;
use std::fmt;
use wumpus_common::{Coord, Perceptions};
use wumpus_kernel::{Status, World};

/// World inspector for developer tooling.
///
/// Read-only queries against the world state for debugging, scripted runs,
/// and machine-readable output.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of what the player can know about the world.
    pub fn summary(world: &World) -> WorldSummary {
        WorldSummary {
            size: world.size(),
            agent: world.agent(),
            score: world.score(),
            arrows: world.arrows(),
            has_gold: world.has_gold(),
            status: world.status(),
            action_count: world.action_count(),
            perceptions: world.perceptions(),
            pending_events: world.events().len(),
        }
    }

    /// Where everything hidden is. Spoils the game; for debugging only.
    pub fn hazards(world: &World) -> HazardReport {
        HazardReport {
            wumpus: world.wumpus(),
            pits: world.pits().to_vec(),
            gold: world.gold(),
        }
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldSummary {
    pub size: usize,
    pub agent: Coord,
    pub score: i64,
    pub arrows: u32,
    pub has_gold: bool,
    pub status: Status,
    pub action_count: u64,
    pub perceptions: Perceptions,
    pub pending_events: usize,
}

impl fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "World: size={} agent={} score={} arrows={} gold={} status={} moves={} perceptions=[{}]",
            self.size,
            self.agent,
            self.score,
            self.arrows,
            self.has_gold,
            self.status,
            self.action_count,
            self.perceptions
        )
    }
}

/// Hidden placement of hazards and the prize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HazardReport {
    /// `None` once the wumpus has been shot.
    pub wumpus: Option<Coord>,
    pub pits: Vec<Coord>,
    pub gold: Coord,
}

impl fmt::Display for HazardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wumpus = match self.wumpus {
            Some(c) => c.to_string(),
            None => "dead".to_string(),
        };
        let pits: Vec<String> = self.pits.iter().map(Coord::to_string).collect();
        write!(
            f,
            "wumpus={} pits=[{}] gold={}",
            wumpus,
            pits.join(", "),
            self.gold
        )
    }
}
