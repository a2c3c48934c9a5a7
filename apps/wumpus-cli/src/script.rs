//! Non-interactive runs: a fixed list of actions against a seeded world.

use serde::Serialize;
use wumpus_common::Coord;
use wumpus_input::Action;
use wumpus_kernel::{Layout, Signal, World};
use wumpus_tools::{HazardReport, WorldInspector, WorldSummary};

use crate::session::Session;

/// What one scripted action did.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub action: String,
    pub location: Coord,
    pub score: i64,
    pub signals: Vec<Signal>,
    /// Set when the action was refused; the world is unchanged.
    pub refused: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScriptReport {
    pub seed: u64,
    /// Placement the run started from.
    pub layout: Layout,
    pub steps: Vec<StepReport>,
    pub summary: WorldSummary,
    pub hazards: HazardReport,
}

/// Apply every action in order. Refused actions are recorded and skipped;
/// actions after the game ends are refused by the engine.
pub fn run(world: World, seed: u64, actions: &[Action], free_aim: bool) -> ScriptReport {
    let layout = world.layout().clone();
    let mut session = Session::new(world, free_aim);
    let steps = actions
        .iter()
        .map(|&action| {
            let result = session.act(action);
            let world = session.world();
            match result {
                Ok(outcome) => StepReport {
                    action: action.to_string(),
                    location: outcome.location,
                    score: outcome.score,
                    signals: outcome.signals,
                    refused: None,
                },
                Err(refusal) => StepReport {
                    action: action.to_string(),
                    location: world.agent(),
                    score: world.score(),
                    signals: Vec::new(),
                    refused: Some(refusal.to_string()),
                },
            }
        })
        .collect();

    ScriptReport {
        seed,
        layout,
        steps,
        summary: WorldInspector::summary(session.world()),
        hazards: WorldInspector::hazards(session.world()),
    }
}
