//! One game as the terminal front end sees it: the world plus the
//! presentation rules layered on top of the engine.

use wumpus_common::Coord;
use wumpus_input::{Action, ParseError, parse_action};
use wumpus_kernel::{GameError, Outcome, World};
use wumpus_render::error_message;

/// A line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Help,
    Look,
    Quit,
    Act(Action),
}

pub fn parse_line(line: &str) -> Result<Input, ParseError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "help" | "h" | "?" => Ok(Input::Help),
        "look" | "map" => Ok(Input::Look),
        "quit" | "exit" | "q" => Ok(Input::Quit),
        _ => parse_action(line).map(Input::Act),
    }
}

/// Why the front end did not carry out an action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Refusal {
    #[error("{}", error_message(.0))]
    Game(#[from] GameError),
    #[error("You can only shoot at adjacent rooms! {target} is out of reach.")]
    NotAdjacent { target: Coord },
}

pub struct Session {
    world: World,
    free_aim: bool,
}

impl Session {
    /// `free_aim` lifts the front end's adjacent-only shooting rule; the
    /// engine itself accepts any target.
    pub fn new(world: World, free_aim: bool) -> Self {
        Self { world, free_aim }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn act(&mut self, action: Action) -> Result<Outcome, Refusal> {
        if let Action::Shoot(target) = action {
            if !self.free_aim && self.world.is_alive() && !self.world.agent().is_adjacent(target) {
                tracing::debug!(%target, "refused non-adjacent shot");
                return Err(Refusal::NotAdjacent { target });
            }
        }
        let outcome = action.apply(&mut self.world)?;
        tracing::debug!(
            %action,
            score = outcome.score,
            signals = ?outcome.signals,
            "action applied"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_common::Direction;
    use wumpus_kernel::{Layout, Signal};

    fn world() -> World {
        World::from_layout(Layout {
            size: 4,
            wumpus: Coord::new(0, 1),
            pits: vec![Coord::new(3, 3), Coord::new(3, 2), Coord::new(3, 1)],
            gold: Coord::new(2, 2),
        })
        .unwrap()
    }

    #[test]
    fn meta_commands() {
        assert_eq!(parse_line("help"), Ok(Input::Help));
        assert_eq!(parse_line(" LOOK "), Ok(Input::Look));
        assert_eq!(parse_line("q"), Ok(Input::Quit));
        assert_eq!(
            parse_line("down"),
            Ok(Input::Act(Action::Move(Direction::Down)))
        );
        assert_eq!(parse_line(""), Err(ParseError::Empty));
    }

    #[test]
    fn adjacent_shot_is_allowed() {
        let mut s = Session::new(world(), false);
        let outcome = s.act(Action::Shoot(Coord::new(0, 1))).unwrap();
        assert_eq!(outcome.signals, vec![Signal::WumpusKilled]);
    }

    #[test]
    fn distant_shot_is_refused_without_spending_arrow() {
        let mut s = Session::new(world(), false);
        assert_eq!(
            s.act(Action::Shoot(Coord::new(2, 2))),
            Err(Refusal::NotAdjacent {
                target: Coord::new(2, 2)
            })
        );
        assert_eq!(s.world().arrows(), 1);
    }

    #[test]
    fn free_aim_reaches_any_cell() {
        let mut s = Session::new(world(), true);
        let outcome = s.act(Action::Shoot(Coord::new(2, 2))).unwrap();
        assert_eq!(outcome.signals, vec![Signal::ShotMissed]);
    }

    #[test]
    fn game_over_wins_over_aim_rule() {
        let mut s = Session::new(world(), false);
        s.act(Action::Move(Direction::Right)).unwrap();
        assert_eq!(
            s.act(Action::Shoot(Coord::new(3, 3))),
            Err(Refusal::Game(GameError::GameOver))
        );
    }

    #[test]
    fn refusal_messages_are_player_facing() {
        let refusal = Refusal::from(GameError::NoArrows);
        assert_eq!(refusal.to_string(), "You don't have any arrows left!");
    }
}
