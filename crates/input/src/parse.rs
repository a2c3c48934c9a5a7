//! Text command parsing.
//!
//! Grammar, case-insensitive:
//! ```text
//! up | down | left | right          (also u/d/l/r, north/south/west/east)
//! move <direction>
//! shoot <row> <col>                 (also "shoot <row>,<col>")
//! ```

use wumpus_common::{Coord, Direction};

use crate::action::Action;

/// Errors from turning text into an action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{command} needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("{0:?} is not a grid coordinate")]
    BadCoordinate(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
    #[error("command {index}: {reason}")]
    InScript {
        index: usize,
        reason: Box<ParseError>,
    },
}

/// Parse a single command.
pub fn parse_action(input: &str) -> Result<Action, ParseError> {
    let normalized = input.trim().to_ascii_lowercase();
    let mut words = normalized.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Empty);
    };
    let rest: Vec<&str> = words.collect();

    match head {
        "shoot" | "fire" => parse_target(&rest).map(Action::Shoot),
        "move" | "go" => match rest.as_slice() {
            [] => Err(ParseError::MissingArgument {
                command: "move",
                expected: "a direction",
            }),
            [direction] => direction
                .parse()
                .map(Action::Move)
                .map_err(|_| ParseError::UnknownCommand(direction.to_string())),
            [_, extra @ ..] => Err(ParseError::TrailingInput(extra.join(" "))),
        },
        word => {
            let direction: Direction = word
                .parse()
                .map_err(|_| ParseError::UnknownCommand(word.to_string()))?;
            if !rest.is_empty() {
                return Err(ParseError::TrailingInput(rest.join(" ")));
            }
            Ok(Action::Move(direction))
        }
    }
}

/// Parse a list of commands separated by commas, semicolons, or newlines.
///
/// A comma between two numbers belongs to a `shoot row,col` target rather
/// than separating commands. Blank entries are skipped.
pub fn parse_script(input: &str) -> Result<Vec<Action>, ParseError> {
    split_commands(input)
        .into_iter()
        .enumerate()
        .map(|(index, command)| {
            parse_action(&command).map_err(|reason| ParseError::InScript {
                index,
                reason: Box::new(reason),
            })
        })
        .collect()
}

fn parse_target(args: &[&str]) -> Result<Coord, ParseError> {
    let joined = args.join(" ");
    let parts: Vec<&str> = joined
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    match parts.as_slice() {
        [] | [_] => Err(ParseError::MissingArgument {
            command: "shoot",
            expected: "a row and a column",
        }),
        [row, col] => Ok(Coord::new(parse_index(row)?, parse_index(col)?)),
        [_, _, extra @ ..] => Err(ParseError::TrailingInput(extra.join(" "))),
    }
}

fn parse_index(s: &str) -> Result<usize, ParseError> {
    s.trim_matches(|c: char| c == '(' || c == ')')
        .parse()
        .map_err(|_| ParseError::BadCoordinate(s.to_string()))
}

fn split_commands(input: &str) -> Vec<String> {
    let mut commands = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = input.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        let separates = match ch {
            ';' | '\n' => true,
            ',' => !between_digits(&chars, i),
            _ => false,
        };
        if separates {
            commands.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    commands.push(current);

    commands
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

fn between_digits(chars: &[char], comma: usize) -> bool {
    let before = chars[..comma].iter().rev().find(|c| !c.is_whitespace());
    let after = chars[comma + 1..].iter().find(|c| !c.is_whitespace());
    matches!((before, after), (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit())
}
