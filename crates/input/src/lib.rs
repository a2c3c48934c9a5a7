//! Player input: text commands mapped to the actions the kernel accepts.
//!
//! # Invariants
//! - Every presentation layer (interactive, scripted) goes through the same `Action`s.
//! - Parsing never touches the world; only `Action::apply` does.

pub mod action;
pub mod parse;

pub use action::Action;
pub use parse::{ParseError, parse_action, parse_script};
