//! Developer Tooling: world inspector.
//!
//! # Invariants
//! - Tools only read world state.

mod inspector;

pub use inspector::{HazardReport, WorldInspector, WorldSummary};

pub fn crate_info() -> &'static str {
    concat!("wumpus-tools v", env!("CARGO_PKG_VERSION"))
}
