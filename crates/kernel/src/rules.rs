//! Fixed game parameters and the scoring contract.

/// Smallest grid that can hold the agent, the wumpus, and the gold.
pub const MIN_GRID_SIZE: usize = 2;

/// Grid size used when the caller does not ask for one.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Number of pits drawn at construction. Draws may land on the same cell.
pub const PIT_COUNT: usize = 3;

pub const STARTING_ARROWS: u32 = 1;

pub const MOVE_COST: i64 = 1;
pub const KILL_REWARD: i64 = 50;
pub const MISS_PENALTY: i64 = 10;
pub const DEATH_PENALTY: i64 = 1000;
pub const GOLD_REWARD: i64 = 1000;
pub const ESCAPE_REWARD: i64 = 1000;

/// Per-arrow weight of the end-of-game arrow adjustment.
pub const ARROW_WEIGHT: i64 = 10;

/// Score change applied once when the game ends, by death or by escape.
///
/// Subtracts one point per move, then `ARROW_WEIGHT * (STARTING_ARROWS - arrows)`
/// written as `10 * (1 - arrows)`: 10 when the arrow was spent, 0 otherwise.
pub fn terminal_adjustment(action_count: u64, arrows: u32) -> i64 {
    let moves = i64::try_from(action_count).unwrap_or(i64::MAX);
    -moves - ARROW_WEIGHT * (1 - i64::from(arrows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_with_unspent_arrow() {
        assert_eq!(terminal_adjustment(0, 1), 0);
        assert_eq!(terminal_adjustment(7, 1), -7);
    }

    #[test]
    fn adjustment_with_spent_arrow() {
        assert_eq!(terminal_adjustment(0, 0), -10);
        assert_eq!(terminal_adjustment(3, 0), -13);
    }
}
