use wumpus_kernel::{GameError, Signal};

/// The line shown to the player when a signal fires.
pub fn signal_message(signal: Signal) -> &'static str {
    match signal {
        Signal::WumpusKilled => "You shot the Wumpus!",
        Signal::ShotMissed => "You missed the Wumpus!",
        Signal::EatenByWumpus => "You have been eaten by the Wumpus! Game over!",
        Signal::FellInPit => "You fell into a pit! Game over!",
        Signal::GoldFound => "You found the gold! Now head back to the starting point to win!",
        Signal::Escaped => "You escaped with the gold! Congratulations, you won the game!",
    }
}

/// The line shown to the player when a command is refused.
pub fn error_message(error: &GameError) -> &'static str {
    match error {
        GameError::GameOver => "The game is over. No more moves!",
        GameError::InvalidMove { .. } => "Invalid move! That way is a wall.",
        GameError::NoArrows => "You don't have any arrows left!",
    }
}
