use super::tictactoe::{GameStatus, Mark, Position, Scoreboard, WinningLine};

#[derive(Debug, Clone, PartialEq)]
pub struct MoveUpdate {
    pub mark: Mark,
    pub position: Position,
    pub player_name: String,
    pub by_bot: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameOverNotification {
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    /// `None` for a draw.
    pub winner_name: Option<String>,
    pub scoreboard: Scoreboard,
}

/// Receives session events: the desktop client feeds them into its event
/// log, tests record them.
pub trait GameBroadcaster {
    fn broadcast_move(&mut self, update: MoveUpdate);

    fn broadcast_game_over(&mut self, notification: GameOverNotification);
}

