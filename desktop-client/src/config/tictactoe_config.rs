use common::config::Validate;
use common::games::tictactoe::{FirstPlayerMode, GameMode};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BOT_MOVE_DELAY_MS, MAX_BOT_MOVE_DELAY_MS};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub first_player: FirstPlayerMode,
    pub bot_move_delay_ms: u64,
    pub last_mode: Option<GameMode>,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "Bot move delay must be at most {} ms, got {}",
                MAX_BOT_MOVE_DELAY_MS, self.bot_move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Host,
            bot_move_delay_ms: DEFAULT_BOT_MOVE_DELAY_MS,
            last_mode: None,
        }
    }
}
