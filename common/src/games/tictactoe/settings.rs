use crate::config::Validate;
use super::types::{FirstPlayerMode, GameMode};

const MAX_NAME_LENGTH: usize = 32;
pub const DEFAULT_BOT_NAME: &str = "Minimax Bot";

#[derive(Debug, Clone, PartialEq)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub first_player_mode: FirstPlayerMode,
    pub host_name: String,
    /// Name of the second human. Ignored in `GameMode::VersusBot`.
    pub guest_name: String,
}

impl TicTacToeSessionSettings {
    pub fn versus_bot(host_name: impl Into<String>) -> Self {
        Self {
            mode: GameMode::VersusBot,
            first_player_mode: FirstPlayerMode::Host,
            host_name: host_name.into(),
            guest_name: DEFAULT_BOT_NAME.to_string(),
        }
    }

    pub fn two_players(host_name: impl Into<String>, guest_name: impl Into<String>) -> Self {
        Self {
            mode: GameMode::TwoPlayers,
            first_player_mode: FirstPlayerMode::Host,
            host_name: host_name.into(),
            guest_name: guest_name.into(),
        }
    }

    pub fn with_first_player_mode(mut self, first_player_mode: FirstPlayerMode) -> Self {
        self.first_player_mode = first_player_mode;
        self
    }
}

fn validate_name(name: &str, field: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LENGTH
        ));
    }
    Ok(())
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        validate_name(&self.host_name, "Host name")?;
        if self.mode == GameMode::VersusBot && self.host_name.trim() == DEFAULT_BOT_NAME {
            return Err(format!("Host name must differ from {}", DEFAULT_BOT_NAME));
        }
        if self.mode == GameMode::TwoPlayers {
            validate_name(&self.guest_name, "Guest name")?;
            if self.guest_name.trim() == self.host_name.trim() {
                return Err("Players must have different names".to_string());
            }
        }
        Ok(())
    }
}
