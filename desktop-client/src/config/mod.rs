mod main_config;
mod tictactoe_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use main_config::{get_config_manager, Config};
pub use tictactoe_config::TicTacToeConfig;
