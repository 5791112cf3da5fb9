use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::TicTacToeConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Config next to the executable unless `path_override` is given.
pub fn get_config_manager(
    path_override: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path_override.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_name: String,
    #[serde(default = "default_second_player_name")]
    pub second_player_name: String,
    pub tictactoe: TicTacToeConfig,
}

fn default_second_player_name() -> String {
    "Player 2".to_string()
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.player_name.trim().is_empty() {
            return Err("player_name must not be empty".to_string());
        }
        self.tictactoe.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "Player 1".to_string(),
            second_player_name: default_second_player_name(),
            tictactoe: TicTacToeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{FirstPlayerMode, GameMode};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            player_name: "Alice".to_string(),
            tictactoe: TicTacToeConfig {
                first_player: FirstPlayerMode::Random,
                bot_move_delay_ms: 0,
                last_mode: Some(GameMode::TwoPlayers),
            },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager: ConfigManager<_, Config, _> = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_missing_second_player_name_uses_default() {
        let content = r#"
            player_name: Alice
            tictactoe:
              first_player: Host
              bot_move_delay_ms: 250
              last_mode: VersusBot
        "#;
        let config: Config = YamlConfigSerializer::new().deserialize(content).unwrap();
        assert_eq!(config.second_player_name, "Player 2");
        assert_eq!(config.tictactoe.last_mode, Some(GameMode::VersusBot));
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            player_name: ""
            tictactoe:
              first_player: Host
              bot_move_delay_ms: 250
              last_mode: null
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_update_config_persists_last_mode() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        let updated = manager
            .update_config(|config| config.tictactoe.last_mode = Some(GameMode::VersusBot))
            .unwrap();
        assert_eq!(updated.tictactoe.last_mode, Some(GameMode::VersusBot));

        let reloaded = get_config_manager(Some(file_path.clone())).get_config().unwrap();
        assert_eq!(reloaded, updated);

        let _ = std::fs::remove_file(file_path);
    }
}
