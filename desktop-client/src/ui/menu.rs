use std::time::{Duration, Instant};

use common::games::GameOverNotification;
use common::games::tictactoe::{FirstPlayerMode, GameMode, TicTacToeSessionSettings};
use common::{log, log_error};
use eframe::egui;

use super::game::TicTacToeGameUi;
use crate::config::{Config, ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use crate::constants::ERROR_DISPLAY_MS;
use crate::offline::LocalGame;

type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

#[derive(Debug, Clone)]
enum AppScreen {
    Menu,
    Playing,
    GameOver(GameOverNotification),
}

pub struct MenuApp {
    config_manager: ClientConfigManager,
    player_name_input: String,
    second_player_name_input: String,
    first_player: FirstPlayerMode,
    last_mode: Option<GameMode>,
    bot_move_delay: Duration,
    seed: Option<u64>,
    screen: AppScreen,
    game: Option<LocalGame>,
    game_ui: TicTacToeGameUi,
    error: Option<(String, Instant)>,
}

impl MenuApp {
    pub fn new(
        config_manager: ClientConfigManager,
        config: Config,
        start_mode: Option<GameMode>,
        seed: Option<u64>,
    ) -> Self {
        let mut app = Self {
            config_manager,
            player_name_input: config.player_name,
            second_player_name_input: config.second_player_name,
            first_player: config.tictactoe.first_player,
            last_mode: config.tictactoe.last_mode,
            bot_move_delay: Duration::from_millis(config.tictactoe.bot_move_delay_ms),
            seed,
            screen: AppScreen::Menu,
            game: None,
            game_ui: TicTacToeGameUi::new(),
            error: None,
        };

        if let Some(mode) = start_mode {
            app.start_game(mode);
        }

        app
    }

    fn set_error(&mut self, message: String) {
        self.error = Some((message, Instant::now()));
    }

    fn start_game(&mut self, mode: GameMode) {
        let settings = match mode {
            GameMode::VersusBot => TicTacToeSessionSettings::versus_bot(self.player_name_input.trim()),
            GameMode::TwoPlayers => TicTacToeSessionSettings::two_players(
                self.player_name_input.trim(),
                self.second_player_name_input.trim(),
            ),
        }
        .with_first_player_mode(self.first_player);

        match LocalGame::new(settings, self.seed, self.bot_move_delay, Instant::now()) {
            Ok(game) => {
                log!("Starting {} (seed {})", mode, game.session().rng_seed());
                self.game = Some(game);
                self.screen = AppScreen::Playing;
                self.error = None;
                self.save_menu_choices(mode);
            }
            Err(e) => {
                log_error!("Failed to start game: {}", e);
                self.set_error(e);
            }
        }
    }

    fn save_menu_choices(&mut self, mode: GameMode) {
        self.last_mode = Some(mode);

        let player_name = self.player_name_input.trim().to_string();
        let second_player_name = self.second_player_name_input.trim().to_string();
        let first_player = self.first_player;

        let result = self.config_manager.update_config(|config| {
            config.player_name = player_name;
            if mode == GameMode::TwoPlayers {
                config.second_player_name = second_player_name;
            }
            config.tictactoe.first_player = first_player;
            config.tictactoe.last_mode = Some(mode);
        });

        if let Err(e) = result {
            log_error!("Failed to save config: {}", e);
        }
    }

    fn leave_to_menu(&mut self) {
        self.game = None;
        self.screen = AppScreen::Menu;
        self.error = None;
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.heading("TicTacToe");
            ui.add_space(20.0);

            ui.label("Your name:");
            ui.add(
                egui::TextEdit::singleline(&mut self.player_name_input)
                    .hint_text("Player name")
                    .desired_width(200.0),
            );

            ui.add_space(5.0);
            ui.label("Second player (Player vs Player):");
            ui.add(
                egui::TextEdit::singleline(&mut self.second_player_name_input)
                    .hint_text("Second player name")
                    .desired_width(200.0),
            );

            ui.add_space(10.0);
            ui.label("First move:");
            ui.horizontal(|ui| {
                ui.radio_value(&mut self.first_player, FirstPlayerMode::Host, "Me");
                ui.radio_value(&mut self.first_player, FirstPlayerMode::Random, "Random");
            });

            ui.add_space(20.0);

            let last_mode = self.last_mode;
            for mode in [GameMode::TwoPlayers, GameMode::VersusBot] {
                let mut text = egui::RichText::new(mode.to_string()).size(16.0);
                if last_mode == Some(mode) {
                    text = text.strong();
                }
                if ui.add_sized([200.0, 36.0], egui::Button::new(text)).clicked() {
                    self.start_game(mode);
                }
                ui.add_space(5.0);
            }
        });
    }

    fn render_game(&mut self, ui: &mut egui::Ui, notification: Option<&GameOverNotification>) {
        let cell_size = TicTacToeGameUi::calculate_cell_size(ui.available_width(), ui.available_height());

        let mut clicked = None;
        let mut restart = false;
        let mut reset_score = false;
        let mut to_menu = false;

        let Some(game) = self.game.as_ref() else {
            self.screen = AppScreen::Menu;
            return;
        };

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                let accepts_input = notification.is_none() && game.session().is_human_turn();
                clicked = self.game_ui.render_board(ui, game.session().game_state(), cell_size, accepts_input);

                ui.add_space(10.0);
                if let Some(notification) = notification {
                    let banner = match &notification.winner_name {
                        Some(name) => format!("{} wins!", name),
                        None => "It's a Draw!".to_string(),
                    };
                    ui.label(egui::RichText::new(banner).size(20.0).strong());
                }

                if let Some((message, _)) = &self.error {
                    ui.colored_label(egui::Color32::RED, message);
                }

                ui.horizontal(|ui| {
                    let restart_label = if notification.is_some() { "Play Again" } else { "Restart" };
                    restart = ui.button(restart_label).clicked();
                    reset_score = ui.button("Reset Score").clicked();
                    to_menu = ui.button("Menu").clicked();
                });
            });

            ui.separator();

            ui.vertical(|ui| {
                self.game_ui.render_info_panel(ui, game);
            });
        });

        let now = Instant::now();
        if let Some(position) = clicked
            && let Some(game) = self.game.as_mut()
            && let Err(e) = game.click_cell(position, now)
        {
            self.set_error(e.to_string());
        }

        if restart {
            if let Some(game) = self.game.as_mut() {
                game.restart(now);
            }
            self.screen = AppScreen::Playing;
            self.error = None;
        }

        if reset_score && let Some(game) = self.game.as_mut() {
            game.reset_scoreboard();
        }

        if to_menu {
            self.leave_to_menu();
        }
    }
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if let Some(game) = self.game.as_mut() {
            if let Some(remaining) = game.update(now) {
                ctx.request_repaint_after(remaining);
            }
            if let Some(notification) = game.take_game_over() {
                self.screen = AppScreen::GameOver(notification);
            }
        }

        if let Some((_, shown_at)) = &self.error {
            let display = Duration::from_millis(ERROR_DISPLAY_MS);
            let elapsed = now.saturating_duration_since(*shown_at);
            if elapsed >= display {
                self.error = None;
            } else {
                ctx.request_repaint_after(display - elapsed);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.screen.clone() {
            AppScreen::Menu => {
                self.render_menu(ui);
                if let Some((message, _)) = &self.error {
                    ui.vertical_centered(|ui| {
                        ui.colored_label(egui::Color32::RED, message);
                    });
                }
            }
            AppScreen::Playing => self.render_game(ui, None),
            AppScreen::GameOver(notification) => self.render_game(ui, Some(&notification)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::get_config_manager;
    use std::path::PathBuf;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_menu_config_{}.yaml", random_number))
    }

    #[test]
    fn test_started_mode_is_remembered_and_saved() {
        let file_path = get_temp_file_path();
        let mut app = MenuApp::new(get_config_manager(Some(file_path.clone())), Config::default(), None, Some(3));
        assert_eq!(app.last_mode, None);

        app.start_game(GameMode::VersusBot);
        assert_eq!(app.last_mode, Some(GameMode::VersusBot));
        assert!(app.game.is_some());

        let saved = get_config_manager(Some(file_path.clone())).get_config().unwrap();
        assert_eq!(saved.tictactoe.last_mode, Some(GameMode::VersusBot));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_names_keep_menu_open() {
        let file_path = get_temp_file_path();
        let config = Config {
            second_player_name: "Player 1".to_string(),
            ..Config::default()
        };
        let mut app = MenuApp::new(get_config_manager(Some(file_path.clone())), config, None, None);

        app.start_game(GameMode::TwoPlayers);
        assert!(app.game.is_none());
        assert!(app.error.is_some());
        assert_eq!(app.last_mode, None);
        assert!(!file_path.exists());
    }
}
