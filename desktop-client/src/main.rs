mod config;
mod constants;
mod offline;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::GameMode;
use common::{log, log_error, logger};
use eframe::egui;

use config::{get_config_manager, Config};
use ui::MenuApp;

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    VersusBot,
    TwoPlayers,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::VersusBot => GameMode::VersusBot,
            ModeArg::TwoPlayers => GameMode::TwoPlayers,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config; defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the menu and start a game right away.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Seed for choosing the first player.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log_error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    log!("TicTacToe client starting as {}", config.player_name);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 600.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("TicTacToe"),
        ..Default::default()
    };

    let start_mode = args.mode.map(GameMode::from);
    let seed = args.seed;

    eframe::run_native(
        "TicTacToe",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(MenuApp::new(config_manager, config, start_mode, seed)))
        }),
    )?;

    Ok(())
}
