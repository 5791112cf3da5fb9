mod board;
mod bot_controller;
mod error;
mod game_state;
mod scoreboard;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotDecision, BotInput, WIN_SCORE, analyze, calculate_move, score_moves};
pub use error::MoveError;
pub use game_state::TicTacToeGameState;
pub use scoreboard::Scoreboard;
pub use session::{GUEST_SEAT, HOST_SEAT, Seat, TicTacToeSession};
pub use settings::{DEFAULT_BOT_NAME, TicTacToeSessionSettings};
pub use types::{BOARD_SIDE, CELL_COUNT, FirstPlayerMode, GameMode, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
