use super::board::Board;
use super::error::MoveError;
use super::types::{GameStatus, Mark, Position, WinningLine};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub winning_line: Option<WinningLine>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    /// Resumes from an arbitrary board with `to_move` playing next.
    /// Resumes a game from `board` with `to_move` next. Fails when
    /// `to_move` is not a player mark.
    pub fn from_board(board: Board, to_move: Mark) -> Result<Self, MoveError> {
        if to_move.is_empty() {
            return Err(MoveError::InvalidMark);
        }
        let mut state = Self {
            board,
            current_mark: to_move,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        };
        state.check_game_over();
        Ok(state)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Places the current mark. On error the state is left as it was.
    pub fn place_mark(&mut self, position: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        self.board.place(position, self.current_mark)?;
        self.last_move = Some(position);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        self.status = self.board.evaluate();
        self.winning_line = self.board.winning_line();
    }
}
