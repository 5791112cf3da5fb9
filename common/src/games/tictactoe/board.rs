use std::fmt;
use std::str::FromStr;

use super::error::MoveError;
use super::types::{BOARD_SIDE, CELL_COUNT, GameStatus, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        self.cells.get(position.index()).copied()
    }

    fn check_placement(&self, position: Position, mark: Mark) -> Result<(), MoveError> {
        if mark.is_empty() {
            return Err(MoveError::InvalidMark);
        }
        match self.get(position) {
            None => Err(MoveError::OutOfRange { index: position.index() }),
            Some(Mark::Empty) => Ok(()),
            Some(_) => Err(MoveError::CellOccupied { position }),
        }
    }

    /// Returns a copy of the board with `mark` placed. `self` is untouched
    /// whether or not the placement succeeds.
    pub fn apply(&self, position: Position, mark: Mark) -> Result<Board, MoveError> {
        let mut next = *self;
        next.place(position, mark)?;
        Ok(next)
    }

    pub fn place(&mut self, position: Position, mark: Mark) -> Result<(), MoveError> {
        self.check_placement(position, mark)?;
        self.cells[position.index()] = mark;
        Ok(())
    }

    /// Placement for positions already known to be empty, such as those
    /// yielded by `empty_positions`.
    pub(crate) fn with_mark(mut self, position: Position, mark: Mark) -> Board {
        debug_assert!(self.cells[position.index()].is_empty());
        self.cells[position.index()] = mark;
        self
    }

    pub fn evaluate(&self) -> GameStatus {
        if let Some(line) = self.winning_line() {
            return GameStatus::won_by(line.mark).unwrap_or(GameStatus::InProgress);
        }
        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|position| self.cells[position.index()].is_empty())
    }

    /// Empty cells in ascending index order.
    pub fn available_moves(&self) -> Vec<Position> {
        self.empty_positions().collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// The mark that moves next under X-first alternation, or `None` when
    /// the counts cannot come from alternating play.
    pub fn next_mark(&self) -> Option<Mark> {
        let x = self.mark_count(Mark::X);
        let o = self.mark_count(Mark::O);
        if x == o {
            Some(Mark::X)
        } else if x == o + 1 {
            Some(Mark::O)
        } else {
            None
        }
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parses nine cells from `X`, `O` and `_`/`.`/`-`; whitespace and `,` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '_' | '.' | '-' => Mark::Empty,
                other => return Err(format!("Unexpected board character '{}'", other)),
            };
            if count == CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = mark;
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(format!("Board needs {} cells, got {}", CELL_COUNT, count));
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
