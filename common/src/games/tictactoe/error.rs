use super::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange { index: usize },
    CellOccupied { position: Position },
    /// Only X or O can be placed.
    InvalidMark,
    GameOver,
    NotYourTurn,
}

impl MoveError {
    /// Placement rejected because of the target cell.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            MoveError::OutOfRange { .. } | MoveError::CellOccupied { .. } | MoveError::InvalidMark
        )
    }

    /// Placement rejected because of the game's state rather than the cell.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, MoveError::GameOver | MoveError::NotYourTurn)
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfRange { index } => {
                write!(f, "Position {} is outside the board", index)
            }
            MoveError::CellOccupied { position } => {
                write!(f, "Cell {} is already marked", position.index())
            }
            MoveError::InvalidMark => write!(f, "Only X or O can be placed"),
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(MoveError::OutOfRange { index: 9 }.is_invalid_move());
        assert!(MoveError::CellOccupied { position: Position::new(4) }.is_invalid_move());
        assert!(MoveError::GameOver.is_invalid_state());
        assert!(MoveError::NotYourTurn.is_invalid_state());
        assert!(MoveError::InvalidMark.is_invalid_move());
        assert!(!MoveError::GameOver.is_invalid_move());
    }

    #[test]
    fn test_messages() {
        assert_eq!(MoveError::OutOfRange { index: 12 }.to_string(), "Position 12 is outside the board");
        assert_eq!(
            MoveError::CellOccupied { position: Position::new(4) }.to_string(),
            "Cell 4 is already marked"
        );
    }
}
