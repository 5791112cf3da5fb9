use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::{GameStatus, Mark, Position};

/// Score of a win reached on the very first ply. Each extra ply costs one
/// point, so quicker wins and slower losses are preferred.
pub const WIN_SCORE: i32 = 100;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotDecision {
    pub position: Position,
    pub score: i32,
    pub nodes_visited: u64,
}

#[derive(Debug, Clone, Copy)]
struct SearchResult {
    score: i32,
    nodes: u64,
}

#[derive(Debug, Clone, Copy)]
struct Sides {
    bot: Mark,
    opponent: Mark,
}

pub fn calculate_move(input: &BotInput) -> Option<Position> {
    analyze(input).map(|decision| decision.position)
}

/// Picks the best move for `input.bot_mark`. Ties go to the lowest index.
/// Returns `None` for a finished board or an empty bot mark.
pub fn analyze(input: &BotInput) -> Option<BotDecision> {
    let mut best: Option<BotDecision> = None;
    let mut nodes_visited = 0;

    for (position, result) in search_root(input)? {
        nodes_visited += result.nodes;
        if best.is_none_or(|current| result.score > current.score) {
            best = Some(BotDecision {
                position,
                score: result.score,
                nodes_visited: 0,
            });
        }
    }

    best.map(|decision| BotDecision {
        nodes_visited,
        ..decision
    })
}

/// Exact minimax score of every legal move, in ascending position order.
pub fn score_moves(input: &BotInput) -> Vec<(Position, i32)> {
    search_root(input)
        .unwrap_or_default()
        .into_iter()
        .map(|(position, result)| (position, result.score))
        .collect()
}

fn search_root(input: &BotInput) -> Option<Vec<(Position, SearchResult)>> {
    let sides = Sides {
        bot: input.bot_mark,
        opponent: input.bot_mark.opponent()?,
    };

    if input.board.evaluate().is_finished() {
        return None;
    }

    let results = input
        .board
        .empty_positions()
        .map(|position| {
            let next = input.board.with_mark(position, sides.bot);
            let result = minimax(&next, 1, false, sides, i32::MIN, i32::MAX);
            (position, result)
        })
        .collect();

    Some(results)
}

fn terminal_score(status: GameStatus, sides: Sides, depth: i32) -> Option<i32> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some(0),
        won => {
            if won.winner() == Some(sides.bot) {
                Some(WIN_SCORE - depth)
            } else {
                Some(-WIN_SCORE + depth)
            }
        }
    }
}

fn minimax(
    board: &Board,
    depth: i32,
    is_maximizing: bool,
    sides: Sides,
    mut alpha: i32,
    mut beta: i32,
) -> SearchResult {
    if let Some(score) = terminal_score(board.evaluate(), sides, depth) {
        return SearchResult { score, nodes: 1 };
    }

    let mut nodes = 1;

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in board.empty_positions() {
            let next = board.with_mark(position, sides.bot);
            let child = minimax(&next, depth + 1, false, sides, alpha, beta);
            nodes += child.nodes;

            max_eval = max_eval.max(child.score);
            alpha = alpha.max(max_eval);
            if alpha >= beta {
                break;
            }
        }
        SearchResult { score: max_eval, nodes }
    } else {
        let mut min_eval = i32::MAX;
        for position in board.empty_positions() {
            let next = board.with_mark(position, sides.opponent);
            let child = minimax(&next, depth + 1, true, sides, alpha, beta);
            nodes += child.nodes;

            min_eval = min_eval.min(child.score);
            beta = beta.min(min_eval);
            if beta <= alpha {
                break;
            }
        }
        SearchResult { score: min_eval, nodes }
    }
}
