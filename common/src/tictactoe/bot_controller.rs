use std::time::Instant;

use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{Cell, Player, Position};
use super::win_detector::{evaluate, is_game_over};

/// Best move found at a search node together with its backed-up score.
/// `position` is `None` at leaves and when no move was available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Option<Position>,
    pub score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self { position: None, score }
    }
}

pub struct BotInput {
    pub board: Board,
    pub current_player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_player: state.current_player(),
        }
    }
}

/// Runs a full-depth search for the side to move and returns its choice.
/// Returns `None` when the board has no empty cell or is already won.
pub fn calculate_move(input: BotInput) -> Option<Position> {
    let mut board = input.board;
    let depth = get_available_moves(&board).len();

    let started = Instant::now();
    let result = minimax(&mut board, depth, input.current_player);

    match result.position {
        Some(pos) => crate::log!(
            "{} searched {} plies in {:?}: chose {} with score {}",
            input.current_player,
            depth,
            started.elapsed(),
            pos,
            result.score
        ),
        None => crate::log!("{} has no move to make", input.current_player),
    }

    result.position
}

/// Exhaustive minimax without pruning. The agent maximizes and the human
/// minimizes; ties keep the first move found in row-major order.
///
/// Every tentative mark is reverted, so `board` is unchanged on return.
pub fn minimax(board: &mut Board, depth: usize, player: Player) -> SearchResult {
    if depth == 0 || is_game_over(board) {
        return SearchResult::leaf(evaluate(board));
    }

    let mut best = SearchResult::leaf(if player.is_maximizing() {
        i32::MIN
    } else {
        i32::MAX
    });

    for pos in get_available_moves(board) {
        board.set(pos, player.mark());
        let child = minimax(board, depth - 1, player.opponent());
        board.set(pos, Cell::Empty);

        let candidate = SearchResult {
            position: Some(pos),
            score: child.score,
        };

        let improves = if player.is_maximizing() {
            candidate.score > best.score
        } else {
            candidate.score < best.score
        };
        if improves {
            best = candidate;
        }
    }

    best
}
