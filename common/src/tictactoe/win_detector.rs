use super::board::Board;
use super::types::{AGENT_WIN_SCORE, HUMAN_WIN_SCORE, NEUTRAL_SCORE, Player, Position};

const fn pos(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// The eight winning lines: rows, columns, then both diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(2, 0), pos(1, 1), pos(0, 2)],
];

pub fn is_winner(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = player.mark();
    let rows = board.rows();
    LINES
        .iter()
        .find(|line| line.iter().all(|p| rows[p.row][p.col] == mark))
        .copied()
}

/// True only when a line is complete. A full board without a line is not
/// reported as over; callers check for empty cells separately.
pub fn is_game_over(board: &Board) -> bool {
    is_winner(board, Player::Agent) || is_winner(board, Player::Human)
}

pub fn check_win(board: &Board) -> Option<Player> {
    if is_winner(board, Player::Agent) {
        Some(Player::Agent)
    } else if is_winner(board, Player::Human) {
        Some(Player::Human)
    } else {
        None
    }
}

/// `+1` agent win, `-1` human win, `0` otherwise (draw and undecided alike).
pub fn evaluate(board: &Board) -> i32 {
    match check_win(board) {
        Some(Player::Agent) => AGENT_WIN_SCORE,
        Some(Player::Human) => HUMAN_WIN_SCORE,
        None => NEUTRAL_SCORE,
    }
}
