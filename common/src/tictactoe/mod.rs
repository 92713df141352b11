mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{BotInput, SearchResult, calculate_move, minimax};
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, GameStatus, Player, Position};
pub use win_detector::{LINES, check_win, evaluate, is_game_over, is_winner, winning_line};
