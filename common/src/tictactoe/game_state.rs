use super::board::{Board, get_available_moves};
use super::types::{GameStatus, Player, Position};
use super::win_detector::check_win;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Applies a move for the side to move. The turn passes to the opponent
    /// only when the mark was placed and the game continues.
    pub fn place_mark(&mut self, player: Player, pos: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if player != self.current_player {
            return Err("Not your turn".to_string());
        }

        if !pos.is_on_board() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.apply_move(pos, player) {
            return Err("Cell is already marked".to_string());
        }

        self.last_move = Some(pos);
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(())
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = check_win(&self.board) {
            self.status = match winner {
                Player::Agent => GameStatus::AgentWon,
                Player::Human => GameStatus::HumanWon,
            };
            return;
        }

        if get_available_moves(&self.board).is_empty() {
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            let player = state.current_player();
            state
                .place_mark(player, Position::from_index(index).unwrap())
                .unwrap();
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new(Player::Human);
        play(&mut state, &[4]);
        assert_eq!(state.current_player(), Player::Agent);
        assert_eq!(state.last_move(), Some(Position::new(1, 1)));
        play(&mut state, &[0]);
        assert_eq!(state.current_player(), Player::Human);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut state = TicTacToeGameState::new(Player::Agent);
        let result = state.place_mark(Player::Human, Position::new(0, 0));
        assert_eq!(result, Err("Not your turn".to_string()));
        assert_eq!(*state.board(), Board::new());
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut state = TicTacToeGameState::new(Player::Agent);
        play(&mut state, &[0]);
        let result = state.place_mark(Player::Human, Position::new(0, 0));
        assert_eq!(result, Err("Cell is already marked".to_string()));
        assert_eq!(state.current_player(), Player::Human);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut state = TicTacToeGameState::new(Player::Agent);
        let result = state.place_mark(Player::Agent, Position::new(0, 5));
        assert_eq!(result, Err("Position out of bounds".to_string()));
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = TicTacToeGameState::new(Player::Agent);
        // X: 0 1 2, O: 3 4
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.status(), GameStatus::AgentWon);
        assert_eq!(state.status().winner(), Some(Player::Agent));
        assert_eq!(state.current_player(), Player::Agent);

        let result = state.place_mark(Player::Agent, Position::new(2, 2));
        assert_eq!(result, Err("Game is already over".to_string()));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new(Player::Agent);
        // X X O / O O X / X O X
        play(&mut state, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
        assert_eq!(state.status(), GameStatus::Draw);
        assert!(state.status().is_over());
        assert_eq!(state.status().winner(), None);
    }
}
