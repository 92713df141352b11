use common::tictactoe::{Board, GameStatus, Player};

pub const HORIZONTAL_RULE: &str = "\n---------------";
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(HORIZONTAL_RULE);
    out.push('\n');
    for row in board.rows() {
        for cell in row {
            out.push_str(&format!("| {} |", cell.glyph()));
        }
        out.push_str(HORIZONTAL_RULE);
        out.push('\n');
    }
    out
}

pub fn render_prompt(player: Player) -> String {
    format!("{}, choose a cell (0-8): ", player)
}

pub fn render_outcome(status: GameStatus) -> String {
    match status.winner() {
        Some(player) => format!("{} wins!", player),
        None if status == GameStatus::Draw => "Draw.".to_string(),
        None => "Game stopped.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let expected = "\n---------------\n\
                        |   ||   ||   |\n---------------\n\
                        |   ||   ||   |\n---------------\n\
                        |   ||   ||   |\n---------------\n";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_render_marks() {
        let board = Board::from_values([
            [1, 0, -1],
            [0, 0, 0],
            [0, 0, 0],
        ])
        .unwrap();
        let rendered = render_board(&board);
        assert!(rendered.starts_with("\n---------------\n| X ||   || O |\n"));
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(render_outcome(GameStatus::AgentWon), "Agent (X) wins!");
        assert_eq!(render_outcome(GameStatus::HumanWon), "Human (O) wins!");
        assert_eq!(render_outcome(GameStatus::Draw), "Draw.");
        assert_eq!(render_outcome(GameStatus::InProgress), "Game stopped.");
    }
}
