use super::types::{BOARD_SIZE, Cell, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from signed marks (`1` agent, `-1` human, `0` empty).
    /// Returns `None` if any value is not a valid mark.
    pub fn from_values(values: [[i8; BOARD_SIZE]; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::new();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                board.cells[row][col] = Cell::from_value(value)?;
            }
        }
        Some(board)
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        get_available_moves(self).contains(&pos)
    }

    /// Places `player`'s mark if `pos` is empty. An invalid move leaves the
    /// board untouched and returns `false`.
    pub fn apply_move(&mut self, pos: Position, player: Player) -> bool {
        if !self.is_valid_move(pos) {
            return false;
        }
        self.cells[pos.row][pos.col] = player.mark();
        true
    }

    // Unchecked writes for the search, which places and reverts marks on
    // cells it took from `get_available_moves`.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }
}

/// Every empty cell in row-major order.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, line) in board.cells.iter().enumerate() {
        for (col, &cell) in line.iter().enumerate() {
            if cell == Cell::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}
