use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Score of a position from the agent's point of view.
pub const AGENT_WIN_SCORE: i32 = 1;
pub const HUMAN_WIN_SCORE: i32 = -1;
pub const NEUTRAL_SCORE: i32 = 0;

/// Contents of one board cell. The discriminants are the signed marks used
/// by the scoring code: agent `+1`, human `-1`, empty `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Agent = 1,
    Human = -1,
}

impl Cell {
    pub fn value(self) -> i8 {
        self as i8
    }

    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Agent),
            -1 => Some(Cell::Human),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Agent => 'X',
            Cell::Human => 'O',
            Cell::Empty => ' ',
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Agent => Some(Player::Agent),
            Cell::Human => Some(Player::Human),
            Cell::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Agent,
    Human,
}

impl Player {
    pub fn mark(self) -> Cell {
        match self {
            Player::Agent => Cell::Agent,
            Player::Human => Cell::Human,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Agent => Player::Human,
            Player::Human => Player::Agent,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Player::Agent
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Agent => write!(f, "Agent ({})", Cell::Agent.glyph()),
            Player::Human => write!(f, "Human ({})", Cell::Human.glyph()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps a flat move index (`row * 3 + col`) to a position.
    /// Indices outside `0..9` have no position.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    AgentWon,
    HumanWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::AgentWon => Some(Player::Agent),
            GameStatus::HumanWon => Some(Player::Human),
            _ => None,
        }
    }
}
