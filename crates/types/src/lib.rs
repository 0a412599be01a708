//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board size limits (cells per side)
pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 8;
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest cell count a board can hold (MAX_BOARD_SIZE squared)
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// First merge producing this value latches the win flag
pub const WIN_VALUE: u32 = 2048;

/// Spawned tiles are 4 one draw in `FOUR_SPAWN_ONE_IN`, otherwise 2
pub const FOUR_SPAWN_ONE_IN: u32 = 10;
pub const SPAWN_LOW: u32 = 2;
pub const SPAWN_HIGH: u32 = 4;

/// Move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// All four directions
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The board changed; score was updated and one tile spawned
    Applied,
    /// The board did not change; no state was touched and no tile spawned
    Unchanged,
}

impl MoveOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}
