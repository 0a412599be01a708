//! Game state module - owns the board, score, and win flag
//!
//! This is the single entry point the outer loop drives: `apply_move` runs
//! the directional transform, adopts the result only when the board actually
//! changed, and spawns exactly one tile per applied move. The win flag is
//! sticky and non-terminal: reaching the win value does not stop play.

use crate::board::Board;
use crate::moves::{self, apply_move};
use crate::rng::{RandomTileSource, TileSource};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, MoveOutcome};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomTileSource> {
    board: Board,
    score: u32,
    won: bool,
    tiles: S,
}

impl GameState<RandomTileSource> {
    /// Create a new game with the default random source and the given seed
    pub fn new(size: usize, seed: u32) -> Self {
        Self::with_source(size, RandomTileSource::new(seed))
    }
}

impl<S: TileSource> GameState<S> {
    /// Create a new game using the supplied tile source.
    ///
    /// The board starts empty with score 0, then two tiles are spawned.
    pub fn with_source(size: usize, tiles: S) -> Self {
        let mut state = Self {
            board: Board::new(size),
            score: 0,
            won: false,
            tiles,
        };
        state.spawn_tile();
        state.spawn_tile();
        state
    }

    /// Apply one directional move.
    ///
    /// When the transform leaves the board identical, nothing is touched
    /// (no score, no win flag, no spawn) and `Unchanged` is reported.
    /// Otherwise the new board is adopted, the merge score is added, the win
    /// flag latches if a merge produced the win value, exactly one tile is
    /// spawned, and `Applied` is reported.
    ///
    /// Calling this after the game is over is permitted: a full, frozen
    /// board cannot change, so the move reports `Unchanged`.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let result = apply_move(&self.board, direction);
        if !result.changed {
            return MoveOutcome::Unchanged;
        }

        self.board = result.board;
        self.score += result.score;
        if result.reached_win {
            self.won = true;
        }
        self.spawn_tile();
        MoveOutcome::Applied
    }

    /// Spawn one tile from the source; no-op on a full board
    pub fn spawn_tile(&mut self) -> bool {
        match self.tiles.next_tile(&self.board) {
            Some(tile) => self
                .board
                .set(tile.row as usize, tile.col as usize, tile.value),
            None => false,
        }
    }

    /// True when the board is full and no adjacent pair can merge
    pub fn is_over(&self) -> bool {
        moves::is_over(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Fill a snapshot for the presentation layer
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.size = self.board.size();
        for (r, row) in self.board.rows().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                out.board[r][c] = value;
            }
        }
        out.score = self.score;
        out.won = self.won;
        out.game_over = self.is_over();
    }

    /// Allocate and fill a snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
