//! RNG module - tile spawning
//!
//! Randomness is an injected capability: `GameState` is generic over a
//! [`TileSource`] so tests can substitute a deterministic source. The default
//! source draws a uniformly random empty cell and a value of 4 one draw in
//! ten, otherwise 2.
//!
//! Also provides a simple LCG for deterministic testing.

use crate::board::Board;
use crate::types::{FOUR_SPAWN_ONE_IN, SPAWN_HIGH, SPAWN_LOW};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Ranges from the high half of the state: the low bits of an LCG cycle
    /// with short periods (the lowest bit strictly alternates), which would
    /// bias small moduli drawn in a fixed cadence.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Location and value for a tile about to be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    pub row: u8,
    pub col: u8,
    pub value: u32,
}

/// Supplies the location and value of each newly spawned tile.
pub trait TileSource {
    /// Choose where and what to spawn on the given board.
    ///
    /// Returns `None` iff the board has no empty cell.
    fn next_tile(&mut self, board: &Board) -> Option<SpawnedTile>;
}

/// Default tile source: uniform empty cell, 4 at one-in-ten, else 2.
#[derive(Debug, Clone)]
pub struct RandomTileSource {
    rng: SimpleRng,
}

impl RandomTileSource {
    /// Create a new source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl TileSource for RandomTileSource {
    fn next_tile(&mut self, board: &Board) -> Option<SpawnedTile> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.next_range(FOUR_SPAWN_ONE_IN) == 0 {
            SPAWN_HIGH
        } else {
            SPAWN_LOW
        };

        Some(SpawnedTile { row, col, value })
    }
}

impl Default for RandomTileSource {
    fn default() -> Self {
        Self::new(1)
    }
}
