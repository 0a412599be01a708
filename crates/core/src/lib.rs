//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: randomness is injected through [`TileSource`], so a
//!   seeded or scripted source replays identical games
//! - **Testable**: every rule is a pure function over an immutable grid
//! - **Portable**: runs in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid with pure transpose/row-reversal geometry
//! - [`line`]: the leftward compress-and-merge primitive every move reduces to
//! - [`moves`]: direction dispatch and game-over detection
//! - [`rng`]: seedable LCG and the injectable tile-spawning capability
//! - [`game_state`]: board/score/win ownership and the move entry point
//! - [`snapshot`]: read-only view handed to the presentation layer
//!
//! # Game Rules
//!
//! - A move shifts all tiles in one direction; equal neighbors merge into one
//!   tile of double value, at most once per tile per move
//! - Every merge adds its value to the score
//! - The first merge reaching 2048 latches the win flag; play continues
//! - After every board-changing move one new tile spawns in a uniformly
//!   random empty cell: 4 one time in ten, otherwise 2
//! - The game is over when the board is full and no adjacent pair matches
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, MoveOutcome};
//!
//! let mut game = GameState::new(4, 12345);
//!
//! let outcome = game.apply_move(Direction::Left);
//! if outcome == MoveOutcome::Applied {
//!     // the board changed and one new tile spawned
//! }
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.size, 4);
//! ```

pub mod board;
pub mod game_state;
pub mod line;
pub mod moves;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use line::{reduce_left, LineResult};
pub use moves::{apply_move, is_over, MoveResult};
pub use rng::{RandomTileSource, SimpleRng, SpawnedTile, TileSource};
pub use snapshot::GameSnapshot;
