//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play. It
//! renders into a simple framebuffer that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: snapshot in, framebuffer out
//! - Keep color policy as data (a tile palette), not code

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, TilePalette, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
