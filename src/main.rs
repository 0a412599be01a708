//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a framebuffer-based renderer; the game core never touches the terminal.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::config::Config;
use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::MoveOutcome;

fn main() -> Result<()> {
    let config = Config::load();
    println!("{}", config.notice());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.board_size);

    // Always try to restore terminal state.
    let _ = term.exit();

    let score = result?;
    println!("Final score: {}", score);
    Ok(())
}

fn run(term: &mut TerminalRenderer, board_size: usize) -> Result<u32> {
    let mut game = GameState::new(board_size, time_seed());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut status: Option<&str> = None;

    loop {
        // Render.
        let snap = game.snapshot();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, status, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
        status = None;

        // A finished game stays on screen until any key is pressed.
        if snap.game_over {
            wait_for_key_press()?;
            return Ok(game.score());
        }

        // Input: the game is turn-based, block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(game.score());
                }
                match handle_key_event(key) {
                    Some(direction) => {
                        if game.apply_move(direction) == MoveOutcome::Unchanged {
                            status = Some("nothing moved");
                        }
                    }
                    None => status = Some("wasd / arrows to move, q to quit"),
                }
            }
            // Resize and other events just trigger a redraw.
            _ => {}
        }
    }
}

fn wait_for_key_press() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
