//! Terminal 16384 runner (default binary).
//!
//! This is the gameplay entrypoint. It uses crossterm for input and a
//! framebuffer-based renderer. The game is turn-based: the loop blocks on
//! the next key event, applies one atomic move/spawn/evaluate transition,
//! and re-renders.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use hex16384::core::HexGame;
use hex16384::input::{handle_key_event, should_quit};
use hex16384::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = HexGame::new(clock_seed());
    game.start();

    let view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                // After a win or a loss only the quit key does anything.
                if game.game_over() {
                    continue;
                }
                if let Some(action) = handle_key_event(key) {
                    let moved = game.apply_action(action);
                    game.evaluate(moved);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

/// Seed the tile generator from the wall clock.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
