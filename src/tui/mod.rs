//! Interactive terminal mode.
//!
//! `App` holds the state and calls the engine; this module only moves key
//! presses in and frames out.

mod app;
mod keymap;
mod text;
mod view;

use std::io;
use std::time::{Duration, Instant};

use copypasta::ClipboardProvider;
use crossterm::event::{self, Event};
use tracing::info;

pub use app::*;
pub use text::*;

use crate::clipboard;
use crate::entropy::EntropySource;
use crate::pass::GenerationConfig;
use crate::terminal::ScreenGuard;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run TUI interactive mode until the user quits.
pub fn run(config: GenerationConfig, source: EntropySource) -> io::Result<()> {
    let mut board = clipboard::system().ok();
    let mut app = App::new(config, source.rng());
    info!(source = %source.describe(), "interactive mode");

    let _screen = ScreenGuard::new()?;
    let mut stdout = io::stdout();
    view::draw(&mut stdout, &app)?;

    loop {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = keymap::action_for(key) {
                        let board = board.as_mut().map(|b| b as &mut dyn ClipboardProvider);
                        if app.apply(action, board) == Flow::Quit {
                            break;
                        }
                        view::draw(&mut stdout, &app)?;
                    }
                }
                Event::Resize(..) => view::draw(&mut stdout, &app)?,
                _ => {}
            }
        }

        if app.tick(Instant::now()) {
            view::draw(&mut stdout, &app)?;
        }
    }

    info!(generations = app.generations(), "interactive mode closed");
    Ok(())
}
