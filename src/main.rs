use std::env;
use std::process::ExitCode;

mod cli;
mod clipboard;
mod entropy;
mod error;
mod exits;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tui;

use entropy::EntropySource;
use settings::Settings;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => interactive(),
        _ => cli::run(args),
    }
}

/// Saved defaults, OS randomness, full screen.
fn interactive() -> ExitCode {
    // Anything below error would draw over the screen.
    logging::init("error");

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        cli::prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });

    match tui::run(settings.config(), EntropySource::Os) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            terminal::reset_terminal();
            cli::prompts::error(&format!("Terminal error: {}", e));
            ExitCode::FAILURE
        }
    }
}
