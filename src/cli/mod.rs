//! One-shot command-line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;

use std::process::ExitCode;

use crate::logging;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Parse `args` and run. Parse errors exit with status 2.
pub fn run(args: Vec<String>) -> ExitCode {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try 'passgen --help'.");
            return ExitCode::from(2);
        }
    };
    logging::init(log_level(&flags));

    match Context::new(flags).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Done(code)) => ExitCode::from(code),
    }
}

/// Default log level. The interactive screen only takes errors, anything
/// lower would draw over it.
fn log_level(flags: &CliFlags) -> &'static str {
    if flags.interactive { "error" } else { "warn" }
}
