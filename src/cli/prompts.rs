//! Warnings, prompts and status lines for CLI output. All of it goes to
//! stderr so stdout stays clean for passwords.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::pass::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{RED, RESET};

const YELLOW: &str = "\x1b[33m";

static QUIET: AtomicBool = AtomicBool::new(false);

/// Quiet mode suppresses warnings and prompts, never errors.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Skip prompts when quiet or when stdin is not a tty.
fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Yellow warning, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn length_clamped(requested: usize, used: usize) {
    warn(&format!(
        "Length {requested} is outside {MIN_LENGTH}-{MAX_LENGTH}, using {used}."
    ));
}

pub fn seeded_output(seed: u64) {
    warn(&format!(
        "Seed {seed}: output is reproducible. Do not use it for real secrets."
    ));
}

pub fn settings_saved(path: &str) {
    if !quiet() {
        eprintln!("Defaults saved \u{2192} {path}");
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        eprintln!("*** {count} password(s) -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Quiet or non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
