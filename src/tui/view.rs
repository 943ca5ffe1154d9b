//! Screen layout for the interactive mode.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use rand::RngCore;

use super::{App, CopyStatus, Output};
use crate::pass::{self, CharacterClass, MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{
    DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_rule, box_top,
    strength_bar,
};

const BAR_WIDTH: usize = 30;
const EMPTY_MESSAGE: &str = "Please select at least one option";

/// Lines of the current screen.
pub fn render<R: RngCore>(app: &App<R>) -> Vec<String> {
    let config = app.config();
    let mut lines = vec![box_top("passgen"), box_line("")];

    match app.output() {
        Output::Password { password, score } => {
            lines.push(box_line_center(password.as_str()));
            lines.push(box_line(""));
            lines.push(box_line(&strength_bar(*score, BAR_WIDTH)));
        }
        Output::NoClasses => {
            lines.push(box_line_center(&format!("{RED}{EMPTY_MESSAGE}{RESET}")));
            lines.push(box_line(""));
            lines.push(box_line(&format!("{DIM}{}{RESET}", "░".repeat(BAR_WIDTH))));
        }
    }

    lines.push(box_rule());
    lines.push(box_line(&format!(
        "Length: {:>2}   {} {} {}",
        config.length,
        MIN_LENGTH,
        slider(config.length),
        MAX_LENGTH
    )));
    lines.push(box_line(&format!(
        "Entropy: {:.1} bits",
        pass::entropy_bits(config)
    )));
    lines.push(box_line(""));

    for (i, class) in CharacterClass::ALL.into_iter().enumerate() {
        let mark = if config.classes.contains(class) { 'x' } else { ' ' };
        lines.push(box_line(&format!("  {}) [{}] {}", i + 1, mark, class.name())));
    }

    lines.push(box_line(""));
    lines.push(box_rule());
    lines.push(box_line_center("←/→ length   1-4 toggle   r regenerate"));
    lines.push(box_line_center("c copy   q quit"));
    lines.push(box_line_center(&feedback(app.copy_status())));
    lines.push(box_bottom());
    lines
}

/// Write the screen, one line per row.
pub fn draw<R: RngCore, W: Write>(out: &mut W, app: &App<R>) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in render(app).iter().enumerate() {
        queue!(out, MoveTo(0, row as u16))?;
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}

fn slider(length: usize) -> String {
    format!(
        "{}●{}",
        "─".repeat(length - MIN_LENGTH),
        "─".repeat(MAX_LENGTH - length)
    )
}

fn feedback(status: CopyStatus) -> String {
    match status {
        CopyStatus::Idle => String::new(),
        CopyStatus::Copied(_) => format!("{GREEN}✔ Copied to clipboard{RESET}"),
        CopyStatus::Failed(_) => format!("{RED}✘ Copy failed{RESET}"),
    }
}
