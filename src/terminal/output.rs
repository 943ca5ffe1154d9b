//! Terminal output utilities.
//!
//! Box drawing, the strength bar, ANSI helpers.

use crossterm::style::{Color, Stylize};
use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::pass::StrengthScore;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const DIM: &str = "\x1b[2m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

// ============================================================================
// Box Drawing (fixed width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Box top with optional title: ┌─ Title ───────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                 │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

/// Centered box content line: │      content      │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        )
    } else {
        format!("│ {} │", content)
    }
}

/// Horizontal rule inside a box: ├──────────┤
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// Box bottom: └────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// A help option with flag and description, wrapped onto as many lines as
/// the description needs.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let indent = " ".repeat(flag_col);
    let mut out = Vec::with_capacity(lines.len().max(1));
    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.len());
            out.push(format!("│ {}{}{} │", flag_padded, first, " ".repeat(padding)));
        }
        None => out.push(format!("│ {}{} │", flag_padded, " ".repeat(desc_col))),
    }
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        out.push(format!("│ {}{}{} │", indent, line, " ".repeat(padding)));
    }
    out
}

/// Display width, ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Bar
// ============================================================================

/// Number of filled cells for a bar of `width` cells.
pub fn bar_fill(score: StrengthScore, width: usize) -> usize {
    width * score.bar_percent() as usize / 100
}

/// Coloured strength bar followed by the label.
pub fn strength_bar(score: StrengthScore, width: usize) -> String {
    let strength = score.strength();
    let (r, g, b) = strength.rgb();
    let filled = bar_fill(score, width);
    format!(
        "{}{} {}",
        "█".repeat(filled).with(Color::Rgb { r, g, b }),
        "░".repeat(width - filled),
        strength.label().with(Color::Rgb { r, g, b }).bold()
    )
}
