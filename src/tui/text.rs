use crate::pass::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use crate::settings::Settings;
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("passgen"),
        box_line_center("Password generator with strength meter"),
        box_line(""),
        box_line("MODES:"),
        box_line("  1) Interactive: Run without arguments (or with -i)."),
        box_line("     Adjust length and classes; every change regenerates."),
        box_line("  2) Client: Pass flags (e.g. -l 20 -n 5) to print"),
        box_line("     passwords without the screen."),
        box_line(""),
        box_line("USAGE:"),
        box_line("  passgen [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
        box_line(" Password:"),
    ];
    let length_desc =
        format!("Characters per password, {MIN_LENGTH}-{MAX_LENGTH} (default: {DEFAULT_LENGTH})");
    let opts: [(&str, &str); 14] = [
        ("  -l, --length <N>", length_desc.as_str()),
        ("  -n, --number <N>", "How many passwords to generate (default: 1)"),
        ("      --no-upper", "Leave out uppercase letters"),
        ("      --no-lower", "Leave out lowercase letters"),
        ("      --no-numbers", "Leave out digits"),
        ("      --no-symbols", "Leave out symbols"),
        ("      --only <ulns>", "Use exactly these classes: u=upper l=lower n=numbers s=symbols"),
        ("  -b, --board", "Copy to clipboard instead of printing"),
        ("  -S, --strength", "Show strength and entropy for each password"),
        ("      --seed <N>", "Reproducible output from a fixed seed (not for real secrets)"),
        ("      --save", "Save length and classes as defaults"),
        ("  -d, --default", "Ignore saved defaults"),
        ("  -i, --interactive", "Open the interactive screen with these options"),
        ("  -q, --quiet", "Suppress warnings and prompts"),
    ];
    for (flag, desc) in opts {
        lines.extend(box_opt(flag, desc));
    }
    lines.push(box_line(""));
    lines.push(box_line(" Info:"));
    lines.extend(box_opt("  -h, --help", "Display this help message"));
    lines.extend(box_opt("  -v, --version", "Display version"));
    lines.push(box_line(""));
    lines.push(box_line("INTERACTIVE KEYS:"));
    lines.push(box_line("  ←/→ or -/+   shorter / longer"));
    lines.push(box_line("  1 2 3 4      toggle upper, lower, numbers, symbols"));
    lines.push(box_line("  r, Space     regenerate"));
    lines.push(box_line("  c            copy to clipboard"));
    lines.push(box_line("  q, Esc       quit"));
    lines.push(box_line(""));
    lines.push(box_line("EXAMPLES:"));
    lines.push(box_line("  passgen                  Interactive screen"));
    lines.push(box_line("  passgen -l 20            One password, 20 characters"));
    lines.push(box_line("  passgen -l 12 -n 3 -S    Three, with strength"));
    lines.push(box_line("  passgen --no-symbols -b  Alphanumeric, to clipboard"));
    lines.push(box_line("  passgen --only ln --save Save lowercase+digits as default"));
    lines.push(box_line(""));
    lines.push(box_line(&format!("Defaults file: {}", Settings::path().display())));
    lines.push(box_line("Log level: PASSGEN_LOG (e.g. PASSGEN_LOG=debug)"));
    lines.push(box_bottom());
    lines
}

pub fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
    println!();
}
