//! CLI context: saved defaults plus parsed flags.

use std::io::Write;
use std::path::Path;

use copypasta::ClipboardProvider;
use rand::RngCore;
use tracing::debug;
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::clipboard;
use crate::entropy::EntropySource;
use crate::error::GenerateError;
use crate::pass::{self, ClassSet, GenerationConfig, clamp_length};
use crate::settings::Settings;
use crate::terminal::strength_bar;
use crate::tui;

const STRENGTH_BAR_WIDTH: usize = 20;

/// Early exit with a process status.
#[derive(Debug, PartialEq, Eq)]
pub struct Done(pub u8);

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Load saved defaults (unless `--default`) under the parsed flags.
    pub fn new(flags: CliFlags) -> Self {
        prompts::set_quiet(flags.quiet);

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        Self::with_settings(flags, settings)
    }

    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        Self { settings, flags }
    }

    /// Run CLI. `Err(Done)` carries the exit status of an early exit.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;

        let config = self.config();
        if let Some(requested) = self.flags.length
            && requested != config.length
        {
            prompts::length_clamped(requested, config.length);
        }
        if self.flags.save {
            self.save(config, &Settings::path());
        }

        let source = self.source();
        if let EntropySource::Seeded(seed) = source {
            prompts::seeded_output(seed);
        }

        if self.flags.interactive {
            return tui::run(config, source).map_err(|e| {
                prompts::error(&format!("Terminal error: {}", e));
                Done(1)
            });
        }

        self.generate_output(&config, source.rng().as_mut())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            tui::print_help();
            return Err(Done(0));
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Done(0));
        }
        Ok(())
    }

    /// Saved defaults overlaid with flags.
    pub fn config(&self) -> GenerationConfig {
        let length = self
            .flags
            .length
            .map(clamp_length)
            .unwrap_or(self.settings.pass_length);

        let mut classes: ClassSet = self.flags.only.unwrap_or(self.settings.classes);
        for class in self.flags.disabled.iter() {
            classes.remove(class);
        }

        GenerationConfig::new(length, classes)
    }

    pub fn source(&self) -> EntropySource {
        self.flags
            .seed
            .map(EntropySource::Seeded)
            .unwrap_or_default()
    }

    /// Persist `config` as the new defaults. A selection with no classes is
    /// never saved, or every later run would fail.
    fn save(&mut self, config: GenerationConfig, path: &Path) {
        if config.classes.is_empty() {
            prompts::warn("No character classes selected, defaults not saved.");
            return;
        }

        self.settings = Settings::from(config);
        match self.settings.save_to(path) {
            Ok(()) => prompts::settings_saved(&path.display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    /// Generate passwords to the clipboard or stdout.
    pub fn generate_output(
        &mut self,
        config: &GenerationConfig,
        rng: &mut dyn RngCore,
    ) -> Result<(), Done> {
        let count = self.flags.number.unwrap_or(1).max(1);
        let mut board = if self.flags.clipboard {
            match clipboard::system() {
                Ok(ctx) => Some(ctx),
                Err(_) if prompts::clipboard_fallback_prompt() => None,
                Err(_) => return Err(Done(0)),
            }
        } else {
            None
        };

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let status = match board.as_mut() {
            Some(ctx) => self.write_passwords(config, rng, count, Sink::Clipboard(ctx, &mut out)),
            None => self.write_passwords(config, rng, count, Sink::Writer(&mut out)),
        };
        let _ = out.flush();
        status
    }

    fn write_passwords(
        &self,
        config: &GenerationConfig,
        rng: &mut dyn RngCore,
        count: usize,
        mut sink: Sink<'_>,
    ) -> Result<(), Done> {
        let mut collected = String::new();

        for _ in 0..count {
            let password = match pass::generate(config, rng) {
                Ok(p) => p,
                Err(e @ GenerateError::EmptyCharset) => {
                    prompts::error(&e.to_string());
                    return Err(Done(1));
                }
                Err(e) => {
                    prompts::error(&e.to_string());
                    return Err(Done(2));
                }
            };

            if self.flags.strength {
                let score = pass::score(password.as_str());
                eprintln!(
                    "{}  ~{:.1} bits",
                    strength_bar(score, STRENGTH_BAR_WIDTH),
                    pass::entropy_bits(config)
                );
            }

            match &mut sink {
                Sink::Writer(w) => {
                    let _ = writeln!(w, "{}", password.as_str());
                }
                Sink::Clipboard(..) => {
                    collected.push_str(password.as_str());
                    collected.push('\n');
                }
            }
        }

        if let Sink::Clipboard(ctx, fallback) = sink {
            let status = match clipboard::copy(ctx, collected.trim_end_matches('\n')) {
                Ok(()) => {
                    prompts::clipboard_copied(count);
                    Ok(())
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    if prompts::clipboard_fallback_prompt() {
                        let _ = fallback.write_all(collected.as_bytes());
                        Ok(())
                    } else {
                        Err(Done(0))
                    }
                }
            };
            collected.zeroize();
            status?;
        }

        debug!(count, "passwords written");
        Ok(())
    }
}

/// Where generated passwords go.
pub enum Sink<'a> {
    Writer(&'a mut dyn Write),
    /// Clipboard, with the writer to fall back to if the copy fails.
    Clipboard(&'a mut dyn ClipboardProvider, &'a mut dyn Write),
}
