//! Interactive state, free of terminal I/O.

use std::time::{Duration, Instant};

use copypasta::ClipboardProvider;
use rand::RngCore;
use tracing::{debug, warn};

use crate::clipboard;
use crate::error::GenerateError;
use crate::pass::{
    self, CharacterClass, GenerationConfig, MAX_LENGTH, MIN_LENGTH, Password, StrengthScore,
    clamp_length,
};

/// How long the copy confirmation stays up.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increase,
    Decrease,
    SetLength(usize),
    Toggle(CharacterClass),
    Regenerate,
    Copy,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub enum Output {
    Password {
        password: Password,
        score: StrengthScore,
    },
    NoClasses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Idle,
    Copied(Instant),
    Failed(Instant),
}

pub struct App<R: RngCore> {
    config: GenerationConfig,
    rng: R,
    output: Output,
    copy_status: CopyStatus,
    generations: u64,
}

impl<R: RngCore> App<R> {
    /// Start with a freshly generated password.
    pub fn new(config: GenerationConfig, rng: R) -> Self {
        let mut app = Self {
            config: GenerationConfig::new(config.length, config.classes),
            rng,
            output: Output::NoClasses,
            copy_status: CopyStatus::Idle,
            generations: 0,
        };
        app.regenerate();
        app
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn copy_status(&self) -> CopyStatus {
        self.copy_status
    }

    /// Number of engine invocations so far.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    pub fn password(&self) -> Option<&Password> {
        match &self.output {
            Output::Password { password, .. } => Some(password),
            Output::NoClasses => None,
        }
    }

    pub fn apply(&mut self, action: Action, board: Option<&mut dyn ClipboardProvider>) -> Flow {
        match action {
            Action::Increase => {
                if self.config.length < MAX_LENGTH {
                    self.config.length += 1;
                }
                self.regenerate();
            }
            Action::Decrease => {
                if self.config.length > MIN_LENGTH {
                    self.config.length -= 1;
                }
                self.regenerate();
            }
            Action::SetLength(length) => {
                self.config.length = clamp_length(length);
                self.regenerate();
            }
            Action::Toggle(class) => {
                self.config.classes.toggle(class);
                self.regenerate();
            }
            Action::Regenerate => self.regenerate(),
            Action::Copy => self.copy(board, Instant::now()),
            Action::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Revert copy feedback once it has been shown long enough.
    /// Returns true when the screen needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.copy_status {
            CopyStatus::Copied(at) | CopyStatus::Failed(at)
                if now.saturating_duration_since(at) >= COPY_FEEDBACK =>
            {
                self.copy_status = CopyStatus::Idle;
                true
            }
            _ => false,
        }
    }

    fn regenerate(&mut self) {
        self.generations += 1;
        self.output = match pass::generate(&self.config, &mut self.rng) {
            Ok(password) => {
                let score = pass::score(password.as_str());
                debug!(score = score.value(), "strength");
                Output::Password { password, score }
            }
            Err(GenerateError::EmptyCharset) => Output::NoClasses,
            Err(e @ GenerateError::LengthOutOfRange { .. }) => {
                // Length is clamped on every path into `config`.
                warn!(error = %e, "unexpected length");
                Output::NoClasses
            }
        };
    }

    fn copy(&mut self, board: Option<&mut dyn ClipboardProvider>, now: Instant) {
        let result = match (board, self.password()) {
            (Some(board), Some(password)) => clipboard::copy(board, password.as_str()).is_ok(),
            _ => false,
        };
        self.copy_status = if result {
            CopyStatus::Copied(now)
        } else {
            CopyStatus::Failed(now)
        };
    }
}
