//! Password engine: configuration, generation and strength scoring.

pub mod charset;
mod generate;
mod strength;

use std::fmt;

use zeroize::Zeroize;

pub use charset::{CharacterClass, ClassSet};
pub use generate::generate;
pub use strength::{StrengthScore, entropy_bits, score};

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 16;

/// Clamp a requested length into the accepted range.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// What to generate. Callers keep `length` within `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationConfig {
    /// Build a config, clamping `length` into range.
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self {
            length: clamp_length(length),
            classes,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::all(),
        }
    }
}

/// A generated password. Zeroized on drop and never printed by `Debug`.
pub struct Password(String);

impl Password {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Password(bytes.iter().map(|&b| b as char).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
