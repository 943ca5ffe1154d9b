//! Heuristic strength scoring.

use super::{GenerationConfig, charset};

/// Score in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = 4;

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn strength(self) -> Strength {
        match self.0 {
            0 => Strength::VeryWeak,
            1 => Strength::Weak,
            2 => Strength::Medium,
            3 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    /// Width of the strength bar: `(score + 1) * 20` percent.
    pub fn bar_percent(self) -> u8 {
        (self.0 + 1) * 20
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Strength::VeryWeak => (0xdc, 0x35, 0x45),
            Strength::Weak => (0xff, 0xc1, 0x07),
            Strength::Medium => (0xfd, 0x7e, 0x14),
            Strength::Strong => (0x28, 0xa7, 0x45),
            Strength::VeryStrong => (0x20, 0xc9, 0x97),
        }
    }
}

/// One point each for: 12+ characters, an uppercase letter, a digit, and
/// anything that is not an ASCII letter or digit. Lowercase earns nothing.
pub fn score(password: &str) -> StrengthScore {
    let mut points = 0;
    if password.chars().count() >= 12 {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        points += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        points += 1;
    }
    debug_assert!(points <= StrengthScore::MAX);
    StrengthScore(points)
}

/// Password entropy in bits for a uniformly drawn password of this config.
pub fn entropy_bits(config: &GenerationConfig) -> f64 {
    let charset_size = charset::size(config.classes);
    if charset_size == 0 {
        return 0.0;
    }
    config.length as f64 * (charset_size as f64).log2()
}
