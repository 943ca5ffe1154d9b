//! Saved generation defaults.

mod file;

use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::pass::{ClassSet, DEFAULT_LENGTH, GenerationConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub classes: ClassSet,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    pub fn path() -> PathBuf {
        file::default_path()
    }

    pub fn config(&self) -> GenerationConfig {
        GenerationConfig::new(self.pass_length, self.classes)
    }
}

impl From<GenerationConfig> for Settings {
    fn from(config: GenerationConfig) -> Self {
        Self {
            pass_length: config.length,
            classes: config.classes,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            classes: ClassSet::all(),
        }
    }
}
