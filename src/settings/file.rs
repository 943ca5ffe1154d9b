//! Settings file persistence.
//!
//! One line: `length,upper,lower,number,symbol`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::error::SettingsError;
use crate::pass::{CharacterClass, clamp_length};

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let flags = CharacterClass::ALL
        .iter()
        .map(|class| settings.classes.contains(*class).to_string())
        .collect::<Vec<_>>()
        .join(",");

    let data = format!("{},{}\n", settings.pass_length, flags);
    file.write_all(data.as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> Result<(), SettingsError> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    match parse_line(line.trim()) {
        Some(parsed) => *settings = parsed,
        None => {
            warn!(path = %path.display(), "unreadable settings file, restoring defaults");
            save(settings, path)?;
        }
    }

    Ok(())
}

fn parse_line(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 1 + CharacterClass::ALL.len() {
        return None;
    }

    let mut settings = Settings {
        pass_length: clamp_length(parts[0].parse().ok()?),
        ..Default::default()
    };
    for (class, flag) in CharacterClass::ALL.iter().zip(&parts[1..]) {
        settings.classes.set(*class, flag.parse().ok()?);
    }
    Some(settings)
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passgen/settings", home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");

        let mut classes = ClassSet::all();
        classes.remove(CharacterClass::Symbol);
        let saved = Settings {
            pass_length: 24,
            classes,
        };
        saved.save_to(&path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "24,true,true,true,false\n"
        );
        assert_eq!(Settings::load_from(&path).unwrap(), saved);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn garbled_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "not,a,settings,line\n").unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "16,true,true,true,true\n"
        );
    }

    #[test]
    fn length_is_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "99,false,true,false,false\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.pass_length, 32);
        assert_eq!(
            settings.classes.iter().collect::<Vec<_>>(),
            vec![CharacterClass::Lower]
        );
    }

    #[test]
    fn parse_rejects_bad_fields() {
        assert!(parse_line("").is_none());
        assert!(parse_line("x,true,true,true,true").is_none());
        assert!(parse_line("12,yes,true,true,true").is_none());
        assert!(parse_line("12,true,true,true,true,true").is_none());
        assert!(parse_line(" 12 , true,true,true,true").is_some());
    }
}
