use thiserror::Error;

use super::CliFlags;
use crate::pass::{CharacterClass, ClassSet};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Unknown character class '{0}' (use u, l, n, s)")]
    InvalidClass(char),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-S" | "--strength" => flags.strength = true,
            "-d" | "--default" => flags.default = true,
            "-i" | "--interactive" => flags.interactive = true,
            "--save" => flags.save = true,
            "--no-upper" => flags.disabled.insert(CharacterClass::Upper),
            "--no-lower" => flags.disabled.insert(CharacterClass::Lower),
            "--no-numbers" => flags.disabled.insert(CharacterClass::Number),
            "--no-symbols" => flags.disabled.insert(CharacterClass::Symbol),
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(number(arg, args.get(i))?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(number(arg, args.get(i))?);
            }
            "--seed" => {
                i += 1;
                flags.seed = Some(number(arg, args.get(i))?);
            }
            "--only" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue(arg.to_string()))?;
                flags.only = Some(classes(value)?);
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, ParseError> {
    let value = value.ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

fn classes(value: &str) -> Result<ClassSet, ParseError> {
    value
        .chars()
        .filter(|c| !matches!(c, ',' | ' '))
        .map(|c| CharacterClass::from_code(c).ok_or(ParseError::InvalidClass(c)))
        .collect()
}
