//! Password generation.
//!
//! Two phases: one required character from every enabled class, then a fill
//! from the combined charset. The result is shuffled so the required
//! characters do not sit at fixed positions.

use rand::{Rng, RngCore};
use tracing::debug;
use zeroize::Zeroize;

use super::{GenerationConfig, MAX_LENGTH, MIN_LENGTH, Password, charset};
use crate::error::GenerateError;

/// Generate a single password from `config`, drawing from `rng`.
pub fn generate<R>(config: &GenerationConfig, rng: &mut R) -> Result<Password, GenerateError>
where
    R: RngCore + ?Sized,
{
    if config.classes.is_empty() {
        return Err(GenerateError::EmptyCharset);
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&config.length) {
        return Err(GenerateError::LengthOutOfRange {
            length: config.length,
        });
    }

    let chars = charset::build(config.classes);
    let mut buf = Vec::with_capacity(config.length);

    for class in config.classes.iter() {
        buf.push(random_byte(class.alphabet(), rng));
    }
    while buf.len() < config.length {
        buf.push(random_byte(&chars, rng));
    }

    shuffle(&mut buf, rng);

    let password = Password::from_bytes(&buf);
    buf.zeroize();

    debug!(
        length = config.length,
        classes = config.classes.len(),
        charset = chars.len(),
        "generated password"
    );
    Ok(password)
}

#[inline]
fn random_byte<R: RngCore + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}

/// Fisher-Yates, a fresh index per swap.
#[inline]
fn shuffle<R: RngCore + ?Sized>(chars: &mut [u8], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::pass::{CharacterClass, ClassSet};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0x5eed)
    }

    fn all_subsets() -> Vec<ClassSet> {
        (1u8..16)
            .map(|mask| {
                CharacterClass::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, class)| class)
                    .collect()
            })
            .collect()
    }

    fn contains_class(password: &str, class: CharacterClass) -> bool {
        password.bytes().any(|b| class.alphabet().contains(&b))
    }

    #[test]
    fn empty_class_set_is_rejected() {
        let config = GenerationConfig::new(16, ClassSet::empty());
        assert_eq!(
            generate(&config, &mut rng()).unwrap_err(),
            GenerateError::EmptyCharset
        );
    }

    #[test]
    fn out_of_range_length_is_rejected() {
        for length in [0, 3, MIN_LENGTH - 1, MAX_LENGTH + 1, 1000] {
            let config = GenerationConfig {
                length,
                classes: ClassSet::all(),
            };
            assert_eq!(
                generate(&config, &mut rng()).unwrap_err(),
                GenerateError::LengthOutOfRange { length }
            );
        }
    }

    #[test]
    fn empty_charset_wins_over_bad_length() {
        let config = GenerationConfig {
            length: 2,
            classes: ClassSet::empty(),
        };
        assert_eq!(
            generate(&config, &mut rng()).unwrap_err(),
            GenerateError::EmptyCharset
        );
    }

    #[test]
    fn length_matches_config() {
        let mut rng = rng();
        for classes in all_subsets() {
            for length in MIN_LENGTH..=MAX_LENGTH {
                let config = GenerationConfig::new(length, classes);
                let password = generate(&config, &mut rng).unwrap();
                assert_eq!(password.as_str().len(), length);
            }
        }
    }

    #[test]
    fn every_enabled_class_is_present() {
        let mut rng = rng();
        for classes in all_subsets() {
            for _ in 0..50 {
                let config = GenerationConfig::new(MIN_LENGTH, classes);
                let password = generate(&config, &mut rng).unwrap();
                for class in classes.iter() {
                    assert!(
                        contains_class(password.as_str(), class),
                        "{:?} missing from {:?}",
                        class,
                        password.as_str()
                    );
                }
            }
        }
    }

    #[test]
    fn disabled_classes_never_appear() {
        let mut rng = rng();
        for classes in all_subsets() {
            for _ in 0..20 {
                let config = GenerationConfig::new(MAX_LENGTH, classes);
                let password = generate(&config, &mut rng).unwrap();
                for class in CharacterClass::ALL {
                    if !classes.contains(class) {
                        assert!(!contains_class(password.as_str(), class));
                    }
                }
            }
        }
    }

    #[test]
    fn required_characters_move_around() {
        // Only one symbol can be forced in; with a 6-char password over 88
        // characters, its position should vary between runs.
        let mut rng = rng();
        let config = GenerationConfig::new(MIN_LENGTH, ClassSet::all());
        let mut first_symbol_positions = std::collections::HashSet::new();
        for _ in 0..200 {
            let password = generate(&config, &mut rng).unwrap();
            let pos = password
                .as_str()
                .bytes()
                .position(|b| CharacterClass::Symbol.alphabet().contains(&b))
                .unwrap();
            first_symbol_positions.insert(pos);
        }
        assert!(first_symbol_positions.len() > 3);
    }

    #[test]
    fn repeated_calls_differ() {
        let mut rng = rng();
        let config = GenerationConfig::default();
        let a = generate(&config, &mut rng).unwrap();
        let b = generate(&config, &mut rng).unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn same_seed_same_password() {
        let config = GenerationConfig::default();
        let a = generate(&config, &mut rng()).unwrap();
        let b = generate(&config, &mut rng()).unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn works_through_trait_object() {
        let mut boxed: Box<dyn RngCore> = Box::new(rng());
        let config = GenerationConfig::default();
        assert!(generate(&config, boxed.as_mut()).is_ok());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut chars = b"abcdefghij".to_vec();
        shuffle(&mut chars, &mut rng());
        let mut sorted = chars.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, b"abcdefghij");
    }
}
