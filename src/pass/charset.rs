//! Character classes and charset building for password generation.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four selectable alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Upper,
    Lower,
    Number,
    Symbol,
}

impl CharacterClass {
    /// Canonical order. Charsets and required characters follow it.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Number,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Upper => UPPERCASE.as_bytes(),
            CharacterClass::Lower => LOWERCASE.as_bytes(),
            CharacterClass::Number => DIGITS.as_bytes(),
            CharacterClass::Symbol => SYMBOLS.as_bytes(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Upper => "Uppercase",
            CharacterClass::Lower => "Lowercase",
            CharacterClass::Number => "Numbers",
            CharacterClass::Symbol => "Symbols",
        }
    }

    /// Single-letter code used by `--only` and the settings file.
    pub fn code(self) -> char {
        match self {
            CharacterClass::Upper => 'u',
            CharacterClass::Lower => 'l',
            CharacterClass::Number => 'n',
            CharacterClass::Symbol => 's',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.code() == c.to_ascii_lowercase())
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Upper => 0b0001,
            CharacterClass::Lower => 0b0010,
            CharacterClass::Number => 0b0100,
            CharacterClass::Symbol => 0b1000,
        }
    }
}

/// Set of enabled classes. Iterates in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class)
        } else {
            self.remove(class)
        }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Concatenate the alphabets of every enabled class.
pub fn build(classes: ClassSet) -> Vec<u8> {
    classes
        .iter()
        .flat_map(|class| class.alphabet().iter().copied())
        .collect()
}

/// Effective charset size (for entropy calculation).
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|class| class.alphabet().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(CharacterClass::Upper.alphabet().len(), 26);
        assert_eq!(CharacterClass::Lower.alphabet().len(), 26);
        assert_eq!(CharacterClass::Number.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbol.alphabet().len(), 26);
    }

    #[test]
    fn alphabets_are_disjoint() {
        for a in CharacterClass::ALL {
            for b in CharacterClass::ALL {
                if a == b {
                    continue;
                }
                assert!(
                    a.alphabet().iter().all(|c| !b.alphabet().contains(c)),
                    "{:?} overlaps {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn build_preserves_canonical_order() {
        let classes: ClassSet = [CharacterClass::Symbol, CharacterClass::Upper]
            .into_iter()
            .collect();
        let chars = build(classes);
        assert_eq!(&chars[..26], UPPERCASE.as_bytes());
        assert_eq!(&chars[26..], SYMBOLS.as_bytes());
        assert_eq!(size(classes), 52);
    }

    #[test]
    fn build_of_empty_set_is_empty() {
        assert!(build(ClassSet::empty()).is_empty());
        assert_eq!(size(ClassSet::empty()), 0);
    }

    #[test]
    fn class_set_operations() {
        let mut set = ClassSet::empty();
        assert!(set.is_empty());
        set.insert(CharacterClass::Number);
        set.toggle(CharacterClass::Lower);
        assert_eq!(set.len(), 2);
        assert!(set.contains(CharacterClass::Lower));
        set.toggle(CharacterClass::Lower);
        assert!(!set.contains(CharacterClass::Lower));
        set.set(CharacterClass::Upper, true);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![CharacterClass::Upper, CharacterClass::Number]
        );
        set.remove(CharacterClass::Number);
        set.remove(CharacterClass::Upper);
        assert!(set.is_empty());
        assert_eq!(ClassSet::all().len(), 4);
    }

    #[test]
    fn codes_round_trip() {
        for class in CharacterClass::ALL {
            assert_eq!(CharacterClass::from_code(class.code()), Some(class));
        }
        assert_eq!(CharacterClass::from_code('U'), Some(CharacterClass::Upper));
        assert_eq!(CharacterClass::from_code('x'), None);
    }
}
