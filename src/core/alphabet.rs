//! Alphabet detection
//!
//! Classifies characters and strings by script against a fixed catalog of
//! character sets. The sets are built once on first use and never mutated.

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use unicode_normalization::UnicodeNormalization;

/// A script covered by the character-set catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Script {
    English,
    Greek,
    Hebrew,
    Arabic,
    Cyrillic,
    Coptic,
}

impl Script {
    pub const ALL: [Script; 6] = [
        Script::English,
        Script::Greek,
        Script::Hebrew,
        Script::Arabic,
        Script::Cyrillic,
        Script::Coptic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Script::English => "english",
            Script::Greek => "greek",
            Script::Hebrew => "hebrew",
            Script::Arabic => "arabic",
            Script::Cyrillic => "cyrillic",
            Script::Coptic => "coptic",
        }
    }

    /// Scripts written right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Script::Hebrew | Script::Arabic)
    }

    fn flag(&self) -> AlphabetFlags {
        match self {
            Script::English => AlphabetFlags::ENGLISH,
            Script::Greek => AlphabetFlags::GREEK,
            Script::Hebrew => AlphabetFlags::HEBREW,
            Script::Arabic => AlphabetFlags::ARABIC,
            Script::Cyrillic => AlphabetFlags::CYRILLIC,
            Script::Coptic => AlphabetFlags::COPTIC,
        }
    }
}

/// Classification of a character or string.
///
/// Strings that span more than one flag collapse to `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// No letters at all (spaces, digits, punctuation, empty input)
    #[default]
    None,
    /// Letters outside every known set
    Unknown,
    Single(Script),
    Mixed,
}

impl Alphabet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alphabet::None => "none",
            Alphabet::Unknown => "unknown",
            Alphabet::Single(script) => script.as_str(),
            Alphabet::Mixed => "mixed",
        }
    }

    /// Whether trailing text in this alphabet needs an LTR mark when exported
    pub fn needs_ltr_mark(&self) -> bool {
        match self {
            Alphabet::Unknown => true,
            Alphabet::Single(script) => script.is_rtl(),
            Alphabet::None | Alphabet::Mixed => false,
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Alphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Bit-flag union of alphabets, for callers that want every script present
/// in a string rather than a single collapsed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlphabetFlags(u8);

impl AlphabetFlags {
    pub const NONE: AlphabetFlags = AlphabetFlags(0);
    pub const UNKNOWN: AlphabetFlags = AlphabetFlags(1);
    pub const ENGLISH: AlphabetFlags = AlphabetFlags(1 << 1);
    pub const GREEK: AlphabetFlags = AlphabetFlags(1 << 2);
    pub const HEBREW: AlphabetFlags = AlphabetFlags(1 << 3);
    pub const ARABIC: AlphabetFlags = AlphabetFlags(1 << 4);
    pub const CYRILLIC: AlphabetFlags = AlphabetFlags(1 << 5);
    pub const COPTIC: AlphabetFlags = AlphabetFlags(1 << 6);
    pub const ALL: AlphabetFlags = AlphabetFlags(0x7f);

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, other: AlphabetFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Collapse the union to a single tag; more than one flag is `Mixed`
    pub fn collapse(&self) -> Alphabet {
        match self.0.count_ones() {
            0 => Alphabet::None,
            1 if *self == AlphabetFlags::UNKNOWN => Alphabet::Unknown,
            1 => Script::ALL
                .iter()
                .find(|s| s.flag() == *self)
                .map(|s| Alphabet::Single(*s))
                .unwrap_or(Alphabet::Unknown),
            _ => Alphabet::Mixed,
        }
    }
}

impl From<Alphabet> for AlphabetFlags {
    fn from(alphabet: Alphabet) -> Self {
        match alphabet {
            Alphabet::None => AlphabetFlags::NONE,
            Alphabet::Unknown => AlphabetFlags::UNKNOWN,
            Alphabet::Single(script) => script.flag(),
            Alphabet::Mixed => AlphabetFlags::ALL,
        }
    }
}

impl BitOr for AlphabetFlags {
    type Output = AlphabetFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        AlphabetFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for AlphabetFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Inclusive code point ranges per script; non-letters inside a range are skipped
const SCRIPT_RANGES: &[(Script, char, char)] = &[
    (Script::English, 'A', 'Z'),
    (Script::English, 'a', 'z'),
    (Script::Greek, '\u{0391}', '\u{03A9}'),
    (Script::Greek, '\u{03B1}', '\u{03C9}'),
    // archaic numeral letters: koppa, stigma, digamma, sampi
    (Script::Greek, '\u{03D8}', '\u{03E1}'),
    (Script::Coptic, '\u{03E2}', '\u{03EF}'),
    (Script::Coptic, '\u{2C80}', '\u{2CE4}'),
    (Script::Hebrew, '\u{05D0}', '\u{05EA}'),
    (Script::Arabic, '\u{0620}', '\u{064A}'),
    (Script::Arabic, '\u{066E}', '\u{06D3}'),
    (Script::Cyrillic, '\u{0400}', '\u{04FF}'),
];

/// Non-letter signs that still belong to a script (Hebrew numeral marks)
const ALLOWANCES: &[(char, Script)] = &[('\u{05F3}', Script::Hebrew), ('\u{05F4}', Script::Hebrew)];

static CHARACTER_SETS: Lazy<HashMap<char, Script>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for &(script, start, end) in SCRIPT_RANGES {
        for c in (start..=end).filter(|c| c.is_alphabetic()) {
            map.insert(c, script);
        }
    }
    map
});

/// Classify a single character.
///
/// Precomposed letters are classified by their decomposed base letter, so
/// `é` is English and `ά` is Greek.
pub fn classify_char(c: char) -> Alphabet {
    if let Some((_, script)) = ALLOWANCES.iter().find(|(a, _)| *a == c) {
        return Alphabet::Single(*script);
    }
    if !c.is_alphabetic() {
        return Alphabet::None;
    }
    if let Some(script) = CHARACTER_SETS.get(&c) {
        return Alphabet::Single(*script);
    }
    c.to_string()
        .nfd()
        .next()
        .and_then(|base| CHARACTER_SETS.get(&base))
        .map(|script| Alphabet::Single(*script))
        .unwrap_or(Alphabet::Unknown)
}

/// Union of every character's alphabet
pub fn classify_flags(text: &str) -> AlphabetFlags {
    text.chars()
        .map(|c| AlphabetFlags::from(classify_char(c)))
        .fold(AlphabetFlags::NONE, |acc, flag| acc | flag)
}

/// Classify a string, collapsing multi-script text to `Mixed`
pub fn classify_str(text: &str) -> Alphabet {
    classify_flags(text).collapse()
}
