//! Built-in cipher tables
//!
//! Latin ciphers are keyed in uppercase to line up with normalized text.

use crate::core::method::MethodDefinition;

const HEBREW_STANDARD: &str = "א=1,ב=2,ג=3,ד=4,ה=5,ו=6,ז=7,ח=8,ט=9,י=10,כ=20,ך=20,ל=30,מ=40,ם=40,\
נ=50,ן=50,ס=60,ע=70,פ=80,ף=80,צ=90,ץ=90,ק=100,ר=200,ש=300,ת=400";

const GREEK_ISOPSEPHY: &str = "Α=1,Β=2,Γ=3,Δ=4,Ε=5,Ϛ=6,Ζ=7,Η=8,Θ=9,Ι=10,Κ=20,Λ=30,Μ=40,Ν=50,Ξ=60,\
Ο=70,Π=80,Ϙ=90,Ρ=100,Σ=200,Τ=300,Υ=400,Φ=500,Χ=600,Ψ=700,Ω=800,Ϡ=900";

const ARABIC_ABJAD: &str = "ا=1,ب=2,ج=3,د=4,ه=5,و=6,ز=7,ح=8,ط=9,ي=10,ك=20,ل=30,م=40,ن=50,س=60,\
ع=70,ف=80,ص=90,ق=100,ر=200,ش=300,ت=400,ث=500,خ=600,ذ=700,ض=800,ظ=900,غ=1000";

/// Build an A-Z cipher body from a position (1-26) to value function
fn latin(value: impl Fn(u32) -> u32) -> String {
    ('A'..='Z')
        .zip(1..)
        .map(|(c, position)| format!("{}={}", c, value(position)))
        .collect::<Vec<_>>()
        .join(",")
}

/// 1-9, 10-90, 100-800 across the alphabet
fn extended(position: u32) -> u32 {
    let exponent = (position - 1) / 9;
    let digit = (position - 1) % 9 + 1;
    digit * 10u32.pow(exponent)
}

fn definition(id: i64, name: &str, cipher: String) -> MethodDefinition {
    MethodDefinition {
        id,
        name: name.to_string(),
        sort_order: id as i32,
        cipher,
        value_separator: '=',
        pair_separator: ',',
        adds_character_count: false,
        adds_word_count: false,
    }
}

/// The default method catalog
pub fn builtin_definitions() -> Vec<MethodDefinition> {
    vec![
        definition(1, "English Ordinal", latin(|p| p)),
        definition(2, "Full Reduction", latin(|p| (p - 1) % 9 + 1)),
        definition(3, "Reverse Ordinal", latin(|p| 27 - p)),
        definition(4, "Sumerian", latin(|p| p * 6)),
        definition(5, "English Extended", latin(extended)),
        definition(6, "Hebrew Standard", HEBREW_STANDARD.to_string()),
        definition(7, "Greek Isopsephy", GREEK_ISOPSEPHY.to_string()),
        definition(8, "Arabic Abjad", ARABIC_ABJAD.to_string()),
    ]
}
