//! Text separators used to split input into segments

use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::core::error::ValidationError;

/// A named separator class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSeparator {
    NewLine,
    Comma,
    Semicolon,
    /// U+037E GREEK QUESTION MARK
    GreekSemicolon,
    Tab,
    Colon,
    FullStop,
    Pipe,
    Space,
}

impl TextSeparator {
    pub const ALL: [TextSeparator; 9] = [
        TextSeparator::NewLine,
        TextSeparator::Comma,
        TextSeparator::Semicolon,
        TextSeparator::GreekSemicolon,
        TextSeparator::Tab,
        TextSeparator::Colon,
        TextSeparator::FullStop,
        TextSeparator::Pipe,
        TextSeparator::Space,
    ];

    /// The literal strings this separator splits on, longest first
    pub fn literals(&self) -> &'static [&'static str] {
        match self {
            TextSeparator::NewLine => &["\r\n", "\n", "\r"],
            TextSeparator::Comma => &[","],
            TextSeparator::Semicolon => &[";"],
            TextSeparator::GreekSemicolon => &["\u{037E}"],
            TextSeparator::Tab => &["\t"],
            TextSeparator::Colon => &[":"],
            TextSeparator::FullStop => &["."],
            TextSeparator::Pipe => &["|"],
            TextSeparator::Space => &[" "],
        }
    }

    pub fn available() -> &'static [&'static str] {
        &[
            "newline",
            "comma",
            "semicolon",
            "greek-semicolon",
            "tab",
            "colon",
            "full-stop",
            "pipe",
            "space",
        ]
    }
}

impl fmt::Display for TextSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextSeparator::NewLine => "newline",
            TextSeparator::Comma => "comma",
            TextSeparator::Semicolon => "semicolon",
            TextSeparator::GreekSemicolon => "greek-semicolon",
            TextSeparator::Tab => "tab",
            TextSeparator::Colon => "colon",
            TextSeparator::FullStop => "full-stop",
            TextSeparator::Pipe => "pipe",
            TextSeparator::Space => "space",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TextSeparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newline" | "nl" | "line" => Ok(TextSeparator::NewLine),
            "comma" => Ok(TextSeparator::Comma),
            "semicolon" => Ok(TextSeparator::Semicolon),
            "greek-semicolon" | "greek" => Ok(TextSeparator::GreekSemicolon),
            "tab" => Ok(TextSeparator::Tab),
            "colon" => Ok(TextSeparator::Colon),
            "full-stop" | "fullstop" | "period" | "dot" => Ok(TextSeparator::FullStop),
            "pipe" => Ok(TextSeparator::Pipe),
            "space" => Ok(TextSeparator::Space),
            _ => Err(format!(
                "Unknown separator: {}. Available: {}",
                s,
                TextSeparator::available().join(", ")
            )),
        }
    }
}

/// Expand separator classes into the ordered literal list the scanner uses
pub fn separator_strings(separators: &[TextSeparator]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for literal in separators.iter().flat_map(|s| s.literals()) {
        if !out.iter().any(|s| s == *literal) {
            out.push(literal.to_string());
        }
    }
    out
}

/// Every known separator, in canonical order
pub fn default_separators() -> Vec<String> {
    separator_strings(&TextSeparator::ALL)
}

/// Splits text on an ordered list of literal separators
#[derive(Debug, Clone)]
pub struct Splitter {
    pattern: Option<Regex>,
}

impl Splitter {
    /// Earlier separators win when several match at the same position
    pub fn new(separators: &[String]) -> Result<Self, ValidationError> {
        if separators.iter().any(|s| s.is_empty()) {
            return Err(ValidationError::EmptySeparator);
        }
        if separators.is_empty() {
            return Ok(Self { pattern: None });
        }
        let alternation = separators
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation).map_err(|_| ValidationError::EmptySeparator)?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Split `text`, dropping empty segments
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match &self.pattern {
            Some(pattern) => pattern.split(text).filter(|s| !s.is_empty()).collect(),
            None if text.is_empty() => Vec::new(),
            None => vec![text],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let seps = default_separators();
        assert_eq!(seps[0], "\r\n");
        assert_eq!(seps.last().map(String::as_str), Some(" "));
        assert_eq!(seps.len(), 11);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("space".parse::<TextSeparator>(), Ok(TextSeparator::Space));
        assert_eq!("Full-Stop".parse::<TextSeparator>(), Ok(TextSeparator::FullStop));
        assert!("hyphen".parse::<TextSeparator>().is_err());
        for name in TextSeparator::available() {
            let sep: TextSeparator = name.parse().unwrap();
            assert_eq!(sep.to_string(), *name);
        }
    }

    #[test]
    fn test_split_drops_empty_segments() {
        let splitter = Splitter::new(&default_separators()).unwrap();
        let segments = splitter.split("The die, has\r\n\r\nbeen  cast.");
        assert_eq!(segments, vec!["The", "die", "has", "been", "cast"]);
    }

    #[test]
    fn test_split_without_space() {
        let seps = separator_strings(&[TextSeparator::NewLine, TextSeparator::Comma]);
        let splitter = Splitter::new(&seps).unwrap();
        assert_eq!(
            splitter.split("new york, los angeles\nparis"),
            vec!["new york", " los angeles", "paris"]
        );
    }

    #[test]
    fn test_split_metacharacters() {
        let seps = separator_strings(&[TextSeparator::Pipe, TextSeparator::FullStop]);
        let splitter = Splitter::new(&seps).unwrap();
        assert_eq!(splitter.split("a|b.c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_separator_rejected() {
        let err = Splitter::new(&["".to_string()]).unwrap_err();
        assert_eq!(err, ValidationError::EmptySeparator);
    }

    #[test]
    fn test_no_separators_yields_whole_text() {
        let splitter = Splitter::new(&[]).unwrap();
        assert_eq!(splitter.split("a b"), vec!["a b"]);
        assert!(splitter.split("").is_empty());
    }
}
