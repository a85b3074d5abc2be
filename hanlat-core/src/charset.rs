//! Character-class tables for script segmentation and line splitting

use std::collections::BTreeSet;
use std::fmt;

/// Punctuation that may appear inside a Chinese run; quotes in both ASCII and curly form
const FULLWIDTH_PUNCTUATION: &[char] = &[
    '。', '，', '！', '？', '：', '；', '（', '）', '【', '】', '《', '》', '“', '”', '‘', '’', '"',
    '\'',
];

/// ASCII punctuation that may appear inside a Latin run
const LATIN_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')'];

/// Characters after which the mixed pipeline breaks a line
const SPLITTER_PUNCTUATION: &[char] = &[
    '︱', '|', '丨', '，', ',', '。', '.', '?', '？', '/', '\\', '、', '：', ';', '；', ':', '—',
    '…', '"', '“', '”', '！', '!',
];

/// Chinese sentence punctuation used by the sentence-break pipeline
const SENTENCE_BREAK_PUNCTUATION: &[char] = &['，', '。', '？', '：', '！', '；', '、', '…', '—'];

/// Characters that carry no content on a line of their own
const PUNCTUATION_ONLY: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '【', '】', '。', '、', '：', '；', '…', '—', '！', '丨',
    '︱', '-',
];

/// Membership test over a set of characters
pub trait CharSet: Send + Sync {
    /// Check whether `ch` belongs to the set
    fn contains(&self, ch: char) -> bool;

    /// Human-readable name used in logs and errors
    fn name(&self) -> &str;

    /// Whether the set has no members at all
    fn is_empty(&self) -> bool {
        false
    }

    /// Check whether every character of `text` belongs to the set
    fn covers(&self, text: &str) -> bool {
        text.chars().all(|ch| self.contains(ch))
    }
}

/// Built-in character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Han ideographs plus the digits, punctuation and separators kept with them
    ChineseRun,
    /// ASCII letters plus the digits, punctuation and separators kept with them
    LatinRun,
    /// Every character the mixed pipeline breaks a line after
    SplitterPunctuation,
    /// Chinese sentence punctuation used by the sentence-break pipeline
    SentenceBreak,
    /// Characters that make a line droppable when nothing else is on it
    PunctuationOnly,
}

impl CharClass {
    /// All built-in classes
    pub const ALL: [CharClass; 5] = [
        CharClass::ChineseRun,
        CharClass::LatinRun,
        CharClass::SplitterPunctuation,
        CharClass::SentenceBreak,
        CharClass::PunctuationOnly,
    ];

    /// Stable identifier for the class
    pub fn as_str(&self) -> &'static str {
        match self {
            CharClass::ChineseRun => "chinese-run",
            CharClass::LatinRun => "latin-run",
            CharClass::SplitterPunctuation => "splitter-punctuation",
            CharClass::SentenceBreak => "sentence-break",
            CharClass::PunctuationOnly => "punctuation-only",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CharSet for CharClass {
    fn contains(&self, ch: char) -> bool {
        match self {
            CharClass::ChineseRun => {
                is_han(ch)
                    || ch.is_ascii_digit()
                    || is_fullwidth_digit(ch)
                    || FULLWIDTH_PUNCTUATION.contains(&ch)
                    || matches!(ch, '-' | ':' | '.' | '︱' | '、' | '\\')
                    || ch.is_whitespace()
            }
            CharClass::LatinRun => {
                ch.is_ascii_alphanumeric()
                    || LATIN_PUNCTUATION.contains(&ch)
                    || matches!(ch, '-' | '|' | '\\')
                    || ch.is_whitespace()
            }
            CharClass::SplitterPunctuation => SPLITTER_PUNCTUATION.contains(&ch),
            CharClass::SentenceBreak => SENTENCE_BREAK_PUNCTUATION.contains(&ch),
            CharClass::PunctuationOnly => PUNCTUATION_ONLY.contains(&ch),
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

/// An explicit set of characters, typically loaded from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSet {
    name: String,
    chars: BTreeSet<char>,
}

impl CustomSet {
    /// Build a set from every character of `chars`
    pub fn new(name: impl Into<String>, chars: &str) -> Self {
        Self {
            name: name.into(),
            chars: chars.chars().collect(),
        }
    }

    /// Number of distinct characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl CharSet for CustomSet {
    fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Check whether `ch` is a Han ideograph
pub fn is_han(ch: char) -> bool {
    matches!(
        ch,
        '\u{3005}'
            | '\u{3007}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2FA1F}'
            | '\u{30000}'..='\u{323AF}'
    )
}

/// Check whether `ch` is a fullwidth digit `０`-`９`
pub fn is_fullwidth_digit(ch: char) -> bool {
    ('\u{FF10}'..='\u{FF19}').contains(&ch)
}
