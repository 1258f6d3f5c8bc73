//! Word splitting and case conversion.

use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static APOSTROPHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"['\x{2019}]").unwrap());
static ALPHANUMERIC_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").unwrap());

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Other,
}

fn classify(c: char) -> CharClass {
    if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_lowercase() {
        CharClass::Lower
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// Splits a run of letters and digits at case and digit boundaries.
fn split_run(run: &str, words: &mut Vec<String>) {
    let chars: Vec<char> = run.chars().collect();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if let Some(&prev) = i.checked_sub(1).and_then(|j| chars.get(j)) {
            let (p, k) = (classify(prev), classify(c));
            let next_is_lower = chars.get(i + 1).map(|&n| classify(n)) == Some(CharClass::Lower);
            let boundary = match (p, k) {
                (CharClass::Lower, CharClass::Upper) => true,
                // last capital of an acronym starts the next word: XMLHttp
                (CharClass::Upper, CharClass::Upper) => next_is_lower,
                (CharClass::Digit, CharClass::Digit) => false,
                (CharClass::Digit, _) | (_, CharClass::Digit) => true,
                _ => false,
            };
            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
}

/// Splits `text` into its words.
///
/// ```
/// use toolbelt::casing::words;
/// assert_eq!(words("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
/// assert_eq!(words("--foo-bar--"), vec!["foo", "bar"]);
/// ```
pub fn words(text: &str) -> Vec<String> {
    let text = APOSTROPHES.replace_all(text, "");
    let mut words = Vec::new();
    for run in ALPHANUMERIC_RUNS.find_iter(&text) {
        split_run(run.as_str(), &mut words);
    }
    words
}

/// Uppercases the first character, leaving the rest untouched.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character, leaving the rest untouched.
pub fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First character uppercase, the rest lowercase: `"FRED"` becomes `"Fred"`.
pub fn capitalize(text: &str) -> String {
    upper_first(&text.to_lowercase())
}

pub fn camel_case(text: &str) -> String {
    words(text)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

fn join_lowercase(text: &str, separator: &str) -> String {
    words(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn kebab_case(text: &str) -> String {
    join_lowercase(text, "-")
}

pub fn snake_case(text: &str) -> String {
    join_lowercase(text, "_")
}

pub fn lower_case(text: &str) -> String {
    join_lowercase(text, " ")
}

pub fn upper_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space separated words with their first letter uppercased; the rest of
/// each word keeps its case (`"__FOO_BAR__"` becomes `"FOO BAR"`).
pub fn start_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| upper_first(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The case conversions, selectable at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Case {
    Camel,
    Kebab,
    Snake,
    Lower,
    Upper,
    Start,
    Capitalize,
}

impl Case {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Case::Camel => camel_case(text),
            Case::Kebab => kebab_case(text),
            Case::Snake => snake_case(text),
            Case::Lower => lower_case(text),
            Case::Upper => upper_case(text),
            Case::Start => start_case(text),
            Case::Capitalize => capitalize(text),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Case::Camel => "camel",
            Case::Kebab => "kebab",
            Case::Snake => "snake",
            Case::Lower => "lower",
            Case::Upper => "upper",
            Case::Start => "start",
            Case::Capitalize => "capitalize",
        };
        write!(f, "{}", name)
    }
}
