//! Display name resolution.
//!
//! A constant's display name is its annotation when annotations are enabled
//! and the annotation is non-empty; the annotation text is used verbatim.
//! Otherwise the identifier is trimmed of the configured prefix, passed
//! through the configured [`NameTransform`] and prefixed with `add_prefix`.

use std::fmt;
use std::str::FromStr;

use enumtab_common::RawConstant;

use crate::options::NamingOptions;

/// Case/shape transform applied to identifier-derived names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameTransform {
    #[default]
    Noop,
    Snake,
    SnakeUpper,
    Kebab,
    KebabUpper,
    Camel,
    Pascal,
    Lower,
    Upper,
    Title,
    Whitespace,
    First,
    FirstUpper,
    FirstLower,
}

impl NameTransform {
    pub const ALL: [NameTransform; 14] = [
        NameTransform::Noop,
        NameTransform::Snake,
        NameTransform::SnakeUpper,
        NameTransform::Kebab,
        NameTransform::KebabUpper,
        NameTransform::Camel,
        NameTransform::Pascal,
        NameTransform::Lower,
        NameTransform::Upper,
        NameTransform::Title,
        NameTransform::Whitespace,
        NameTransform::First,
        NameTransform::FirstUpper,
        NameTransform::FirstLower,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NameTransform::Noop => "noop",
            NameTransform::Snake => "snake",
            NameTransform::SnakeUpper => "snake-upper",
            NameTransform::Kebab => "kebab",
            NameTransform::KebabUpper => "kebab-upper",
            NameTransform::Camel => "camel",
            NameTransform::Pascal => "pascal",
            NameTransform::Lower => "lower",
            NameTransform::Upper => "upper",
            NameTransform::Title => "title",
            NameTransform::Whitespace => "whitespace",
            NameTransform::First => "first",
            NameTransform::FirstUpper => "first-upper",
            NameTransform::FirstLower => "first-lower",
        }
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            NameTransform::Noop => name.to_string(),
            NameTransform::Snake => join_words(name, "_", str::to_lowercase),
            NameTransform::SnakeUpper => join_words(name, "_", str::to_uppercase),
            NameTransform::Kebab => join_words(name, "-", str::to_lowercase),
            NameTransform::KebabUpper => join_words(name, "-", str::to_uppercase),
            NameTransform::Camel => {
                let mut out = String::with_capacity(name.len());
                for (i, word) in split_words(name).iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            NameTransform::Pascal => join_words(name, "", capitalize),
            NameTransform::Lower => name.to_lowercase(),
            NameTransform::Upper => name.to_uppercase(),
            NameTransform::Title => join_words(name, " ", capitalize),
            NameTransform::Whitespace => join_words(name, " ", str::to_string),
            NameTransform::First => name.chars().next().map(String::from).unwrap_or_default(),
            NameTransform::FirstUpper => name
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
            NameTransform::FirstLower => name
                .chars()
                .next()
                .map(|c| c.to_lowercase().collect())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for NameTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTransform(pub String);

impl fmt::Display for UnknownTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown name transform '{}'", self.0)
    }
}

impl std::error::Error for UnknownTransform {}

impl FromStr for NameTransform {
    type Err = UnknownTransform;

    /// Accepts `snake-upper`, `snake_upper` and `SNAKE-UPPER` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        NameTransform::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| UnknownTransform(s.to_string()))
    }
}

fn join_words(name: &str, separator: &str, case: impl Fn(&str) -> String) -> String {
    split_words(name)
        .iter()
        .map(|w| case(w.as_str()))
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Split an identifier into words at `_`, `-` and whitespace separators,
/// lower-to-upper humps, the end of an acronym and letter/digit changes.
///
/// `HTTPServer2Go` splits into `HTTP`, `Server`, `2`, `Go`.
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let hump = prev.is_lowercase() && ch.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && ch.is_uppercase()
                && next.is_some_and(char::is_lowercase);
            let digit_change = prev.is_ascii_digit() != ch.is_ascii_digit();
            if hump || acronym_end || digit_change {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Resolve the display name of one raw constant.
pub fn resolve_display_name(constant: &RawConstant, options: &NamingOptions) -> String {
    if options.use_annotation_as_name {
        if let Some(annotation) = constant.annotation.as_deref() {
            if !annotation.is_empty() {
                return annotation.to_string();
            }
        }
    }

    let identifier = constant.identifier.as_str();
    let trimmed = match options.trim_prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => match identifier.strip_prefix(prefix) {
            // Stripping the whole identifier would leave an empty name.
            Some("") | None => identifier,
            Some(rest) => rest,
        },
        _ => identifier,
    };

    let transformed = options.transform.apply(trimmed);
    match options.add_prefix.as_deref() {
        Some(prefix) => format!("{prefix}{transformed}"),
        None => transformed,
    }
}
