//! String manipulation utilities
//!
//! This module provides the null-safe string primitives: capitalization,
//! padding, trimming, splitting, prefix/suffix checks and truncation.
//! A `None` input yields an empty string, an empty vector or `false`
//! depending on the return type; nothing here panics.

use crate::config::StringConfig;

/// Fill character set used by the `pad*` functions when none is given
pub const DEFAULT_PAD_CHARS: &str = " ";

/// Default maximum length for [`truncate`]
pub const DEFAULT_TRUNCATE_LENGTH: usize = 30;

/// Default omission marker for [`truncate`]
pub const DEFAULT_OMISSION: &str = "...";

/// Convert the first character to upper case and the rest to lower case
///
/// # Example
/// ```rust,ignore
/// assert_eq!(capitalize(Some("FRED")), "Fred");
/// ```
pub fn capitalize(input: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };

    let mut chars = input.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Convert the first character to upper case, leaving the rest as is
///
/// # Example
/// ```rust,ignore
/// assert_eq!(upper_first(Some("fRED")), "FRED");
/// ```
pub fn upper_first(input: Option<&str>) -> String {
    map_first(input, |c, out| out.extend(c.to_uppercase()))
}

/// Convert the first character to lower case, leaving the rest as is
pub fn lower_first(input: Option<&str>) -> String {
    map_first(input, |c, out| out.extend(c.to_lowercase()))
}

fn map_first(input: Option<&str>, f: impl FnOnce(char, &mut String)) -> String {
    let Some(input) = input else {
        return String::new();
    };

    let mut chars = input.chars();
    let mut result = String::with_capacity(input.len());
    if let Some(first) = chars.next() {
        f(first, &mut result);
        result.push_str(chars.as_str());
    }
    result
}

pub fn to_lower(input: Option<&str>) -> String {
    input.map(str::to_lowercase).unwrap_or_default()
}

pub fn to_upper(input: Option<&str>) -> String {
    input.map(str::to_uppercase).unwrap_or_default()
}

/// Build `length` characters of padding by cycling through `chars`
fn create_padding(length: usize, chars: &str) -> String {
    chars.chars().cycle().take(length).collect()
}

fn pad_chars(chars: Option<&str>) -> &str {
    chars.unwrap_or(DEFAULT_PAD_CHARS)
}

/// Pad both sides of a string to `length` characters
///
/// Padding is split evenly; when it is odd the extra character goes to the
/// right. Padding characters are truncated if they do not divide evenly.
/// Strings already at least `length` long, or an empty `chars`, leave the
/// input unchanged. An absent input yields an empty string.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(pad(Some("abc"), 8, Some("_-")), "_-abc_-_");
/// ```
pub fn pad(input: Option<&str>, length: usize, chars: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };
    let chars = pad_chars(chars);
    let str_len = input.chars().count();

    if length <= str_len || chars.is_empty() {
        return input.to_string();
    }

    let pad_len = length - str_len;
    let left = pad_len / 2;
    let right = pad_len - left;
    create_padding(left, chars) + input + &create_padding(right, chars)
}

/// Pad the start of a string to `length` characters
///
/// # Example
/// ```rust,ignore
/// assert_eq!(pad_start(Some("abc"), 6, Some("_-")), "_-_abc");
/// ```
pub fn pad_start(input: Option<&str>, length: usize, chars: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };
    let chars = pad_chars(chars);
    let str_len = input.chars().count();

    if length <= str_len || chars.is_empty() {
        return input.to_string();
    }
    create_padding(length - str_len, chars) + input
}

/// Pad the end of a string to `length` characters
pub fn pad_end(input: Option<&str>, length: usize, chars: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };
    let chars = pad_chars(chars);
    let str_len = input.chars().count();

    if length <= str_len || chars.is_empty() {
        return input.to_string();
    }
    input.to_string() + &create_padding(length - str_len, chars)
}

/// Fill characters for the `pad*` functions, usually taken from
/// [`StringConfig::pad_chars`]
///
/// # Example
/// ```rust,ignore
/// let zeros = PadOptions::new("0");
/// assert_eq!(zeros.pad_start(Some("42"), 5), "00042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadOptions {
    pub chars: String,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PAD_CHARS)
    }
}

impl PadOptions {
    pub fn new(chars: impl Into<String>) -> Self {
        Self {
            chars: chars.into(),
        }
    }

    pub fn pad(&self, input: Option<&str>, length: usize) -> String {
        pad(input, length, Some(&self.chars))
    }

    pub fn pad_start(&self, input: Option<&str>, length: usize) -> String {
        pad_start(input, length, Some(&self.chars))
    }

    pub fn pad_end(&self, input: Option<&str>, length: usize) -> String {
        pad_end(input, length, Some(&self.chars))
    }
}

impl From<&StringConfig> for PadOptions {
    fn from(config: &StringConfig) -> Self {
        Self::new(config.pad_chars.as_str())
    }
}

/// Repeat a string `n` times
pub fn repeat(input: Option<&str>, n: usize) -> String {
    input.map(|s| s.repeat(n)).unwrap_or_default()
}

/// Replace the first occurrence of `pattern`
///
/// # Example
/// ```rust,ignore
/// assert_eq!(replace(Some("Hi Fred, Fred"), "Fred", "Barney"), "Hi Barney, Fred");
/// ```
pub fn replace(input: Option<&str>, pattern: &str, replacement: &str) -> String {
    input
        .map(|s| s.replacen(pattern, replacement, 1))
        .unwrap_or_default()
}

/// Replace every occurrence of `pattern`
pub fn replace_all(input: Option<&str>, pattern: &str, replacement: &str) -> String {
    input
        .map(|s| s.replace(pattern, replacement))
        .unwrap_or_default()
}

/// Split a string by `separator`, keeping at most `limit` pieces
///
/// A `None` separator yields the whole string as a single piece and an empty
/// separator splits into characters. `None` or empty input yields no pieces.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(split(Some("a-b-c"), Some("-"), Some(2)), vec!["a", "b"]);
/// ```
pub fn split(input: Option<&str>, separator: Option<&str>, limit: Option<usize>) -> Vec<String> {
    let input = match input {
        Some(s) if !s.is_empty() => s,
        _ => return Vec::new(),
    };
    let limit = limit.unwrap_or(usize::MAX);

    match separator {
        None => std::iter::once(input.to_string()).take(limit).collect(),
        Some("") => input.chars().take(limit).map(String::from).collect(),
        Some(sep) => input.split(sep).take(limit).map(String::from).collect(),
    }
}

/// Remove leading and trailing whitespace, or the given characters
///
/// # Example
/// ```rust,ignore
/// assert_eq!(trim(Some("  abc  "), None), "abc");
/// assert_eq!(trim(Some("-_-abc-_-"), Some("_-")), "abc");
/// ```
pub fn trim(input: Option<&str>, chars: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };
    match chars {
        None => input.trim().to_string(),
        Some(set) => input.trim_matches(|c: char| set.contains(c)).to_string(),
    }
}

pub fn trim_start(input: Option<&str>, chars: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };
    match chars {
        None => input.trim_start().to_string(),
        Some(set) => input.trim_start_matches(|c: char| set.contains(c)).to_string(),
    }
}

pub fn trim_end(input: Option<&str>, chars: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };
    match chars {
        None => input.trim_end().to_string(),
        Some(set) => input.trim_end_matches(|c: char| set.contains(c)).to_string(),
    }
}

/// Byte offset of the character at `char_pos`, clamped to the string end
fn byte_offset(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Check whether `input` starts with `target` at character `position`
///
/// # Example
/// ```rust,ignore
/// assert!(starts_with(Some("abc"), Some("b"), Some(1)));
/// ```
pub fn starts_with(input: Option<&str>, target: Option<&str>, position: Option<usize>) -> bool {
    match (input, target) {
        (Some(s), Some(target)) => {
            let start = byte_offset(s, position.unwrap_or(0));
            s[start..].starts_with(target)
        }
        _ => false,
    }
}

/// Check whether `input` ends with `target`, looking only at the first
/// `position` characters
///
/// # Example
/// ```rust,ignore
/// assert!(ends_with(Some("abc"), Some("b"), Some(2)));
/// ```
pub fn ends_with(input: Option<&str>, target: Option<&str>, position: Option<usize>) -> bool {
    match (input, target) {
        (Some(s), Some(target)) => {
            let end = position.map_or(s.len(), |pos| byte_offset(s, pos));
            s[..end].ends_with(target)
        }
        _ => false,
    }
}

/// Options for [`truncate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateOptions {
    /// Maximum length in characters, omission included
    pub length: usize,
    /// Marker appended to truncated strings
    pub omission: String,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_TRUNCATE_LENGTH,
            omission: DEFAULT_OMISSION.to_string(),
        }
    }
}

impl TruncateOptions {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn omission(mut self, omission: impl Into<String>) -> Self {
        self.omission = omission.into();
        self
    }
}

impl From<&StringConfig> for TruncateOptions {
    fn from(config: &StringConfig) -> Self {
        Self {
            length: config.truncate_length,
            omission: config.omission.clone(),
        }
    }
}

/// Truncate a string longer than `options.length` characters
///
/// The result, omission included, is never longer than `options.length`
/// characters unless the omission itself is longer.
///
/// # Example
/// ```rust,ignore
/// let opts = TruncateOptions::new(15);
/// assert_eq!(truncate(Some("This is a very long string"), &opts), "This is a ve...");
/// ```
pub fn truncate(input: Option<&str>, options: &TruncateOptions) -> String {
    let input = input.unwrap_or_default();
    if input.chars().count() <= options.length {
        return input.to_string();
    }

    let keep = options
        .length
        .saturating_sub(options.omission.chars().count());
    let cut = byte_offset(input, keep);
    format!("{}{}", &input[..cut], options.omission)
}
