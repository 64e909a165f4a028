//! Escaping and accent-stripping utilities
//!
//! This module provides HTML entity escaping, regular expression escaping, and
//! `deburr`, which folds Latin-1 Supplement and Latin Extended-A letters to their
//! basic Latin equivalents. All functions accept `None` and return an empty string.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static REGEXP_SPECIAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\\^$.*+?()\[\]{}|]").expect("encoding: invalid regexp special-char pattern")
});

static HTML_ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:amp|lt|gt|quot|#39);").expect("encoding: invalid HTML entity pattern")
});

/// HTML escape a string
///
/// Converts `&`, `<`, `>`, `"` and `'` to their corresponding HTML entities.
///
/// # Example
/// ```rust,ignore
/// let escaped = escape(Some("fred, barney, & pebbles"));
/// assert_eq!(escaped, "fred, barney, &amp; pebbles");
/// ```
pub fn escape(input: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };

    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(ch),
        }
    }
    result
}

/// Inverse of [`escape`]
///
/// Only the five entities produced by `escape` are decoded; anything else is
/// left untouched.
///
/// # Example
/// ```rust,ignore
/// let raw = unescape(Some("fred, barney, &amp; pebbles"));
/// assert_eq!(raw, "fred, barney, & pebbles");
/// ```
pub fn unescape(input: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };

    HTML_ENTITY
        .replace_all(input, |caps: &Captures| match &caps[0] {
            "&amp;" => "&",
            "&lt;" => "<",
            "&gt;" => ">",
            "&quot;" => "\"",
            _ => "'",
        })
        .into_owned()
}

/// Escape the regular expression special characters
/// `\ ^ $ . * + ? ( ) [ ] { } |`
///
/// # Example
/// ```rust,ignore
/// let escaped = escape_regexp(Some("[docs](https://example.com/)"));
/// assert_eq!(escaped, r"\[docs\]\(https://example\.com/\)");
/// ```
pub fn escape_regexp(input: Option<&str>) -> String {
    match input {
        Some(input) => REGEXP_SPECIAL.replace_all(input, r"\$0").into_owned(),
        None => String::new(),
    }
}

/// Strip accents from Latin letters
///
/// Latin-1 Supplement and Latin Extended-A letters are replaced by their basic
/// Latin counterparts and combining diacritical marks (U+0300 to U+036F) are
/// removed. Other characters pass through unchanged.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(deburr(Some("déjà vu")), "deja vu");
/// ```
pub fn deburr(input: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };

    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        if is_combining_mark(ch) {
            continue;
        }
        match deburr_char(ch) {
            Some(folded) => result.push_str(folded),
            None => result.push(ch),
        }
    }
    result
}

pub(crate) fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

fn deburr_char(ch: char) -> Option<&'static str> {
    let folded = match ch {
        // Latin-1 Supplement
        'À'..='Å' => "A",
        'à'..='å' => "a",
        'Ç' => "C",
        'ç' => "c",
        'Ð' => "D",
        'ð' => "d",
        'È'..='Ë' => "E",
        'è'..='ë' => "e",
        'Ì'..='Ï' => "I",
        'ì'..='ï' => "i",
        'Ñ' => "N",
        'ñ' => "n",
        'Ò'..='Ö' | 'Ø' => "O",
        'ò'..='ö' | 'ø' => "o",
        'Ù'..='Ü' => "U",
        'ù'..='ü' => "u",
        'Ý' => "Y",
        'ý' | 'ÿ' => "y",
        'Æ' => "Ae",
        'æ' => "ae",
        'Þ' => "Th",
        'þ' => "th",
        'ß' => "ss",
        // Latin Extended-A
        'Ā' | 'Ă' | 'Ą' => "A",
        'ā' | 'ă' | 'ą' => "a",
        'Ć' | 'Ĉ' | 'Ċ' | 'Č' => "C",
        'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'Ď' | 'Đ' => "D",
        'ď' | 'đ' => "d",
        'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
        'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => "G",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'Ĥ' | 'Ħ' => "H",
        'ĥ' | 'ħ' => "h",
        'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => "I",
        'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'Ĵ' => "J",
        'ĵ' => "j",
        'Ķ' => "K",
        'ķ' | 'ĸ' => "k",
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => "L",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'Ń' | 'Ņ' | 'Ň' | 'Ŋ' => "N",
        'ń' | 'ņ' | 'ň' | 'ŋ' => "n",
        'Ō' | 'Ŏ' | 'Ő' => "O",
        'ō' | 'ŏ' | 'ő' => "o",
        'Ŕ' | 'Ŗ' | 'Ř' => "R",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => "S",
        'ś' | 'ŝ' | 'ş' | 'š' | 'ſ' => "s",
        'Ţ' | 'Ť' | 'Ŧ' => "T",
        'ţ' | 'ť' | 'ŧ' => "t",
        'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'Ŵ' => "W",
        'ŵ' => "w",
        'Ŷ' | 'Ÿ' => "Y",
        'ŷ' => "y",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ź' | 'ż' | 'ž' => "z",
        'Ĳ' => "IJ",
        'ĳ' => "ij",
        'Œ' => "Oe",
        'œ' => "oe",
        'ŉ' => "'n",
        _ => return None,
    };
    Some(folded)
}
