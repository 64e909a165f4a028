//! Word tokenizer and case conversion
//!
//! Every case conversion in this crate goes through [`words`], so camelCase,
//! kebab-case, snake_case, Start Case, lower case and UPPER CASE always agree on
//! where the word boundaries are.
//!
//! # Word boundaries
//!
//! Characters fall into four classes: separators (anything that is not a letter
//! or an ASCII digit), lowercase letters, uppercase letters and digits. A new
//! word starts
//!
//! - after any separator (separators are dropped),
//! - at a lowercase to uppercase transition (`helloWorld` -> `hello`, `World`),
//! - at a letter to digit or digit to letter transition (`hello123` -> `hello`, `123`),
//! - at the last letter of an uppercase run when it is followed by a lowercase
//!   letter (`ABCWorld` -> `ABC`, `World`).
//!
//! An uppercase run that ends at the end of the input, a separator or a digit
//! stays a single word (`fooBAR` -> `foo`, `BAR`).

use crate::error::{Error, Result};
use crate::utils::encoding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target style for [`convert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello-world`
    Kebab,
    /// `hello_world`
    Snake,
    /// `Hello World`
    Start,
    /// `hello world`
    Lower,
    /// `HELLO WORLD`
    Upper,
}

impl CaseStyle {
    /// All styles, in declaration order
    pub const ALL: [CaseStyle; 7] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Kebab,
        CaseStyle::Snake,
        CaseStyle::Start,
        CaseStyle::Lower,
        CaseStyle::Upper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Snake => "snake",
            CaseStyle::Start => "start",
            CaseStyle::Lower => "lower",
            CaseStyle::Upper => "upper",
        }
    }

    /// String placed between words, if any
    pub fn separator(&self) -> &'static str {
        match self {
            CaseStyle::Camel | CaseStyle::Pascal => "",
            CaseStyle::Kebab => "-",
            CaseStyle::Snake => "_",
            CaseStyle::Start | CaseStyle::Lower | CaseStyle::Upper => " ",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "pascal" | "pascalcase" => Ok(CaseStyle::Pascal),
            "kebab" | "kebabcase" => Ok(CaseStyle::Kebab),
            "snake" | "snakecase" => Ok(CaseStyle::Snake),
            "start" | "startcase" => Ok(CaseStyle::Start),
            "lower" | "lowercase" => Ok(CaseStyle::Lower),
            "upper" | "uppercase" => Ok(CaseStyle::Upper),
            other => Err(Error::invalid_input(format!("unknown case style: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Separator,
    Lower,
    Upper,
    Digit,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_ascii_digit() {
            CharClass::Digit
        } else if ch.is_uppercase() {
            CharClass::Upper
        } else if ch.is_alphabetic() {
            // Caseless letters count as lowercase
            CharClass::Lower
        } else {
            CharClass::Separator
        }
    }

    fn is_letter(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Upper)
    }
}

/// Split a string into words
///
/// Returned words borrow from the input and keep their original case.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(words(Some("XMLHttpRequest v2")), vec!["XML", "Http", "Request", "v", "2"]);
/// ```
pub fn words(input: Option<&str>) -> Vec<&str> {
    let Some(input) = input else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev = CharClass::Separator;
    let mut chars = input.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let class = CharClass::of(ch);

        if class == CharClass::Separator {
            if let Some(begin) = start.take() {
                result.push(&input[begin..idx]);
            }
            prev = class;
            continue;
        }

        let boundary = match (prev, class) {
            (CharClass::Separator, _) => false,
            (CharClass::Lower, CharClass::Upper) => true,
            (CharClass::Digit, c) | (c, CharClass::Digit) if c.is_letter() => true,
            (CharClass::Upper, CharClass::Upper) => chars
                .peek()
                .is_some_and(|&(_, next)| CharClass::of(next) == CharClass::Lower),
            _ => false,
        };

        if boundary {
            if let Some(begin) = start {
                result.push(&input[begin..idx]);
            }
            start = Some(idx);
        } else if start.is_none() {
            start = Some(idx);
        }
        prev = class;
    }

    if let Some(begin) = start {
        result.push(&input[begin..]);
    }

    result
}

/// Render an already tokenized word sequence in the given style
pub fn render<S: AsRef<str>>(words: &[S], style: CaseStyle) -> String {
    let mut result = String::new();

    for (i, word) in words.iter().enumerate() {
        let word = word.as_ref();
        if i > 0 {
            result.push_str(style.separator());
        }
        match style {
            CaseStyle::Camel if i == 0 => result.push_str(&word.to_lowercase()),
            CaseStyle::Camel | CaseStyle::Pascal | CaseStyle::Start => {
                push_capitalized(&mut result, word)
            }
            CaseStyle::Kebab | CaseStyle::Snake | CaseStyle::Lower => {
                result.push_str(&word.to_lowercase())
            }
            CaseStyle::Upper => result.push_str(&word.to_uppercase()),
        }
    }

    result
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        // Some capitals decompose into a letter plus a combining mark (ῖ -> Ι͂)
        out.extend(
            first
                .to_uppercase()
                .filter(|&ch| !encoding::is_combining_mark(ch)),
        );
        out.push_str(&chars.as_str().to_lowercase());
    }
}

/// Convert a string to the given case style
///
/// Accents are stripped and apostrophes removed before tokenizing, so
/// `"Don't Stop"` becomes `"dont-stop"` in kebab case rather than
/// `"don-t-stop"`.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(convert(Some("helloWorld"), CaseStyle::Kebab), "hello-world");
/// assert_eq!(convert(None, CaseStyle::Start), "");
/// ```
pub fn convert(input: Option<&str>, style: CaseStyle) -> String {
    let Some(input) = input else {
        return String::new();
    };

    let normalized: String = encoding::deburr(Some(input))
        .chars()
        .filter(|&ch| ch != '\'' && ch != '\u{2019}')
        .collect();

    render(&words(Some(&normalized)), style)
}

/// Convert to camelCase
///
/// # Example
/// ```rust,ignore
/// assert_eq!(camel_case(Some("Foo Bar")), "fooBar");
/// assert_eq!(camel_case(Some("__FOO_BAR__")), "fooBar");
/// ```
pub fn camel_case(input: Option<&str>) -> String {
    convert(input, CaseStyle::Camel)
}

/// Convert to PascalCase
pub fn pascal_case(input: Option<&str>) -> String {
    convert(input, CaseStyle::Pascal)
}

/// Convert to kebab-case
///
/// # Example
/// ```rust,ignore
/// assert_eq!(kebab_case(Some("fooBar")), "foo-bar");
/// ```
pub fn kebab_case(input: Option<&str>) -> String {
    convert(input, CaseStyle::Kebab)
}

/// Convert to snake_case
///
/// # Example
/// ```rust,ignore
/// assert_eq!(snake_case(Some("--FOO-BAR--")), "foo_bar");
/// ```
pub fn snake_case(input: Option<&str>) -> String {
    convert(input, CaseStyle::Snake)
}

/// Convert to Start Case
pub fn start_case(input: Option<&str>) -> String {
    convert(input, CaseStyle::Start)
}

/// Convert to space separated lower case
pub fn lower_case(input: Option<&str>) -> String {
    convert(input, CaseStyle::Lower)
}

/// Convert to space separated UPPER CASE
pub fn upper_case(input: Option<&str>) -> String {
    convert(input, CaseStyle::Upper)
}
