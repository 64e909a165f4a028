//! Null-safe utility functions
//!
//! Every function is also reachable through the `U` namespace, either directly
//! (`U::camel_case`) for the most common ones or through a nested module
//! (`U::String::pad`) for the rest.
//!
//! # Usage
//! ```rust
//! use nullsafe::U;
//!
//! assert_eq!(U::kebab_case(Some("helloWorld")), "hello-world");
//! assert_eq!(U::add(Some(5), None), 0);
//! assert_eq!(U::String::pad_start(Some("7"), 3, Some("0")), "007");
//! ```

pub mod case;
pub mod encoding;
pub mod math;
pub mod number;
pub mod random;
pub mod string;

/// Global utilities namespace
#[allow(non_snake_case)]
pub mod U {
    use super::*;
    use super::number::Number as Numeric;
    use rand::distributions::uniform::SampleUniform;
    use std::string::String as StdString;

    /// Word tokenizer and case conversion namespace
    pub mod Case {
        pub use super::super::case::*;
    }

    /// String utilities namespace
    pub mod String {
        pub use super::super::string::*;
    }

    /// Escaping and deburring namespace
    pub mod Encoding {
        pub use super::super::encoding::*;
    }

    /// Numeric primitives namespace
    pub mod Number {
        pub use super::super::number::*;
    }

    /// Reductions namespace
    pub mod Math {
        pub use super::super::math::*;
    }

    /// Random utilities namespace
    pub mod Random {
        pub use super::super::random::*;
    }

    // Case conversion

    /// Convert a string to the given case style
    ///
    /// # Example
    /// ```rust,ignore
    /// let snake = U::convert(Some("helloWorld"), CaseStyle::Snake);
    /// assert_eq!(snake, "hello_world");
    /// ```
    pub fn convert(input: Option<&str>, style: case::CaseStyle) -> StdString {
        case::convert(input, style)
    }

    /// Split a string into words
    pub fn words(input: Option<&str>) -> Vec<&str> {
        case::words(input)
    }

    pub fn camel_case(input: Option<&str>) -> StdString {
        case::camel_case(input)
    }

    pub fn pascal_case(input: Option<&str>) -> StdString {
        case::pascal_case(input)
    }

    pub fn kebab_case(input: Option<&str>) -> StdString {
        case::kebab_case(input)
    }

    pub fn snake_case(input: Option<&str>) -> StdString {
        case::snake_case(input)
    }

    pub fn start_case(input: Option<&str>) -> StdString {
        case::start_case(input)
    }

    pub fn lower_case(input: Option<&str>) -> StdString {
        case::lower_case(input)
    }

    pub fn upper_case(input: Option<&str>) -> StdString {
        case::upper_case(input)
    }

    // String utilities

    /// Trim leading and trailing whitespace
    ///
    /// # Example
    /// ```rust,ignore
    /// assert_eq!(U::trim(Some("  hello  ")), "hello");
    /// ```
    pub fn trim(input: Option<&str>) -> StdString {
        string::trim(input, None)
    }

    pub fn capitalize(input: Option<&str>) -> StdString {
        string::capitalize(input)
    }

    /// HTML escape a string
    pub fn escape(input: Option<&str>) -> StdString {
        encoding::escape(input)
    }

    /// Strip accents from Latin letters
    pub fn deburr(input: Option<&str>) -> StdString {
        encoding::deburr(input)
    }

    // Numeric primitives

    pub fn add<T: Numeric>(augend: Option<T>, addend: Option<T>) -> T {
        number::add(augend, addend)
    }

    pub fn subtract<T: Numeric>(minuend: Option<T>, subtrahend: Option<T>) -> T {
        number::subtract(minuend, subtrahend)
    }

    pub fn multiply<T: Numeric>(multiplier: Option<T>, multiplicand: Option<T>) -> T {
        number::multiply(multiplier, multiplicand)
    }

    pub fn divide<T: Numeric>(dividend: Option<T>, divisor: Option<T>) -> T {
        number::divide(dividend, divisor)
    }

    /// Round half away from zero at `precision` decimal places
    pub fn round<T: Numeric>(value: Option<T>, precision: i32) -> T {
        number::round(value, precision)
    }

    pub fn in_range<T: Numeric>(value: Option<T>, start: Option<T>, end: Option<T>) -> bool {
        number::in_range(value, start, end)
    }

    /// Uniform random value between two inclusive bounds
    ///
    /// # Example
    /// ```rust,ignore
    /// let n = U::random(Some(10), Some(5));
    /// assert!((5..=10).contains(&n));
    /// ```
    pub fn random<T: Numeric + SampleUniform>(lower: Option<T>, upper: Option<T>) -> T {
        random::random(lower, upper)
    }

    // Reductions

    pub fn min<T: Numeric>(values: Option<&[Option<T>]>) -> Option<T> {
        math::min(values)
    }

    pub fn max<T: Numeric>(values: Option<&[Option<T>]>) -> Option<T> {
        math::max(values)
    }

    pub fn mean<T: Numeric>(values: Option<&[Option<T>]>) -> Option<f64> {
        math::mean(values)
    }

    pub fn sum<T: Numeric>(values: Option<&[Option<T>]>) -> T {
        math::sum(values)
    }
}

/// Alias for the global utilities namespace
pub use U as Utils;
