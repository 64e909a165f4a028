//! Null-safe numeric primitives
//!
//! Every operation is generic over [`Number`], which carries the identity
//! values used when an operand is absent: `ZERO` for addition, subtraction and
//! division, `ONE` for multiplication. Integer arithmetic wraps on overflow so
//! that no operation can panic.
//!
//! # Usage
//! ```rust,ignore
//! use nullsafe::utils::number::*;
//!
//! assert_eq!(add(Some(5), None), 0);
//! assert_eq!(multiply::<i32>(None, None), 1);
//! assert_eq!(divide(Some(10), Some(0)), 0);
//! assert!(in_range(Some(5), Some(10), Some(2)));
//! ```

use std::fmt::Debug;

/// Numeric type usable with the null-safe operations
pub trait Number: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;
    /// Machine epsilon for floats, zero for integers
    const EPSILON: Self;

    fn plus(self, rhs: Self) -> Self;
    fn minus(self, rhs: Self) -> Self;
    fn times(self, rhs: Self) -> Self;
    /// Division; callers guarantee `rhs` is not zero
    fn over(self, rhs: Self) -> Self;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// True for float NaN, always false for integers
    fn is_nan(self) -> bool;

    /// False for float infinities and NaN, always true for integers
    fn is_finite(self) -> bool;

    fn to_f64(self) -> f64;

    /// Saturating conversion back from `f64`
    fn from_f64(value: f64) -> Self;

    /// Exact integer value, `None` for floats
    fn to_i128(self) -> Option<i128>;

    /// Saturating conversion from `i128`
    fn from_i128(value: i128) -> Self;
}

macro_rules! impl_number_int {
    ($($t:ty),*) => {$(
        impl Number for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const EPSILON: Self = 0;

            fn plus(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
            fn minus(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
            fn times(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
            fn over(self, rhs: Self) -> Self { self.wrapping_div(rhs) }
            fn is_nan(self) -> bool { false }
            fn is_finite(self) -> bool { true }
            fn to_f64(self) -> f64 { self as f64 }
            fn from_f64(value: f64) -> Self { value as $t }
            fn to_i128(self) -> Option<i128> { Some(self as i128) }
            fn from_i128(value: i128) -> Self {
                value.clamp(<$t>::MIN as i128, <$t>::MAX as i128) as $t
            }
        }
    )*};
}

macro_rules! impl_number_float {
    ($($t:ty),*) => {$(
        impl Number for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const EPSILON: Self = <$t>::EPSILON;

            fn plus(self, rhs: Self) -> Self { self + rhs }
            fn minus(self, rhs: Self) -> Self { self - rhs }
            fn times(self, rhs: Self) -> Self { self * rhs }
            fn over(self, rhs: Self) -> Self { self / rhs }
            fn is_nan(self) -> bool { <$t>::is_nan(self) }
            fn is_finite(self) -> bool { <$t>::is_finite(self) }
            fn to_f64(self) -> f64 { self as f64 }
            fn from_f64(value: f64) -> Self { value as $t }
            fn to_i128(self) -> Option<i128> { None }
            fn from_i128(value: i128) -> Self { value as $t }
        }
    )*};
}

impl_number_int!(i8, i16, i32, i64, isize);
impl_number_float!(f32, f64);

/// Add two numbers, `ZERO` if either is absent
pub fn add<T: Number>(augend: Option<T>, addend: Option<T>) -> T {
    match (augend, addend) {
        (Some(a), Some(b)) => a.plus(b),
        _ => T::ZERO,
    }
}

/// Subtract two numbers, `ZERO` if either is absent
pub fn subtract<T: Number>(minuend: Option<T>, subtrahend: Option<T>) -> T {
    match (minuend, subtrahend) {
        (Some(a), Some(b)) => a.minus(b),
        _ => T::ZERO,
    }
}

/// Multiply two numbers, `ONE` if either is absent
pub fn multiply<T: Number>(multiplier: Option<T>, multiplicand: Option<T>) -> T {
    match (multiplier, multiplicand) {
        (Some(a), Some(b)) => a.times(b),
        _ => T::ONE,
    }
}

/// Divide two numbers, `ZERO` if either is absent or the divisor is zero
///
/// Integer division truncates toward zero.
pub fn divide<T: Number>(dividend: Option<T>, divisor: Option<T>) -> T {
    match (dividend, divisor) {
        (Some(_), Some(b)) if b.is_zero() => {
            log::trace!("divide: zero divisor, returning zero");
            T::ZERO
        }
        (Some(a), Some(b)) => a.over(b),
        _ => T::ZERO,
    }
}

const MAX_PRECISION: i32 = 292;

#[derive(Clone, Copy)]
enum Rounding {
    HalfUp,
    Floor,
    Ceil,
}

/// Scale by a power of ten through the decimal text form, which avoids the
/// binary drift of multiplying by `10f64.powi(exp)` (1.005 * 100 = 100.49999...)
fn shift(value: f64, exp: i32) -> f64 {
    format!("{value}e{exp}").parse().unwrap_or(value)
}

/// Round an integer to a multiple of `10^digits`
fn round_int(n: i128, digits: u32, mode: Rounding) -> i128 {
    let Some(factor) = 10i128.checked_pow(digits) else {
        // Step larger than any integer type
        return match mode {
            Rounding::Floor if n < 0 => i128::MIN,
            Rounding::Ceil if n > 0 => i128::MAX,
            _ => 0,
        };
    };

    let quotient = n / factor;
    let remainder = n % factor;
    let step = match mode {
        Rounding::HalfUp if remainder.unsigned_abs() * 2 >= factor.unsigned_abs() => {
            remainder.signum()
        }
        Rounding::Floor if remainder < 0 => -1,
        Rounding::Ceil if remainder > 0 => 1,
        _ => 0,
    };
    (quotient + step).saturating_mul(factor)
}

fn round_with<T: Number>(value: Option<T>, precision: i32, mode: Rounding) -> T {
    let Some(value) = value else {
        return T::ZERO;
    };

    if let Some(int) = value.to_i128() {
        // Integers have no fractional digits to round away
        if precision >= 0 {
            return value;
        }
        return T::from_i128(round_int(int, precision.unsigned_abs(), mode));
    }

    let raw = value.to_f64();
    if !raw.is_finite() {
        return value;
    }

    let precision = precision.clamp(-MAX_PRECISION, MAX_PRECISION);
    let scaled = shift(raw, precision);
    if !scaled.is_finite() {
        // Too large to carry any digits at this precision
        return value;
    }
    let rounded = match mode {
        Rounding::HalfUp => scaled.round(),
        Rounding::Floor => scaled.floor(),
        Rounding::Ceil => scaled.ceil(),
    };
    let result = T::from_f64(shift(rounded, -precision));
    if result.is_finite() {
        result
    } else {
        log::trace!("round: {raw} rounds past the float range, keeping it");
        value
    }
}

/// Round half away from zero at `precision` decimal places
///
/// Negative precision rounds to tens, hundreds and so on. An absent value
/// rounds to `ZERO`. Integers are rounded in integer arithmetic and saturate
/// at their type bounds; a float whose rounded value would leave the float
/// range is returned unchanged. Float precision is clamped to `-292..=292`.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(round(Some(4.006), 2), 4.01);
/// assert_eq!(round(Some(4060), -2), 4100);
/// ```
pub fn round<T: Number>(value: Option<T>, precision: i32) -> T {
    round_with(value, precision, Rounding::HalfUp)
}

/// Round down at `precision` decimal places
pub fn floor<T: Number>(value: Option<T>, precision: i32) -> T {
    round_with(value, precision, Rounding::Floor)
}

/// Round up at `precision` decimal places
pub fn ceil<T: Number>(value: Option<T>, precision: i32) -> T {
    round_with(value, precision, Rounding::Ceil)
}

/// Clamp a number into `[lower, upper]`
///
/// An absent bound leaves that side open and reversed bounds are swapped.
/// An absent number clamps to `ZERO`.
pub fn clamp<T: Number>(number: Option<T>, lower: Option<T>, upper: Option<T>) -> T {
    let Some(mut number) = number else {
        return T::ZERO;
    };

    let (lower, upper) = match (lower, upper) {
        (Some(l), Some(u)) if u < l => (Some(u), Some(l)),
        bounds => bounds,
    };
    if let Some(upper) = upper {
        if number > upper {
            number = upper;
        }
    }
    if let Some(lower) = lower {
        if number < lower {
            number = lower;
        }
    }
    number
}

/// Check whether `number` lies in the half-open range `[start, end)`
///
/// With `end` absent the range is `[0, start)`. Reversed bounds are swapped.
/// An absent number is never in range.
///
/// # Example
/// ```rust,ignore
/// assert!(in_range(Some(3), Some(2), Some(4)));
/// assert!(in_range(Some(5), Some(10), Some(2)));
/// assert!(!in_range(Some(4), Some(2), Some(4)));
/// ```
pub fn in_range<T: Number>(number: Option<T>, start: Option<T>, end: Option<T>) -> bool {
    let Some(number) = number else {
        return false;
    };

    let (start, end) = match end {
        Some(end) => (start.unwrap_or(T::ZERO), end),
        None => (T::ZERO, start.unwrap_or(T::ZERO)),
    };
    let (low, high) = if end < start { (end, start) } else { (start, end) };
    number >= low && number < high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subtract() {
        assert_eq!(add(Some(6), Some(4)), 10);
        assert_eq!(add(Some(5), None), 0);
        assert_eq!(add::<i64>(None, None), 0);
        assert_eq!(add(Some(1.5), Some(2.25)), 3.75);
        assert_eq!(subtract(Some(6), Some(4)), 2);
        assert_eq!(subtract(None, Some(4)), 0);
        assert_eq!(subtract(Some(1.0f32), Some(3.0)), -2.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(Some(6), Some(4)), 24);
        assert_eq!(multiply::<i32>(None, None), 1);
        assert_eq!(multiply(Some(7), None), 1);
        assert_eq!(multiply(Some(0.5), Some(4.0)), 2.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(Some(6), Some(4)), 1);
        assert_eq!(divide(Some(6.0), Some(4.0)), 1.5);
        assert_eq!(divide(Some(10), Some(0)), 0);
        assert_eq!(divide(Some(10.0), Some(0.0)), 0.0);
        assert_eq!(divide(None, Some(2)), 0);
        assert_eq!(divide(Some(2), None), 0);
    }

    #[test]
    fn test_integer_overflow_wraps() {
        assert_eq!(add(Some(i32::MAX), Some(1)), i32::MIN);
        assert_eq!(subtract(Some(i8::MIN), Some(1)), i8::MAX);
        assert_eq!(divide(Some(i64::MIN), Some(-1)), i64::MIN);
    }

    #[test]
    fn test_round() {
        assert_eq!(round(Some(4.006), 0), 4.0);
        assert_eq!(round(Some(4.006), 2), 4.01);
        assert_eq!(round(Some(1.005), 2), 1.01);
        assert_eq!(round(Some(2.5), 0), 3.0);
        assert_eq!(round(Some(-2.5), 0), -3.0);
        assert_eq!(round(Some(4060), -2), 4100);
        assert_eq!(round::<f64>(None, 2), 0.0);
        assert!(round(Some(f64::NAN), 2).is_nan());
        assert_eq!(round(Some(f64::INFINITY), 2), f64::INFINITY);
    }

    #[test]
    fn test_round_large_floats() {
        assert_eq!(round(Some(1e300), 10), 1e300);
        assert_eq!(round(Some(-1e300), 100), -1e300);
        assert_eq!(floor(Some(f64::MAX), 5), f64::MAX);
        assert_eq!(ceil(Some(f32::MAX), 3), f32::MAX);
        assert_eq!(round(Some(1.25e292), -292), 1e292);
        // Precision is capped at 292 places either way
        assert_eq!(round(Some(1.25e292), -300), 1e292);
        assert_eq!(ceil(Some(3.3e38f32), -38), 3.3e38f32);
        assert_eq!(floor(Some(3.3e38f32), -38), 3e38f32);
    }

    #[test]
    fn test_round_integers_exactly() {
        assert_eq!(round(Some(9_007_199_254_740_993i64), 0), 9_007_199_254_740_993);
        assert_eq!(round(Some(i64::MAX), 3), i64::MAX);
        assert_eq!(round(Some(9_007_199_254_740_993i64), -1), 9_007_199_254_740_990);
        assert_eq!(round(Some(-4050), -2), -4100);
        assert_eq!(round(Some(-4049), -2), -4000);
        assert_eq!(floor(Some(-4001), -2), -4100);
        assert_eq!(ceil(Some(-4099), -2), -4000);
        assert_eq!(round(Some(i64::MAX), -1), i64::MAX);
        assert_eq!(round(Some(i8::MAX), -2), 100);
        assert_eq!(ceil(Some(i8::MAX), -2), i8::MAX);
        assert_eq!(round(Some(7i64), -40), 0);
        assert_eq!(floor(Some(-7i32), -40), i32::MIN);
    }

    #[test]
    fn test_floor_ceil() {
        assert_eq!(floor(Some(0.046), 2), 0.04);
        assert_eq!(floor(Some(4060), -2), 4000);
        assert_eq!(ceil(Some(6.004), 2), 6.01);
        assert_eq!(ceil(Some(6040), -2), 6100);
        assert_eq!(floor(Some(-0.5), 0), -1.0);
        assert_eq!(ceil::<i32>(None, 0), 0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(Some(-10), Some(-5), Some(5)), -5);
        assert_eq!(clamp(Some(10), Some(-5), Some(5)), 5);
        assert_eq!(clamp(Some(3), Some(5), Some(-5)), 3);
        assert_eq!(clamp(Some(10), None, Some(5)), 5);
        assert_eq!(clamp(Some(-10), Some(-5), None), -5);
        assert_eq!(clamp::<i32>(None, Some(1), Some(2)), 0);
    }

    #[test]
    fn test_in_range() {
        assert!(in_range(Some(3), Some(2), Some(4)));
        assert!(in_range(Some(4), Some(8), None));
        assert!(!in_range(Some(4), Some(2), Some(4)));
        assert!(!in_range(Some(2), Some(2), None));
        assert!(in_range(Some(1.2), Some(2.0), None));
        assert!(!in_range(Some(5.2), Some(4.0), None));
        assert!(in_range(Some(-3), Some(-2), Some(-6)));
        assert!(in_range(Some(5), Some(10), Some(2)));
        assert!(!in_range::<i32>(None, Some(0), Some(10)));
    }
}
