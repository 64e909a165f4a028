//! Null-skipping reductions: min, max, mean and sum
//!
//! Collections are passed as `Option<&[Option<T>]>`. An absent collection, an
//! empty one, or one holding only absent entries produces the empty result
//! (`None` for min/max/mean, `ZERO` for sums). Absent entries and float NaN
//! values are skipped. The `*_by` variants derive the compared or summed
//! value through a key function, skipping items whose key is `None`.

use crate::utils::number::Number;

fn present<T>(values: Option<&[Option<T>]>) -> impl Iterator<Item = &T> {
    values.unwrap_or_default().iter().flatten()
}

fn extremum_by<'a, T, K, F>(
    items: Option<&'a [Option<T>]>,
    mut key: F,
    replace: fn(&K, &K) -> bool,
) -> Option<&'a T>
where
    K: PartialOrd,
    F: FnMut(&T) -> Option<K>,
{
    let mut best: Option<(&'a T, K)> = None;

    for item in present(items) {
        let Some(computed) = key(item) else {
            continue;
        };
        // A value not equal to itself (NaN) cannot be ordered
        if computed.partial_cmp(&computed).is_none() {
            continue;
        }
        let better = match &best {
            Some((_, current)) => replace(&computed, current),
            None => true,
        };
        if better {
            best = Some((item, computed));
        }
    }

    best.map(|(item, _)| item)
}

/// Smallest present value
///
/// # Example
/// ```rust,ignore
/// assert_eq!(min(Some(&[Some(4), None, Some(2), Some(8)])), Some(2));
/// assert_eq!(min::<i32>(Some(&[])), None);
/// ```
pub fn min<T: Number>(values: Option<&[Option<T>]>) -> Option<T> {
    min_by(values, |v| Some(*v)).copied()
}

/// Largest present value
pub fn max<T: Number>(values: Option<&[Option<T>]>) -> Option<T> {
    max_by(values, |v| Some(*v)).copied()
}

/// Item with the smallest derived key; the first one wins ties
///
/// # Example
/// ```rust,ignore
/// let people = [Some(("barney", 36)), None, Some(("fred", 40))];
/// assert_eq!(min_by(Some(&people), |p| Some(p.1)), Some(&("barney", 36)));
/// ```
pub fn min_by<'a, T, K, F>(items: Option<&'a [Option<T>]>, key: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: FnMut(&T) -> Option<K>,
{
    extremum_by(items, key, |candidate, current| candidate < current)
}

/// Item with the largest derived key; the first one wins ties
pub fn max_by<'a, T, K, F>(items: Option<&'a [Option<T>]>, key: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: FnMut(&T) -> Option<K>,
{
    extremum_by(items, key, |candidate, current| candidate > current)
}

/// Arithmetic mean of the present values
///
/// # Example
/// ```rust,ignore
/// assert_eq!(mean(Some(&[Some(4), None, Some(2), Some(8), Some(6)])), Some(5.0));
/// ```
pub fn mean<T: Number>(values: Option<&[Option<T>]>) -> Option<f64> {
    mean_by(values, |v| Some(*v))
}

/// Arithmetic mean of the derived values
pub fn mean_by<T, N, F>(items: Option<&[Option<T>]>, mut key: F) -> Option<f64>
where
    N: Number,
    F: FnMut(&T) -> Option<N>,
{
    let mut total = 0.0;
    let mut count = 0usize;

    for value in present(items).filter_map(|item| key(item)) {
        if value.is_nan() {
            continue;
        }
        total += value.to_f64();
        count += 1;
    }

    (count > 0).then(|| total / count as f64)
}

/// Sum of the present values, `ZERO` when there are none
///
/// # Example
/// ```rust,ignore
/// assert_eq!(sum(Some(&[Some(4), None, Some(2), Some(8)])), 14);
/// assert_eq!(sum::<i32>(None), 0);
/// ```
pub fn sum<T: Number>(values: Option<&[Option<T>]>) -> T {
    sum_by(values, |v| Some(*v))
}

/// Sum of the derived values, `ZERO` when there are none
pub fn sum_by<T, N, F>(items: Option<&[Option<T>]>, mut key: F) -> N
where
    N: Number,
    F: FnMut(&T) -> Option<N>,
{
    present(items)
        .filter_map(|item| key(item))
        .filter(|value| !value.is_nan())
        .fold(N::ZERO, Number::plus)
}
