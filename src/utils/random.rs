//! Random number utilities
//!
//! [`random`] draws a uniformly distributed value between two inclusive
//! bounds from the thread-local RNG. [`Randomizer`] owns its own generator and
//! can be seeded, which makes sequences reproducible in tests.

use crate::config::RandomConfig;
use crate::utils::number::Number;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Resolve absent and reversed bounds into an ordered `(low, high)` pair
fn bounds<T: Number>(lower: Option<T>, upper: Option<T>) -> (T, T) {
    let lower = lower.unwrap_or(T::ZERO);
    let upper = upper.unwrap_or(T::ONE);
    if upper < lower {
        log::trace!("random: bounds given in reverse order, swapping");
        (upper, lower)
    } else {
        (lower, upper)
    }
}

/// Draw a value in `[min(lower, upper), max(lower, upper)]` from `rng`
///
/// Absent `lower` defaults to `ZERO` and absent `upper` to `ONE`. A NaN or
/// infinite bound yields the lower bound. Float spans too wide for the uniform
/// sampler (such as `f64::MIN..=f64::MAX`) are interpolated between the bounds
/// instead.
pub fn random_with<R, T>(rng: &mut R, lower: Option<T>, upper: Option<T>) -> T
where
    R: Rng,
    T: Number + SampleUniform,
{
    let (low, high) = bounds(lower, upper);
    if low.is_nan() || high.is_nan() || !low.is_finite() || !high.is_finite() {
        return low;
    }
    if low == high {
        return low;
    }

    // The float sampler scales by `(high - low) / (1 - EPSILON)` and panics
    // when that overflows
    let scale = high.minus(low).over(T::ONE.minus(T::EPSILON));
    if scale.is_finite() {
        return rng.gen_range(low..=high);
    }

    log::trace!("random: span of {low:?}..={high:?} overflows, interpolating");
    interpolate(rng.gen::<f64>(), low, high)
}

/// Point at fraction `t` of the way from `low` to `high`, kept within bounds
fn interpolate<T: Number>(t: f64, low: T, high: T) -> T {
    let (l, h) = (low.to_f64(), high.to_f64());
    let value = T::from_f64(l * (1.0 - t) + h * t);
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Draw a value in `[min(lower, upper), max(lower, upper)]`
///
/// # Example
/// ```rust,ignore
/// let roll = random(Some(1), Some(6));
/// assert!((1..=6).contains(&roll));
///
/// // Reversed bounds are swapped
/// let n = random(Some(10), Some(5));
/// assert!((5..=10).contains(&n));
/// ```
pub fn random<T: Number + SampleUniform>(lower: Option<T>, upper: Option<T>) -> T {
    random_with(&mut thread_rng(), lower, upper)
}

/// Random value source owning its own generator
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
}

impl Randomizer {
    /// Randomizer seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Randomizer producing a reproducible sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when the configuration sets a seed, otherwise from entropy
    pub fn from_config(config: &RandomConfig) -> Self {
        match config.seed {
            Some(seed) => {
                log::debug!("Randomizer seeded from configuration");
                Self::seeded(seed)
            }
            None => Self::new(),
        }
    }

    pub fn random<T: Number + SampleUniform>(&mut self, lower: Option<T>, upper: Option<T>) -> T {
        random_with(&mut self.rng, lower, upper)
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}
