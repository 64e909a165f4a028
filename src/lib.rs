//! nullsafe - null-safe numeric and string utilities
//!
//! nullsafe provides small, side-effect-free helpers that never fail:
//! - Word tokenizer with camelCase, PascalCase, kebab-case, snake_case,
//!   Start Case, lower case and UPPER CASE rendering
//! - String primitives (pad, trim, split, truncate, ...)
//! - Escaping and accent stripping
//! - Generic numeric primitives and null-skipping reductions
//! - Uniform random values between two bounds
//!
//! Absent inputs are modelled as `Option` and map to identity-safe defaults
//! (zero for addends, one for multiplicands, an empty string for text).

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod config;
pub mod error;
pub mod utils;

// Re-export main types for public API
pub use config::{RandomConfig, StringConfig, UtilsConfig};
pub use error::{Error, Result};
pub use utils::case::CaseStyle;
pub use utils::number::Number;
pub use utils::random::Randomizer;
pub use utils::string::{PadOptions, TruncateOptions};
pub use utils::{Utils, U};
