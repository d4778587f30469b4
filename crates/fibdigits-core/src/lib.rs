//! # fibdigits-core
//!
//! Arbitrary-precision Fibonacci computation over digit-string bignums,
//! with several competing algorithm/representation strategies so their
//! correctness and performance can be compared: a binary (digit-per-bit)
//! and a decimal (digit-per-decimal-digit) representation, linear
//! iteration baselines, fast doubling in fixed-width and CLZ-bounded
//! scan variants, and machine-word reference baselines valid through
//! F(93).
//!
//! The engines are pure and single-threaded; input-domain gating and any
//! serialization across callers belong to the caller.

pub mod bignum;
pub mod constants;
pub mod engine;
pub mod error;
pub mod fastdoubling;
pub mod linear;
pub mod machine;
pub mod registry;
pub mod variant;

pub use bignum::{BigNum, BinaryNum, DecimalNum};
pub use constants::{exit_codes, DEFAULT_MAX_INDEX, FIB_TABLE, MAX_FIB_WORD};
pub use engine::Engine;
pub use error::FibError;
pub use machine::fibonacci_word;
pub use registry::EngineFactory;
pub use variant::{compute_fibonacci_decimal, AlgorithmVariant};

/// Compute F(k) with the default engine (CLZ-bounded fast doubling over
/// the binary bignum).
///
/// # Example
/// ```
/// assert_eq!(fibdigits_core::fibonacci(100), "354224848179261915075");
/// assert_eq!(fibdigits_core::fibonacci(0), "0");
/// ```
#[must_use]
pub fn fibonacci(k: u64) -> String {
    compute_fibonacci_decimal(k, AlgorithmVariant::FastDoublingBinaryBigNumClz)
}
