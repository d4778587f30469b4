//! Algorithm variant enumeration and dispatch.
//!
//! The original system selected an algorithm by overloading an unrelated
//! transport field with a numeric code; here selection is an explicit
//! enumerated parameter on the computation entry point.

use std::fmt;
use std::str::FromStr;

use crate::engine::Engine;
use crate::error::FibError;
use crate::fastdoubling::{DoublingBinary, DoublingBinaryClz, DoublingFlex};
use crate::linear::{LinearBinary, LinearDecimal};
use crate::machine::{DoublingWord, DoublingWordClz, LinearWord};

/// The eight competing algorithm/representation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmVariant {
    /// O(k) additive iteration over a machine word.
    LinearMachineWord,
    /// Fast doubling over a machine word, fixed 32-bit scan.
    FastDoublingMachineWord,
    /// Fast doubling over a machine word, CLZ-bounded scan.
    FastDoublingMachineWordClz,
    /// O(k) additive iteration over base-10 digit strings.
    LinearDecimalBigNum,
    /// O(k) additive iteration over base-2 digit strings.
    LinearBinaryBigNum,
    /// Fast doubling over base-2 digit strings, fixed 32-bit scan.
    FastDoublingBinaryBigNum,
    /// Fast doubling over base-2 digit strings, CLZ-bounded scan.
    FastDoublingBinaryBigNumClz,
    /// Fast doubling over the historical arbitrary-width flat buffer,
    /// now unified with the binary digit-string representation.
    FastDoublingArbitraryWidthBigNum,
}

impl AlgorithmVariant {
    /// Every variant, in the legacy dispatch-code order.
    pub const ALL: [Self; 8] = [
        Self::LinearMachineWord,
        Self::FastDoublingMachineWord,
        Self::FastDoublingMachineWordClz,
        Self::LinearDecimalBigNum,
        Self::LinearBinaryBigNum,
        Self::FastDoublingBinaryBigNum,
        Self::FastDoublingBinaryBigNumClz,
        Self::FastDoublingArbitraryWidthBigNum,
    ];

    /// CLI-facing name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LinearMachineWord => "linear-word",
            Self::FastDoublingMachineWord => "fast-word",
            Self::FastDoublingMachineWordClz => "fast-word-clz",
            Self::LinearDecimalBigNum => "linear-decimal",
            Self::LinearBinaryBigNum => "linear-binary",
            Self::FastDoublingBinaryBigNum => "fast-binary",
            Self::FastDoublingBinaryBigNumClz => "fast-binary-clz",
            Self::FastDoublingArbitraryWidthBigNum => "fast-flex",
        }
    }

    /// Instantiate the engine behind this variant.
    #[must_use]
    pub fn engine(self) -> Box<dyn Engine> {
        match self {
            Self::LinearMachineWord => Box::new(LinearWord),
            Self::FastDoublingMachineWord => Box::new(DoublingWord),
            Self::FastDoublingMachineWordClz => Box::new(DoublingWordClz),
            Self::LinearDecimalBigNum => Box::new(LinearDecimal),
            Self::LinearBinaryBigNum => Box::new(LinearBinary),
            Self::FastDoublingBinaryBigNum => Box::new(DoublingBinary),
            Self::FastDoublingBinaryBigNumClz => Box::new(DoublingBinaryClz),
            Self::FastDoublingArbitraryWidthBigNum => Box::new(DoublingFlex),
        }
    }
}

impl fmt::Display for AlgorithmVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmVariant {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| FibError::UnknownVariant(s.to_string()))
    }
}

/// Compute F(k) with the selected variant, rendered as decimal digits.
///
/// Total over the documented input domain; the caller guarantees `k` is
/// within its configured ceiling before invoking (reference: 500).
/// Machine-word variants wrap silently past [`crate::constants::MAX_FIB_WORD`].
#[must_use]
pub fn compute_fibonacci_decimal(k: u64, variant: AlgorithmVariant) -> String {
    tracing::debug!(k, %variant, "dispatching computation");
    variant.engine().compute(k)
}
