//! Error type for the validation and comparison layers.
//!
//! The engines themselves are total over their documented domain and
//! never fail mid-computation; errors arise only at the caller boundary
//! (domain gating, variant parsing) and in cross-validation runs.

/// Errors surfaced around, not inside, the computation.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// Requested index is beyond the configured ceiling.
    #[error("index {k} exceeds the configured ceiling of {max}")]
    IndexOutOfRange {
        /// Requested index.
        k: u64,
        /// Configured ceiling.
        max: u64,
    },

    /// Variant name not recognized.
    #[error("unknown algorithm variant: {0}")]
    UnknownVariant(String),

    /// Two engines disagreed on the same input during cross-validation.
    #[error("result mismatch at k={k}: {left} != {right}")]
    Mismatch {
        /// First engine name.
        left: String,
        /// Second engine name.
        right: String,
        /// Input index where the outputs diverged.
        k: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = FibError::IndexOutOfRange { k: 501, max: 500 };
        assert_eq!(
            err.to_string(),
            "index 501 exceeds the configured ceiling of 500"
        );

        let err = FibError::UnknownVariant("warp".into());
        assert_eq!(err.to_string(), "unknown algorithm variant: warp");

        let err = FibError::Mismatch {
            left: "DoublingBinary".into(),
            right: "LinearDecimal".into(),
            k: 42,
        };
        assert!(err.to_string().contains("k=42"));
    }
}
