//! Constants shared across the engines and their callers.

/// Highest index whose Fibonacci number fits a `u64`.
/// F(93) = 12,200,160,415,121,876,738; F(94) already exceeds `u64::MAX`.
pub const MAX_FIB_WORD: u64 = 93;

/// Reference ceiling for the externally configured input domain. The
/// engines themselves accept any index; callers gate against this.
pub const DEFAULT_MAX_INDEX: u64 = 500;

/// Precomputed F(0..=93), the full machine-word-exact range.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the CLI front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Engine results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[50], 12_586_269_025);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[93], 12_200_160_415_121_876_738);
    }

    #[test]
    fn fib_table_consistency() {
        for i in 2..94 {
            assert_eq!(FIB_TABLE[i], FIB_TABLE[i - 1] + FIB_TABLE[i - 2]);
        }
    }
}
