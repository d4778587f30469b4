//! Linear-iteration Fibonacci over digit-string bignums.
//!
//! The O(k) additive baseline that the fast doubling engines are checked
//! against: seed F(0) and F(1), then replace `(prev, curr)` with
//! `(curr, prev + curr)` k-1 times. Implemented once per base; the
//! decimal run renders by plain reversal, the binary run through the
//! repeated-doubling base conversion.

use crate::bignum::{BigNum, BinaryNum, DecimalNum};
use crate::engine::Engine;

/// F(k) over base-10 digit strings.
#[must_use]
pub fn linear_decimal(k: u64) -> DecimalNum {
    linear::<10>(k)
}

/// F(k) over base-2 digit strings.
#[must_use]
pub fn linear_binary(k: u64) -> BinaryNum {
    linear::<2>(k)
}

fn linear<const BASE: u8>(k: u64) -> BigNum<BASE> {
    let a = BigNum::new(2);
    let b = BigNum::one();

    if k == 0 {
        return a;
    }
    if k == 1 {
        return b;
    }

    let (mut prev, mut curr) = (a, b);
    for _ in 2..=k {
        let sum = BigNum::add(&prev, &curr);
        prev = curr;
        curr = sum;
    }
    curr
}

/// Linear iteration over base-10 digit strings.
pub struct LinearDecimal;

impl Engine for LinearDecimal {
    fn name(&self) -> &'static str {
        "LinearDecimal"
    }

    fn compute(&self, k: u64) -> String {
        linear_decimal(k).into_string()
    }
}

/// Linear iteration over base-2 digit strings.
pub struct LinearBinary;

impl Engine for LinearBinary {
    fn name(&self) -> &'static str {
        "LinearBinary"
    }

    fn compute(&self, k: u64) -> String {
        linear_binary(k).to_decimal()
    }
}
