//! Fixed-width machine-word reference baselines.
//!
//! The same recurrences as the bignum engines, run over `u64` with
//! explicit wrapping arithmetic. Exact only while every intermediate
//! (squared terms included) fits in 64 bits, which holds through
//! `k = MAX_FIB_WORD` (93); beyond that the values silently wrap. These
//! paths exist as reference baselines for the bignum engines inside the
//! safe range and must never serve as a source of truth outside it.

use crate::constants::MAX_FIB_WORD;
use crate::engine::Engine;

/// Linear additive iteration, the O(k) reference.
#[must_use]
pub fn linear_word(k: u64) -> u64 {
    if k < 2 {
        return k;
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 2..=k {
        let c = a.wrapping_add(b);
        a = b;
        b = c;
    }
    b
}

/// Fast doubling over a fixed 32-position bit scan from bit 31 downward.
/// Leading zero bits of `n` contribute degenerate `(0, 1) -> (0, 1)`
/// transitions; correct, just wasteful for small `n`.
#[must_use]
pub fn fast_doubling_word(n: u64) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for i in (0..32).rev() {
        let t1 = a.wrapping_mul((b << 1).wrapping_sub(a));
        let t2 = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));
        if (n >> i) & 1 == 1 {
            a = t2;
            b = t1.wrapping_add(t2);
        } else {
            a = t1;
            b = t2;
        }
    }
    a
}

/// Fast doubling scanning from the true highest set bit of `n`. The
/// leading-zero count of zero is undefined, so `n = 0` short-circuits.
#[must_use]
pub fn fast_doubling_word_clz(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let bits = 64 - n.leading_zeros();
    let (mut a, mut b) = (0u64, 1u64);
    for i in (0..bits).rev() {
        let t1 = a.wrapping_mul((b << 1).wrapping_sub(a));
        let t2 = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));
        if (n >> i) & 1 == 1 {
            a = t2;
            b = t1.wrapping_add(t2);
        } else {
            a = t1;
            b = t2;
        }
    }
    a
}

/// Machine-word contract: F(k) as a `u64`, exact only for
/// `k <= MAX_FIB_WORD`; defined as wrapped, not an error, beyond it.
#[must_use]
pub fn fibonacci_word(k: u64) -> u64 {
    fast_doubling_word_clz(k)
}

/// True when the machine-word paths are exact for index `k`.
#[must_use]
pub fn word_exact(k: u64) -> bool {
    k <= MAX_FIB_WORD
}

/// Linear iteration over a machine word.
pub struct LinearWord;

impl Engine for LinearWord {
    fn name(&self) -> &'static str {
        "LinearWord"
    }

    fn compute(&self, k: u64) -> String {
        linear_word(k).to_string()
    }

    fn exact_limit(&self) -> Option<u64> {
        Some(MAX_FIB_WORD)
    }
}

/// Fixed-scan fast doubling over a machine word.
pub struct DoublingWord;

impl Engine for DoublingWord {
    fn name(&self) -> &'static str {
        "DoublingWord"
    }

    fn compute(&self, k: u64) -> String {
        fast_doubling_word(k).to_string()
    }

    fn exact_limit(&self) -> Option<u64> {
        Some(MAX_FIB_WORD)
    }
}

/// CLZ-bounded fast doubling over a machine word.
pub struct DoublingWordClz;

impl Engine for DoublingWordClz {
    fn name(&self) -> &'static str {
        "DoublingWordClz"
    }

    fn compute(&self, k: u64) -> String {
        fast_doubling_word_clz(k).to_string()
    }

    fn exact_limit(&self) -> Option<u64> {
        Some(MAX_FIB_WORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn linear_matches_table() {
        for (k, &expected) in FIB_TABLE.iter().enumerate() {
            assert_eq!(linear_word(k as u64), expected, "k = {k}");
        }
    }

    #[test]
    fn doubling_variants_match_table() {
        for (k, &expected) in FIB_TABLE.iter().enumerate() {
            assert_eq!(fast_doubling_word(k as u64), expected, "fixed k = {k}");
            assert_eq!(fast_doubling_word_clz(k as u64), expected, "clz k = {k}");
        }
    }

    #[test]
    fn base_cases() {
        assert_eq!(linear_word(0), 0);
        assert_eq!(linear_word(1), 1);
        assert_eq!(fast_doubling_word(0), 0);
        assert_eq!(fast_doubling_word_clz(1), 1);
    }

    #[test]
    fn wraps_beyond_safe_range() {
        // F(94) = 19740274219868223167 does not fit in u64; the wrapped
        // value is F(94) - 2^64. The engines are permitted to diverge here
        // and callers must not rely on them past MAX_FIB_WORD.
        assert!(!word_exact(94));
        assert_eq!(fibonacci_word(94), 1_293_530_146_158_671_551);
        assert_eq!(linear_word(94), 1_293_530_146_158_671_551);
    }

    #[test]
    fn variants_agree_even_while_wrapping() {
        for k in [94u64, 120, 200, 500] {
            assert_eq!(linear_word(k), fast_doubling_word(k), "k = {k}");
            assert_eq!(linear_word(k), fast_doubling_word_clz(k), "k = {k}");
        }
    }

    #[test]
    fn exactness_boundary() {
        assert!(word_exact(MAX_FIB_WORD));
        assert!(!word_exact(MAX_FIB_WORD + 1));
        assert_eq!(fibonacci_word(93), 12_200_160_415_121_876_738);
    }
}
