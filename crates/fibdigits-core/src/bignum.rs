//! Digit-string arbitrary-precision integers.
//!
//! One generic representation covers both bases used by the engines: a
//! little-endian run of ASCII digit characters closed by a NUL sentinel,
//! owned by a `Vec<u8>`. `BASE` selects the carry threshold, so
//! `BigNum<2>` stores one digit per bit and `BigNum<10>` one digit per
//! decimal digit. Values are immutable once produced; every arithmetic
//! operation allocates a fresh result and ownership moves linearly from
//! producer to consumer, with `Drop` releasing intermediates on every
//! exit path.

/// Arbitrary-precision unsigned integer in base `BASE`.
///
/// Layout invariants:
/// - `buf[i]` for `i < buf.len() - 1` is an ASCII digit of the base,
///   least-significant first.
/// - `buf[buf.len() - 1]` is the NUL sentinel and is never read as a digit.
/// - A produced value is normalized: no redundant most-significant zero
///   digits beyond the canonical single-digit zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigNum<const BASE: u8> {
    buf: Vec<u8>,
}

/// Base-2 digit string: one ASCII `'0'`/`'1'` per bit.
pub type BinaryNum = BigNum<2>;

/// Base-10 digit string: one ASCII digit per decimal digit.
pub type DecimalNum = BigNum<10>;

impl<const BASE: u8> BigNum<BASE> {
    /// Allocate a zero-filled number spanning `len` buffer positions,
    /// sentinel included. `len` must be at least 2 (one digit plus the
    /// sentinel); the result represents zero.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 2, "a BigNum needs one digit and the sentinel");
        let mut buf = vec![b'0'; len];
        buf[len - 1] = 0;
        Self { buf }
    }

    /// The canonical one.
    #[must_use]
    pub fn one() -> Self {
        let mut n = Self::new(2);
        n.set(0, 1);
        n
    }

    /// Buffer length, sentinel included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Number of stored digit positions (buffer length minus the sentinel).
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.buf.len() - 1
    }

    /// True if the value is the canonical zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.buf.len() == 2 && self.buf[0] == b'0'
    }

    pub(crate) fn digit(&self, i: usize) -> u8 {
        self.buf[i] - b'0'
    }

    pub(crate) fn set(&mut self, i: usize, d: u8) {
        debug_assert!(d < BASE);
        self.buf[i] = d + b'0';
    }

    /// Positional addition with carry.
    ///
    /// Precondition: `y` is the larger-or-equal operand, `y.len() >= x.len()`.
    /// Walks the shared-length region, then propagates the remaining carry
    /// through `y`'s higher digits. The result is allocated at `y.len() + 1`
    /// and shrunk by one digit when no final carry escapes.
    #[must_use]
    pub fn add(x: &Self, y: &Self) -> Self {
        debug_assert!(y.len() >= x.len(), "add requires the longer operand second");

        let mut res = Self::new(y.len() + 1);
        let mut carry = 0u8;
        let mut idx = 0;

        while idx <= x.len() - 2 {
            let mut sum = x.digit(idx) + y.digit(idx) + carry;
            carry = 0;
            if sum >= BASE {
                sum -= BASE;
                carry = 1;
            }
            res.set(idx, sum);
            idx += 1;
        }

        while idx <= y.len() - 2 {
            let mut sum = y.digit(idx) + carry;
            carry = 0;
            if sum >= BASE {
                sum -= BASE;
                carry = 1;
            }
            res.set(idx, sum);
            idx += 1;
        }

        if carry == 1 {
            res.set(idx, 1);
        } else {
            // No escaping carry: drop the speculative top digit.
            res.buf.truncate(idx + 1);
            res.buf[idx] = 0;
        }

        res
    }

    /// Strict magnitude order, used to debug-check the subtraction
    /// precondition. Tolerates unnormalized operands.
    fn magnitude_lt(a: &Self, b: &Self) -> bool {
        let width = a.len().max(b.len()) - 1;
        for i in (0..width).rev() {
            let da = if i < a.len() - 1 { a.digit(i) } else { 0 };
            let db = if i < b.len() - 1 { b.digit(i) } else { 0 };
            if da != db {
                return da < db;
            }
        }
        false
    }

    /// Canonicalize in place: truncate above the most-significant nonzero
    /// digit, or down to the single-digit zero when no digit is set.
    pub fn normalize(&mut self) {
        let mut top = 0;
        for i in (0..self.buf.len() - 1).rev() {
            if self.buf[i] != b'0' {
                top = i;
                break;
            }
        }
        self.buf.truncate(top + 2);
        self.buf[top + 1] = 0;
    }
}

impl BigNum<2> {
    /// Seed a binary number from a machine word. The buffer is sized to the
    /// exact bit length; zero seeds the canonical zero.
    #[must_use]
    pub fn from_u64(n: u64) -> Self {
        if n == 0 {
            return Self::new(2);
        }
        let bits = (64 - n.leading_zeros()) as usize;
        let mut res = Self::new(bits + 1);
        for i in 0..bits {
            if (n >> i) & 1 == 1 {
                res.set(i, 1);
            }
        }
        res
    }

    /// Multiply by `2^offset`: copy every digit `offset` positions up into
    /// a fresh `len + offset` buffer.
    #[must_use]
    pub fn shl(&self, offset: usize) -> Self {
        let mut res = Self::new(self.len() + offset);
        for i in 0..self.len() - 1 {
            res.buf[i + offset] = self.buf[i];
        }
        res
    }

    /// Compute `minuend - subtrahend` by complement-and-add.
    ///
    /// The subtrahend's bits are toggled over the minuend's full width (high
    /// positions sign-extended with ones) and the trailing `+1` of the two's
    /// complement is folded into an initial carry. The carry escaping the
    /// top position is discarded, which is exact precisely because of the
    /// precondition.
    ///
    /// Precondition: `subtrahend < minuend`. Checked only in debug builds;
    /// violating it silently produces a wrong result.
    #[must_use]
    pub fn sub(minuend: &Self, subtrahend: &Self) -> Self {
        debug_assert!(
            Self::magnitude_lt(subtrahend, minuend),
            "sub requires subtrahend < minuend"
        );

        let mut res = Self::new(minuend.len());
        let mut carry = 1u8;
        let mut i = 0;

        while i <= subtrahend.len() - 2 {
            let mut t = (subtrahend.digit(i) ^ 1) + minuend.digit(i) + carry;
            carry = 0;
            if t >= 2 {
                carry = 1;
                t -= 2;
            }
            res.set(i, t);
            i += 1;
        }

        // Sign-extend the complemented subtrahend with ones.
        while i <= minuend.len() - 2 {
            let mut t = minuend.digit(i) + 1 + carry;
            carry = 0;
            if t >= 2 {
                carry = 1;
                t -= 2;
            }
            res.set(i, t);
            i += 1;
        }

        res.normalize();
        res
    }

    /// Schoolbook multiplication over bit digits.
    ///
    /// For each set bit of `x` (zero bits are skipped outright), add `y`
    /// shifted by that position into the accumulator. Each pass propagates
    /// its carry only across `y`'s width plus one overflow digit; the
    /// overflow slot is always above every previously written position, so
    /// a plain store is exact.
    #[must_use]
    pub fn mul(x: &Self, y: &Self) -> Self {
        let mut res = Self::new((x.len() - 1) + (y.len() - 1) + 1);

        for i in 0..x.len() - 1 {
            if x.buf[i] == b'1' {
                let mut carry = 0u8;
                let mut j = 0;
                while j <= y.len() - 2 {
                    let mut t = y.digit(j) + res.digit(i + j) + carry;
                    carry = 0;
                    if t >= 2 {
                        carry = 1;
                        t -= 2;
                    }
                    res.set(i + j, t);
                    j += 1;
                }
                if carry == 1 {
                    res.set(i + j, 1);
                }
            }
        }

        res.normalize();
        res
    }

    /// Render as a decimal string via repeated doubling (Horner over the
    /// bits, most significant first, accumulated into a decimal digit
    /// array). The accumulator is over-allocated at `len/3 + 2` digits,
    /// safe since each decimal digit covers more than three bits. Digits
    /// accumulate least-significant first and are reversed in place once
    /// the most-significant nonzero digit is located.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        let len = self.buf.len() / 3 + 2;
        let mut decimal = vec![b'0'; len];

        for i in (0..self.buf.len() - 1).rev() {
            let mut digit = self.digit(i);
            for d in &mut decimal {
                let tmp = (*d - b'0') * 2 + digit;
                *d = tmp % 10 + b'0';
                digit = tmp / 10;
            }
        }

        let mut top = 0;
        for i in (0..len).rev() {
            if decimal[i] != b'0' {
                top = i;
                break;
            }
        }
        decimal.truncate(top + 1);
        decimal.reverse();

        String::from_utf8(decimal).expect("decimal digits are ASCII")
    }
}

impl BigNum<10> {
    /// Final rendering: drop the sentinel and reverse the digit span in
    /// place, yielding most-significant-first order. This is the single
    /// permitted in-place mutation of a produced value.
    #[must_use]
    pub fn into_string(mut self) -> String {
        self.buf.pop();
        self.buf.reverse();
        String::from_utf8(self.buf).expect("decimal digits are ASCII")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(n: u64) -> BinaryNum {
        BinaryNum::from_u64(n)
    }

    #[test]
    fn new_is_canonical_zero() {
        let z = BinaryNum::new(2);
        assert!(z.is_zero());
        assert_eq!(z.len(), 2);
        assert_eq!(z.to_decimal(), "0");
    }

    #[test]
    fn from_u64_roundtrip() {
        for n in [0u64, 1, 2, 3, 28, 255, 256, 12_586_269_025] {
            assert_eq!(bin(n).to_decimal(), n.to_string());
        }
    }

    #[test]
    fn from_u64_sizes_to_bit_length() {
        // 28 = 0b11100: five bits plus the sentinel.
        assert_eq!(bin(28).len(), 6);
        assert_eq!(bin(1).len(), 2);
    }

    #[test]
    fn add_binary_with_carry() {
        // 1 + 1 = 10b
        let one = BinaryNum::one();
        let sum = BinaryNum::add(&one, &one);
        assert_eq!(sum.to_decimal(), "2");
        // Carry escaped, so the speculative top digit was kept.
        assert_eq!(sum.len(), 3);
    }

    #[test]
    fn add_binary_no_carry_shrinks() {
        // 10b + 1b = 11b, no escaping carry
        let sum = BinaryNum::add(&bin(1), &bin(2));
        assert_eq!(sum.to_decimal(), "3");
        assert_eq!(sum.len(), 3);
    }

    #[test]
    fn add_mixed_lengths() {
        let sum = BinaryNum::add(&bin(3), &bin(1000));
        assert_eq!(sum.to_decimal(), "1003");
    }

    #[test]
    fn add_decimal_carry_threshold() {
        // 7 + 8 = 15 exercises the base-10 carry, not the base-2 one.
        let mut seven = DecimalNum::new(2);
        seven.set(0, 7);
        let mut eight = DecimalNum::new(2);
        eight.set(0, 8);
        let sum = DecimalNum::add(&seven, &eight);
        assert_eq!(sum.into_string(), "15");
    }

    #[test]
    fn add_zero_identity() {
        let z = BinaryNum::new(2);
        assert_eq!(BinaryNum::add(&z, &bin(55)).to_decimal(), "55");
        assert!(BinaryNum::add(&z, &z).is_zero());
    }

    #[test]
    fn sub_basic() {
        assert_eq!(BinaryNum::sub(&bin(24), &bin(3)).to_decimal(), "21");
        assert_eq!(BinaryNum::sub(&bin(1000), &bin(1)).to_decimal(), "999");
    }

    #[test]
    fn sub_equal_bit_length() {
        // Minuend and subtrahend of the same width: the one-fill loop for
        // the high digits never runs and the escaping carry is dropped.
        assert_eq!(BinaryNum::sub(&bin(7), &bin(5)).to_decimal(), "2");
        assert_eq!(BinaryNum::sub(&bin(0b1101), &bin(0b1011)).to_decimal(), "2");
        assert_eq!(
            BinaryNum::sub(&bin(0xFFFF), &bin(0x8000)).to_decimal(),
            (0xFFFFu32 - 0x8000).to_string()
        );
    }

    #[test]
    fn sub_result_normalized() {
        // 9 - 8 = 1 collapses from four bits to one.
        let d = BinaryNum::sub(&bin(9), &bin(8));
        assert_eq!(d.len(), 2);
        assert_eq!(d.to_decimal(), "1");
    }

    #[test]
    fn shl_multiplies_by_power_of_two() {
        assert_eq!(bin(5).shl(1).to_decimal(), "10");
        assert_eq!(bin(5).shl(4).to_decimal(), "80");
        assert_eq!(bin(1).shl(10).to_decimal(), "1024");
    }

    #[test]
    fn mul_small_products() {
        assert_eq!(BinaryNum::mul(&bin(3), &bin(5)).to_decimal(), "15");
        assert_eq!(BinaryNum::mul(&bin(12), &bin(12)).to_decimal(), "144");
        assert_eq!(
            BinaryNum::mul(&bin(65_535), &bin(65_535)).to_decimal(),
            "4294836225"
        );
    }

    #[test]
    fn mul_by_zero_normalizes_to_zero() {
        let z = BinaryNum::new(2);
        let p = BinaryNum::mul(&z, &bin(1_000_000));
        assert!(p.is_zero());
        let q = BinaryNum::mul(&bin(1_000_000), &z);
        assert!(q.is_zero());
    }

    #[test]
    fn mul_squares_match_machine_arithmetic() {
        // Exhaustive over the low range plus the 16-bit edges.
        for d in (0u64..512).chain([16_383, 16_384, 32_767, 32_768, 65_535]) {
            let x = bin(d);
            let sq = BinaryNum::mul(&x, &x);
            assert_eq!(sq.to_decimal(), (d * d).to_string(), "d = {d}");
        }
    }

    #[test]
    fn normalize_strips_leading_zeros() {
        let mut n = BinaryNum::new(8);
        n.set(0, 1);
        n.set(2, 1);
        n.normalize();
        // Digits 0..=2 survive, plus the sentinel.
        assert_eq!(n.len(), 4);
        assert_eq!(n.to_decimal(), "5");
    }

    #[test]
    fn normalize_all_zero_to_single_digit() {
        let mut n = BinaryNum::new(16);
        n.normalize();
        assert!(n.is_zero());
        assert_eq!(n.len(), 2);
    }

    #[test]
    fn to_decimal_zero() {
        assert_eq!(BinaryNum::new(2).to_decimal(), "0");
    }

    #[test]
    fn to_decimal_no_leading_zeros() {
        for n in [1u64, 9, 10, 99, 100, 1023, 1024] {
            let s = bin(n).to_decimal();
            assert!(!s.starts_with('0'), "leading zero in {s}");
        }
    }

    #[test]
    fn decimal_into_string_reverses_digits() {
        // 24680 stored little-endian: 0,8,6,4,2
        let mut n = DecimalNum::new(6);
        n.set(0, 0);
        n.set(1, 8);
        n.set(2, 6);
        n.set(3, 4);
        n.set(4, 2);
        assert_eq!(n.into_string(), "24680");
    }
}
