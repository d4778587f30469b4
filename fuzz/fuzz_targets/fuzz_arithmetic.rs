#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdigits_core::bignum::BinaryNum;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let a = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]]));
    let b = u64::from(u32::from_le_bytes([data[4], data[5], data[6], data[7]]));

    let x = BinaryNum::from_u64(a);
    let y = BinaryNum::from_u64(b);

    let product = BinaryNum::mul(&x, &y);
    assert_eq!(product.to_decimal(), (a * b).to_string());

    let (lo, hi) = if a <= b { (&x, &y) } else { (&y, &x) };
    let sum = BinaryNum::add(lo, hi);
    assert_eq!(sum.to_decimal(), (a + b).to_string());

    if a.min(b) < a.max(b) {
        let diff = BinaryNum::sub(hi, lo);
        assert_eq!(diff.to_decimal(), (a.max(b) - a.min(b)).to_string());
    }
});
