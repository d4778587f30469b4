#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdigits_core::{compute_fibonacci_decimal, AlgorithmVariant};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Two bytes of index, capped at the reference ceiling.
    let k = u64::from(u16::from_le_bytes([data[0], data[1]])) % 501;

    let reference = compute_fibonacci_decimal(k, AlgorithmVariant::LinearDecimalBigNum);
    for variant in [
        AlgorithmVariant::LinearBinaryBigNum,
        AlgorithmVariant::FastDoublingBinaryBigNum,
        AlgorithmVariant::FastDoublingBinaryBigNumClz,
        AlgorithmVariant::FastDoublingArbitraryWidthBigNum,
    ] {
        assert_eq!(
            compute_fibonacci_decimal(k, variant),
            reference,
            "{variant} diverged at k = {k}"
        );
    }
});
