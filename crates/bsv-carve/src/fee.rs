//! Size-based fee estimation.
//!
//! Sizes are approximations for P2PKH spends: a signed input is about 148
//! bytes and a P2PKH output 34 bytes, plus 10 bytes of version, counts and
//! locktime.

/// Approximate bytes per signed P2PKH input.
pub const INPUT_SIZE: u64 = 148;
/// Approximate bytes per P2PKH output.
pub const OUTPUT_SIZE: u64 = 34;
/// Version, input/output counts and locktime.
pub const BASE_TX_SIZE: u64 = 10;
/// Fee floor in satoshis.
pub const MIN_FEE: u64 = 100;

/// Estimated serialized size of a transaction with the given counts.
pub fn estimate_size(num_inputs: usize, num_outputs: usize) -> u64 {
    (num_inputs as u64)
        .saturating_mul(INPUT_SIZE)
        .saturating_add((num_outputs as u64).saturating_mul(OUTPUT_SIZE))
        .saturating_add(BASE_TX_SIZE)
}

/// Fee in satoshis for `num_inputs` inputs and `num_outputs` outputs at
/// `fee_per_kb` satoshis per 1000 bytes, never below [`MIN_FEE`].
///
/// # Example
///
/// ```
/// use bsv_carve::estimate_fee;
///
/// assert_eq!(estimate_fee(1, 1, 1000), 192);
/// assert_eq!(estimate_fee(1, 1, 1), 100);
/// ```
pub fn estimate_fee(num_inputs: usize, num_outputs: usize, fee_per_kb: u64) -> u64 {
    let fee = estimate_size(num_inputs, num_outputs).saturating_mul(fee_per_kb) / 1000;
    fee.max(MIN_FEE)
}

/// Fee charged when assembling: the payment outputs are sized exactly and
/// one more output is budgeted for change, rounded separately.
pub fn assembly_fee(num_inputs: usize, num_payment_outputs: usize, fee_per_kb: u64) -> u64 {
    let base = estimate_size(num_inputs, num_payment_outputs).saturating_mul(fee_per_kb) / 1000;
    let change = OUTPUT_SIZE.saturating_mul(fee_per_kb) / 1000;
    base.saturating_add(change).max(MIN_FEE)
}
