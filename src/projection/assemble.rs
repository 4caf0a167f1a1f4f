//! Result assembler: applies the dual value and restores the input order

use super::rank::RankedSequence;
use super::waterfill::DualValue;
use crate::utils::clip_unit;

/// Shifts every ranked coordinate by `dual` and scatters it to `output`
///
/// Ranks `0..=r` move down by the dual value, the rest move up, and each
/// result is clipped to `[0, 1]`. With [`DualValue::ZERO`] this is the plain
/// cube projection. `output` must have the same length as `ranked`.
pub fn assemble_into(ranked: &RankedSequence, r: usize, dual: DualValue, output: &mut [f64]) {
    debug_assert_eq!(ranked.len(), output.len());
    for (rank, item) in ranked.iter().enumerate() {
        let shifted = if rank <= r {
            dual.shift_down(item.value())
        } else {
            dual.shift_up(item.value())
        };
        output[item.index()] = clip_unit(shifted);
    }
}

/// Allocating variant of [`assemble_into`]
pub fn assemble(ranked: &RankedSequence, r: usize, dual: DualValue) -> Vec<f64> {
    let mut output = vec![0.0; ranked.len()];
    assemble_into(ranked, r, dual, &mut output);
    output
}
