//! Ranker, cube clipper and parity target selection
//!
//! The projection works on the input sorted in decreasing order. Each
//! coordinate carries its original position through every later stage so
//! the result can be scattered back without any index bookkeeping.

use crate::polytope::{parity_target, signed_sum};
use crate::utils::clip_unit;

/// A coordinate together with its position in the caller's vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedValue {
    index: usize,
    value: f64,
}

impl IndexedValue {
    /// Pairs a value with its original index
    pub fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }

    /// Position in the original input
    pub fn index(&self) -> usize {
        self.index
    }

    /// The raw input value
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// The input sorted by value, largest first
#[derive(Debug, Clone)]
pub struct RankedSequence {
    items: Vec<IndexedValue>,
}

impl RankedSequence {
    /// Ranks `values` in decreasing order
    ///
    /// Uses `f64::total_cmp`, so the order is total; ties keep no particular
    /// order.
    pub fn from_values(values: &[f64]) -> Self {
        let mut items: Vec<IndexedValue> = values
            .iter()
            .enumerate()
            .map(|(index, &value)| IndexedValue::new(index, value))
            .collect();
        items.sort_unstable_by(|a, b| b.value.total_cmp(&a.value));
        Self { items }
    }

    /// Number of coordinates
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value at the given rank (0 is the largest)
    #[inline]
    pub fn value(&self, rank: usize) -> f64 {
        self.items[rank].value
    }

    /// Iterates the ranked coordinates, largest first
    pub fn iter(&self) -> impl Iterator<Item = &IndexedValue> {
        self.items.iter()
    }
}

/// The ranked values projected onto the unit cube
#[derive(Debug, Clone)]
pub struct ClippedSequence {
    values: Vec<f64>,
    sum: f64,
}

impl ClippedSequence {
    /// Clips every ranked value into `[0, 1]` and accumulates the total
    pub fn from_ranked(ranked: &RankedSequence) -> Self {
        let values: Vec<f64> = ranked.iter().map(|item| clip_unit(item.value())).collect();
        let sum = values.iter().sum();
        Self { values, sum }
    }

    /// Sum of the clipped values
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Clipped values, in rank order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The even integer `r` the signed sum must not exceed
    pub fn parity_target(&self) -> usize {
        parity_target(self.sum, self.values.len())
    }

    /// Signed sum of the clipped values for the split after rank `r`
    pub fn signed_sum(&self, r: usize) -> f64 {
        signed_sum(&self.values, r)
    }

    /// Whether the cube projection already satisfies the parity bound
    pub fn is_feasible(&self, r: usize) -> bool {
        self.signed_sum(r) <= r as f64
    }
}
