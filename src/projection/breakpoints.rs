//! Breakpoint merger
//!
//! Once the cube projection is infeasible, the optimum shifts the upper half
//! (ranks `0..=r`) down by a dual value `beta` and the lower half up by the
//! same amount. An upper coordinate stops being clipped at one when
//! `beta = v - 1`; a lower coordinate stops being clipped at zero when
//! `beta = -v`. Both families are already monotone in rank, so a two-pointer
//! merge yields all `n` breakpoints in non-decreasing order in O(n).

use super::rank::RankedSequence;

/// Which side of the parity split a coordinate sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// Ranks `0..=r`, shifted down by the dual value
    Upper,
    /// Ranks `r+1..n`, shifted up by the dual value
    Lower,
}

/// One kink of the piecewise-linear total as a function of the dual value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Rank of the coordinate that changes state here
    pub rank: usize,
    /// Side of the split the coordinate belongs to
    pub half: Half,
    /// Dual value at which the coordinate leaves its clip bound
    pub value: f64,
}

impl Breakpoint {
    fn upper(ranked: &RankedSequence, rank: usize) -> Self {
        Self {
            rank,
            half: Half::Upper,
            value: ranked.value(rank) - 1.0,
        }
    }

    fn lower(ranked: &RankedSequence, rank: usize) -> Self {
        Self {
            rank,
            half: Half::Lower,
            value: -ranked.value(rank),
        }
    }
}

/// Merges the upper and lower breakpoint families into one sorted sequence
///
/// Upper candidates are walked from rank `r` down to 0 and lower candidates
/// from `r + 1` up to `n - 1`. On equal values the lower candidate is taken
/// first. `r` must be a valid rank.
pub fn merge_breakpoints(ranked: &RankedSequence, r: usize) -> Vec<Breakpoint> {
    let n = ranked.len();
    debug_assert!(r < n, "parity target {} out of range for length {}", r, n);

    let mut upper = (0..=r).rev().map(|rank| Breakpoint::upper(ranked, rank)).peekable();
    let mut lower = (r + 1..n).map(|rank| Breakpoint::lower(ranked, rank)).peekable();

    let mut merged = Vec::with_capacity(n);
    loop {
        let take_lower = match (upper.peek(), lower.peek()) {
            (Some(u), Some(l)) => l.value <= u.value,
            (None, Some(_)) => true,
            (Some(_), None) => false,
            (None, None) => break,
        };
        let next = if take_lower { lower.next() } else { upper.next() };
        merged.extend(next);
    }

    merged
}
