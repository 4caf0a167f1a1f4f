//! Dual search by waterfilling
//!
//! With the parity target `r` fixed, the signed total
//!
//! ```text
//! total(beta) = sum_{i <= r} clip(v_i - beta) - sum_{i > r} clip(v_i + beta)
//! ```
//!
//! is continuous, piecewise linear and non-increasing. Between breakpoints
//! the first `clip_count` ranks sit at one, ranks `clip_count..active_end`
//! are active and every rank from `active_end` on sits at zero, so the
//! total falls with slope `active_end - clip_count`. The sweep walks the
//! sorted breakpoints, carrying the total from one breakpoint to the next,
//! until it drops below `r`; the root is then solved in closed form on the
//! bracketing segment.
//!
//! The total is never rebuilt from raw input values. Every carried quantity
//! stays within `[-n, n]`, and the root is reported relative to the
//! breakpoint that opens its segment.

use tracing::{trace, warn};

use super::breakpoints::{Breakpoint, Half};
use super::rank::RankedSequence;
use crate::error::{ProjectionError, Result};
use crate::utils::clip_unit;

/// A dual value split into the breakpoint that opens its segment and the
/// step taken from there
///
/// The anchor is subtracted before the offset; `v - anchor` is exact for
/// the coordinates whose breakpoint is the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualValue {
    pub anchor: f64,
    pub offset: f64,
}

impl DualValue {
    pub const ZERO: DualValue = DualValue {
        anchor: 0.0,
        offset: 0.0,
    };

    /// The combined dual value
    pub fn value(&self) -> f64 {
        self.anchor + self.offset
    }

    /// Moves an upper coordinate (rank `<= r`) down by the dual value
    #[inline]
    pub fn shift_down(&self, value: f64) -> f64 {
        (value - self.anchor) - self.offset
    }

    /// Moves a lower coordinate (rank `> r`) up by the dual value
    #[inline]
    pub fn shift_up(&self, value: f64) -> f64 {
        (value + self.anchor) + self.offset
    }
}

impl From<f64> for DualValue {
    fn from(beta: f64) -> Self {
        DualValue {
            anchor: beta,
            offset: 0.0,
        }
    }
}

/// Saturation state of the ranked coordinates on one linear segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveWindow {
    /// Number of leading ranks clipped at one
    pub clip_count: usize,
    /// One past the last rank not clipped at zero
    pub active_end: usize,
    /// Dual value at which this segment starts
    pub anchor: f64,
    /// Signed total at `anchor`
    pub anchor_total: f64,
}

impl ActiveWindow {
    /// The window on the segment that starts at `beta = 0`
    ///
    /// A coordinate is already active when its breakpoint lies below
    /// `zero_tolerance`, the same threshold at which the sweep starts, so
    /// every coordinate is counted exactly once.
    pub fn initial(ranked: &RankedSequence, r: usize, zero_tolerance: f64) -> Self {
        let n = ranked.len();

        let clip_count = (0..=r)
            .take_while(|&rank| ranked.value(rank) - 1.0 >= zero_tolerance)
            .count();
        let active_end = r + 1
            + (r + 1..n)
                .take_while(|&rank| -ranked.value(rank) < zero_tolerance)
                .count();

        let upper: f64 = (0..=r).map(|rank| clip_unit(ranked.value(rank))).sum();
        let lower: f64 = (r + 1..n).map(|rank| clip_unit(ranked.value(rank))).sum();

        Self {
            clip_count,
            active_end,
            anchor: 0.0,
            anchor_total: upper - lower,
        }
    }

    /// Number of active coordinates, the slope magnitude of the segment
    pub fn width(&self) -> usize {
        self.active_end - self.clip_count
    }

    /// Signed total at `beta`, assuming `beta` lies on this segment
    pub fn signed_total(&self, beta: f64) -> f64 {
        self.anchor_total - (beta - self.anchor) * self.width() as f64
    }

    /// Moves one coordinate off its clip bound
    pub fn absorb(&mut self, breakpoint: &Breakpoint) {
        match breakpoint.half {
            Half::Upper => {
                debug_assert!(self.clip_count > 0);
                self.clip_count -= 1;
            }
            Half::Lower => self.active_end += 1,
        }
    }

    /// Starts the next segment at `beta`, carrying the total across
    ///
    /// The total is taken on this segment before `group` is absorbed; the
    /// function is continuous, so it is also the total where the next
    /// segment begins.
    pub fn advance(&mut self, beta: f64, group: &[Breakpoint]) {
        self.anchor_total = self.signed_total(beta);
        self.anchor = beta;
        for breakpoint in group {
            self.absorb(breakpoint);
        }
    }

    /// Solves `signed_total(beta) = r` on this segment
    pub fn solve(&self, r: usize) -> Result<DualValue> {
        let width = self.width();
        if width == 0 {
            warn!(
                clip_count = self.clip_count,
                active_end = self.active_end,
                "dual solve on an empty active window"
            );
            return Err(ProjectionError::DegenerateBracket {
                clip_count: self.clip_count,
                active_end: self.active_end,
            });
        }
        Ok(DualValue {
            anchor: self.anchor,
            offset: (self.anchor_total - r as f64) / width as f64,
        })
    }
}

/// Largest dual value before the two ranks around the split would swap
pub fn beta_max(ranked: &RankedSequence, r: usize) -> f64 {
    if r + 2 <= ranked.len() {
        (ranked.value(r) - ranked.value(r + 1)) / 2.0
    } else {
        ranked.value(r)
    }
}

/// Finds the dual value at which the signed total meets `r`
///
/// `breakpoints` must come from [`super::breakpoints::merge_breakpoints`]
/// for the same `ranked` and `r`. Only breakpoints in
/// `[zero_tolerance, beta_max)` are swept. Equal breakpoints are absorbed
/// together, and the window before each group is kept so the root can be
/// solved on the segment that actually brackets it.
pub fn solve_dual(
    ranked: &RankedSequence,
    r: usize,
    breakpoints: &[Breakpoint],
    zero_tolerance: f64,
) -> Result<DualValue> {
    let upper_bound = beta_max(ranked, r);
    let start = breakpoints.partition_point(|bp| bp.value < zero_tolerance);
    let end = breakpoints
        .partition_point(|bp| bp.value < upper_bound)
        .max(start);
    trace!(r, beta_max = upper_bound, start, end, "waterfilling sweep range");

    let target = r as f64;
    let mut current = ActiveWindow::initial(ranked, r, zero_tolerance);
    let mut previous = current;

    for group in breakpoints[start..end].chunk_by(|a, b| a.value == b.value) {
        previous = current;
        current.advance(group[0].value, group);
        if current.anchor_total < target {
            break;
        }
    }

    let total = current.anchor_total;
    let bracket = if total > target { current } else { previous };
    let dual = bracket.solve(r)?;
    trace!(total, ?dual, ?bracket, "dual value solved");
    Ok(dual)
}
