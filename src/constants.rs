//! Centralized constants for the parity polytope projection
//!
//! All tolerances and limits used throughout the crate live here rather than
//! being scattered as literals.

// ============================================================================
// NUMERICAL TOLERANCES
// ============================================================================

/// Tolerance used to decide whether a breakpoint lies at or below zero
///
/// A coordinate whose breakpoint is below this value is already active when
/// the dual variable is zero; the breakpoint sweep starts at this value.
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-10;

/// Default slack accepted by the membership test in [`crate::polytope::contains`]
pub const DEFAULT_MEMBERSHIP_TOLERANCE: f64 = 1e-9;

// ============================================================================
// LIMITS
// ============================================================================

/// Largest length for which every even-parity vertex may be enumerated
///
/// 2^19 vertices of length 20 is already far beyond what a test needs.
pub const MAX_VERTEX_ENUMERATION_LENGTH: usize = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerances_are_small_and_positive() {
        assert!(DEFAULT_ZERO_TOLERANCE > 0.0 && DEFAULT_ZERO_TOLERANCE < 1e-6);
        assert!(DEFAULT_MEMBERSHIP_TOLERANCE > 0.0 && DEFAULT_MEMBERSHIP_TOLERANCE < 1e-6);
    }
}
