//! Configuration for the projection

use crate::constants::DEFAULT_ZERO_TOLERANCE;

/// Tunable parameters of a projection call
///
/// The defaults reproduce the exact algorithm; they only need changing when
/// the caller feeds values on a very different scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Tolerance used by the dual search to treat breakpoints as zero
    pub zero_tolerance: f64,

    /// Whether to reject NaN and infinite inputs before projecting
    ///
    /// Disabling this skips one pass over the input; the caller then
    /// guarantees finiteness itself.
    pub validate_finite: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
            validate_finite: true,
        }
    }
}

impl ProjectionConfig {
    /// Create a config with the given zero tolerance
    pub fn with_zero_tolerance(mut self, zero_tolerance: f64) -> Self {
        self.zero_tolerance = zero_tolerance;
        self
    }

    /// Create a config that trusts the caller to pass finite values
    ///
    /// Nothing checks that trust in release builds: a NaN or infinite
    /// coordinate then flows into the dual search and the output may hold
    /// NaN instead of values in `[0, 1]`. Debug builds still assert
    /// finiteness.
    pub fn without_validation(mut self) -> Self {
        self.validate_finite = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectionConfig::default();
        assert_eq!(config.zero_tolerance, 1e-10);
        assert!(config.validate_finite);
    }

    #[test]
    fn test_builders() {
        let config = ProjectionConfig::default()
            .with_zero_tolerance(1e-6)
            .without_validation();
        assert_eq!(config.zero_tolerance, 1e-6);
        assert!(!config.validate_finite);
    }
}
