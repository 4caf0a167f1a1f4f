//! Euclidean projection onto the parity polytope
//!
//! The pipeline runs once per input vector:
//!
//! 1. [`classify`] short-circuits the all-nonpositive and the even-length
//!    all-above-one inputs.
//! 2. [`rank`] sorts the input decreasingly, clips it to the unit cube and
//!    picks the even parity target `r`.
//! 3. If the clipped vector already satisfies `f_r^T z <= r` it is the answer.
//! 4. Otherwise [`breakpoints`] merges the kinks of the dual function and
//!    [`waterfill`] sweeps them to solve for the dual value exactly.
//! 5. [`assemble`] applies the dual value and restores the input order.
//!
//! Every intermediate sequence is owned by the call; nothing is shared
//! between calls, so concurrent projections on separate buffers need no
//! synchronization.

pub mod assemble;
pub mod breakpoints;
pub mod classify;
pub mod rank;
pub mod waterfill;

use tracing::{debug, trace};

use crate::config::ProjectionConfig;
use crate::error::{ProjectionError, Result};

use assemble::assemble;
use breakpoints::merge_breakpoints;
use classify::{classify, Shortcut};
use rank::{ClippedSequence, RankedSequence};
use waterfill::{solve_dual, DualValue};

/// The route a projection took through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionPath {
    /// Every input value was at most zero
    AllZero,
    /// Every input value exceeded one and the length is even
    AllOne,
    /// The cube projection already satisfied the parity bound
    CubeClip,
    /// The dual value was found by the breakpoint sweep
    Waterfill,
}

/// Detailed outcome of one projection
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// The projected vector, in input order
    pub values: Vec<f64>,
    /// Which stage produced the result
    pub path: ProjectionPath,
    /// The even parity target, absent when a shortcut fired
    pub parity_target: Option<usize>,
    /// The dual value applied; zero unless waterfilling ran
    pub beta: f64,
}

impl From<Shortcut> for ProjectionPath {
    fn from(shortcut: Shortcut) -> Self {
        match shortcut {
            Shortcut::AllZero => ProjectionPath::AllZero,
            Shortcut::AllOne => ProjectionPath::AllOne,
        }
    }
}

fn validate(input: &[f64], config: &ProjectionConfig) -> Result<()> {
    if input.is_empty() {
        return Err(ProjectionError::InvalidInput(
            "cannot project an empty vector".to_string(),
        ));
    }
    if !(config.zero_tolerance.is_finite() && config.zero_tolerance >= 0.0) {
        return Err(ProjectionError::InvalidInput(format!(
            "zero tolerance must be finite and non-negative, got {}",
            config.zero_tolerance
        )));
    }
    if config.validate_finite {
        if let Some((index, &value)) = input.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ProjectionError::NonFiniteValue { index, value });
        }
    } else {
        debug_assert!(
            input.iter().all(|v| v.is_finite()),
            "non-finite input with validation disabled"
        );
    }
    Ok(())
}

/// Projects `input` and reports how the result was obtained
pub fn project_detailed(input: &[f64], config: &ProjectionConfig) -> Result<Projection> {
    validate(input, config)?;
    let n = input.len();

    if let Some(shortcut) = classify(input) {
        debug!(n, ?shortcut, "projection shortcut");
        return Ok(Projection {
            values: vec![shortcut.fill_value(); n],
            path: shortcut.into(),
            parity_target: None,
            beta: 0.0,
        });
    }

    let ranked = RankedSequence::from_values(input);
    let clipped = ClippedSequence::from_ranked(&ranked);
    let r = clipped.parity_target();
    trace!(n, r, clipped_sum = clipped.sum(), "parity target selected");

    if clipped.is_feasible(r) {
        debug!(n, r, "cube projection is feasible");
        return Ok(Projection {
            values: assemble(&ranked, r, DualValue::ZERO),
            path: ProjectionPath::CubeClip,
            parity_target: Some(r),
            beta: 0.0,
        });
    }

    let breakpoints = merge_breakpoints(&ranked, r);
    let dual = solve_dual(&ranked, r, &breakpoints, config.zero_tolerance)?;
    let beta = dual.value();
    debug!(n, r, beta, "projection by waterfilling");

    Ok(Projection {
        values: assemble(&ranked, r, dual),
        path: ProjectionPath::Waterfill,
        parity_target: Some(r),
        beta,
    })
}

/// Projects `input` onto the parity polytope with the given configuration
pub fn project_with_config(input: &[f64], config: &ProjectionConfig) -> Result<Vec<f64>> {
    project_detailed(input, config).map(|projection| projection.values)
}

/// Projects `input` into a caller-owned buffer of the same length
///
/// `output` is only written when the projection succeeds.
pub fn project_into(input: &[f64], output: &mut [f64], config: &ProjectionConfig) -> Result<()> {
    if input.len() != output.len() {
        return Err(ProjectionError::InvalidInput(format!(
            "output buffer has length {}, input has length {}",
            output.len(),
            input.len()
        )));
    }
    let projection = project_detailed(input, config)?;
    output.copy_from_slice(&projection.values);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detailed(input: &[f64]) -> Projection {
        project_detailed(input, &ProjectionConfig::default()).unwrap()
    }

    #[test]
    fn test_paths() {
        assert_eq!(detailed(&[-1.0, -2.0, -3.0]).path, ProjectionPath::AllZero);
        assert_eq!(detailed(&[2.0, 3.0, 4.0, 5.0]).path, ProjectionPath::AllOne);
        assert_eq!(detailed(&[0.9, 0.9, 0.9, 0.9]).path, ProjectionPath::CubeClip);
        assert_eq!(detailed(&[0.9, 0.9, 0.9]).path, ProjectionPath::Waterfill);
    }

    #[test]
    fn test_odd_corner_is_pulled_to_the_facet() {
        let projection = detailed(&[0.9, 0.9, 0.9]);
        assert_eq!(projection.parity_target, Some(2));
        assert!((projection.beta - (0.9 - 2.0 / 3.0)).abs() < 1e-12);
        for value in &projection.values {
            assert!((value - 2.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_full_weight_target_is_feasible() {
        // All at least one but not all above one, so no shortcut; r = n
        let projection = detailed(&[1.0, 1.5, 2.0, 1.0]);
        assert_eq!(projection.path, ProjectionPath::CubeClip);
        assert_eq!(projection.parity_target, Some(4));
        assert_eq!(projection.values, vec![1.0; 4]);
    }

    #[test]
    fn test_validation() {
        let config = ProjectionConfig::default();
        assert!(matches!(
            project_detailed(&[], &config),
            Err(ProjectionError::InvalidInput(_))
        ));
        assert!(matches!(
            project_detailed(&[0.5, f64::NAN], &config),
            Err(ProjectionError::NonFiniteValue { index: 1, .. })
        ));
        assert!(matches!(
            project_detailed(&[f64::NEG_INFINITY], &config),
            Err(ProjectionError::NonFiniteValue { index: 0, .. })
        ));

        let bad_tolerance = config.with_zero_tolerance(-1.0);
        assert!(matches!(
            project_detailed(&[0.5], &bad_tolerance),
            Err(ProjectionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unvalidated_finite_input_projects_normally() {
        let config = ProjectionConfig::default().without_validation();
        let projection = project_detailed(&[0.9, 0.9, 0.9], &config).unwrap();
        assert_eq!(projection, detailed(&[0.9, 0.9, 0.9]));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-finite input with validation disabled")]
    fn test_unvalidated_non_finite_input_asserts_in_debug() {
        let config = ProjectionConfig::default().without_validation();
        let _ = project_detailed(&[f64::INFINITY, 0.5], &config);
    }

    #[test]
    fn test_project_into_checks_length() {
        let config = ProjectionConfig::default();
        let mut output = [7.0; 2];
        assert!(project_into(&[0.5, 0.5, 0.5], &mut output, &config).is_err());
        assert_eq!(output, [7.0; 2]);

        project_into(&[1.5, -0.5], &mut output, &config).unwrap();
        assert!((output[0] - 0.5).abs() < 1e-12);
        assert!((output[1] - 0.5).abs() < 1e-12);
    }
}
