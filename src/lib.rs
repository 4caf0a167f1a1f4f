//! # parity-polytope: projection onto the parity polytope
//!
//! ADMM decoders for binary parity-check codes replace the combinatorial
//! constraint "each check sees an even number of ones" by its convex hull,
//! the *parity polytope*. Every iteration projects one vector per check node
//! onto that polytope, so the projection has to be exact and cheap.
//!
//! This crate implements the sort-and-waterfill projection described in
//! [this paper](http://arxiv.org/abs/1204.0556): O(n log n) for a vector of
//! length `n`, with the dual value solved in closed form rather than by
//! iteration.
//!
//! ## Algorithm Components
//!
//! 1. **Classification**: trivial inputs map straight to a codeword.
//! 2. **Ranking and clipping**: sort, clip to the unit cube, choose the even
//!    parity target `r`.
//! 3. **Feasibility**: the cube projection is the answer if it already meets
//!    the parity bound.
//! 4. **Breakpoint merge and waterfilling**: locate the dual value exactly.
//! 5. **Assembly**: shift, clip and scatter back to input order.
//!
//! ## Usage
//!
//! ```
//! use parity_polytope::project;
//!
//! let x = project(&[0.9, 0.9, 0.9]).unwrap();
//! let total: f64 = x.iter().sum();
//! assert!((total - 2.0).abs() < 1e-9);
//! ```
//!
//! Membership can be checked independently:
//!
//! ```
//! use parity_polytope::polytope::contains;
//!
//! assert!(contains(&[0.5, 0.5, 0.5], 1e-9));
//! assert!(!contains(&[1.0, 0.0, 0.0], 1e-9));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod polytope;
pub mod projection;
pub mod utils;

// Re-export primary components
pub use config::ProjectionConfig;
pub use error::{ProjectionError, Result};
pub use projection::{
    project_detailed, project_into, project_with_config, rank::IndexedValue, Projection,
    ProjectionPath,
};
pub use utils::{project_array, project_rows};

/// Projects `input` onto the parity polytope with the default configuration
///
/// This is the main entry point for the library.
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidInput`] for an empty vector,
/// [`ProjectionError::NonFiniteValue`] for NaN or infinite coordinates and
/// [`ProjectionError::DegenerateBracket`] if the dual solve has no active
/// coordinates to distribute over.
///
/// # Examples
///
/// ```
/// use parity_polytope::project;
///
/// assert_eq!(project(&[-1.0, -2.0, -3.0]).unwrap(), vec![0.0, 0.0, 0.0]);
/// assert_eq!(project(&[2.0, 3.0, 4.0, 5.0]).unwrap(), vec![1.0; 4]);
/// ```
pub fn project(input: &[f64]) -> Result<Vec<f64>> {
    project_with_config(input, &ProjectionConfig::default())
}

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
