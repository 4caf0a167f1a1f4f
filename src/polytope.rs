//! Parity polytope geometry
//!
//! The parity polytope of length `n` is the convex hull of all binary
//! vectors of length `n` with an even number of ones. Besides the unit cube
//! bounds it is cut out by one inequality per odd-sized subset `S`:
//!
//! ```text
//! sum_{i in S} x_i - sum_{i not in S} x_i <= |S| - 1
//! ```
//!
//! For a fixed cardinality `|S| = k` the left side is largest when `S` holds
//! the `k` largest coordinates, so membership only needs one sort and a scan.

use crate::constants::MAX_VERTEX_ENUMERATION_LENGTH;
use crate::error::{ProjectionError, Result};

/// Largest even integer not above `floor(sum)`, clamped to `[0, n]`
///
/// `sum` is the total of a cube-clipped vector of length `n`, so the clamp
/// only absorbs rounding.
pub fn parity_target(sum: f64, n: usize) -> usize {
    let floor = sum.floor().max(0.0) as usize;
    let r = floor.min(n);
    if r % 2 == 1 {
        r - 1
    } else {
        r
    }
}

/// Computes `f_r^T z`: the first `r + 1` values minus the rest
///
/// `values` must already be in decreasing rank order. When `r + 1` reaches
/// past the end every value counts positively.
pub fn signed_sum(values: &[f64], r: usize) -> f64 {
    let split = values.len().min(r.saturating_add(1));
    let (upper, lower) = values.split_at(split);
    upper.iter().sum::<f64>() - lower.iter().sum::<f64>()
}

/// Checks whether `x` lies in the parity polytope, up to `tolerance`
///
/// Empty vectors and vectors holding NaN are never contained.
pub fn contains(x: &[f64], tolerance: f64) -> bool {
    if x.is_empty() {
        return false;
    }
    if x
        .iter()
        .any(|&value| !(value >= -tolerance && value <= 1.0 + tolerance))
    {
        return false;
    }

    let mut sorted = x.to_vec();
    sorted.sort_unstable_by(|a, b| b.total_cmp(a));
    let total: f64 = sorted.iter().sum();

    // prefix holds the sum of the k largest coordinates
    let mut prefix = 0.0;
    for (i, &value) in sorted.iter().enumerate() {
        prefix += value;
        let k = i + 1;
        if k % 2 == 1 {
            let violation = 2.0 * prefix - total - (k as f64 - 1.0);
            if violation > tolerance {
                return false;
            }
        }
    }
    true
}

/// Enumerates every binary vector of length `n` with an even number of ones
///
/// Vertices are produced in increasing order of their bitmask, with
/// coordinate 0 as the least significant bit.
pub fn even_parity_vertices(n: usize) -> Result<Vec<Vec<f64>>> {
    if n == 0 {
        return Err(ProjectionError::InvalidInput(
            "vertex enumeration needs a positive length".to_string(),
        ));
    }
    if n > MAX_VERTEX_ENUMERATION_LENGTH {
        return Err(ProjectionError::InvalidInput(format!(
            "vertex enumeration supports lengths up to {}, got {}",
            MAX_VERTEX_ENUMERATION_LENGTH, n
        )));
    }

    let vertices: Vec<Vec<f64>> = (0u32..1u32 << n)
        .filter(|mask| mask.count_ones() % 2 == 0)
        .map(|mask| {
            (0..n)
                .map(|bit| if mask & (1 << bit) != 0 { 1.0 } else { 0.0 })
                .collect::<Vec<f64>>()
        })
        .collect();

    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_target() {
        assert_eq!(parity_target(0.0, 3), 0);
        assert_eq!(parity_target(0.99, 3), 0);
        assert_eq!(parity_target(1.5, 3), 0);
        assert_eq!(parity_target(2.0, 3), 2);
        assert_eq!(parity_target(3.6, 4), 2);
        assert_eq!(parity_target(4.0, 4), 4);
        // Rounding past n is clamped
        assert_eq!(parity_target(5.0000001, 5), 4);
    }

    #[test]
    fn test_signed_sum() {
        let values = [1.0, 0.8, 0.5, 0.2];
        assert!((signed_sum(&values, 0) - (1.0 - 0.8 - 0.5 - 0.2)).abs() < 1e-12);
        assert!((signed_sum(&values, 2) - (1.0 + 0.8 + 0.5 - 0.2)).abs() < 1e-12);
        assert!((signed_sum(&values, 3) - 2.5).abs() < 1e-12);
        assert!((signed_sum(&values, 10) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_contains_vertices_and_midpoints() {
        assert!(contains(&[0.0, 0.0, 0.0], 1e-9));
        assert!(contains(&[1.0, 1.0, 0.0], 1e-9));
        assert!(contains(&[0.5, 0.5, 0.5], 1e-9));
        assert!(contains(&[0.9, 0.9, 0.9, 0.9], 1e-9));
    }

    #[test]
    fn test_contains_rejects_odd_points() {
        assert!(!contains(&[1.0, 0.0, 0.0], 1e-9));
        assert!(!contains(&[1.0, 1.0, 1.0], 1e-9));
        assert!(!contains(&[0.9, 0.9, 0.9], 1e-9));
        assert!(!contains(&[1.2, 1.0], 1e-9));
        assert!(!contains(&[-0.1, 0.0], 1e-9));
        assert!(!contains(&[], 1e-9));
        assert!(!contains(&[f64::NAN, 0.0], 1e-9));
    }

    #[test]
    fn test_even_parity_vertices() {
        let vertices = even_parity_vertices(3).unwrap();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0], vec![0.0, 0.0, 0.0]);
        assert_eq!(vertices[1], vec![1.0, 1.0, 0.0]);
        for vertex in &vertices {
            let ones = vertex.iter().filter(|&&v| v == 1.0).count();
            assert_eq!(ones % 2, 0);
            assert!(contains(vertex, 1e-12));
        }

        assert_eq!(even_parity_vertices(6).unwrap().len(), 32);
        assert!(even_parity_vertices(0).is_err());
        assert!(even_parity_vertices(21).is_err());
    }
}
