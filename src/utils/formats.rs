//! Adapters between `ndarray` containers and the slice-based projection

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::config::ProjectionConfig;
use crate::error::Result;
use crate::projection::project_with_config;

fn project_view(view: ArrayView1<'_, f64>, config: &ProjectionConfig) -> Result<Vec<f64>> {
    match view.as_slice() {
        Some(slice) => project_with_config(slice, config),
        // Strided views are copied into a contiguous buffer first
        None => project_with_config(&view.to_vec(), config),
    }
}

/// Projects a one-dimensional array onto the parity polytope
pub fn project_array(vector: ArrayView1<'_, f64>, config: &ProjectionConfig) -> Result<Array1<f64>> {
    project_view(vector, config).map(Array1::from)
}

/// Projects every row of a matrix independently
///
/// Rows are processed one after another; the first failing row aborts the
/// whole call and no partial matrix is returned.
pub fn project_rows(matrix: ArrayView2<'_, f64>, config: &ProjectionConfig) -> Result<Array2<f64>> {
    let mut result = Array2::<f64>::zeros(matrix.raw_dim());
    for (row, mut out_row) in matrix.outer_iter().zip(result.outer_iter_mut()) {
        let projected = project_view(row, config)?;
        for (out, value) in out_row.iter_mut().zip(projected) {
            *out = value;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, s};

    #[test]
    fn test_project_array() {
        let v = array![-1.0, -2.0, -3.0];
        let result = project_array(v.view(), &ProjectionConfig::default()).unwrap();
        assert_eq!(result, array![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_project_strided_view() {
        // Every other entry of [0.9, x, 0.9, x, 0.9]
        let v = array![0.9, 5.0, 0.9, 5.0, 0.9];
        let strided = v.slice(s![..;2]);
        assert!(strided.as_slice().is_none());

        let result = project_array(strided, &ProjectionConfig::default()).unwrap();
        for value in result.iter() {
            assert!((value - 2.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_project_rows() {
        let m = array![[2.0, 3.0, 4.0, 5.0], [-1.0, -1.0, -1.0, -1.0]];
        let result = project_rows(m.view(), &ProjectionConfig::default()).unwrap();
        assert_eq!(result.row(0), array![1.0, 1.0, 1.0, 1.0]);
        assert_eq!(result.row(1), array![0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_project_columns_of_transposed_matrix() {
        let m = array![[0.9, -1.0], [0.9, -1.0], [0.9, -1.0]];
        let result = project_rows(m.t(), &ProjectionConfig::default()).unwrap();
        assert_eq!(result.dim(), (2, 3));
        assert_eq!(result.row(1), array![0.0, 0.0, 0.0]);
    }
}
