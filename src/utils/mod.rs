//! Small numeric helpers and array adapters

pub mod formats;

pub use formats::{project_array, project_rows};

/// Clips a value into the unit interval `[0, 1]`
#[inline]
pub fn clip_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_unit() {
        assert_eq!(clip_unit(-0.5), 0.0);
        assert_eq!(clip_unit(0.25), 0.25);
        assert_eq!(clip_unit(1.0), 1.0);
        assert_eq!(clip_unit(7.0), 1.0);
    }
}
