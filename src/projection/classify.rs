//! Input classifier: exact shortcuts that skip the full projection

/// A trivial input whose projection is known without sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Every value is at most zero: the origin is the nearest codeword
    AllZero,
    /// Every value exceeds one and the length is even: the all-ones codeword
    AllOne,
}

impl Shortcut {
    /// The coordinate every entry of the projection takes
    pub fn fill_value(self) -> f64 {
        match self {
            Shortcut::AllZero => 0.0,
            Shortcut::AllOne => 1.0,
        }
    }
}

/// Detects the two trivial cases in a single pass
///
/// The all-ones vector has odd weight when the length is odd, so it is
/// never returned for odd lengths.
pub fn classify(values: &[f64]) -> Option<Shortcut> {
    let mut all_zero = true;
    let mut all_one = true;
    for &value in values {
        if value > 0.0 {
            all_zero = false;
        }
        if value <= 1.0 {
            all_one = false;
        }
        if !all_zero && !all_one {
            return None;
        }
    }

    if all_zero {
        Some(Shortcut::AllZero)
    } else if all_one && values.len() % 2 == 0 {
        Some(Shortcut::AllOne)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_nonpositive() {
        assert_eq!(classify(&[-1.0, -2.0, -3.0]), Some(Shortcut::AllZero));
        assert_eq!(classify(&[0.0, -0.5]), Some(Shortcut::AllZero));
    }

    #[test]
    fn test_all_above_one_even_length() {
        assert_eq!(classify(&[2.0, 3.0, 4.0, 5.0]), Some(Shortcut::AllOne));
    }

    #[test]
    fn test_all_above_one_odd_length_does_not_fire() {
        assert_eq!(classify(&[2.0, 3.0, 4.0]), None);
    }

    #[test]
    fn test_exactly_one_is_not_above_one() {
        assert_eq!(classify(&[1.0, 2.0]), None);
    }

    #[test]
    fn test_mixed_values() {
        assert_eq!(classify(&[0.3, -1.0, 2.0]), None);
    }

    #[test]
    fn test_fill_value() {
        assert_eq!(Shortcut::AllZero.fill_value(), 0.0);
        assert_eq!(Shortcut::AllOne.fill_value(), 1.0);
    }
}
