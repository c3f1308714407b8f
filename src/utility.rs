// Shared helpers for checking raw values and for testing.

/// A raw value is usable only if it is a real number.
#[inline]
pub(crate) fn is_numeric(val: f64) -> bool {
    val.is_finite()
}

#[cfg(test)]
pub mod test_tools {
    pub fn approx_equal(val1: f64, val2: f64, eps: f64) -> bool {
        assert!(eps > 0.0);

        (val1 - val2).abs() < eps
    }
}
