use crate::pipeline::error::PipelineError;

/// Reconstruct the absolute time axis for a capture of `n_samples` taken at
/// `sample_rate_hz`.
///
/// The axis starts at zero and each sample advances by `1 / sample_rate_hz`
/// as a running sum, so the result is strictly increasing for any positive
/// rate. A non-positive or non-finite rate is rejected up front instead of
/// being allowed into the division.
pub fn build_time_axis(n_samples: usize, sample_rate_hz: f64) -> Result<Vec<f64>, PipelineError> {
    if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
        return Err(PipelineError::InvalidSampleRate);
    }
    let dt = 1.0 / sample_rate_hz;
    let mut axis = Vec::with_capacity(n_samples);
    let mut t = 0.0;
    for _ in 0..n_samples {
        axis.push(t);
        t += dt;
    }
    Ok(axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_strictly_increases() {
        let axis = build_time_axis(1000, 44_100.0).unwrap();
        assert_eq!(axis[0], 0.0);
        for pair in axis.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn matches_known_millisecond_axis() {
        let axis = build_time_axis(5, 1000.0).unwrap();
        let expected = [0.0, 0.001, 0.002, 0.003, 0.004];
        assert_eq!(axis.len(), expected.len());
        for (got, want) in axis.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn zero_samples_yield_empty_axis() {
        assert!(build_time_axis(0, 1000.0).unwrap().is_empty());
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        for rate in [0.0, -1.0, f64::NEG_INFINITY, f64::NAN] {
            assert!(matches!(
                build_time_axis(10, rate),
                Err(PipelineError::InvalidSampleRate)
            ));
        }
    }
}
