use rustfft::{num_complex::Complex64, FftPlanner};

use crate::pipeline::error::PipelineError;

/// Raw output of one spectral computation over a selected window.
#[derive(Clone, Debug)]
pub struct Spectrum {
    pub frequencies_khz: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }
}

/// Compute the full DFT magnitude spectrum of a uniformly sampled window.
///
/// The bin spacing is derived from the delta between the last two time
/// samples, which is exact on the synthetic time base the pipeline builds.
/// Every bin is kept, mirror half included, with no taper and no
/// normalization, so the output has the same length as the input window.
/// Frequencies follow the standard DFT layout (zero and positive bins
/// first, negative bins by wraparound) and are reported in kHz.
pub fn compute_spectrum(
    time_window: &[f64],
    value_window: &[f64],
) -> Result<Spectrum, PipelineError> {
    let n = value_window.len().min(time_window.len());
    if n < 2 {
        return Err(PipelineError::InsufficientSamples { got: n });
    }
    let dt = time_window[time_window.len() - 1] - time_window[time_window.len() - 2];

    let mut buffer: Vec<Complex64> = value_window
        .iter()
        .map(|&v| Complex64::new(v, 0.0))
        .collect();
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(buffer.len()).process(&mut buffer);

    let magnitudes: Vec<f64> = buffer.iter().map(|c| c.norm()).collect();
    let frequencies_khz = bin_frequencies_hz(buffer.len(), dt)
        .into_iter()
        .map(|f| f / 1000.0)
        .collect();

    Ok(Spectrum {
        frequencies_khz,
        magnitudes,
    })
}

/// DFT bin frequencies in Hz for `n` samples spaced `dt` apart: bins below
/// `(n + 1) / 2` carry zero and positive frequencies, the rest wrap to the
/// negative side.
fn bin_frequencies_hz(n: usize, dt: f64) -> Vec<f64> {
    let step = 1.0 / (n as f64 * dt);
    let split = (n + 1) / 2;
    (0..n)
        .map(|k| {
            if k < split {
                k as f64 * step
            } else {
                (k as f64 - n as f64) * step
            }
        })
        .collect()
}
