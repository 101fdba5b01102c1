use serde::{Deserialize, Serialize};

/// Scale raw ADC counts into a linearly related physical quantity.
pub fn to_physical(samples: &[u64], scale_factor: f64) -> Vec<f64> {
    samples.iter().map(|&s| s as f64 * scale_factor).collect()
}

/// Full-scale range of the capture ADC.
///
/// `volts_per_count` is the fixed conversion slope; any other linear unit
/// (pressure through a transducer constant, for example) goes through
/// [`to_physical`] with its own factor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoltageScale {
    pub full_scale_volts: f64,
    pub full_scale_counts: f64,
}

impl VoltageScale {
    pub fn volts_per_count(&self) -> f64 {
        self.full_scale_volts / self.full_scale_counts
    }

    pub fn to_volts(&self, samples: &[u64]) -> Vec<f64> {
        to_physical(samples, self.volts_per_count())
    }
}

impl Default for VoltageScale {
    fn default() -> Self {
        // 12-bit ADC against a 3.3 V reference, as on the capture boards.
        Self {
            full_scale_volts: 3.3,
            full_scale_counts: 4096.0,
        }
    }
}
