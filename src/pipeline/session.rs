use log::debug;
use serde::{Deserialize, Serialize};

use crate::pipeline::convert::VoltageScale;
use crate::pipeline::dataset::{
    assemble_spectrum, assemble_timeseries, SpectrumSeries, TimeSeries, VOLTAGE_COLUMN,
};
use crate::pipeline::decode::{decode, SampleFormat};
use crate::pipeline::error::PipelineError;
use crate::pipeline::spectrum::compute_spectrum;
use crate::pipeline::timebase::build_time_axis;
use crate::pipeline::window::{select_window, WindowRange};

/// Out-of-band metadata describing a capture file: the binary format and
/// sample rate are not recorded in the file itself, so they travel with the
/// session, typically from a JSON sidecar.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default)]
    pub format: SampleFormat,
    pub sample_rate_hz: f64,
    #[serde(default)]
    pub scale: VoltageScale,
}

impl CaptureConfig {
    pub fn new(sample_rate_hz: f64) -> Self {
        Self {
            format: SampleFormat::default(),
            sample_rate_hz,
            scale: VoltageScale::default(),
        }
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err(PipelineError::InvalidSampleRate);
        }
        Ok(())
    }

    /// Parse capture metadata from JSON sidecar text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Owns the currently loaded capture and the artifacts derived from it.
///
/// Each load replaces the previous time series wholesale and drops any
/// spectrum computed from it, so stale results can never be read against a
/// newer capture. Callers hold the returned tables as plain values and swap
/// them on each action instead of sharing mutable state.
pub struct CaptureSession {
    config: CaptureConfig,
    samples: Option<Vec<u64>>,
    series: Option<TimeSeries>,
    spectrum: Option<SpectrumSeries>,
}

impl CaptureSession {
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            config,
            samples: None,
            series: None,
            spectrum: None,
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Run the ingestion pipeline on a raw capture buffer: decode, rebuild
    /// the time base, convert to volts, and assemble the time-domain table.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<&TimeSeries, PipelineError> {
        self.config.validate()?;
        let samples = decode(bytes, self.config.format);
        let time = build_time_axis(samples.len(), self.config.sample_rate_hz)?;
        let raw: Vec<f64> = samples.iter().map(|&s| s as f64).collect();
        let volts = self.config.scale.to_volts(&samples);
        let series = assemble_timeseries(time, raw, volts);
        debug!(
            "loaded capture: {} samples at {} Hz",
            series.len(),
            self.config.sample_rate_hz
        );
        // A spectrum computed from the previous capture is stale now.
        self.spectrum = None;
        self.samples = Some(samples);
        Ok(self.series.insert(series))
    }

    /// Decoded sample sequence of the current capture, as exported to CSV.
    pub fn samples(&self) -> Result<&[u64], PipelineError> {
        self.samples
            .as_deref()
            .ok_or(PipelineError::CaptureNotLoaded)
    }

    pub fn series(&self) -> Result<&TimeSeries, PipelineError> {
        self.series.as_ref().ok_or(PipelineError::CaptureNotLoaded)
    }

    /// Spectrum of the most recent compute, if one exists for the current
    /// capture.
    pub fn spectrum(&self) -> Option<&SpectrumSeries> {
        self.spectrum.as_ref()
    }

    /// Resolve time bounds against the current capture's time axis.
    pub fn select_window(&self, t_min: f64, t_max: f64) -> Result<WindowRange, PipelineError> {
        Ok(select_window(self.series()?.time(), t_min, t_max))
    }

    /// Compute the voltage spectrum over `[t_min, t_max]`, replacing any
    /// previously computed spectrum.
    pub fn compute_spectrum(
        &mut self,
        t_min: f64,
        t_max: f64,
    ) -> Result<&SpectrumSeries, PipelineError> {
        let series = self.series.as_ref().ok_or(PipelineError::CaptureNotLoaded)?;
        let range = select_window(series.time(), t_min, t_max);
        let time_window = range.slice(series.time());
        let value_window = range.slice(series.column(VOLTAGE_COLUMN).unwrap_or(&[]));
        let spectrum = compute_spectrum(time_window, value_window)?;
        debug!(
            "computed spectrum: {} bins over [{t_min}, {t_max}]",
            spectrum.len()
        );
        Ok(self.spectrum.insert(assemble_spectrum(spectrum)))
    }
}
