pub mod pipeline;

pub use pipeline::{
    CaptureConfig, CaptureSession, PipelineError, SampleFormat, SpectrumSeries, TimeSeries,
};
