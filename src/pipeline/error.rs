use thiserror::Error;

/// Failures raised by the capture pipeline.
///
/// Every variant is a local validation failure raised at the point of
/// detection. All pipeline operations are deterministic, so nothing is
/// retried; callers surface these to the user as-is.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unsupported sample width: {0} bytes (expected 1, 2, 4, or 8)")]
    UnsupportedWidth(usize),
    #[error("sample rate must be greater than zero")]
    InvalidSampleRate,
    #[error("spectrum needs at least two samples in the window, got {got}")]
    InsufficientSamples { got: usize },
    #[error("no capture loaded yet; load a capture first")]
    CaptureNotLoaded,
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}
