pub mod convert;
pub mod dataset;
pub mod decode;
pub mod error;
pub mod export;
pub mod features;
pub mod session;
pub mod spectrum;
pub mod timebase;
pub mod window;

pub use convert::{to_physical, VoltageScale};
pub use dataset::{
    assemble_spectrum, assemble_timeseries, DataColumn, SpectrumSeries, TimeSeries,
};
pub use decode::{decode, SampleFormat};
pub use error::PipelineError;
pub use export::{csv_sibling_path, write_csv};
pub use features::{feature_point, FeatureIndexSource};
pub use session::{CaptureConfig, CaptureSession};
pub use spectrum::{compute_spectrum, Spectrum};
pub use timebase::build_time_axis;
pub use window::{select_mask, select_window, WindowRange};
