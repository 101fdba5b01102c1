use crate::pipeline::spectrum::Spectrum;

// Column names are part of the hand-off contract with the storage layer;
// it keys on them when serializing snapshots, so they never change.
pub const TIME_COLUMN: &str = "Time (s)";
pub const RAW_COLUMN: &str = "Raw (counts)";
pub const VOLTAGE_COLUMN: &str = "Voltage (V)";
pub const FREQUENCY_COLUMN: &str = "Frequency (kHz)";
pub const MAGNITUDE_COLUMN: &str = "Magnitude";

/// One named column of a tabular artifact.
#[derive(Clone, Debug)]
pub struct DataColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// Time-domain artifact handed to the storage layer: the time column always
/// comes first, physical columns follow in insertion order, and every column
/// has the same length.
#[derive(Clone, Debug)]
pub struct TimeSeries {
    columns: Vec<DataColumn>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn time(&self) -> &[f64] {
        self.columns
            .first()
            .map(|c| c.values.as_slice())
            .unwrap_or(&[])
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn columns(&self) -> &[DataColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

/// Spectral artifact handed to the storage layer: one (frequency, magnitude)
/// pair per bin of the computed window.
#[derive(Clone, Debug)]
pub struct SpectrumSeries {
    columns: Vec<DataColumn>,
}

impl SpectrumSeries {
    pub fn len(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn frequencies_khz(&self) -> &[f64] {
        self.columns
            .first()
            .map(|c| c.values.as_slice())
            .unwrap_or(&[])
    }

    pub fn magnitudes(&self) -> &[f64] {
        self.columns
            .get(1)
            .map(|c| c.values.as_slice())
            .unwrap_or(&[])
    }

    pub fn columns(&self) -> &[DataColumn] {
        &self.columns
    }
}

/// Package already-computed capture columns into the time-domain table
/// shape. Pure construction; the inputs must be equal in length.
pub fn assemble_timeseries(time: Vec<f64>, raw: Vec<f64>, volts: Vec<f64>) -> TimeSeries {
    debug_assert_eq!(time.len(), raw.len());
    debug_assert_eq!(time.len(), volts.len());
    TimeSeries {
        columns: vec![
            DataColumn {
                name: TIME_COLUMN.to_string(),
                values: time,
            },
            DataColumn {
                name: RAW_COLUMN.to_string(),
                values: raw,
            },
            DataColumn {
                name: VOLTAGE_COLUMN.to_string(),
                values: volts,
            },
        ],
    }
}

/// Package a computed spectrum into the spectral table shape.
pub fn assemble_spectrum(spectrum: Spectrum) -> SpectrumSeries {
    debug_assert_eq!(spectrum.frequencies_khz.len(), spectrum.magnitudes.len());
    SpectrumSeries {
        columns: vec![
            DataColumn {
                name: FREQUENCY_COLUMN.to_string(),
                values: spectrum.frequencies_khz,
            },
            DataColumn {
                name: MAGNITUDE_COLUMN.to_string(),
                values: spectrum.magnitudes,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_column_always_comes_first() {
        let series = assemble_timeseries(
            vec![0.0, 0.5],
            vec![10.0, 20.0],
            vec![0.008, 0.016],
        );
        let names: Vec<&str> = series.column_names().collect();
        assert_eq!(names, vec![TIME_COLUMN, RAW_COLUMN, VOLTAGE_COLUMN]);
        assert_eq!(series.time(), &[0.0, 0.5]);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn columns_are_retrievable_by_name() {
        let series = assemble_timeseries(vec![0.0], vec![42.0], vec![0.034]);
        assert_eq!(series.column(RAW_COLUMN), Some(&[42.0][..]));
        assert_eq!(series.column(VOLTAGE_COLUMN), Some(&[0.034][..]));
        assert!(series.column("x (mm)").is_none());
    }

    #[test]
    fn spectrum_table_keeps_frequency_then_magnitude() {
        let series = assemble_spectrum(Spectrum {
            frequencies_khz: vec![0.0, 0.125],
            magnitudes: vec![1.0, 32.0],
        });
        let names: Vec<&str> = series.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![FREQUENCY_COLUMN, MAGNITUDE_COLUMN]);
        assert_eq!(series.frequencies_khz(), &[0.0, 0.125]);
        assert_eq!(series.magnitudes(), &[1.0, 32.0]);
        assert_eq!(series.len(), 2);
    }
}
