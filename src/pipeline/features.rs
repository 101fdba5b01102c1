use std::collections::{BTreeMap, HashMap};

use crate::pipeline::dataset::TimeSeries;

/// Externally computed mapping from a named curve landmark (for example
/// `"mid"`) to a row index of a related time series.
///
/// The detection algorithm lives in a separate analysis component; the
/// pipeline never computes these indices, it only looks them up when
/// annotating a plot or report.
pub trait FeatureIndexSource {
    fn feature_index(&self, label: &str) -> Option<usize>;
}

impl FeatureIndexSource for HashMap<String, usize> {
    fn feature_index(&self, label: &str) -> Option<usize> {
        self.get(label).copied()
    }
}

impl FeatureIndexSource for BTreeMap<String, usize> {
    fn feature_index(&self, label: &str) -> Option<usize> {
        self.get(label).copied()
    }
}

/// Resolve a feature label to the (time, value) pair of one series column.
///
/// Returns `None` when the label is unknown, the column does not exist, or
/// the external index falls outside the series.
pub fn feature_point(
    series: &TimeSeries,
    source: &dyn FeatureIndexSource,
    label: &str,
    column: &str,
) -> Option<(f64, f64)> {
    let idx = source.feature_index(label)?;
    let time = series.time().get(idx).copied()?;
    let value = series.column(column)?.get(idx).copied()?;
    Some((time, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::dataset::{assemble_timeseries, VOLTAGE_COLUMN};

    fn series() -> TimeSeries {
        assemble_timeseries(
            vec![0.0, 0.001, 0.002],
            vec![10.0, 20.0, 30.0],
            vec![0.1, 0.2, 0.3],
        )
    }

    #[test]
    fn looks_up_annotation_points_by_label() {
        let mut indices = HashMap::new();
        indices.insert("mid".to_string(), 1);

        let point = feature_point(&series(), &indices, "mid", VOLTAGE_COLUMN);
        assert_eq!(point, Some((0.001, 0.2)));
    }

    #[test]
    fn unknown_labels_and_columns_resolve_to_none() {
        let mut indices = BTreeMap::new();
        indices.insert("mid".to_string(), 1);

        assert!(feature_point(&series(), &indices, "peak", VOLTAGE_COLUMN).is_none());
        assert!(feature_point(&series(), &indices, "mid", "x (mm)").is_none());
    }

    #[test]
    fn out_of_range_external_index_resolves_to_none() {
        let mut indices = HashMap::new();
        indices.insert("mid".to_string(), 99);
        assert!(feature_point(&series(), &indices, "mid", VOLTAGE_COLUMN).is_none());
    }
}
