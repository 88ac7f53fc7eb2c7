//! Bar chart items.

use crate::array::Array;
use crate::error::{PlotError, Result};
use crate::props::PropertyBag;

use super::item_bag;

/// Grouped bars: a values matrix (rows are tick positions, columns are
/// series) with a label per tick.
#[derive(Debug, Clone)]
pub struct Bars {
    /// Numeric tick positions, one per row of `values`.
    pub positions: Array,
    /// One column per series.
    pub values: Array,
    pub tick_labels: Vec<String>,
    pub props: PropertyBag,
}

impl Bars {
    /// Bars from a vector or matrix of values; ticks default to
    /// `1..=rows` with their numeric labels.
    pub fn new(values: Array) -> Result<Self> {
        let rows = if values.is_vector() {
            values.len()
        } else {
            values.rows()
        };
        let labels = (1..=rows).map(|i| i.to_string()).collect();
        Self::with_labels(values, labels)
    }

    pub fn with_labels(values: Array, tick_labels: Vec<String>) -> Result<Self> {
        if values.is_empty() {
            return Err(PlotError::shape("bar values cannot be empty"));
        }
        let rows = if values.is_vector() {
            values.len()
        } else {
            values.rows()
        };
        if tick_labels.len() != rows {
            return Err(PlotError::shape(format!(
                "{} tick labels for {rows} bar groups",
                tick_labels.len()
            )));
        }
        let positions = Array::vector((1..=rows).map(|i| i as f64).collect());
        Ok(Self {
            positions,
            values,
            tick_labels,
            props: item_bag(),
        })
    }

    /// Bars from named values, label order preserved.
    pub fn from_pairs(pairs: Vec<(String, f64)>) -> Result<Self> {
        let (labels, values): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        Self::with_labels(Array::vector(values), labels)
    }

    pub fn series_count(&self) -> usize {
        if self.values.is_vector() {
            1
        } else {
            self.values.cols()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_tick_labels() {
        let b = Bars::new(Array::vector(vec![3.0, 1.0, 4.0])).unwrap();
        assert_eq!(b.tick_labels, vec!["1", "2", "3"]);
        assert_eq!(b.series_count(), 1);
        assert_eq!(b.positions.data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn matrix_gives_multiple_series() {
        let m = Array::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Bars::new(m).unwrap();
        assert_eq!(b.series_count(), 2);
    }

    #[test]
    fn label_count_must_match() {
        let v = Array::vector(vec![1.0, 2.0]);
        assert!(Bars::with_labels(v, vec!["only".into()]).is_err());
    }
}
