//! Contour items.

use crate::array::{check_grid2, Array};
use crate::error::Result;
use crate::props::PropertyBag;

use super::item_bag;

/// Level selection for a contour item.
#[derive(Debug, Clone, PartialEq)]
pub enum Levels {
    /// Let the backend place `n` evenly spaced levels.
    Count(usize),
    /// Explicit level values; exposed sorted regardless of input order.
    Set(Vec<f64>),
}

impl Default for Levels {
    fn default() -> Self {
        Levels::Count(8)
    }
}

impl Levels {
    /// Explicit set from possibly unsorted, possibly non-finite input;
    /// non-finite entries are discarded so the stored set is finite.
    pub fn set(mut values: Vec<f64>) -> Self {
        values.retain(|v| v.is_finite());
        values.sort_by(|a, b| a.partial_cmp(b).expect("finite values compare"));
        values.dedup();
        Levels::Set(values)
    }
}

/// Iso-lines of a scalar grid, optionally filled.
#[derive(Debug, Clone)]
pub struct Contours {
    pub x: Array,
    pub y: Array,
    pub z: Array,
    levels: Levels,
    pub filled: bool,
    pub props: PropertyBag,
}

impl Contours {
    pub fn new(x: Array, y: Array, z: Array, levels: Levels, filled: bool) -> Result<Self> {
        check_grid2(&x, &y, &z)?;
        let levels = match levels {
            Levels::Set(v) => Levels::set(v),
            other => other,
        };
        Ok(Self {
            x,
            y,
            z,
            levels,
            filled,
            props: item_bag(),
        })
    }

    pub fn from_z(z: Array, levels: Levels, filled: bool) -> Result<Self> {
        let x = Array::range_for(z.rows());
        let y = Array::range_for(z.cols());
        Self::new(x, y, z, levels, filled)
    }

    /// Always finite, and sorted when explicit.
    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    /// The concrete level values a backend draws: an explicit set, or
    /// `n` levels evenly spaced over the finite z range.
    pub fn resolved_levels(&self) -> Vec<f64> {
        match &self.levels {
            Levels::Set(v) => v.clone(),
            Levels::Count(n) => {
                let Some((lo, hi)) = self.z.min_max() else {
                    return Vec::new();
                };
                if *n == 0 || lo == hi {
                    return vec![lo];
                }
                let step = (hi - lo) / (*n as f64 + 1.0);
                (1..=*n).map(|i| lo + step * i as f64).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_levels_are_sorted_and_finite() {
        let z = Array::zeros(&[2, 2]);
        let c = Contours::from_z(
            z,
            Levels::Set(vec![3.0, f64::NAN, -1.0, 3.0, 0.5]),
            false,
        )
        .unwrap();
        assert_eq!(c.levels(), &Levels::Set(vec![-1.0, 0.5, 3.0]));
        assert_eq!(c.resolved_levels(), vec![-1.0, 0.5, 3.0]);
    }

    #[test]
    fn counted_levels_span_the_data_range() {
        let z = Array::from_rows(&[vec![0.0, 4.0], vec![8.0, 12.0]]).unwrap();
        let c = Contours::from_z(z, Levels::Count(3), false).unwrap();
        let levels = c.resolved_levels();
        assert_eq!(levels.len(), 3);
        assert!(levels[0] > 0.0 && levels[2] < 12.0);
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }
}
