//! The figure entity: a handle, a subplot grid of axes, and the
//! window-level properties.

use once_cell::sync::Lazy;

use crate::axes::{Axis, Viewport};
use crate::error::{PlotError, Result};
use crate::props::{PropSpec, PropValue, PropertyBag, Schema, Validator};

pub static FIGURE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "figure",
        vec![
            (
                "name",
                PropSpec::new(
                    PropValue::Str(String::new()),
                    Validator::AnyString,
                    "window title",
                ),
            ),
            (
                "size",
                PropSpec::new(
                    PropValue::Pair(800.0, 600.0),
                    Validator::FiniteRangePair,
                    "window size [width, height] in pixels",
                ),
            ),
        ],
    )
});

#[derive(Debug, Clone)]
pub struct Figure {
    handle: u32,
    rows: usize,
    cols: usize,
    axes: Vec<Axis>,
    current: usize,
    pub props: PropertyBag,
}

impl Figure {
    pub fn new(handle: u32) -> Self {
        debug_assert!(handle >= 1);
        Self {
            handle,
            rows: 1,
            cols: 1,
            axes: vec![Axis::new()],
            current: 0,
            props: PropertyBag::new(&FIGURE_SCHEMA),
        }
    }

    pub fn handle(&self) -> u32 {
        self.handle
    }

    pub fn grid(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut [Axis] {
        &mut self.axes
    }

    /// Reshape to an `rows x cols` subplot grid. Axes at positions that
    /// exist in both the old and new grid are kept, so repeated
    /// `subplot` calls with the same shape are idempotent.
    pub fn set_grid(&mut self, rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(PlotError::BadValue {
                name: "subplot".into(),
                reason: format!("grid {rows}x{cols} has no cells"),
            });
        }
        if (rows, cols) != (self.rows, self.cols) {
            let mut axes: Vec<Axis> = (0..rows * cols).map(|_| Axis::new()).collect();
            for r in 0..rows.min(self.rows) {
                for c in 0..cols.min(self.cols) {
                    axes[r * cols + c] = std::mem::take(&mut self.axes[r * self.cols + c]);
                }
            }
            self.axes = axes;
            self.rows = rows;
            self.cols = cols;
            self.current = self.current.min(self.axes.len() - 1);
        }
        for (k, axis) in self.axes.iter_mut().enumerate() {
            axis.viewport = Viewport::grid_cell(rows, cols, k);
        }
        Ok(())
    }

    /// Select cell `k` (1-based, row-major) as the current axis.
    pub fn select_axis(&mut self, k: usize) -> Result<&mut Axis> {
        if k == 0 || k > self.axes.len() {
            return Err(PlotError::BadValue {
                name: "subplot".into(),
                reason: format!(
                    "cell {k} outside the {}x{} grid",
                    self.rows, self.cols
                ),
            });
        }
        self.current = k - 1;
        Ok(&mut self.axes[self.current])
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_axis(&self) -> &Axis {
        &self.axes[self.current]
    }

    pub fn current_axis_mut(&mut self) -> &mut Axis {
        &mut self.axes[self.current]
    }

    /// `clf`: back to a single empty axis, figure properties kept.
    pub fn clear(&mut self) {
        self.rows = 1;
        self.cols = 1;
        self.axes = vec![Axis::new()];
        self.current = 0;
    }

    pub fn is_dirty(&self) -> bool {
        self.axes.iter().any(Axis::is_dirty)
    }

    pub fn mark_clean(&mut self) {
        for axis in &mut self.axes {
            axis.mark_clean();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Array;
    use crate::items::{Line, PlotItem};

    fn item() -> PlotItem {
        PlotItem::Line(
            Line::new(Array::vector(vec![0.0, 1.0]), Array::vector(vec![0.0, 1.0])).unwrap(),
        )
    }

    #[test]
    fn set_grid_keeps_overlapping_cells() {
        let mut fig = Figure::new(1);
        fig.set_grid(2, 2).unwrap();
        fig.select_axis(1).unwrap().push_item(item());
        fig.set_grid(2, 3).unwrap();
        assert_eq!(fig.axes()[0].items().len(), 1);
        assert_eq!(fig.axes().len(), 6);
    }

    #[test]
    fn set_grid_same_shape_is_idempotent() {
        let mut fig = Figure::new(1);
        fig.set_grid(2, 2).unwrap();
        fig.select_axis(3).unwrap().push_item(item());
        fig.set_grid(2, 2).unwrap();
        assert_eq!(fig.axes()[2].items().len(), 1);
        assert_eq!(fig.current_index(), 2);
    }

    #[test]
    fn select_axis_bounds_checked() {
        let mut fig = Figure::new(1);
        fig.set_grid(2, 2).unwrap();
        assert!(fig.select_axis(0).is_err());
        assert!(fig.select_axis(5).is_err());
        assert!(fig.select_axis(4).is_ok());
    }

    #[test]
    fn clear_resets_to_single_axis() {
        let mut fig = Figure::new(3);
        fig.set_grid(2, 2).unwrap();
        fig.current_axis_mut().push_item(item());
        fig.clear();
        assert_eq!(fig.grid(), (1, 1));
        assert!(fig.current_axis().items().is_empty());
        assert_eq!(fig.handle(), 3);
    }

    #[test]
    fn dirtiness_aggregates_over_axes() {
        let mut fig = Figure::new(1);
        fig.mark_clean();
        assert!(!fig.is_dirty());
        fig.current_axis_mut().push_item(item());
        assert!(fig.is_dirty());
    }
}
