//! The narrow numeric-array contract the core depends on.
//!
//! Dense `f64` storage in column-major order, with just the shape,
//! indexing, and broadcast checks the dispatcher and plot items need.
//! Anything fancier belongs to the caller's numeric library.

use crate::error::{PlotError, Result};

/// Dense column-major array of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl Array {
    pub fn vector(data: Vec<f64>) -> Self {
        let n = data.len();
        Self {
            shape: vec![n],
            data,
        }
    }

    /// Column-major matrix from flat data.
    pub fn matrix(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(PlotError::shape(format!(
                "matrix data length {} does not match {rows}x{cols}",
                data.len()
            )));
        }
        Ok(Self {
            shape: vec![rows, cols],
            data,
        })
    }

    /// Matrix from row slices (row-major input, stored column-major).
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let m = rows.len();
        let n = rows.first().map(|r| r.len()).unwrap_or(0);
        if m == 0 || n == 0 {
            return Err(PlotError::shape("matrix cannot be empty"));
        }
        let mut data = vec![0.0; m * n];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(PlotError::shape(format!(
                    "row {r} has length {}, expected {n}",
                    row.len()
                )));
            }
            for (c, &v) in row.iter().enumerate() {
                data[r + c * m] = v;
            }
        }
        Ok(Self {
            shape: vec![m, n],
            data,
        })
    }

    /// Column-major 3D block.
    pub fn cube(rows: usize, cols: usize, pages: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols * pages {
            return Err(PlotError::shape(format!(
                "volume data length {} does not match {rows}x{cols}x{pages}",
                data.len()
            )));
        }
        Ok(Self {
            shape: vec![rows, cols, pages],
            data,
        })
    }

    pub fn zeros(shape: &[usize]) -> Self {
        let len = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            data: vec![0.0; len],
        }
    }

    pub fn linspace(start: f64, stop: f64, n: usize) -> Self {
        if n < 2 {
            return Self::vector(vec![start]);
        }
        let step = (stop - start) / (n - 1) as f64;
        Self::vector((0..n).map(|i| start + step * i as f64).collect())
    }

    /// Synthesized abscissa `0, 1, .., n-1` for a lone `y` argument.
    pub fn range_for(n: usize) -> Self {
        Self::vector((0..n).map(|i| i as f64).collect())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of dimensions with trailing singleton dimensions ignored,
    /// so a 1xN or Nx1 matrix counts as a vector.
    pub fn rank(&self) -> usize {
        match self.shape.len() {
            0 | 1 => 1,
            2 => {
                if self.shape[0] == 1 || self.shape[1] == 1 {
                    1
                } else {
                    2
                }
            }
            _ => 3,
        }
    }

    pub fn rows(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }

    pub fn cols(&self) -> usize {
        self.shape.get(1).copied().unwrap_or(1)
    }

    pub fn pages(&self) -> usize {
        self.shape.get(2).copied().unwrap_or(1)
    }

    pub fn is_vector(&self) -> bool {
        self.rank() == 1
    }

    pub fn is_matrix(&self) -> bool {
        self.rank() == 2
    }

    pub fn get2(&self, r: usize, c: usize) -> f64 {
        self.data[r + c * self.rows()]
    }

    pub fn get3(&self, r: usize, c: usize, p: usize) -> f64 {
        let (m, n) = (self.rows(), self.cols());
        self.data[r + c * m + p * m * n]
    }

    pub fn column(&self, c: usize) -> Vec<f64> {
        let m = self.rows();
        (0..m).map(|r| self.get2(r, c)).collect()
    }

    /// 2D transpose; used when resolving `indexing="xy"`.
    pub fn transposed(&self) -> Array {
        if self.rank() < 2 {
            return self.clone();
        }
        let (m, n) = (self.rows(), self.cols());
        let mut out = vec![0.0; m * n];
        for r in 0..m {
            for c in 0..n {
                out[c + r * n] = self.get2(r, c);
            }
        }
        Array {
            shape: vec![n, m],
            data: out,
        }
    }

    /// Finite minimum and maximum, if any element is finite.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in &self.data {
            if v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if lo <= hi {
            Some((lo, hi))
        } else {
            None
        }
    }

    pub fn same_shape(&self, other: &Array) -> bool {
        self.rows() == other.rows()
            && self.cols() == other.cols()
            && self.pages() == other.pages()
    }
}

/// Check that `x`, `y` are usable grid coordinates for an `m x n`
/// data matrix: either vectors of lengths `m` and `n`, or matrices of
/// the same shape as the data.
pub fn check_grid2(x: &Array, y: &Array, z: &Array) -> Result<()> {
    if z.rank() != 2 {
        return Err(PlotError::shape(format!(
            "grid data must be a matrix, got rank {}",
            z.rank()
        )));
    }
    let (m, n) = (z.rows(), z.cols());
    let x_ok = (x.is_vector() && x.len() == m) || (x.is_matrix() && x.same_shape(z));
    let y_ok = (y.is_vector() && y.len() == n) || (y.is_matrix() && y.same_shape(z));
    if !x_ok || !y_ok {
        return Err(PlotError::shape(format!(
            "x/y coordinates incompatible with {m}x{n} grid (x: {:?}, y: {:?})",
            x.shape, y.shape
        )));
    }
    Ok(())
}

/// The 3D analogue of [`check_grid2`] for `(m, n, p)` scalar fields.
pub fn check_grid3(x: &Array, y: &Array, z: &Array, v: &Array) -> Result<()> {
    if v.shape.len() != 3 {
        return Err(PlotError::shape(format!(
            "volume data must have three dimensions, got shape {:?}",
            v.shape
        )));
    }
    let (m, n, p) = (v.rows(), v.cols(), v.pages());
    let axis_ok = |a: &Array, len: usize| -> bool {
        (a.is_vector() && a.len() == len) || (a.shape == v.shape)
    };
    if !axis_ok(x, m) || !axis_ok(y, n) || !axis_ok(z, p) {
        return Err(PlotError::shape(format!(
            "x/y/z coordinates incompatible with {m}x{n}x{p} field"
        )));
    }
    Ok(())
}

/// Expand grid vectors to the full coordinate matrices, `indexing="ij"`:
/// the first index of the result varies along x.
pub fn meshgrid(x: &Array, y: &Array) -> Result<(Array, Array)> {
    if !x.is_vector() || !y.is_vector() {
        return Err(PlotError::shape("meshgrid expects two vectors"));
    }
    let (m, n) = (x.len(), y.len());
    let mut xx = vec![0.0; m * n];
    let mut yy = vec![0.0; m * n];
    for c in 0..n {
        for r in 0..m {
            xx[r + c * m] = x.data[r];
            yy[r + c * m] = y.data[c];
        }
    }
    Ok((Array::matrix(m, n, xx)?, Array::matrix(m, n, yy)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_ignores_singleton_dimensions() {
        let row = Array::matrix(1, 4, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(row.rank(), 1);
        assert!(row.is_vector());
        let m = Array::matrix(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.rank(), 2);
    }

    #[test]
    fn transpose_round_trips() {
        let m = Array::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.get2(1, 2), 6.0);
        let t = m.transposed();
        assert_eq!(t.shape, vec![3, 2]);
        assert_eq!(t.get2(2, 1), 6.0);
        assert_eq!(t.transposed(), m);
    }

    #[test]
    fn grid_checks_accept_vectors_and_matrices() {
        let z = Array::zeros(&[3, 4]);
        let xv = Array::linspace(0.0, 1.0, 3);
        let yv = Array::linspace(0.0, 1.0, 4);
        assert!(check_grid2(&xv, &yv, &z).is_ok());
        let (xx, yy) = meshgrid(&xv, &yv).unwrap();
        assert!(check_grid2(&xx, &yy, &z).is_ok());
        assert!(check_grid2(&yv, &xv, &z).is_err());
    }

    #[test]
    fn meshgrid_is_ij_ordered() {
        let x = Array::vector(vec![10.0, 20.0]);
        let y = Array::vector(vec![1.0, 2.0, 3.0]);
        let (xx, yy) = meshgrid(&x, &y).unwrap();
        assert_eq!(xx.shape, vec![2, 3]);
        // first index varies along x
        assert_eq!(xx.get2(0, 2), 10.0);
        assert_eq!(xx.get2(1, 0), 20.0);
        assert_eq!(yy.get2(1, 2), 3.0);
    }

    #[test]
    fn min_max_skips_non_finite() {
        let a = Array::vector(vec![f64::NAN, 2.0, -1.0, f64::INFINITY]);
        assert_eq!(a.min_max(), Some((-1.0, 2.0)));
        assert_eq!(Array::vector(vec![f64::NAN]).min_max(), None);
    }
}
