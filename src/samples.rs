//! Sample data producers for demos and tests.

pub use crate::array::meshgrid;

use crate::array::Array;
use crate::error::Result;

/// Default grid resolution of [`peaks`].
pub const PEAKS_N: usize = 49;

/// Default grid resolution of [`flow`].
pub const FLOW_N: usize = 25;

/// The classic two-dimensional Gaussian-bump test function over
/// `[-3, 3] x [-3, 3]`, returned as `(x, y, z)` coordinate matrices.
pub fn peaks(n: usize) -> Result<(Array, Array, Array)> {
    let axis = Array::linspace(-3.0, 3.0, n.max(2));
    let (xx, yy) = meshgrid(&axis, &axis)?;
    let data = xx
        .data
        .iter()
        .zip(&yy.data)
        .map(|(&x, &y)| peaks_at(x, y))
        .collect();
    let z = Array {
        shape: xx.shape.clone(),
        data,
    };
    Ok((xx, yy, z))
}

pub fn peaks_default() -> Result<(Array, Array, Array)> {
    peaks(PEAKS_N)
}

fn peaks_at(x: f64, y: f64) -> f64 {
    3.0 * (1.0 - x).powi(2) * (-x.powi(2) - (y + 1.0).powi(2)).exp()
        - 10.0 * (x / 5.0 - x.powi(3) - y.powi(5)) * (-x.powi(2) - y.powi(2)).exp()
        - (1.0 / 3.0) * (-(x + 1.0).powi(2) - y.powi(2)).exp()
}

/// A submerged-jet speed field on an `n x n x n` grid over
/// `[0, 10] x [-3, 3] x [-3, 3]`, returned as `(x, y, z, v)` with the
/// coordinate axes as vectors.
pub fn flow(n: usize) -> Result<(Array, Array, Array, Array)> {
    let n = n.max(2);
    let x = Array::linspace(0.1, 10.0, n);
    let y = Array::linspace(-3.0, 3.0, n);
    let z = Array::linspace(-3.0, 3.0, n);
    let mut data = vec![0.0; n * n * n];
    for (p, &zv) in z.data.iter().enumerate() {
        for (c, &yv) in y.data.iter().enumerate() {
            for (r, &xv) in x.data.iter().enumerate() {
                data[r + c * n + p * n * n] = flow_at(xv, yv, zv);
            }
        }
    }
    let v = Array::cube(n, n, n, data)?;
    Ok((x, y, z, v))
}

pub fn flow_default() -> Result<(Array, Array, Array, Array)> {
    flow(FLOW_N)
}

fn flow_at(x: f64, y: f64, z: f64) -> f64 {
    // axial jet: peak speed on the x axis, Gaussian radial falloff that
    // widens downstream
    let r2 = y * y + z * z;
    let spread = 0.5 + 0.15 * x;
    (x / (1.0 + x)) * (-r2 / (2.0 * spread * spread)).exp()
}
