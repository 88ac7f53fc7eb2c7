//! Volumetric scalar-field items.

use crate::array::{check_grid3, Array};
use crate::error::{PlotError, Result};
use crate::props::PropertyBag;

use super::item_bag;

/// How a scalar volume is reduced to drawable geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeSpec {
    /// Axis-aligned slice planes at the given coordinates.
    Slices {
        xs: Vec<f64>,
        ys: Vec<f64>,
        zs: Vec<f64>,
    },
    /// The level surface `values == iso`.
    Isosurface(f64),
}

/// A scalar field sampled on a 3D grid.
#[derive(Debug, Clone)]
pub struct Volume {
    pub x: Array,
    pub y: Array,
    pub z: Array,
    pub values: Array,
    pub spec: VolumeSpec,
    pub props: PropertyBag,
}

impl Volume {
    pub fn new(x: Array, y: Array, z: Array, values: Array, spec: VolumeSpec) -> Result<Self> {
        check_grid3(&x, &y, &z, &values)?;
        match &spec {
            VolumeSpec::Isosurface(iso) => {
                if !iso.is_finite() {
                    return Err(PlotError::BadValue {
                        name: "isovalue".into(),
                        reason: format!("isovalue must be finite, got {iso}"),
                    });
                }
            }
            VolumeSpec::Slices { xs, ys, zs } => {
                if xs.is_empty() && ys.is_empty() && zs.is_empty() {
                    return Err(PlotError::BadValue {
                        name: "slices".into(),
                        reason: "at least one slice plane is required".into(),
                    });
                }
                if xs.iter().chain(ys).chain(zs).any(|c| !c.is_finite()) {
                    return Err(PlotError::BadValue {
                        name: "slices".into(),
                        reason: "slice coordinates must be finite".into(),
                    });
                }
            }
        }
        Ok(Self {
            x,
            y,
            z,
            values,
            spec,
            props: item_bag(),
        })
    }

    pub fn grid_shape(&self) -> (usize, usize, usize) {
        (self.values.rows(), self.values.cols(), self.values.pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube3() -> (Array, Array, Array, Array) {
        let c = Array::range_for(3);
        (c.clone(), c.clone(), c, Array::zeros(&[3, 3, 3]))
    }

    #[test]
    fn isosurface_volume() {
        let (x, y, z, v) = cube3();
        let vol = Volume::new(x, y, z, v, VolumeSpec::Isosurface(0.5)).unwrap();
        assert_eq!(vol.grid_shape(), (3, 3, 3));
    }

    #[test]
    fn non_finite_isovalue_rejects() {
        let (x, y, z, v) = cube3();
        assert!(Volume::new(x, y, z, v, VolumeSpec::Isosurface(f64::NAN)).is_err());
    }

    #[test]
    fn slices_need_at_least_one_plane() {
        let (x, y, z, v) = cube3();
        let spec = VolumeSpec::Slices {
            xs: vec![],
            ys: vec![],
            zs: vec![],
        };
        assert!(Volume::new(x, y, z, v, spec).is_err());
    }
}
