//! Vector field (quiver) items.

use crate::array::{check_grid2, check_grid3, Array};
use crate::error::{PlotError, Result};
use crate::props::PropertyBag;

use super::item_bag;

/// Arrows at grid points: components `u, v[, w]` with an arrow scale
/// factor.
#[derive(Debug, Clone)]
pub struct VectorField {
    pub x: Array,
    pub y: Array,
    pub z: Option<Array>,
    pub u: Array,
    pub v: Array,
    pub w: Option<Array>,
    pub scale: f64,
    pub props: PropertyBag,
}

impl VectorField {
    pub fn plane(x: Array, y: Array, u: Array, v: Array, scale: f64) -> Result<Self> {
        if !u.same_shape(&v) {
            return Err(PlotError::shape(format!(
                "u shape {:?} does not match v shape {:?}",
                u.shape, v.shape
            )));
        }
        if u.is_matrix() {
            check_grid2(&x, &y, &u)?;
        } else if !(x.same_shape(&u) && y.same_shape(&u)) {
            return Err(PlotError::shape(
                "vector field coordinates must match the component arrays",
            ));
        }
        check_scale(scale)?;
        Ok(Self {
            x,
            y,
            z: None,
            u,
            v,
            w: None,
            scale,
            props: item_bag(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn space(
        x: Array,
        y: Array,
        z: Array,
        u: Array,
        v: Array,
        w: Array,
        scale: f64,
    ) -> Result<Self> {
        if !u.same_shape(&v) || !u.same_shape(&w) {
            return Err(PlotError::shape("u, v, w must share one shape"));
        }
        if u.shape.len() == 3 {
            check_grid3(&x, &y, &z, &u)?;
        } else if !(x.same_shape(&u) && y.same_shape(&u) && z.same_shape(&u)) {
            return Err(PlotError::shape(
                "vector field coordinates must match the component arrays",
            ));
        }
        check_scale(scale)?;
        Ok(Self {
            x,
            y,
            z: Some(z),
            u,
            v,
            w: Some(w),
            scale,
            props: item_bag(),
        })
    }

    pub fn spatial_rank(&self) -> usize {
        if self.w.is_some() {
            3
        } else {
            2
        }
    }
}

fn check_scale(scale: f64) -> Result<()> {
    if !scale.is_finite() || scale < 0.0 {
        return Err(PlotError::BadValue {
            name: "scale".into(),
            reason: format!("arrow scale must be finite and non-negative, got {scale}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_field_from_vectors() {
        let x = Array::vector(vec![0.0, 1.0, 2.0]);
        let u = Array::vector(vec![1.0, 0.0, -1.0]);
        let f = VectorField::plane(x.clone(), x.clone(), u.clone(), u, 1.0).unwrap();
        assert_eq!(f.spatial_rank(), 2);
    }

    #[test]
    fn mismatched_components_reject() {
        let x = Array::vector(vec![0.0, 1.0]);
        let u = Array::vector(vec![1.0, 0.0]);
        let v = Array::vector(vec![1.0]);
        assert!(VectorField::plane(x.clone(), x, u, v, 1.0).is_err());
    }

    #[test]
    fn negative_scale_rejects() {
        let x = Array::vector(vec![0.0, 1.0]);
        let u = Array::vector(vec![1.0, 0.0]);
        assert!(matches!(
            VectorField::plane(x.clone(), x.clone(), u.clone(), u, -2.0),
            Err(PlotError::BadValue { .. })
        ));
    }
}
