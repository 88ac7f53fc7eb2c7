//! Streamline items: field-line traces seeded inside a vector field.

use crate::array::{check_grid2, check_grid3, Array};
use crate::error::{PlotError, Result};
use crate::props::PropertyBag;

use super::item_bag;

/// How the traced field lines are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamStyle {
    /// Plain poly-lines.
    #[default]
    Lines,
    /// Lines with a rotating ribbon twist.
    Ribbons,
    /// Tubes whose radius follows field magnitude.
    Tubes,
}

impl StreamStyle {
    pub fn name(self) -> &'static str {
        match self {
            StreamStyle::Lines => "lines",
            StreamStyle::Ribbons => "ribbons",
            StreamStyle::Tubes => "tubes",
        }
    }
}

/// A vector field plus seed points where traces start.
#[derive(Debug, Clone)]
pub struct Streams {
    pub x: Array,
    pub y: Array,
    pub z: Option<Array>,
    pub u: Array,
    pub v: Array,
    pub w: Option<Array>,
    /// Seed coordinates, one array per spatial dimension.
    pub seeds: Vec<Array>,
    pub style: StreamStyle,
    pub props: PropertyBag,
}

impl Streams {
    pub fn plane(
        x: Array,
        y: Array,
        u: Array,
        v: Array,
        seeds: Vec<Array>,
        style: StreamStyle,
    ) -> Result<Self> {
        if !u.same_shape(&v) {
            return Err(PlotError::shape("u and v must share one shape"));
        }
        if u.is_matrix() {
            check_grid2(&x, &y, &u)?;
        } else if !(x.same_shape(&u) && y.same_shape(&u)) {
            return Err(PlotError::shape(
                "streamline coordinates must match the component arrays",
            ));
        }
        check_seeds(&seeds, 2)?;
        Ok(Self {
            x,
            y,
            z: None,
            u,
            v,
            w: None,
            seeds,
            style,
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
        seeds: Vec<Array>,
        style: StreamStyle,
    ) -> Result<Self> {
        if !u.same_shape(&v) || !u.same_shape(&w) {
            return Err(PlotError::shape("u, v, w must share one shape"));
        }
        if u.shape.len() == 3 {
            check_grid3(&x, &y, &z, &u)?;
        } else if !(x.same_shape(&u) && y.same_shape(&u) && z.same_shape(&u)) {
            return Err(PlotError::shape(
                "streamline coordinates must match the component arrays",
            ));
        }
        check_seeds(&seeds, 3)?;
        Ok(Self {
            x,
            y,
            z: Some(z),
            u,
            v,
            w: Some(w),
            seeds,
            style,
            props: item_bag(),
        })
    }

    pub fn seed_count(&self) -> usize {
        self.seeds.first().map_or(0, Array::len)
    }
}

fn check_seeds(seeds: &[Array], dims: usize) -> Result<()> {
    if seeds.len() != dims {
        return Err(PlotError::shape(format!(
            "{} seed arrays for a {dims}D field",
            seeds.len()
        )));
    }
    let n = seeds[0].len();
    if n == 0 {
        return Err(PlotError::shape("at least one seed point is required"));
    }
    for s in seeds {
        if !s.is_vector() || s.len() != n {
            return Err(PlotError::shape(
                "seed arrays must be vectors of equal length",
            ));
        }
    }
    Ok(())
}
