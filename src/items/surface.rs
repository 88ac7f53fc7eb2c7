//! Surface and wireframe-mesh items, plus the colormap catalogue.

use std::fmt;
use std::str::FromStr;

use crate::array::{check_grid2, Array};
use crate::error::{PlotError, Result};
use crate::props::PropertyBag;

use super::item_bag;

/// Colormap names understood by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMap {
    Jet,
    Hot,
    Cool,
    Spring,
    Summer,
    Autumn,
    Winter,
    Gray,
    Bone,
    Copper,
    Parula,
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Turbo,
}

impl ColorMap {
    pub fn name(self) -> &'static str {
        match self {
            ColorMap::Jet => "jet",
            ColorMap::Hot => "hot",
            ColorMap::Cool => "cool",
            ColorMap::Spring => "spring",
            ColorMap::Summer => "summer",
            ColorMap::Autumn => "autumn",
            ColorMap::Winter => "winter",
            ColorMap::Gray => "gray",
            ColorMap::Bone => "bone",
            ColorMap::Copper => "copper",
            ColorMap::Parula => "parula",
            ColorMap::Viridis => "viridis",
            ColorMap::Plasma => "plasma",
            ColorMap::Inferno => "inferno",
            ColorMap::Magma => "magma",
            ColorMap::Turbo => "turbo",
        }
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMap {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jet" => Ok(ColorMap::Jet),
            "hot" => Ok(ColorMap::Hot),
            "cool" => Ok(ColorMap::Cool),
            "spring" => Ok(ColorMap::Spring),
            "summer" => Ok(ColorMap::Summer),
            "autumn" => Ok(ColorMap::Autumn),
            "winter" => Ok(ColorMap::Winter),
            "gray" | "grey" => Ok(ColorMap::Gray),
            "bone" => Ok(ColorMap::Bone),
            "copper" => Ok(ColorMap::Copper),
            "parula" => Ok(ColorMap::Parula),
            "viridis" => Ok(ColorMap::Viridis),
            "plasma" => Ok(ColorMap::Plasma),
            "inferno" => Ok(ColorMap::Inferno),
            "magma" => Ok(ColorMap::Magma),
            "turbo" => Ok(ColorMap::Turbo),
            other => Err(PlotError::BadValue {
                name: "colormap".into(),
                reason: format!("unknown colormap `{other}`"),
            }),
        }
    }
}

/// A height-field surface over an `(m, n)` grid; `wireframe` is the
/// `mesh` rendition of the same data.
#[derive(Debug, Clone)]
pub struct Surface {
    pub x: Array,
    pub y: Array,
    pub z: Array,
    /// Optional per-vertex color matrix; defaults to mapping `z`.
    pub color: Option<Array>,
    pub wireframe: bool,
    pub props: PropertyBag,
}

impl Surface {
    pub fn new(x: Array, y: Array, z: Array) -> Result<Self> {
        Self::build(x, y, z, None, false)
    }

    pub fn build(
        x: Array,
        y: Array,
        z: Array,
        color: Option<Array>,
        wireframe: bool,
    ) -> Result<Self> {
        check_grid2(&x, &y, &z)?;
        if let Some(c) = &color {
            if !c.same_shape(&z) {
                return Err(PlotError::shape(format!(
                    "color matrix shape {:?} does not match z shape {:?}",
                    c.shape, z.shape
                )));
            }
        }
        Ok(Self {
            x,
            y,
            z,
            color,
            wireframe,
            props: item_bag(),
        })
    }

    /// Surface over a lone `z` matrix, coordinates synthesized `0..m`,
    /// `0..n`.
    pub fn from_z(z: Array) -> Result<Self> {
        let x = Array::range_for(z.rows());
        let y = Array::range_for(z.cols());
        Self::new(x, y, z)
    }

    pub fn grid_shape(&self) -> (usize, usize) {
        (self.z.rows(), self.z.cols())
    }
}
