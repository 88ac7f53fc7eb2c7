//! 2D/3D line items.

use crate::array::Array;
use crate::error::{PlotError, Result};
use crate::props::PropertyBag;
use crate::style::LineSpec;

use super::item_bag;

/// A curve through `(x, y[, z])` sample points with a style triple.
#[derive(Debug, Clone)]
pub struct Line {
    pub x: Array,
    pub y: Array,
    pub z: Option<Array>,
    pub spec: LineSpec,
    pub props: PropertyBag,
}

impl Line {
    pub fn new(x: Array, y: Array) -> Result<Self> {
        Self::build(x, y, None, LineSpec::default())
    }

    pub fn new3(x: Array, y: Array, z: Array) -> Result<Self> {
        Self::build(x, y, Some(z), LineSpec::default())
    }

    pub fn build(x: Array, y: Array, z: Option<Array>, spec: LineSpec) -> Result<Self> {
        if !x.is_vector() || !y.is_vector() {
            return Err(PlotError::shape("line coordinates must be vectors"));
        }
        if x.len() != y.len() {
            return Err(PlotError::shape(format!(
                "line x has {} samples, y has {}",
                x.len(),
                y.len()
            )));
        }
        if let Some(z) = &z {
            if !z.is_vector() || z.len() != y.len() {
                return Err(PlotError::shape(format!(
                    "line z has {} samples, expected {}",
                    z.len(),
                    y.len()
                )));
            }
        }
        if y.is_empty() {
            return Err(PlotError::shape("line data cannot be empty"));
        }
        Ok(Self {
            x,
            y,
            z,
            spec,
            props: item_bag(),
        })
    }

    pub fn with_spec(mut self, spec: LineSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }
}
