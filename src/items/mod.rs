//! Plot item variants.
//!
//! Each item is pure data: coordinate arrays, the primary data array,
//! and a property bag over the item schema. Items never hold backend
//! references; the backend consumes them through the common axis-data
//! interface below.

pub mod bars;
pub mod contours;
pub mod line;
pub mod streams;
pub mod surface;
pub mod vector_field;
pub mod volume;

pub use bars::Bars;
pub use contours::{Contours, Levels};
pub use line::Line;
pub use streams::{StreamStyle, Streams};
pub use surface::{ColorMap, Surface};
pub use vector_field::VectorField;
pub use volume::{Volume, VolumeSpec};

use once_cell::sync::Lazy;

use crate::array::Array;
use crate::props::{PropSpec, PropValue, PropertyBag, Schema, Validator};

/// Keys shared by every item; the axis schema embeds these so that
/// setting them at axis level flows down to items on draw.
pub static ITEM_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "plot item",
        vec![
            (
                "label",
                PropSpec::new(
                    PropValue::Str(String::new()),
                    Validator::AnyString,
                    "legend label for this item",
                ),
            ),
            (
                "linewidth",
                PropSpec::new(
                    PropValue::Num(1.0),
                    Validator::PositiveScalar,
                    "line width in points",
                ),
            ),
            (
                "markersize",
                PropSpec::new(
                    PropValue::Num(6.0),
                    Validator::PositiveScalar,
                    "marker size in points",
                ),
            ),
            (
                "colormap",
                PropSpec::new(
                    PropValue::Str("viridis".into()),
                    Validator::Any,
                    "colormap name for scalar-mapped items",
                ),
            ),
            (
                "alpha",
                PropSpec::new(
                    PropValue::Num(1.0),
                    Validator::NumericScalar,
                    "opacity in [0, 1]",
                ),
            ),
        ],
    )
});

/// The names an axis copies down to child items before a draw.
pub const SHARED_ITEM_KEYS: &[&str] = &["linewidth", "markersize", "colormap", "alpha"];

pub fn item_bag() -> PropertyBag {
    PropertyBag::new(&ITEM_SCHEMA)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Line,
    Bars,
    Surface,
    Contours,
    VectorField,
    Streams,
    Volume,
}

impl ItemKind {
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Line => "line",
            ItemKind::Bars => "bars",
            ItemKind::Surface => "surface",
            ItemKind::Contours => "contours",
            ItemKind::VectorField => "vector field",
            ItemKind::Streams => "streamlines",
            ItemKind::Volume => "volume",
        }
    }
}

/// Finite data extent of one item, used for auto axis limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: Option<(f64, f64)>,
}

impl DataBounds {
    pub fn union(self, other: DataBounds) -> DataBounds {
        let merge = |(a0, a1): (f64, f64), (b0, b1): (f64, f64)| (a0.min(b0), a1.max(b1));
        DataBounds {
            x: merge(self.x, other.x),
            y: merge(self.y, other.y),
            z: match (self.z, other.z) {
                (Some(a), Some(b)) => Some(merge(a, b)),
                (z, None) | (None, z) => z,
            },
        }
    }
}

/// One renderable element attached to an axis.
#[derive(Debug, Clone)]
pub enum PlotItem {
    Line(Line),
    Bars(Bars),
    Surface(Surface),
    Contours(Contours),
    VectorField(VectorField),
    Streams(Streams),
    Volume(Volume),
}

impl PlotItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            PlotItem::Line(_) => ItemKind::Line,
            PlotItem::Bars(_) => ItemKind::Bars,
            PlotItem::Surface(_) => ItemKind::Surface,
            PlotItem::Contours(_) => ItemKind::Contours,
            PlotItem::VectorField(_) => ItemKind::VectorField,
            PlotItem::Streams(_) => ItemKind::Streams,
            PlotItem::Volume(_) => ItemKind::Volume,
        }
    }

    pub fn props(&self) -> &PropertyBag {
        match self {
            PlotItem::Line(i) => &i.props,
            PlotItem::Bars(i) => &i.props,
            PlotItem::Surface(i) => &i.props,
            PlotItem::Contours(i) => &i.props,
            PlotItem::VectorField(i) => &i.props,
            PlotItem::Streams(i) => &i.props,
            PlotItem::Volume(i) => &i.props,
        }
    }

    pub fn props_mut(&mut self) -> &mut PropertyBag {
        match self {
            PlotItem::Line(i) => &mut i.props,
            PlotItem::Bars(i) => &mut i.props,
            PlotItem::Surface(i) => &mut i.props,
            PlotItem::Contours(i) => &mut i.props,
            PlotItem::VectorField(i) => &mut i.props,
            PlotItem::Streams(i) => &mut i.props,
            PlotItem::Volume(i) => &mut i.props,
        }
    }

    pub fn label(&self) -> Option<String> {
        let value = self.props().get("label").ok()?;
        match value.as_str() {
            Some("") | None => None,
            Some(s) => Some(s.to_string()),
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        let _ = self
            .props_mut()
            .set("label", PropValue::Str(label.into()));
    }

    /// Coordinate arrays in x, y[, z] order.
    pub fn coords(&self) -> Vec<&Array> {
        match self {
            PlotItem::Line(i) => {
                let mut c = vec![&i.x, &i.y];
                if let Some(z) = &i.z {
                    c.push(z);
                }
                c
            }
            PlotItem::Bars(i) => vec![&i.positions],
            PlotItem::Surface(i) => vec![&i.x, &i.y],
            PlotItem::Contours(i) => vec![&i.x, &i.y],
            PlotItem::VectorField(i) => {
                let mut c = vec![&i.x, &i.y];
                if let Some(z) = &i.z {
                    c.push(z);
                }
                c
            }
            PlotItem::Streams(i) => {
                let mut c = vec![&i.x, &i.y];
                if let Some(z) = &i.z {
                    c.push(z);
                }
                c
            }
            PlotItem::Volume(i) => vec![&i.x, &i.y, &i.z],
        }
    }

    /// The array the backend maps colors from.
    pub fn primary_data(&self) -> &Array {
        match self {
            PlotItem::Line(i) => i.z.as_ref().unwrap_or(&i.y),
            PlotItem::Bars(i) => &i.values,
            PlotItem::Surface(i) => i.color.as_ref().unwrap_or(&i.z),
            PlotItem::Contours(i) => &i.z,
            PlotItem::VectorField(i) => &i.u,
            PlotItem::Streams(i) => &i.u,
            PlotItem::Volume(i) => &i.values,
        }
    }

    /// Finite range of the primary data, the per-item caxis default.
    pub fn color_range(&self) -> Option<(f64, f64)> {
        self.primary_data().min_max()
    }

    /// Resolved colormap; unrecognized names fall back to the default
    /// map so a typo degrades instead of failing a draw.
    pub fn colormap(&self) -> ColorMap {
        self.props()
            .get("colormap")
            .ok()
            .and_then(|v| v.as_str().and_then(|s| s.parse().ok()))
            .unwrap_or_default()
    }

    /// Whether rendering this item needs a 3D-capable backend.
    pub fn is_3d(&self) -> bool {
        match self {
            PlotItem::Line(i) => i.z.is_some(),
            PlotItem::Bars(_) | PlotItem::Contours(_) => false,
            PlotItem::Surface(_) | PlotItem::Volume(_) => true,
            PlotItem::VectorField(i) => i.w.is_some(),
            PlotItem::Streams(i) => i.w.is_some(),
        }
    }

    pub fn needs_isosurface(&self) -> bool {
        matches!(
            self,
            PlotItem::Volume(Volume {
                spec: VolumeSpec::Isosurface(_),
                ..
            })
        )
    }

    pub fn data_bounds(&self) -> Option<DataBounds> {
        match self {
            PlotItem::Line(i) => Some(DataBounds {
                x: i.x.min_max()?,
                y: i.y.min_max()?,
                z: i.z.as_ref().and_then(|z| z.min_max()),
            }),
            PlotItem::Bars(i) => Some(DataBounds {
                x: i.positions.min_max()?,
                y: i.values.min_max()?,
                z: None,
            }),
            PlotItem::Surface(i) => Some(DataBounds {
                x: i.x.min_max()?,
                y: i.y.min_max()?,
                z: i.z.min_max(),
            }),
            PlotItem::Contours(i) => Some(DataBounds {
                x: i.x.min_max()?,
                y: i.y.min_max()?,
                z: None,
            }),
            PlotItem::VectorField(i) => Some(DataBounds {
                x: i.x.min_max()?,
                y: i.y.min_max()?,
                z: i.z.as_ref().and_then(|z| z.min_max()),
            }),
            PlotItem::Streams(i) => Some(DataBounds {
                x: i.x.min_max()?,
                y: i.y.min_max()?,
                z: i.z.as_ref().and_then(|z| z.min_max()),
            }),
            PlotItem::Volume(i) => Some(DataBounds {
                x: i.x.min_max()?,
                y: i.y.min_max()?,
                z: i.z.min_max(),
            }),
        }
    }
}
