//! The axis entity: an ordered list of plot items plus the presentation
//! state (labels, limits, scales, view, hold) that frames them.

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::items::{DataBounds, PlotItem, ITEM_SCHEMA, SHARED_ITEM_KEYS};
use crate::props::{PropSpec, PropValue, PropertyBag, Schema, Validator};

/// Axis properties. Extends the item schema so shared keys (linewidth,
/// colormap, ..) may be assigned at axis level and flow down to items.
pub static AXIS_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    ITEM_SCHEMA.extend(
        "axis",
        vec![
            (
                "title",
                PropSpec::new(
                    PropValue::Str(String::new()),
                    Validator::AnyString,
                    "axis title text",
                ),
            ),
            (
                "xlabel",
                PropSpec::new(
                    PropValue::Str(String::new()),
                    Validator::AnyString,
                    "x axis label",
                ),
            ),
            (
                "ylabel",
                PropSpec::new(
                    PropValue::Str(String::new()),
                    Validator::AnyString,
                    "y axis label",
                ),
            ),
            (
                "zlabel",
                PropSpec::new(
                    PropValue::Str(String::new()),
                    Validator::AnyString,
                    "z axis label",
                ),
            ),
            (
                "xlim",
                PropSpec::new(
                    PropValue::Pair(0.0, 1.0),
                    Validator::FiniteRangePair,
                    "explicit x limits; auto from data when unset",
                ),
            ),
            (
                "ylim",
                PropSpec::new(
                    PropValue::Pair(0.0, 1.0),
                    Validator::FiniteRangePair,
                    "explicit y limits; auto from data when unset",
                ),
            ),
            (
                "zlim",
                PropSpec::new(
                    PropValue::Pair(0.0, 1.0),
                    Validator::FiniteRangePair,
                    "explicit z limits; auto from data when unset",
                ),
            ),
            (
                "xscale",
                PropSpec::new(
                    PropValue::Str("linear".into()),
                    Validator::OneOf(&["linear", "log"]),
                    "x axis scale",
                ),
            ),
            (
                "yscale",
                PropSpec::new(
                    PropValue::Str("linear".into()),
                    Validator::OneOf(&["linear", "log"]),
                    "y axis scale",
                ),
            ),
            (
                "zscale",
                PropSpec::new(
                    PropValue::Str("linear".into()),
                    Validator::OneOf(&["linear", "log"]),
                    "z axis scale",
                ),
            ),
            (
                "aspect",
                PropSpec::new(
                    PropValue::Str("auto".into()),
                    Validator::OneOf(&["auto", "equal", "square", "tight"]),
                    "aspect / limit fitting mode",
                ),
            ),
            (
                "azimuth",
                PropSpec::new(
                    PropValue::Num(-37.5),
                    Validator::NumericScalar,
                    "3D view azimuth in degrees",
                ),
            ),
            (
                "elevation",
                PropSpec::new(
                    PropValue::Num(30.0),
                    Validator::NumericScalar,
                    "3D view elevation in degrees",
                ),
            ),
            (
                "box",
                PropSpec::new(PropValue::Bool(false), Validator::Flag, "axis box"),
            ),
            (
                "grid",
                PropSpec::new(PropValue::Bool(false), Validator::Flag, "grid lines"),
            ),
            (
                "fontsize",
                PropSpec::new(
                    PropValue::Num(10.0),
                    Validator::PositiveScalar,
                    "label font size in points",
                ),
            ),
            (
                "caxis",
                PropSpec::new(
                    PropValue::Pair(0.0, 1.0),
                    Validator::FiniteRangePair,
                    "explicit color range; auto from item data when unset",
                ),
            ),
            (
                "hold",
                PropSpec::new(
                    PropValue::Bool(false),
                    Validator::Flag,
                    "keep existing items when new ones arrive",
                ),
            ),
        ],
    )
});

pub fn axis_bag() -> PropertyBag {
    PropertyBag::new(&AXIS_SCHEMA)
}

/// Fractional placement of an axis within its figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const FULL: Viewport = Viewport {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Cell `k` (row-major, 0-based) of an `rows x cols` subplot grid.
    pub fn grid_cell(rows: usize, cols: usize, k: usize) -> Viewport {
        let (r, c) = (k / cols, k % cols);
        let (w, h) = (1.0 / cols as f64, 1.0 / rows as f64);
        Viewport {
            x: c as f64 * w,
            // row 0 is the top band
            y: 1.0 - (r as f64 + 1.0) * h,
            width: w,
            height: h,
        }
    }
}

/// Legend sub-entity; labels come from item `label` properties unless
/// given explicitly.
#[derive(Debug, Clone, Default)]
pub struct Legend {
    pub visible: bool,
    pub labels: Vec<String>,
    pub location: String,
}

/// Colorbar sub-entity; defaults to the right-hand strip placement.
#[derive(Debug, Clone)]
pub struct Colorbar {
    pub visible: bool,
    pub label: String,
    pub location: String,
}

impl Default for Colorbar {
    fn default() -> Self {
        Self {
            visible: false,
            label: String::new(),
            location: "eastoutside".into(),
        }
    }
}

/// Resolved limits for a draw: explicit assignments win, otherwise the
/// finite union of the item data bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: Option<(f64, f64)>,
}

#[derive(Debug, Clone)]
pub struct Axis {
    items: Vec<PlotItem>,
    pub props: PropertyBag,
    pub viewport: Viewport,
    pub legend: Legend,
    pub colorbar: Colorbar,
    dirty: bool,
}

impl Default for Axis {
    fn default() -> Self {
        Self::new()
    }
}

impl Axis {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            props: axis_bag(),
            viewport: Viewport::FULL,
            legend: Legend::default(),
            colorbar: Colorbar::default(),
            dirty: true,
        }
    }

    pub fn items(&self) -> &[PlotItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<PlotItem> {
        self.dirty = true;
        &mut self.items
    }

    /// Append an item. Callers honor hold semantics before this; the
    /// axis itself never clears implicitly.
    pub fn push_item(&mut self, item: PlotItem) {
        self.items.push(item);
        self.dirty = true;
    }

    /// Drop every item; presentation properties stay.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.dirty = true;
    }

    /// Full reset to a fresh axis in the same viewport.
    pub fn reset(&mut self) {
        let viewport = self.viewport;
        *self = Axis::new();
        self.viewport = viewport;
    }

    pub fn hold(&self) -> bool {
        self.props
            .get("hold")
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    pub fn set_hold(&mut self, on: bool) {
        let _ = self.props.set("hold", PropValue::Bool(on));
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Validated property assignment; marks the axis dirty on success.
    pub fn set_prop(&mut self, name: &str, value: PropValue) -> Result<()> {
        self.props.set(name, value)?;
        self.dirty = true;
        Ok(())
    }

    /// Atomic multi-assignment over the axis bag.
    pub fn set_props<'a, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, PropValue)>,
    {
        self.props.set_many(pairs)?;
        self.dirty = true;
        Ok(())
    }

    pub fn get_prop(&self, name: &str) -> Result<PropValue> {
        self.props.get(name)
    }

    /// Drop a local assignment, returning the key to its auto/default
    /// behavior.
    pub fn unset_prop(&mut self, name: &str) -> Result<()> {
        self.props.unset(name)?;
        self.dirty = true;
        Ok(())
    }

    /// Whether any item needs a 3D projection.
    pub fn is_3d(&self) -> bool {
        self.items.iter().any(PlotItem::is_3d)
    }

    pub fn view(&self) -> (f64, f64) {
        let get = |name| {
            self.props
                .get(name)
                .ok()
                .and_then(|v| v.as_num())
                .unwrap_or(0.0)
        };
        (get("azimuth"), get("elevation"))
    }

    fn data_bounds(&self) -> Option<DataBounds> {
        self.items
            .iter()
            .filter_map(PlotItem::data_bounds)
            .reduce(DataBounds::union)
    }

    /// Explicit limits win; unset dimensions fall back to the finite
    /// union of item bounds, then to the unit interval.
    pub fn effective_limits(&self) -> AxisLimits {
        let bounds = self.data_bounds();
        let pick = |name: &str, auto: Option<(f64, f64)>| {
            if self.props.is_set(name) {
                if let Some(pair) = self.props.get(name).ok().and_then(|v| v.as_pair()) {
                    return pair;
                }
            }
            auto.unwrap_or((0.0, 1.0))
        };
        let z_auto = bounds.and_then(|b| b.z);
        AxisLimits {
            x: pick("xlim", bounds.map(|b| b.x)),
            y: pick("ylim", bounds.map(|b| b.y)),
            z: if self.props.is_set("zlim") {
                self.props.get("zlim").ok().and_then(|v| v.as_pair())
            } else if self.is_3d() {
                Some(z_auto.unwrap_or((0.0, 1.0)))
            } else {
                z_auto
            },
        }
    }

    /// Explicit `caxis`, else the union of the item color ranges.
    pub fn color_range(&self) -> Option<(f64, f64)> {
        if self.props.is_set("caxis") {
            return self.props.get("caxis").ok().and_then(|v| v.as_pair());
        }
        self.items
            .iter()
            .filter_map(PlotItem::color_range)
            .reduce(|(a0, a1), (b0, b1)| (a0.min(b0), a1.max(b1)))
    }

    /// Copy axis-level assignments of the shared item keys into items
    /// that have not set them locally. Runs before every draw.
    pub fn sync_item_props(&mut self) {
        for key in SHARED_ITEM_KEYS {
            if !self.props.is_set(key) {
                continue;
            }
            for item in &mut self.items {
                item.props_mut().inherit(key, &self.props);
            }
        }
    }

    /// Labels the legend shows: explicit legend labels, else the item
    /// labels in insertion order.
    pub fn legend_labels(&self) -> Vec<String> {
        if !self.legend.labels.is_empty() {
            return self.legend.labels.clone();
        }
        self.items.iter().filter_map(PlotItem::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Array;
    use crate::items::Line;

    fn line(xs: Vec<f64>, ys: Vec<f64>) -> PlotItem {
        PlotItem::Line(Line::new(Array::vector(xs), Array::vector(ys)).unwrap())
    }

    #[test]
    fn auto_limits_follow_data_bounds() {
        let mut ax = Axis::new();
        ax.push_item(line(vec![0.0, 2.0], vec![-1.0, 5.0]));
        ax.push_item(line(vec![-3.0, 1.0], vec![0.0, 0.0]));
        let lims = ax.effective_limits();
        assert_eq!(lims.x, (-3.0, 2.0));
        assert_eq!(lims.y, (-1.0, 5.0));
        assert_eq!(lims.z, None);
    }

    #[test]
    fn explicit_limits_override_data() {
        let mut ax = Axis::new();
        ax.push_item(line(vec![0.0, 10.0], vec![0.0, 10.0]));
        ax.set_prop("xlim", PropValue::Pair(-1.0, 1.0)).unwrap();
        assert_eq!(ax.effective_limits().x, (-1.0, 1.0));
        assert_eq!(ax.effective_limits().y, (0.0, 10.0));
    }

    #[test]
    fn shared_keys_flow_down_unless_set_locally() {
        let mut ax = Axis::new();
        ax.push_item(line(vec![0.0, 1.0], vec![0.0, 1.0]));
        ax.push_item(line(vec![0.0, 1.0], vec![1.0, 0.0]));
        ax.items_mut()[1]
            .props_mut()
            .set("linewidth", PropValue::Num(4.0))
            .unwrap();
        ax.set_prop("linewidth", PropValue::Num(2.0)).unwrap();
        ax.sync_item_props();
        assert_eq!(
            ax.items()[0].props().get("linewidth").unwrap(),
            PropValue::Num(2.0)
        );
        // per-item assignment wins
        assert_eq!(
            ax.items()[1].props().get("linewidth").unwrap(),
            PropValue::Num(4.0)
        );
    }

    #[test]
    fn mutation_marks_dirty() {
        let mut ax = Axis::new();
        ax.mark_clean();
        ax.set_prop("title", PropValue::Str("t".into())).unwrap();
        assert!(ax.is_dirty());
        ax.mark_clean();
        ax.push_item(line(vec![0.0], vec![0.0]));
        assert!(ax.is_dirty());
    }

    #[test]
    fn grid_cell_viewports_tile_the_figure() {
        let a = Viewport::grid_cell(2, 2, 0);
        assert_eq!((a.x, a.y), (0.0, 0.5));
        let d = Viewport::grid_cell(2, 2, 3);
        assert_eq!((d.x, d.y), (0.5, 0.0));
        assert_eq!(d.width, 0.5);
    }
}
