//! `quiver`: 2D and 3D vector-field arrows.

use crate::array::Array;
use crate::dispatch::{parse_field, resolve_indexing, split_kwargs, take_indexing, Arg};
use crate::error::Result;
use crate::items::{PlotItem, VectorField};
use crate::session::Session;

/// Arrow field from `u v`, `x y u v`, or `x y z u v w` arrays, with an
/// optional trailing arrow scale.
pub fn quiver(session: &mut Session, args: &[Arg]) -> Result<()> {
    let args = super::retarget(session, args)?;
    let (positional, mut kwargs) = split_kwargs(args);
    let indexing = take_indexing(&mut kwargs)?;
    let mut field = parse_field(positional, "quiver")?;
    {
        let mut targets: Vec<&mut Array> = field.components.iter_mut().collect();
        targets.extend(field.coords.iter_mut());
        resolve_indexing(indexing, &mut targets);
    }

    let built = if field.dims() == 3 {
        let mut comps = field.components.into_iter();
        let (u, v, w) = (
            comps.next().expect("u"),
            comps.next().expect("v"),
            comps.next().expect("w"),
        );
        let mut coords = field.coords.into_iter();
        let (x, y, z) = (
            coords.next().expect("x"),
            coords.next().expect("y"),
            coords.next().expect("z"),
        );
        VectorField::space(x, y, z, u, v, w, field.scale)
    } else {
        let mut comps = field.components.into_iter();
        let (u, v) = (comps.next().expect("u"), comps.next().expect("v"));
        let (x, y) = match field.coords.len() {
            2 => {
                let mut coords = field.coords.into_iter();
                (coords.next().expect("x"), coords.next().expect("y"))
            }
            _ => synth_plane_coords(&u),
        };
        VectorField::plane(x, y, u, v, field.scale)
    };

    let mut items = Vec::new();
    if let Some(vf) = session.soft_guard(built)? {
        items.push(PlotItem::VectorField(vf));
    }
    session.add_items(items, kwargs)
}

/// Grid coordinates for a field given without them.
pub(super) fn synth_plane_coords(u: &Array) -> (Array, Array) {
    if u.is_matrix() {
        (Array::range_for(u.rows()), Array::range_for(u.cols()))
    } else {
        (Array::range_for(u.len()), Array::range_for(u.len()))
    }
}
