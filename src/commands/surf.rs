//! `surf` and `mesh`: height-field surfaces.

use crate::array::Array;
use crate::dispatch::{parse_grid, resolve_indexing, split_kwargs, take_indexing, Arg};
use crate::error::Result;
use crate::items::{PlotItem, Surface};
use crate::session::Session;

/// Shaded surface from `z`, `x y z`, or `x y z c` arrays.
pub fn surf(session: &mut Session, args: &[Arg]) -> Result<()> {
    grid_surface(session, args, false, "surf")
}

/// Wireframe rendition of the same grammar.
pub fn mesh(session: &mut Session, args: &[Arg]) -> Result<()> {
    grid_surface(session, args, true, "mesh")
}

fn grid_surface(
    session: &mut Session,
    args: &[Arg],
    wireframe: bool,
    command: &'static str,
) -> Result<()> {
    let args = super::retarget(session, args)?;
    let (positional, mut kwargs) = split_kwargs(args);
    let indexing = take_indexing(&mut kwargs)?;
    let mut grid = parse_grid(positional, command)?;
    {
        let mut targets: Vec<&mut Array> = vec![&mut grid.z];
        targets.extend(grid.color.as_mut());
        targets.extend(grid.x.as_mut());
        targets.extend(grid.y.as_mut());
        resolve_indexing(indexing, &mut targets);
    }
    let (x, y) = match (grid.x, grid.y) {
        (Some(x), Some(y)) => (x, y),
        _ => (
            Array::range_for(grid.z.rows()),
            Array::range_for(grid.z.cols()),
        ),
    };
    let built = Surface::build(x, y, grid.z, grid.color, wireframe);
    let mut items = Vec::new();
    if let Some(surface) = session.soft_guard(built)? {
        items.push(PlotItem::Surface(surface));
    }
    session.add_items(items, kwargs)
}
