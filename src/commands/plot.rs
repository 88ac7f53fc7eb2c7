//! `plot` and `plot3`: 2D and 3D line commands.

use crate::dispatch::{parse_curves, split_kwargs, take_indexing, Arg};
use crate::error::Result;
use crate::items::PlotItem;
use crate::session::Session;

/// Draw one or more 2D curves on the current axis.
pub fn plot(session: &mut Session, args: &[Arg]) -> Result<()> {
    plot_dims(session, args, 2)
}

/// Draw one or more 3D curves on the current axis.
pub fn plot3(session: &mut Session, args: &[Arg]) -> Result<()> {
    plot_dims(session, args, 3)
}

fn plot_dims(session: &mut Session, args: &[Arg], dims: usize) -> Result<()> {
    let args = super::retarget(session, args)?;
    let (positional, mut kwargs) = split_kwargs(args);
    // curves are vector data; the indexing convention is a no-op here
    // but the keyword is accepted uniformly
    let _ = take_indexing(&mut kwargs)?;
    let groups = parse_curves(positional, dims)?;
    let mut items = Vec::new();
    for group in groups {
        if let Some(line) = session.soft_guard(group.into_line())? {
            items.push(PlotItem::Line(line));
        }
    }
    session.add_items(items, kwargs)
}
