//! `streamline`, `streamribbon`, `streamtube`: field-line traces.

use crate::array::Array;
use crate::dispatch::{resolve_indexing, split_kwargs, take_indexing, Arg};
use crate::error::{PlotError, Result};
use crate::items::{PlotItem, StreamStyle, Streams};
use crate::session::Session;

use super::quiver::synth_plane_coords;

pub fn streamline(session: &mut Session, args: &[Arg]) -> Result<()> {
    stream_impl(session, args, StreamStyle::Lines, "streamline")
}

pub fn streamribbon(session: &mut Session, args: &[Arg]) -> Result<()> {
    stream_impl(session, args, StreamStyle::Ribbons, "streamribbon")
}

pub fn streamtube(session: &mut Session, args: &[Arg]) -> Result<()> {
    stream_impl(session, args, StreamStyle::Tubes, "streamtube")
}

/// Positional forms: `u v sx sy`, `x y u v sx sy`, or
/// `x y z u v w sx sy sz`.
fn stream_impl(
    session: &mut Session,
    args: &[Arg],
    style: StreamStyle,
    command: &'static str,
) -> Result<()> {
    let args = super::retarget(session, args)?;
    let (positional, mut kwargs) = split_kwargs(args);
    let indexing = take_indexing(&mut kwargs)?;
    let mut arrays: Vec<Array> = positional
        .iter()
        .map(|arg| match arg {
            Arg::Array(a) => Ok(a.clone()),
            _ => Err(PlotError::BadValue {
                name: command.into(),
                reason: "expected only data arrays".into(),
            }),
        })
        .collect::<Result<_>>()?;

    let seeds = match arrays.len() {
        4 | 6 => arrays.split_off(arrays.len() - 2),
        9 => arrays.split_off(6),
        n => {
            return Err(PlotError::BadValue {
                name: command.into(),
                reason: format!(
                    "expected u v sx sy, x y u v sx sy, or x y z u v w sx sy sz, got {n} arrays"
                ),
            })
        }
    };

    let built = if arrays.len() == 6 {
        let mut it = arrays.into_iter();
        let (mut x, mut y, mut z) = (
            it.next().expect("x"),
            it.next().expect("y"),
            it.next().expect("z"),
        );
        let (mut u, mut v, mut w) = (
            it.next().expect("u"),
            it.next().expect("v"),
            it.next().expect("w"),
        );
        resolve_indexing(
            indexing,
            &mut [&mut x, &mut y, &mut z, &mut u, &mut v, &mut w],
        );
        Streams::space(x, y, z, u, v, w, seeds, style)
    } else {
        let (coords, mut comps) = if arrays.len() == 4 {
            let comps = arrays.split_off(2);
            (Some(arrays), comps)
        } else {
            (None, arrays)
        };
        let mut v = comps.pop().expect("v");
        let mut u = comps.pop().expect("u");
        let (mut x, mut y) = match coords {
            Some(mut c) => {
                let y = c.pop().expect("y");
                let x = c.pop().expect("x");
                (x, y)
            }
            None => synth_plane_coords(&u),
        };
        resolve_indexing(indexing, &mut [&mut x, &mut y, &mut u, &mut v]);
        Streams::plane(x, y, u, v, seeds, style)
    };

    let mut items = Vec::new();
    if let Some(streams) = session.soft_guard(built)? {
        items.push(PlotItem::Streams(streams));
    }
    session.add_items(items, kwargs)
}
