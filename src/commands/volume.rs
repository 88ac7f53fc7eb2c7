//! `slice_` and `isosurface`: volumetric scalar-field commands.

use crate::array::Array;
use crate::dispatch::{resolve_indexing, split_kwargs, take_indexing, Arg};
use crate::error::{PlotError, Result};
use crate::items::{PlotItem, Volume, VolumeSpec};
use crate::session::Session;

/// Axis-aligned slice planes through a scalar volume:
/// `v sx sy sz` or `x y z v sx sy sz`, where the `s*` vectors hold the
/// plane coordinates (possibly empty).
pub fn slice_(session: &mut Session, args: &[Arg]) -> Result<()> {
    let args = super::retarget(session, args)?;
    let (positional, mut kwargs) = split_kwargs(args);
    let indexing = take_indexing(&mut kwargs)?;
    let mut arrays = expect_arrays(positional, "slice")?;

    let planes = match arrays.len() {
        4 | 7 => arrays.split_off(arrays.len() - 3),
        n => {
            return Err(PlotError::BadValue {
                name: "slice".into(),
                reason: format!("expected v sx sy sz or x y z v sx sy sz, got {n} arrays"),
            })
        }
    };
    let spec = VolumeSpec::Slices {
        xs: planes[0].data.clone(),
        ys: planes[1].data.clone(),
        zs: planes[2].data.clone(),
    };
    build_volume(session, arrays, spec, indexing, kwargs)
}

/// The level surface `v == iso`: `v iso` or `x y z v iso`.
pub fn isosurface(session: &mut Session, args: &[Arg]) -> Result<()> {
    let args = super::retarget(session, args)?;
    let (positional, mut kwargs) = split_kwargs(args);
    let indexing = take_indexing(&mut kwargs)?;
    let Some((Arg::Num(iso), data)) = positional.split_last() else {
        return Err(PlotError::BadValue {
            name: "isosurface".into(),
            reason: "the last argument must be the isovalue".into(),
        });
    };
    let arrays = expect_arrays(data, "isosurface")?;
    if !matches!(arrays.len(), 1 | 4) {
        return Err(PlotError::BadValue {
            name: "isosurface".into(),
            reason: format!("expected v iso or x y z v iso, got {} arrays", arrays.len()),
        });
    }
    build_volume(session, arrays, VolumeSpec::Isosurface(*iso), indexing, kwargs)
}

fn build_volume(
    session: &mut Session,
    mut arrays: Vec<Array>,
    spec: VolumeSpec,
    indexing: crate::dispatch::Indexing,
    kwargs: Vec<(String, crate::props::PropValue)>,
) -> Result<()> {
    let mut values = arrays.pop().expect("scalar field");
    // transpose before any coordinates are synthesized from the shape
    let (x, y, z) = match arrays.len() {
        3 => {
            let mut it = arrays.into_iter();
            let (mut x, mut y, mut z) = (
                it.next().expect("x"),
                it.next().expect("y"),
                it.next().expect("z"),
            );
            resolve_indexing(indexing, &mut [&mut x, &mut y, &mut z, &mut values]);
            (x, y, z)
        }
        _ => {
            resolve_indexing(indexing, &mut [&mut values]);
            (
                Array::range_for(values.rows()),
                Array::range_for(values.cols()),
                Array::range_for(values.pages()),
            )
        }
    };
    let built = Volume::new(x, y, z, values, spec);
    let mut items = Vec::new();
    if let Some(volume) = session.soft_guard(built)? {
        items.push(PlotItem::Volume(volume));
    }
    session.add_items(items, kwargs)
}

fn expect_arrays(args: &[Arg], command: &'static str) -> Result<Vec<Array>> {
    args.iter()
        .map(|arg| match arg {
            Arg::Array(a) => Ok(a.clone()),
            _ => Err(PlotError::BadValue {
                name: command.into(),
                reason: "expected only data arrays".into(),
            }),
        })
        .collect()
}
