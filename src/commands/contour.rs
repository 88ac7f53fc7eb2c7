//! `contour` and `contourf`: iso-line commands.

use crate::array::Array;
use crate::dispatch::{resolve_indexing, split_kwargs, take_indexing, Arg};
use crate::error::{PlotError, Result};
use crate::items::{Contours, Levels, PlotItem};
use crate::session::Session;

/// Iso-lines of a scalar grid: `z`, `x y z`, with an optional trailing
/// level count or explicit level vector.
pub fn contour(session: &mut Session, args: &[Arg]) -> Result<()> {
    contour_impl(session, args, false, "contour")
}

/// Filled variant of the same grammar.
pub fn contourf(session: &mut Session, args: &[Arg]) -> Result<()> {
    contour_impl(session, args, true, "contourf")
}

fn contour_impl(
    session: &mut Session,
    args: &[Arg],
    filled: bool,
    command: &'static str,
) -> Result<()> {
    let args = super::retarget(session, args)?;
    let (positional, mut kwargs) = split_kwargs(args);
    let indexing = take_indexing(&mut kwargs)?;

    let mut arrays: Vec<Array> = Vec::new();
    let mut levels = Levels::default();
    let mut i = 0;
    while let Some(Arg::Array(a)) = positional.get(i) {
        arrays.push(a.clone());
        i += 1;
    }
    if let Some(Arg::Num(n)) = positional.get(i) {
        if *n < 1.0 || n.fract() != 0.0 {
            return Err(PlotError::BadValue {
                name: command.into(),
                reason: format!("level count must be a positive integer, got {n}"),
            });
        }
        levels = Levels::Count(*n as usize);
        i += 1;
    }
    if i != positional.len() {
        return Err(PlotError::BadValue {
            name: command.into(),
            reason: "unexpected trailing argument".into(),
        });
    }
    // a trailing vector after the grid is an explicit level set
    let grid: Vec<Array> = match arrays.len() {
        1 | 3 => arrays,
        2 | 4 => {
            let set = arrays.pop().expect("level vector");
            levels = Levels::set(set.data);
            arrays
        }
        n => {
            return Err(PlotError::BadValue {
                name: command.into(),
                reason: format!("expected z or x y z arrays, got {n} arrays"),
            })
        }
    };

    let built = match grid.len() {
        1 => {
            let mut z = grid.into_iter().next().expect("z grid");
            resolve_indexing(indexing, &mut [&mut z]);
            Contours::from_z(z, levels, filled)
        }
        _ => {
            let mut it = grid.into_iter();
            let (mut x, mut y, mut z) = (
                it.next().expect("x"),
                it.next().expect("y"),
                it.next().expect("z"),
            );
            resolve_indexing(indexing, &mut [&mut x, &mut y, &mut z]);
            Contours::new(x, y, z, levels, filled)
        }
    };
    let mut items = Vec::new();
    if let Some(contours) = session.soft_guard(built)? {
        items.push(PlotItem::Contours(contours));
    }
    session.add_items(items, kwargs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn session() -> Session {
        Session::new(Config::default()).unwrap()
    }

    #[test]
    fn trailing_count_selects_levels() {
        let mut s = session();
        contour(
            &mut s,
            &[Arg::Array(Array::zeros(&[3, 3])), Arg::Num(12.0)],
        )
        .unwrap();
        match &s.gca().unwrap().items()[0] {
            PlotItem::Contours(c) => {
                assert_eq!(c.levels(), &Levels::Count(12));
                assert!(!c.filled);
            }
            other => panic!("expected contours, got {:?}", other.kind()),
        }
    }

    #[test]
    fn trailing_vector_is_an_explicit_level_set() {
        let mut s = session();
        contourf(
            &mut s,
            &[
                Arg::Array(Array::zeros(&[3, 3])),
                Arg::Array(Array::vector(vec![2.0, -1.0, 0.5])),
            ],
        )
        .unwrap();
        match &s.gca().unwrap().items()[0] {
            PlotItem::Contours(c) => {
                assert_eq!(c.levels(), &Levels::Set(vec![-1.0, 0.5, 2.0]));
                assert!(c.filled);
            }
            other => panic!("expected contours, got {:?}", other.kind()),
        }
    }

    #[test]
    fn fractional_count_rejects() {
        let mut s = session();
        assert!(contour(
            &mut s,
            &[Arg::Array(Array::zeros(&[3, 3])), Arg::Num(2.5)]
        )
        .is_err());
    }
}
