//! `bar`: grouped bar charts.

use crate::dispatch::{split_kwargs, Arg};
use crate::error::{PlotError, Result};
use crate::items::{Bars, PlotItem};
use crate::session::Session;

/// `bar(values)` or `bar(positions, values)`; a values matrix draws one
/// series per column.
pub fn bar(session: &mut Session, args: &[Arg]) -> Result<()> {
    let args = super::retarget(session, args)?;
    let (positional, kwargs) = split_kwargs(args);
    let arrays: Vec<_> = positional
        .iter()
        .map(|arg| match arg {
            Arg::Array(a) => Ok(a),
            other => Err(PlotError::BadValue {
                name: "bar".into(),
                reason: format!("expected a data array, got a {other:?}"),
            }),
        })
        .collect::<Result<_>>()?;
    let built = match arrays.as_slice() {
        [values] => Bars::new((*values).clone()),
        [positions, values] => {
            let labels = positions.data.iter().map(|p| p.to_string()).collect();
            Bars::with_labels((*values).clone(), labels)
        }
        _ => {
            return Err(PlotError::BadValue {
                name: "bar".into(),
                reason: format!("expected values or positions+values, got {} arrays", arrays.len()),
            })
        }
    };
    let mut items = Vec::new();
    if let Some(bars) = session.soft_guard(built)? {
        items.push(PlotItem::Bars(bars));
    }
    session.add_items(items, kwargs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Array;
    use crate::config::Config;

    #[test]
    fn positions_become_tick_labels() {
        let mut s = Session::new(Config::default()).unwrap();
        bar(
            &mut s,
            &[
                Arg::Array(Array::vector(vec![10.0, 20.0, 30.0])),
                Arg::Array(Array::vector(vec![1.0, 4.0, 9.0])),
            ],
        )
        .unwrap();
        let axis = s.gca().unwrap();
        match &axis.items()[0] {
            PlotItem::Bars(b) => assert_eq!(b.tick_labels, vec!["10", "20", "30"]),
            other => panic!("expected bars, got {:?}", other.kind()),
        }
    }

    #[test]
    fn too_many_arrays_reject() {
        let mut s = Session::new(Config::default()).unwrap();
        let v = Arg::Array(Array::vector(vec![1.0]));
        assert!(bar(&mut s, &[v.clone(), v.clone(), v]).is_err());
    }
}
