//! `axis`: limit get/set and fitting keywords.

use crate::axes::AxisLimits;
use crate::dispatch::Arg;
use crate::error::{PlotError, Result};
use crate::props::PropValue;
use crate::session::Session;

/// `axis([xmin xmax ymin ymax (zmin zmax)])` sets explicit limits;
/// `axis("auto" | "tight" | "equal" | "square")` selects a fitting
/// mode, with `auto` also releasing explicit limits.
pub fn axis(session: &mut Session, args: &[Arg]) -> Result<()> {
    let args = super::retarget(session, args)?;
    match args {
        [] => Ok(()),
        [Arg::Array(limits)] => {
            let v = &limits.data;
            let pairs: Vec<(&str, PropValue)> = match v.len() {
                4 => vec![
                    ("xlim", PropValue::Pair(v[0], v[1])),
                    ("ylim", PropValue::Pair(v[2], v[3])),
                ],
                6 => vec![
                    ("xlim", PropValue::Pair(v[0], v[1])),
                    ("ylim", PropValue::Pair(v[2], v[3])),
                    ("zlim", PropValue::Pair(v[4], v[5])),
                ],
                n => {
                    return Err(PlotError::BadValue {
                        name: "axis".into(),
                        reason: format!("expected 4 or 6 limit values, got {n}"),
                    })
                }
            };
            session.setp(pairs)
        }
        [Arg::Str(keyword)] => {
            let mode = keyword.trim().to_ascii_lowercase();
            match mode.as_str() {
                "auto" => {
                    let target = session.gca()?;
                    for name in ["xlim", "ylim", "zlim"] {
                        target.unset_prop(name)?;
                    }
                    session.setp(vec![("aspect", PropValue::Str("auto".into()))])
                }
                "tight" | "equal" | "square" => {
                    session.setp(vec![("aspect", PropValue::Str(mode.clone()))])
                }
                other => Err(PlotError::BadValue {
                    name: "axis".into(),
                    reason: format!("unknown axis keyword `{other}`"),
                }),
            }
        }
        _ => Err(PlotError::BadValue {
            name: "axis".into(),
            reason: "expected a limit vector or a single keyword".into(),
        }),
    }
}

/// The limits a draw would use right now: explicit assignments, else
/// finite data bounds.
pub fn axis_limits(session: &mut Session) -> Result<AxisLimits> {
    Ok(session.gca()?.effective_limits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Array;
    use crate::commands::plot;
    use crate::config::Config;

    fn session() -> Session {
        Session::new(Config::default()).unwrap()
    }

    #[test]
    fn limit_vector_sets_explicit_limits() {
        let mut s = session();
        axis(
            &mut s,
            &[Arg::Array(Array::vector(vec![-1.0, 1.0, 0.0, 2.0]))],
        )
        .unwrap();
        let lims = axis_limits(&mut s).unwrap();
        assert_eq!(lims.x, (-1.0, 1.0));
        assert_eq!(lims.y, (0.0, 2.0));
    }

    #[test]
    fn auto_releases_explicit_limits() {
        let mut s = session();
        plot(
            &mut s,
            &[Arg::Array(Array::vector(vec![0.0, 4.0, 2.0]))],
        )
        .unwrap();
        axis(
            &mut s,
            &[Arg::Array(Array::vector(vec![-9.0, 9.0, -9.0, 9.0]))],
        )
        .unwrap();
        assert_eq!(axis_limits(&mut s).unwrap().x, (-9.0, 9.0));
        axis(&mut s, &[Arg::from("auto")]).unwrap();
        // back to the data bounds
        assert_eq!(axis_limits(&mut s).unwrap().y, (0.0, 4.0));
    }

    #[test]
    fn keywords_select_the_aspect_mode() {
        let mut s = session();
        axis(&mut s, &[Arg::from("equal")]).unwrap();
        assert_eq!(
            s.getp("aspect").unwrap(),
            PropValue::Str("equal".into())
        );
        assert!(axis(&mut s, &[Arg::from("sideways")]).is_err());
    }

    #[test]
    fn odd_limit_counts_reject() {
        let mut s = session();
        assert!(axis(&mut s, &[Arg::Array(Array::vector(vec![1.0, 2.0, 3.0]))]).is_err());
    }
}
