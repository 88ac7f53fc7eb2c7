//! Annotation commands: titles, labels, legend, colorbar, view.

use crate::error::{PlotError, Result};
use crate::props::PropValue;
use crate::session::Session;

pub fn title(session: &mut Session, text: &str) -> Result<()> {
    session.setp(vec![("title", PropValue::Str(text.to_string()))])
}

pub fn xlabel(session: &mut Session, text: &str) -> Result<()> {
    session.setp(vec![("xlabel", PropValue::Str(text.to_string()))])
}

pub fn ylabel(session: &mut Session, text: &str) -> Result<()> {
    session.setp(vec![("ylabel", PropValue::Str(text.to_string()))])
}

pub fn zlabel(session: &mut Session, text: &str) -> Result<()> {
    session.setp(vec![("zlabel", PropValue::Str(text.to_string()))])
}

/// Turn the legend on. Explicit labels are assigned to the axis items
/// in insertion order; with no labels the item `label` properties
/// apply.
pub fn legend(session: &mut Session, labels: &[&str]) -> Result<()> {
    let axis = session.gca()?;
    if !labels.is_empty() && labels.len() != axis.items().len() {
        return Err(PlotError::BadValue {
            name: "legend".into(),
            reason: format!(
                "{} labels for {} items",
                labels.len(),
                axis.items().len()
            ),
        });
    }
    for (item, label) in axis.items_mut().iter_mut().zip(labels) {
        item.set_label(*label);
    }
    axis.legend.visible = true;
    axis.legend.labels = labels.iter().map(|l| l.to_string()).collect();
    axis.mark_dirty();
    session.draw_if_interactive()
}

/// Turn the colorbar on for the current axis.
pub fn colorbar(session: &mut Session) -> Result<()> {
    let axis = session.gca()?;
    axis.colorbar.visible = true;
    axis.mark_dirty();
    session.draw_if_interactive()
}

/// Set the 3D view angles in degrees.
pub fn view(session: &mut Session, azimuth: f64, elevation: f64) -> Result<()> {
    session.setp(vec![
        ("azimuth", PropValue::Num(azimuth)),
        ("elevation", PropValue::Num(elevation)),
    ])
}

/// The MATLAB presets: `view(2)` looks straight down, `view(3)` is the
/// default 3D vantage.
pub fn view_preset(session: &mut Session, preset: u8) -> Result<()> {
    match preset {
        2 => view(session, 0.0, 90.0),
        3 => view(session, -37.5, 30.0),
        other => Err(PlotError::BadValue {
            name: "view".into(),
            reason: format!("preset must be 2 or 3, got {other}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Array;
    use crate::commands::plot;
    use crate::config::Config;
    use crate::dispatch::Arg;

    fn session() -> Session {
        Session::new(Config::default()).unwrap()
    }

    fn two_lines(s: &mut Session) {
        plot(
            s,
            &[
                Arg::Array(Array::vector(vec![0.0, 1.0])),
                Arg::Array(Array::vector(vec![1.0, 0.0])),
            ],
        )
        .unwrap();
        s.hold(true).unwrap();
        plot(s, &[Arg::Array(Array::vector(vec![2.0, 3.0]))]).unwrap();
    }

    #[test]
    fn labels_and_title_land_on_the_axis() {
        let mut s = session();
        title(&mut s, "damping").unwrap();
        xlabel(&mut s, "t [s]").unwrap();
        assert_eq!(s.getp("title").unwrap(), PropValue::Str("damping".into()));
        assert_eq!(s.getp("xlabel").unwrap(), PropValue::Str("t [s]".into()));
    }

    #[test]
    fn legend_assigns_labels_in_order() {
        let mut s = session();
        two_lines(&mut s);
        legend(&mut s, &["first", "second"]).unwrap();
        let axis = s.gca().unwrap();
        assert!(axis.legend.visible);
        assert_eq!(axis.legend_labels(), vec!["first", "second"]);
        assert_eq!(axis.items()[1].label().as_deref(), Some("second"));
    }

    #[test]
    fn legend_label_count_must_match() {
        let mut s = session();
        two_lines(&mut s);
        assert!(legend(&mut s, &["only one"]).is_err());
    }

    #[test]
    fn colorbar_defaults_to_the_east_strip() {
        let mut s = session();
        colorbar(&mut s).unwrap();
        let axis = s.gca().unwrap();
        assert!(axis.colorbar.visible);
        assert_eq!(axis.colorbar.location, "eastoutside");
    }

    #[test]
    fn view_presets() {
        let mut s = session();
        view_preset(&mut s, 3).unwrap();
        assert_eq!(s.gca().unwrap().view(), (-37.5, 30.0));
        assert!(view_preset(&mut s, 4).is_err());
    }
}
