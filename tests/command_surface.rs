//! Argument-surface behavior of the command layer: format strings,
//! keyword peeling, indexing conventions, and axis limit resolution.

use multiplot::commands;
use multiplot::dispatch::Arg;
use multiplot::items::PlotItem;
use multiplot::props::PropValue;
use multiplot::style::{Color, LineStyle, Marker};
use multiplot::{Array, Config, LineSpec, PlotError, Session};

fn session() -> Session {
    Session::new(Config::default()).unwrap()
}

#[test]
fn format_string_lands_on_the_line() {
    let mut s = session();
    commands::plot(
        &mut s,
        &[
            Arg::from(Array::vector(vec![1.0, 4.0, 9.0])),
            Arg::from("g--o"),
        ],
    )
    .unwrap();
    let PlotItem::Line(line) = &s.gca().unwrap().items()[0] else {
        panic!("expected a line");
    };
    assert_eq!(line.spec.color, Some(Color::Green));
    assert_eq!(line.spec.line_style, Some(LineStyle::Dashed));
    assert_eq!(line.spec.marker, Some(Marker::Circle));
    // lone y synthesizes the abscissa
    assert_eq!(line.x.data, vec![0.0, 1.0, 2.0]);
}

#[test]
fn canonical_spec_survives_a_reparse() {
    let parsed = LineSpec::parse("m-.s4").unwrap();
    assert_eq!(LineSpec::parse(&parsed.canonical()).unwrap(), parsed);
}

#[test]
fn keyword_pairs_peel_but_format_strings_stay_positional() {
    let mut s = session();
    commands::plot(
        &mut s,
        &[
            Arg::from(Array::vector(vec![0.0, 1.0])),
            Arg::from("r-"),
            Arg::from("linewidth"),
            Arg::from(2.0),
        ],
    )
    .unwrap();
    let axis = s.gca().unwrap();
    assert_eq!(
        axis.items()[0].props().get("linewidth").unwrap(),
        PropValue::Num(2.0)
    );
    let PlotItem::Line(line) = &axis.items()[0] else {
        panic!("expected a line");
    };
    assert_eq!(line.spec.color, Some(Color::Red));
}

#[test]
fn bad_keyword_rejects_the_whole_command() {
    let mut s = session();
    let err = commands::plot(
        &mut s,
        &[
            Arg::from(Array::vector(vec![0.0, 1.0])),
            Arg::from("title"),
            Arg::from("kept?"),
            Arg::from("bogus"),
            Arg::from(1.0),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, PlotError::UnknownKey { .. }));
    let axis = s.gca().unwrap();
    assert!(axis.items().is_empty());
    assert!(!axis.props.is_set("title"));
}

#[test]
fn xy_indexing_transposes_grids() {
    let mut s = session();
    let x = Array::vector(vec![0.0, 1.0, 2.0]);
    let y = Array::vector(vec![0.0, 1.0]);
    // rows run along y in the xy convention
    let z_xy = Array::from_rows(&[vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap();
    commands::surf(
        &mut s,
        &[
            Arg::from(x),
            Arg::from(y),
            Arg::from(z_xy),
            Arg::from("indexing"),
            Arg::from("xy"),
        ],
    )
    .unwrap();
    let PlotItem::Surface(surface) = &s.gca().unwrap().items()[0] else {
        panic!("expected a surface");
    };
    assert_eq!(surface.z.shape, vec![3, 2]);
    assert_eq!(surface.z.get2(0, 1), 3.0);
}

#[test]
fn ij_grids_pass_through_untouched() {
    let mut s = session();
    let x = Array::vector(vec![0.0, 1.0, 2.0]);
    let y = Array::vector(vec![0.0, 1.0]);
    let z = Array::zeros(&[3, 2]);
    commands::surf(&mut s, &[Arg::from(x), Arg::from(y), Arg::from(z)]).unwrap();
    let PlotItem::Surface(surface) = &s.gca().unwrap().items()[0] else {
        panic!("expected a surface");
    };
    assert_eq!(surface.z.shape, vec![3, 2]);
}

#[test]
fn limits_auto_then_explicit_then_auto_again() {
    let mut s = session();
    commands::plot(
        &mut s,
        &[
            Arg::from(Array::vector(vec![2.0, 4.0])),
            Arg::from(Array::vector(vec![-1.0, 5.0])),
        ],
    )
    .unwrap();
    let auto = commands::axis_limits(&mut s).unwrap();
    assert_eq!(auto.x, (2.0, 4.0));
    assert_eq!(auto.y, (-1.0, 5.0));
    assert_eq!(auto.z, None);

    commands::axis(
        &mut s,
        &[Arg::from(Array::vector(vec![0.0, 10.0, 0.0, 1.0]))],
    )
    .unwrap();
    let explicit = commands::axis_limits(&mut s).unwrap();
    assert_eq!(explicit.x, (0.0, 10.0));
    assert_eq!(explicit.y, (0.0, 1.0));

    commands::axis(&mut s, &[Arg::from("auto")]).unwrap();
    let back = commands::axis_limits(&mut s).unwrap();
    assert_eq!(back.x, (2.0, 4.0));
}

#[test]
fn empty_axis_defaults_to_unit_limits() {
    let mut s = session();
    let limits = commands::axis_limits(&mut s).unwrap();
    assert_eq!(limits.x, (0.0, 1.0));
    assert_eq!(limits.y, (0.0, 1.0));
}

#[test]
fn shared_keywords_flow_from_axis_to_held_items() {
    let mut s = session();
    commands::plot(
        &mut s,
        &[
            Arg::from(Array::vector(vec![0.0, 1.0])),
            Arg::from("linewidth"),
            Arg::from(3.0),
        ],
    )
    .unwrap();
    s.hold(true).unwrap();
    commands::plot(&mut s, &[Arg::from(Array::vector(vec![1.0, 0.0]))]).unwrap();
    s.draw().unwrap();
    let axis = s.gca().unwrap();
    // the second line inherits the axis-level width on draw
    assert_eq!(
        axis.items()[1].props().get("linewidth").unwrap(),
        PropValue::Num(3.0)
    );
}

#[test]
fn quiver_and_streamline_share_coordinate_synthesis() {
    let mut s = session();
    let u = Array::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    let v = Array::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    commands::quiver(&mut s, &[Arg::from(u.clone()), Arg::from(v.clone())]).unwrap();
    let PlotItem::VectorField(field) = &s.gca().unwrap().items()[0] else {
        panic!("expected a vector field");
    };
    assert_eq!(field.x.data, vec![0.0, 1.0]);

    commands::streamline(
        &mut s,
        &[
            Arg::from(u),
            Arg::from(v),
            Arg::from(Array::vector(vec![0.5])),
            Arg::from(Array::vector(vec![0.5])),
        ],
    )
    .unwrap();
    let PlotItem::Streams(streams) = &s.gca().unwrap().items()[0] else {
        panic!("expected streams");
    };
    assert_eq!(streams.seed_count(), 1);
}
