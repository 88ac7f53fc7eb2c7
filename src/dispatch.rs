//! Polymorphic argument dispatch.
//!
//! Every command accepts a flat `&[Arg]` slice the way a MATLAB-style
//! front-end passes values. This module splits the trailing keyword
//! pairs off, groups the positional arrays by the per-command grammar,
//! and resolves the `indexing` convention before items are built.

use crate::array::Array;
use crate::error::{PlotError, Result};
use crate::items::Line;
use crate::props::PropValue;
use crate::style::LineSpec;

/// One call argument.
#[derive(Debug, Clone)]
pub enum Arg {
    Array(Array),
    Num(f64),
    Str(String),
    /// An axis handle (figure handle, 1-based subplot cell). Given as
    /// the leading argument it redirects the call to that axis.
    Axes(u32, usize),
}

impl From<Array> for Arg {
    fn from(a: Array) -> Self {
        Arg::Array(a)
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Num(v)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<(u32, usize)> for Arg {
    fn from((figure, cell): (u32, usize)) -> Self {
        Arg::Axes(figure, cell)
    }
}

impl Arg {
    fn kind(&self) -> &'static str {
        match self {
            Arg::Array(_) => "array",
            Arg::Num(_) => "number",
            Arg::Str(_) => "string",
            Arg::Axes(..) => "axes handle",
        }
    }

    fn to_prop_value(&self) -> PropValue {
        match self {
            Arg::Num(v) => PropValue::Num(*v),
            Arg::Str(s) => PropValue::Str(s.clone()),
            Arg::Array(a) => {
                if a.len() == 2 {
                    PropValue::Pair(a.data[0], a.data[1])
                } else {
                    PropValue::Tuple(a.data.clone())
                }
            }
            Arg::Axes(..) => unreachable!("axes handles are never keyword values"),
        }
    }
}

/// Grid index ordering of matrix arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indexing {
    /// First index varies along x (the internal convention; backends
    /// always receive grids this way).
    #[default]
    Ij,
    /// First index varies along y; matrix arguments are transposed on
    /// the way in.
    Xy,
}

/// Split the trailing keyword pairs off a call. A keyword is a string
/// that does not read as a format spec, followed by a value; pairs are
/// peeled from the end until that shape breaks.
pub fn split_kwargs(args: &[Arg]) -> (&[Arg], Vec<(String, PropValue)>) {
    let mut cut = args.len();
    while cut >= 2 {
        match (&args[cut - 2], &args[cut - 1]) {
            (Arg::Str(name), value)
                if !LineSpec::is_format_string(name) && !matches!(value, Arg::Axes(..)) =>
            {
                cut -= 2
            }
            _ => break,
        }
    }
    let kwargs = args[cut..]
        .chunks(2)
        .map(|pair| {
            let name = match &pair[0] {
                Arg::Str(s) => s.clone(),
                _ => unreachable!("kwarg names are strings by construction"),
            };
            (name, pair[1].to_prop_value())
        })
        .collect();
    (&args[..cut], kwargs)
}

/// Peel a leading axis handle off a call; commands redirect to it
/// instead of the current axis.
pub fn take_axes(args: &[Arg]) -> (Option<(u32, usize)>, &[Arg]) {
    match args.first() {
        Some(Arg::Axes(figure, cell)) => (Some((*figure, *cell)), &args[1..]),
        _ => (None, args),
    }
}

/// Pull the `indexing` keyword out of a kwarg list, leaving the rest
/// for the property merge.
pub fn take_indexing(kwargs: &mut Vec<(String, PropValue)>) -> Result<Indexing> {
    let Some(pos) = kwargs
        .iter()
        .position(|(name, _)| name.eq_ignore_ascii_case("indexing"))
    else {
        return Ok(Indexing::default());
    };
    let (_, value) = kwargs.remove(pos);
    match value.as_str() {
        Some("ij") => Ok(Indexing::Ij),
        Some("xy") => Ok(Indexing::Xy),
        _ => Err(PlotError::BadValue {
            name: "indexing".into(),
            reason: format!("expected `ij` or `xy`, got `{value}`"),
        }),
    }
}

/// Transpose a matrix or volume grid so its first index varies along x.
fn to_ij(a: &Array) -> Array {
    match a.shape.len() {
        0 | 1 => a.clone(),
        2 => a.transposed(),
        _ => {
            // swap the first two dimensions page by page
            let (m, n, p) = (a.rows(), a.cols(), a.pages());
            let mut data = vec![0.0; m * n * p];
            for page in 0..p {
                for r in 0..m {
                    for c in 0..n {
                        data[c + r * n + page * m * n] = a.get3(r, c, page);
                    }
                }
            }
            Array {
                shape: vec![n, m, p],
                data,
            }
        }
    }
}

/// Apply the indexing convention: under `xy` every matrix-valued grid
/// argument is transposed so the rest of the pipeline is ij-only.
pub fn resolve_indexing(indexing: Indexing, grids: &mut [&mut Array]) {
    if indexing == Indexing::Ij {
        return;
    }
    for grid in grids {
        **grid = to_ij(grid);
    }
}

/// Parsed curve group: the data triple plus its format spec.
#[derive(Debug, Clone)]
pub struct CurveGroup {
    pub x: Array,
    pub y: Array,
    pub z: Option<Array>,
    pub spec: LineSpec,
}

impl CurveGroup {
    pub fn into_line(self) -> Result<Line> {
        Line::build(self.x, self.y, self.z, self.spec)
    }
}

/// Parse the repeated curve grammar
/// `item := y | y fmt | x y | x y fmt [| x y z | x y z fmt]`,
/// with the three-array form enabled for `dims == 3` callers. A lone
/// `y` gets a synthesized `0..n-1` abscissa.
pub fn parse_curves(args: &[Arg], dims: usize) -> Result<Vec<CurveGroup>> {
    debug_assert!(dims == 2 || dims == 3);
    if args.is_empty() {
        return Err(PlotError::BadValue {
            name: "plot".into(),
            reason: "at least one data array is required".into(),
        });
    }
    let mut groups = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let mut arrays: Vec<Array> = Vec::new();
        while i < args.len() && arrays.len() < dims {
            match &args[i] {
                Arg::Array(a) => {
                    arrays.push(a.clone());
                    i += 1;
                }
                _ => break,
            }
        }
        let spec = match args.get(i) {
            Some(Arg::Str(s)) => {
                i += 1;
                LineSpec::parse(s)?
            }
            Some(other) if arrays.is_empty() => {
                return Err(PlotError::BadValue {
                    name: "plot".into(),
                    reason: format!("expected a data array, got a {}", other.kind()),
                });
            }
            _ => LineSpec::default(),
        };
        let group = match arrays.len() {
            1 => {
                let y = arrays.pop().expect("one array");
                CurveGroup {
                    x: Array::range_for(y.len()),
                    y,
                    z: None,
                    spec,
                }
            }
            2 => {
                let y = arrays.pop().expect("two arrays");
                let x = arrays.pop().expect("two arrays");
                CurveGroup { x, y, z: None, spec }
            }
            3 => {
                let z = arrays.pop().expect("three arrays");
                let y = arrays.pop().expect("three arrays");
                let x = arrays.pop().expect("three arrays");
                CurveGroup {
                    x,
                    y,
                    z: Some(z),
                    spec,
                }
            }
            _ => {
                return Err(PlotError::BadValue {
                    name: "plot".into(),
                    reason: "trailing format string without data".into(),
                })
            }
        };
        groups.push(group);
    }
    Ok(groups)
}

/// Grid-call positional forms: `z`, `x y z`, or `x y z c`.
#[derive(Debug, Clone)]
pub struct GridGroup {
    pub x: Option<Array>,
    pub y: Option<Array>,
    pub z: Array,
    pub color: Option<Array>,
}

pub fn parse_grid(args: &[Arg], command: &'static str) -> Result<GridGroup> {
    let arrays = expect_arrays(args, command)?;
    match arrays.len() {
        1 => Ok(GridGroup {
            x: None,
            y: None,
            z: arrays[0].clone(),
            color: None,
        }),
        3 => Ok(GridGroup {
            x: Some(arrays[0].clone()),
            y: Some(arrays[1].clone()),
            z: arrays[2].clone(),
            color: None,
        }),
        4 => Ok(GridGroup {
            x: Some(arrays[0].clone()),
            y: Some(arrays[1].clone()),
            z: arrays[2].clone(),
            color: Some(arrays[3].clone()),
        }),
        n => Err(PlotError::BadValue {
            name: command.into(),
            reason: format!("expected z, x y z, or x y z c arrays, got {n} arrays"),
        }),
    }
}

/// Vector-field positional forms: `u v`, `x y u v`, or
/// `x y z u v w`, with an optional trailing arrow-scale number and
/// format string.
#[derive(Debug, Clone)]
pub struct FieldGroup {
    pub coords: Vec<Array>,
    pub components: Vec<Array>,
    pub scale: f64,
    pub spec: LineSpec,
}

impl FieldGroup {
    pub fn dims(&self) -> usize {
        self.components.len()
    }
}

pub fn parse_field(args: &[Arg], command: &'static str) -> Result<FieldGroup> {
    let mut i = 0;
    let mut arrays: Vec<Array> = Vec::new();
    while let Some(Arg::Array(a)) = args.get(i) {
        arrays.push(a.clone());
        i += 1;
    }
    let mut scale = 1.0;
    if let Some(Arg::Num(s)) = args.get(i) {
        scale = *s;
        i += 1;
    }
    let mut spec = LineSpec::default();
    if let Some(Arg::Str(s)) = args.get(i) {
        spec = LineSpec::parse(s)?;
        i += 1;
    }
    if i != args.len() {
        return Err(PlotError::BadValue {
            name: command.into(),
            reason: format!("unexpected trailing {}", args[i].kind()),
        });
    }
    let (coords, components) = match arrays.len() {
        2 => (Vec::new(), arrays),
        4 => {
            let components = arrays.split_off(2);
            (arrays, components)
        }
        6 => {
            let components = arrays.split_off(3);
            (arrays, components)
        }
        n => {
            return Err(PlotError::BadValue {
                name: command.into(),
                reason: format!("expected u v, x y u v, or x y z u v w arrays, got {n} arrays"),
            })
        }
    };
    Ok(FieldGroup {
        coords,
        components,
        scale,
        spec,
    })
}

fn expect_arrays<'a>(args: &'a [Arg], command: &'static str) -> Result<Vec<&'a Array>> {
    args.iter()
        .map(|arg| match arg {
            Arg::Array(a) => Ok(a),
            other => Err(PlotError::BadValue {
                name: command.into(),
                reason: format!("expected a data array, got a {}", other.kind()),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn arr(data: Vec<f64>) -> Arg {
        Arg::Array(Array::vector(data))
    }

    #[test]
    fn lone_y_synthesizes_x() {
        let groups = parse_curves(&[arr(vec![5.0, 6.0, 7.0])], 2).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].x.data, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn repeated_curve_groups_with_formats() {
        let args = vec![
            arr(vec![1.0, 2.0]),
            arr(vec![3.0, 4.0]),
            Arg::from("r-"),
            arr(vec![5.0, 6.0]),
        ];
        let groups = parse_curves(&args, 2).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].spec.color, Some(Color::Red));
        assert_eq!(groups[1].spec, LineSpec::default());
        // second lone-y group got a synthesized abscissa
        assert_eq!(groups[1].x.data, vec![0.0, 1.0]);
    }

    #[test]
    fn three_array_groups_only_for_3d() {
        let args = vec![
            arr(vec![1.0, 2.0]),
            arr(vec![3.0, 4.0]),
            arr(vec![5.0, 6.0]),
        ];
        let g3 = parse_curves(&args, 3).unwrap();
        assert_eq!(g3.len(), 1);
        assert!(g3[0].z.is_some());
        // in 2D the same args read as x,y plus a lone y
        let g2 = parse_curves(&args, 2).unwrap();
        assert_eq!(g2.len(), 2);
        assert!(g2.iter().all(|g| g.z.is_none()));
    }

    #[test]
    fn kwargs_split_off_the_tail() {
        let args = vec![
            arr(vec![1.0, 2.0]),
            Arg::from("r-"),
            Arg::from("linewidth"),
            Arg::Num(2.0),
            Arg::from("label"),
            Arg::from("measured"),
        ];
        let (positional, kwargs) = split_kwargs(&args);
        assert_eq!(positional.len(), 2);
        assert_eq!(kwargs.len(), 2);
        assert_eq!(kwargs[0], ("linewidth".to_string(), PropValue::Num(2.0)));
        assert_eq!(
            kwargs[1],
            ("label".to_string(), PropValue::Str("measured".into()))
        );
    }

    #[test]
    fn format_strings_are_not_kwarg_names() {
        // `plot(y, "r-")`: the format must stay positional
        let args = vec![arr(vec![1.0, 2.0]), Arg::from("r-")];
        let (positional, kwargs) = split_kwargs(&args);
        assert_eq!(positional.len(), 2);
        assert!(kwargs.is_empty());
    }

    #[test]
    fn leading_axes_handle_peels_off() {
        let args = vec![Arg::from((2_u32, 3_usize)), arr(vec![1.0])];
        let (target, rest) = take_axes(&args);
        assert_eq!(target, Some((2, 3)));
        assert_eq!(rest.len(), 1);
        let (none, same) = take_axes(rest);
        assert_eq!(none, None);
        assert_eq!(same.len(), 1);
    }

    #[test]
    fn axes_handles_never_read_as_keyword_values() {
        let args = vec![
            arr(vec![1.0]),
            Arg::from("label"),
            Arg::from((1_u32, 1_usize)),
        ];
        let (positional, kwargs) = split_kwargs(&args);
        assert_eq!(positional.len(), 3);
        assert!(kwargs.is_empty());
    }

    #[test]
    fn indexing_kwarg_is_consumed() {
        let mut kwargs = vec![
            ("linewidth".to_string(), PropValue::Num(2.0)),
            ("indexing".to_string(), PropValue::Str("xy".into())),
        ];
        assert_eq!(take_indexing(&mut kwargs).unwrap(), Indexing::Xy);
        assert_eq!(kwargs.len(), 1);
        assert!(matches!(
            take_indexing(&mut vec![(
                "indexing".to_string(),
                PropValue::Str("weird".into())
            )]),
            Err(PlotError::BadValue { .. })
        ));
    }

    #[test]
    fn xy_indexing_transposes_grids() {
        let mut z = Array::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        resolve_indexing(Indexing::Xy, &mut [&mut z]);
        assert_eq!(z.shape, vec![3, 2]);
        assert_eq!(z.get2(2, 1), 6.0);

        let mut same = Array::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let copy = same.clone();
        resolve_indexing(Indexing::Ij, &mut [&mut same]);
        assert_eq!(same, copy);
    }

    #[test]
    fn field_forms() {
        let u = arr(vec![1.0, 2.0]);
        let f = parse_field(&[u.clone(), u.clone()], "quiver").unwrap();
        assert_eq!(f.dims(), 2);
        assert!(f.coords.is_empty());

        let f = parse_field(
            &[u.clone(), u.clone(), u.clone(), u.clone(), Arg::Num(0.5)],
            "quiver",
        )
        .unwrap();
        assert_eq!(f.coords.len(), 2);
        assert_eq!(f.scale, 0.5);

        assert!(parse_field(&[u.clone(), u.clone(), u], "quiver").is_err());
    }

    #[test]
    fn grid_forms() {
        let z = Arg::Array(Array::zeros(&[2, 2]));
        let g = parse_grid(&[z.clone()], "surf").unwrap();
        assert!(g.x.is_none());
        let g = parse_grid(&[z.clone(), z.clone(), z.clone(), z.clone()], "surf").unwrap();
        assert!(g.color.is_some());
        assert!(parse_grid(&[z.clone(), z], "surf").is_err());
    }
}
