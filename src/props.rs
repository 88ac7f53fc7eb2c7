//! Schema-bounded property bags.
//!
//! Every scene-graph entity carries one of these: a fixed set of
//! recognized names, each with a default, a validator, and a help
//! string. Unknown names are rejected at set time, never silently
//! stored.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{PlotError, Result};

/// A property value. Booleans also accept the MATLAB-style `"on"` /
/// `"off"` strings at the validator level.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Num(f64),
    Bool(bool),
    Str(String),
    Pair(f64, f64),
    Tuple(Vec<f64>),
    StrList(Vec<String>),
}

impl PropValue {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            PropValue::Num(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            PropValue::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                "on" | "true" => Some(true),
                "off" | "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            PropValue::Pair(a, b) => Some((*a, *b)),
            PropValue::Tuple(t) if t.len() == 2 => Some((t[0], t[1])),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Num(v) => write!(f, "{v}"),
            PropValue::Bool(b) => write!(f, "{}", if *b { "on" } else { "off" }),
            PropValue::Str(s) => write!(f, "{s}"),
            PropValue::Pair(a, b) => write!(f, "[{a}, {b}]"),
            PropValue::Tuple(t) => {
                write!(f, "[")?;
                for (i, v) in t.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            PropValue::StrList(l) => write!(f, "{{{}}}", l.join(", ")),
        }
    }
}

/// What a schema entry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    NumericScalar,
    PositiveScalar,
    /// A finite `(lo, hi)` pair with `lo <= hi`.
    FiniteRangePair,
    NTuple(usize),
    OneOf(&'static [&'static str]),
    /// Boolean, also accepting `"on"` / `"off"`.
    Flag,
    AnyString,
    Any,
}

impl Validator {
    fn check(&self, value: &PropValue) -> std::result::Result<(), String> {
        match self {
            Validator::NumericScalar => match value {
                PropValue::Num(_) => Ok(()),
                _ => Err("expected a numeric scalar".into()),
            },
            Validator::PositiveScalar => match value {
                PropValue::Num(v) if *v > 0.0 => Ok(()),
                PropValue::Num(_) => Err("expected a positive number".into()),
                _ => Err("expected a numeric scalar".into()),
            },
            Validator::FiniteRangePair => match value.as_pair() {
                Some((lo, hi)) if lo.is_finite() && hi.is_finite() && lo <= hi => Ok(()),
                Some(_) => Err("expected a finite [lo, hi] pair with lo <= hi".into()),
                None => Err("expected a [lo, hi] pair".into()),
            },
            Validator::NTuple(n) => match value {
                PropValue::Tuple(t) if t.len() == *n => Ok(()),
                _ => Err(format!("expected a tuple of {n} numbers")),
            },
            Validator::OneOf(choices) => match value.as_str() {
                Some(s) if choices.contains(&s) => Ok(()),
                Some(s) => Err(format!(
                    "`{s}` is not one of {}",
                    choices
                        .iter()
                        .map(|c| format!("`{c}`"))
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
                None => Err("expected a string".into()),
            },
            Validator::Flag => match value.as_bool() {
                Some(_) => Ok(()),
                None => Err("expected a boolean or 'on'/'off'".into()),
            },
            Validator::AnyString => match value {
                PropValue::Str(_) | PropValue::StrList(_) => Ok(()),
                _ => Err("expected a string".into()),
            },
            Validator::Any => Ok(()),
        }
    }
}

/// Schema entry: default value, validator, one-line help.
#[derive(Debug, Clone)]
pub struct PropSpec {
    pub default: PropValue,
    pub validator: Validator,
    pub help: &'static str,
}

impl PropSpec {
    pub fn new(default: PropValue, validator: Validator, help: &'static str) -> Self {
        Self {
            default,
            validator,
            help,
        }
    }
}

/// A declared schema: a named, ordered table of property specs.
#[derive(Debug, Clone)]
pub struct Schema {
    pub scope: &'static str,
    entries: BTreeMap<&'static str, PropSpec>,
}

impl Schema {
    pub fn new(scope: &'static str, entries: Vec<(&'static str, PropSpec)>) -> Self {
        Self {
            scope,
            entries: entries.into_iter().collect(),
        }
    }

    /// Schema extension: the child keeps all parent entries and adds or
    /// overrides its own. Used so an axis bag embeds the item-common
    /// keys.
    pub fn extend(&self, scope: &'static str, entries: Vec<(&'static str, PropSpec)>) -> Self {
        let mut merged = self.entries.clone();
        for (name, spec) in entries {
            merged.insert(name, spec);
        }
        Self {
            scope,
            entries: merged,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn spec(&self, name: &str) -> Option<&PropSpec> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

/// Typed, defaulted, validated key/value store over a fixed [`Schema`].
#[derive(Debug, Clone)]
pub struct PropertyBag {
    schema: &'static Schema,
    values: BTreeMap<&'static str, PropValue>,
}

impl PropertyBag {
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: BTreeMap::new(),
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    fn canonical_name(&self, name: &str) -> Result<&'static str> {
        self.schema
            .names()
            .find(|n| n.eq_ignore_ascii_case(name))
            .ok_or_else(|| PlotError::UnknownKey {
                scope: self.schema.scope,
                name: name.to_string(),
            })
    }

    /// Stored value, or the schema default when unset.
    pub fn get(&self, name: &str) -> Result<PropValue> {
        let key = self.canonical_name(name)?;
        if let Some(v) = self.values.get(key) {
            return Ok(v.clone());
        }
        Ok(self
            .schema
            .spec(key)
            .expect("canonical name resolves")
            .default
            .clone())
    }

    /// True when the caller has assigned this key (as opposed to the
    /// default applying).
    pub fn is_set(&self, name: &str) -> bool {
        self.canonical_name(name)
            .map(|key| self.values.contains_key(key))
            .unwrap_or(false)
    }

    pub fn set(&mut self, name: &str, value: PropValue) -> Result<()> {
        let key = self.canonical_name(name)?;
        let spec = self.schema.spec(key).expect("canonical name resolves");
        spec.validator
            .check(&value)
            .map_err(|reason| PlotError::BadValue {
                name: key.to_string(),
                reason,
            })?;
        self.values.insert(key, value);
        Ok(())
    }

    /// Atomic multi-assignment: every pair is validated before any is
    /// applied, so a rejected value leaves the bag untouched.
    pub fn set_many<'a, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, PropValue)>,
    {
        let mut staged: Vec<(&'static str, PropValue)> = Vec::new();
        for (name, value) in pairs {
            let key = self.canonical_name(name)?;
            let spec = self.schema.spec(key).expect("canonical name resolves");
            spec.validator
                .check(&value)
                .map_err(|reason| PlotError::BadValue {
                    name: key.to_string(),
                    reason,
                })?;
            staged.push((key, value));
        }
        for (key, value) in staged {
            self.values.insert(key, value);
        }
        Ok(())
    }

    /// Drop a local assignment so the schema default (or an auto rule)
    /// applies again.
    pub fn unset(&mut self, name: &str) -> Result<()> {
        let key = self.canonical_name(name)?;
        self.values.remove(key);
        Ok(())
    }

    /// Copy a key from another bag when the receiver has not set it
    /// locally and its schema recognizes the name. The propagation rule
    /// for axis-level defaults flowing into items before a draw.
    pub fn inherit(&mut self, name: &str, from: &PropertyBag) {
        if self.is_set(name) || !self.schema.contains(name) {
            return;
        }
        if from.is_set(name) {
            if let Ok(value) = from.get(name) {
                let _ = self.set(name, value);
            }
        }
    }

    /// Render the help section the front-end `help` surfaces.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} properties:\n", self.schema.scope));
        for name in self.schema.names() {
            let spec = self.schema.spec(name).expect("listed name resolves");
            out.push_str(&format!(
                "  {name:<16} {} (default: {})\n",
                spec.help, spec.default
            ));
        }
        out
    }

    /// The keys the caller has explicitly assigned.
    pub fn assigned(&self) -> impl Iterator<Item = (&'static str, &PropValue)> + '_ {
        self.values.iter().map(|(k, v)| (*k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static TEST_SCHEMA: Lazy<Schema> = Lazy::new(|| {
        Schema::new(
            "test",
            vec![
                (
                    "linewidth",
                    PropSpec::new(
                        PropValue::Num(1.0),
                        Validator::PositiveScalar,
                        "line width in points",
                    ),
                ),
                (
                    "grid",
                    PropSpec::new(PropValue::Bool(false), Validator::Flag, "grid lines"),
                ),
                (
                    "scale",
                    PropSpec::new(
                        PropValue::Str("linear".into()),
                        Validator::OneOf(&["linear", "log"]),
                        "axis scale",
                    ),
                ),
            ],
        )
    });

    fn bag() -> PropertyBag {
        PropertyBag::new(&TEST_SCHEMA)
    }

    #[test]
    fn get_returns_default_until_set() {
        let mut b = bag();
        assert_eq!(b.get("linewidth").unwrap(), PropValue::Num(1.0));
        b.set("linewidth", PropValue::Num(3.0)).unwrap();
        assert_eq!(b.get("linewidth").unwrap(), PropValue::Num(3.0));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut b = bag();
        assert!(matches!(
            b.set("nope", PropValue::Num(1.0)),
            Err(PlotError::UnknownKey { .. })
        ));
        assert!(matches!(b.get("nope"), Err(PlotError::UnknownKey { .. })));
    }

    #[test]
    fn validator_rejections_name_the_key() {
        let mut b = bag();
        let err = b.set("linewidth", PropValue::Num(-2.0)).unwrap_err();
        assert!(matches!(err, PlotError::BadValue { ref name, .. } if name == "linewidth"));
        let err = b.set("scale", PropValue::Str("cubic".into())).unwrap_err();
        assert!(err.to_string().contains("cubic"));
    }

    #[test]
    fn flag_accepts_on_off_strings() {
        let mut b = bag();
        b.set("grid", PropValue::Str("on".into())).unwrap();
        assert_eq!(b.get("grid").unwrap().as_bool(), Some(true));
    }

    #[test]
    fn set_many_is_atomic() {
        let mut b = bag();
        let err = b.set_many(vec![
            ("linewidth", PropValue::Num(4.0)),
            ("scale", PropValue::Str("bogus".into())),
        ]);
        assert!(err.is_err());
        // first assignment must not have been applied
        assert_eq!(b.get("linewidth").unwrap(), PropValue::Num(1.0));
    }

    #[test]
    fn names_are_case_insensitive() {
        let mut b = bag();
        b.set("LineWidth", PropValue::Num(2.0)).unwrap();
        assert_eq!(b.get("linewidth").unwrap(), PropValue::Num(2.0));
    }

    #[test]
    fn unset_restores_the_default() {
        let mut b = bag();
        b.set("linewidth", PropValue::Num(2.0)).unwrap();
        b.unset("linewidth").unwrap();
        assert!(!b.is_set("linewidth"));
        assert_eq!(b.get("linewidth").unwrap(), PropValue::Num(1.0));
    }

    #[test]
    fn inherit_respects_local_values() {
        let mut parent = bag();
        parent.set("linewidth", PropValue::Num(5.0)).unwrap();
        let mut child = bag();
        child.inherit("linewidth", &parent);
        assert_eq!(child.get("linewidth").unwrap(), PropValue::Num(5.0));

        let mut child2 = bag();
        child2.set("linewidth", PropValue::Num(2.0)).unwrap();
        child2.inherit("linewidth", &parent);
        assert_eq!(child2.get("linewidth").unwrap(), PropValue::Num(2.0));
    }

    #[test]
    fn describe_lists_every_schema_key() {
        let text = bag().describe();
        assert!(text.contains("linewidth"));
        assert!(text.contains("grid"));
        assert!(text.contains("scale"));
    }
}
