//! MATLAB-style format-string parsing.
//!
//! One pure parser owns every character test; call sites receive a
//! tagged [`LineSpec`] record and never inspect style strings
//! themselves.

use glam::Vec4;

use crate::error::{PlotError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
}

impl Color {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Color::Blue),
            'g' => Some(Color::Green),
            'r' => Some(Color::Red),
            'c' => Some(Color::Cyan),
            'm' => Some(Color::Magenta),
            'y' => Some(Color::Yellow),
            'k' => Some(Color::Black),
            'w' => Some(Color::White),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::Red => 'r',
            Color::Cyan => 'c',
            Color::Magenta => 'm',
            Color::Yellow => 'y',
            Color::Black => 'k',
            Color::White => 'w',
        }
    }

    pub fn rgba(self) -> Vec4 {
        match self {
            Color::Red => Vec4::new(1.0, 0.0, 0.0, 1.0),
            Color::Green => Vec4::new(0.0, 1.0, 0.0, 1.0),
            Color::Blue => Vec4::new(0.0, 0.0, 1.0, 1.0),
            Color::Cyan => Vec4::new(0.0, 1.0, 1.0, 1.0),
            Color::Magenta => Vec4::new(1.0, 0.0, 1.0, 1.0),
            Color::Yellow => Vec4::new(1.0, 1.0, 0.0, 1.0),
            Color::Black => Vec4::new(0.0, 0.0, 0.0, 1.0),
            Color::White => Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Point,
    Circle,
    Cross,
    Plus,
    Star,
    Square,
    Diamond,
    TriangleDown,
    TriangleUp,
    TriangleLeft,
    TriangleRight,
    Pentagram,
    Hexagram,
}

impl Marker {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Marker::Point),
            'o' => Some(Marker::Circle),
            'x' => Some(Marker::Cross),
            '+' => Some(Marker::Plus),
            '*' => Some(Marker::Star),
            's' => Some(Marker::Square),
            'd' => Some(Marker::Diamond),
            'v' => Some(Marker::TriangleDown),
            '^' => Some(Marker::TriangleUp),
            '<' => Some(Marker::TriangleLeft),
            '>' => Some(Marker::TriangleRight),
            'p' => Some(Marker::Pentagram),
            'h' => Some(Marker::Hexagram),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Marker::Point => '.',
            Marker::Circle => 'o',
            Marker::Cross => 'x',
            Marker::Plus => '+',
            Marker::Star => '*',
            Marker::Square => 's',
            Marker::Diamond => 'd',
            Marker::TriangleDown => 'v',
            Marker::TriangleUp => '^',
            Marker::TriangleLeft => '<',
            Marker::TriangleRight => '>',
            Marker::Pentagram => 'p',
            Marker::Hexagram => 'h',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

impl LineStyle {
    pub fn token(self) -> &'static str {
        match self {
            LineStyle::Solid => "-",
            LineStyle::Dashed => "--",
            LineStyle::DashDot => "-.",
            LineStyle::Dotted => ":",
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "-" => Some(LineStyle::Solid),
            "--" => Some(LineStyle::Dashed),
            "-." => Some(LineStyle::DashDot),
            ":" => Some(LineStyle::Dotted),
            _ => None,
        }
    }
}

/// Parsed style record: any attribute may be absent, in which case the
/// owning axis supplies the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSpec {
    pub color: Option<Color>,
    pub marker: Option<Marker>,
    pub line_style: Option<LineStyle>,
    /// Single digit 1..=9 from the format string.
    pub width: Option<u8>,
    pub filled: bool,
}

impl LineSpec {
    /// Longest-token left-to-right scan over the closed token sets.
    /// Unmatched residue rejects the whole string.
    pub fn parse(input: &str) -> Result<LineSpec> {
        let mut spec = LineSpec::default();
        let chars: Vec<char> = input.chars().collect();
        let mut i = 0usize;
        while i < chars.len() {
            // literal `filled` flag, consumed greedily before the
            // single-char sets so the leading `f` never misparses
            if chars[i..].starts_with(&['f', 'i', 'l', 'l', 'e', 'd']) {
                spec.filled = true;
                i += 6;
                continue;
            }
            let c = chars[i];
            if c == '-' {
                // `--` and `-.` win over `-` (longest match)
                if chars.get(i + 1) == Some(&'-') {
                    spec.line_style = Some(LineStyle::Dashed);
                    i += 2;
                } else if chars.get(i + 1) == Some(&'.') {
                    spec.line_style = Some(LineStyle::DashDot);
                    i += 2;
                } else {
                    spec.line_style = Some(LineStyle::Solid);
                    i += 1;
                }
                continue;
            }
            if c == ':' {
                spec.line_style = Some(LineStyle::Dotted);
                i += 1;
                continue;
            }
            if let Some(color) = Color::from_char(c) {
                spec.color = Some(color);
                i += 1;
                continue;
            }
            if let Some(marker) = Marker::from_char(c) {
                spec.marker = Some(marker);
                i += 1;
                continue;
            }
            if let Some(d) = c.to_digit(10) {
                if (1..=9).contains(&d) {
                    spec.width = Some(d as u8);
                    i += 1;
                    continue;
                }
            }
            return Err(PlotError::BadFormat(input.to_string()));
        }
        Ok(spec)
    }

    /// Whether the string parses as a format string at all; the
    /// dispatcher uses this to tell `fmt` tokens from keyword names.
    pub fn is_format_string(input: &str) -> bool {
        !input.is_empty() && LineSpec::parse(input).is_ok()
    }

    /// Reserialize in canonical order: color, line style, marker,
    /// width, `filled`. Parsing the result reproduces the record.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        if let Some(color) = self.color {
            out.push(color.as_char());
        }
        if let Some(style) = self.line_style {
            out.push_str(style.token());
        }
        if let Some(marker) = self.marker {
            out.push(marker.as_char());
        }
        if let Some(width) = self.width {
            out.push(char::from_digit(width as u32, 10).expect("width is 1..=9"));
        }
        if self.filled {
            out.push_str("filled");
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        *self == LineSpec::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_forms() {
        let s = LineSpec::parse("r-o").unwrap();
        assert_eq!(s.color, Some(Color::Red));
        assert_eq!(s.line_style, Some(LineStyle::Solid));
        assert_eq!(s.marker, Some(Marker::Circle));

        let s = LineSpec::parse("b--2").unwrap();
        assert_eq!(s.color, Some(Color::Blue));
        assert_eq!(s.line_style, Some(LineStyle::Dashed));
        assert_eq!(s.width, Some(2));

        let s = LineSpec::parse("k:d").unwrap();
        assert_eq!(s.line_style, Some(LineStyle::Dotted));
        assert_eq!(s.marker, Some(Marker::Diamond));

        let s = LineSpec::parse("y3").unwrap();
        assert_eq!(s.color, Some(Color::Yellow));
        assert_eq!(s.width, Some(3));
        assert_eq!(s.line_style, None);
    }

    #[test]
    fn dash_dot_prefers_longest_token() {
        let s = LineSpec::parse("-.").unwrap();
        assert_eq!(s.line_style, Some(LineStyle::DashDot));
        assert_eq!(s.marker, None);
        // `-` then `.` marker requires the marker first
        let s = LineSpec::parse(".-").unwrap();
        assert_eq!(s.marker, Some(Marker::Point));
        assert_eq!(s.line_style, Some(LineStyle::Solid));
    }

    #[test]
    fn filled_flag() {
        let s = LineSpec::parse("filled").unwrap();
        assert!(s.filled);
        let s = LineSpec::parse("rofilled").unwrap();
        assert!(s.filled);
        assert_eq!(s.color, Some(Color::Red));
        assert_eq!(s.marker, Some(Marker::Circle));
    }

    #[test]
    fn residue_rejects() {
        assert!(LineSpec::parse("q").is_err());
        assert!(LineSpec::parse("r-q").is_err());
        assert!(LineSpec::parse("r0").is_err());
        assert!(LineSpec::parse("fill").is_err());
        assert!(!LineSpec::is_format_string("linewidth"));
        assert!(!LineSpec::is_format_string(""));
    }

    #[test]
    fn canonical_round_trip() {
        for input in ["r-o", "b--2", "k:d", "y3", "filled", "go-.4", "<m", "w", ":"] {
            let parsed = LineSpec::parse(input).unwrap();
            let reparsed = LineSpec::parse(&parsed.canonical()).unwrap();
            assert_eq!(parsed, reparsed, "round trip failed for `{input}`");
        }
    }
}
