//! The abstract rendering-backend contract.
//!
//! Backends are adapters around a concrete plotting engine. The core
//! drives them through this narrow trait and never assumes anything
//! about the engine underneath; a backend that cannot honor a request
//! reports it through its capabilities and the session decides whether
//! that is fatal.

use std::any::Any;
use std::fmt;
use std::path::Path;

use crate::axes::Axis;
use crate::error::{PlotError, Result};
use crate::figure::Figure;
use crate::items::PlotItem;

/// What a backend can do; the session consults this before handing
/// items over.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub supports_3d: bool,
    pub supports_isosurface: bool,
    /// Hardcopy formats the backend can write.
    pub formats: Vec<HardcopyFormat>,
}

impl Capabilities {
    pub fn supports_format(&self, format: HardcopyFormat) -> bool {
        self.formats.contains(&format)
    }
}

/// Hardcopy output format, derived from the target file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HardcopyFormat {
    Eps,
    Ps,
    Pdf,
    Png,
    Svg,
    Jpeg,
    Gif,
}

impl HardcopyFormat {
    pub const ALL: &'static [HardcopyFormat] = &[
        HardcopyFormat::Eps,
        HardcopyFormat::Ps,
        HardcopyFormat::Pdf,
        HardcopyFormat::Png,
        HardcopyFormat::Svg,
        HardcopyFormat::Jpeg,
        HardcopyFormat::Gif,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            HardcopyFormat::Eps => "eps",
            HardcopyFormat::Ps => "ps",
            HardcopyFormat::Pdf => "pdf",
            HardcopyFormat::Png => "png",
            HardcopyFormat::Svg => "svg",
            HardcopyFormat::Jpeg => "jpg",
            HardcopyFormat::Gif => "gif",
        }
    }

    /// Format from a path's extension; unrecognized extensions are a
    /// configuration error.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "eps" => Ok(HardcopyFormat::Eps),
            "ps" => Ok(HardcopyFormat::Ps),
            "pdf" => Ok(HardcopyFormat::Pdf),
            "png" => Ok(HardcopyFormat::Png),
            "svg" => Ok(HardcopyFormat::Svg),
            "jpg" | "jpeg" => Ok(HardcopyFormat::Jpeg),
            "gif" => Ok(HardcopyFormat::Gif),
            other => Err(PlotError::config(format!(
                "cannot infer hardcopy format from `{}` (extension `{other}`)",
                path.display()
            ))),
        }
    }
}

impl fmt::Display for HardcopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The adapter contract every rendering backend implements. Backends
/// must be `Send`: the default session lives behind a process-wide
/// lock.
pub trait Backend: Send {
    fn name(&self) -> &str;

    fn capabilities(&self) -> Capabilities;

    /// A figure became visible to this backend (created or re-adopted
    /// after a backend switch).
    fn open_figure(&mut self, fig: &Figure) -> Result<()>;

    fn close_figure(&mut self, handle: u32) -> Result<()>;

    /// Apply axis presentation state (limits, labels, view, legend)
    /// ahead of the axis' items.
    fn apply_axis(&mut self, handle: u32, axis_index: usize, axis: &Axis) -> Result<()>;

    fn render_item(&mut self, handle: u32, axis_index: usize, item: &PlotItem) -> Result<()>;

    /// Clear-and-re-render the whole figure. The default walks every
    /// axis through [`apply_axis`](Backend::apply_axis) and
    /// [`render_item`](Backend::render_item).
    fn replot(&mut self, fig: &Figure) -> Result<()> {
        replay(self, fig)
    }

    fn hardcopy(&mut self, fig: &Figure, path: &Path, format: HardcopyFormat) -> Result<()>;

    /// Escape hatch to the engine-specific object for callers that know
    /// which backend is active.
    fn raw_handle(&self) -> Option<&dyn Any> {
        None
    }
}

/// Drive a full figure replay through a backend: per axis, apply the
/// presentation state and then render each item in insertion order.
pub fn replay<B: Backend + ?Sized>(backend: &mut B, fig: &Figure) -> Result<()> {
    for (k, axis) in fig.axes().iter().enumerate() {
        backend.apply_axis(fig.handle(), k, axis)?;
        for item in axis.items() {
            backend.render_item(fig.handle(), k, item)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            HardcopyFormat::from_path(Path::new("out.png")).unwrap(),
            HardcopyFormat::Png
        );
        assert_eq!(
            HardcopyFormat::from_path(Path::new("Fig.EPS")).unwrap(),
            HardcopyFormat::Eps
        );
        assert_eq!(
            HardcopyFormat::from_path(&PathBuf::from("photo.jpeg")).unwrap(),
            HardcopyFormat::Jpeg
        );
        assert!(matches!(
            HardcopyFormat::from_path(Path::new("noext")),
            Err(PlotError::Config(_))
        ));
        assert!(HardcopyFormat::from_path(Path::new("a.bmp")).is_err());
    }

    #[test]
    fn capability_format_check() {
        let caps = Capabilities {
            supports_3d: true,
            supports_isosurface: false,
            formats: vec![HardcopyFormat::Png, HardcopyFormat::Svg],
        };
        assert!(caps.supports_format(HardcopyFormat::Png));
        assert!(!caps.supports_format(HardcopyFormat::Pdf));
    }
}
