//! A headless backend that records every contract call.
//!
//! Used by the test suite and by scripts that only need hardcopies:
//! rendering is a no-op, hardcopy writes a small placeholder file, and
//! the call log is reachable through `raw_handle` downcasting.

use std::any::Any;
use std::fs;
use std::path::{Path, PathBuf};

use crate::axes::Axis;
use crate::backend::{replay, Backend, Capabilities, HardcopyFormat};
use crate::error::{PlotError, Result};
use crate::figure::Figure;
use crate::items::{ItemKind, PlotItem};

/// One recorded contract call.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    OpenFigure(u32),
    CloseFigure(u32),
    ApplyAxis {
        figure: u32,
        axis: usize,
    },
    RenderItem {
        figure: u32,
        axis: usize,
        kind: ItemKind,
    },
    Hardcopy {
        figure: u32,
        path: PathBuf,
        format: HardcopyFormat,
    },
}

#[derive(Debug)]
pub struct RecordBackend {
    capabilities: Capabilities,
    calls: Vec<RecordedCall>,
}

impl Default for RecordBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBackend {
    /// Fully capable recorder: 3D, isosurfaces, every hardcopy format.
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities {
            supports_3d: true,
            supports_isosurface: true,
            formats: HardcopyFormat::ALL.to_vec(),
        })
    }

    /// Recorder with restricted capabilities, for exercising the
    /// session's capability handling.
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Item kinds rendered so far, in call order.
    pub fn rendered_kinds(&self) -> Vec<ItemKind> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RecordedCall::RenderItem { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }
}

impl Backend for RecordBackend {
    fn name(&self) -> &str {
        "record"
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities.clone()
    }

    fn open_figure(&mut self, fig: &Figure) -> Result<()> {
        self.calls.push(RecordedCall::OpenFigure(fig.handle()));
        Ok(())
    }

    fn close_figure(&mut self, handle: u32) -> Result<()> {
        self.calls.push(RecordedCall::CloseFigure(handle));
        Ok(())
    }

    fn apply_axis(&mut self, handle: u32, axis_index: usize, _axis: &Axis) -> Result<()> {
        self.calls.push(RecordedCall::ApplyAxis {
            figure: handle,
            axis: axis_index,
        });
        Ok(())
    }

    fn render_item(&mut self, handle: u32, axis_index: usize, item: &PlotItem) -> Result<()> {
        self.calls.push(RecordedCall::RenderItem {
            figure: handle,
            axis: axis_index,
            kind: item.kind(),
        });
        Ok(())
    }

    fn replot(&mut self, fig: &Figure) -> Result<()> {
        replay(self, fig)
    }

    fn hardcopy(&mut self, fig: &Figure, path: &Path, format: HardcopyFormat) -> Result<()> {
        if !self.capabilities.supports_format(format) {
            return Err(PlotError::unsupported(
                self.name(),
                format!("hardcopy format {format}"),
            ));
        }
        let body = format!(
            "multiplot record hardcopy: figure {} as {format}\n",
            fig.handle()
        );
        fs::write(path, body).map_err(|e| {
            PlotError::backend(self.name(), format!("hardcopy to {}", path.display()), e)
        })?;
        self.calls.push(RecordedCall::Hardcopy {
            figure: fig.handle(),
            path: path.to_path_buf(),
            format,
        });
        Ok(())
    }

    fn raw_handle(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_figure_lifecycle() {
        let mut b = RecordBackend::new();
        let fig = Figure::new(1);
        b.open_figure(&fig).unwrap();
        b.replot(&fig).unwrap();
        b.close_figure(1).unwrap();
        assert_eq!(b.calls()[0], RecordedCall::OpenFigure(1));
        assert!(matches!(
            b.calls()[1],
            RecordedCall::ApplyAxis { figure: 1, axis: 0 }
        ));
        assert_eq!(*b.calls().last().unwrap(), RecordedCall::CloseFigure(1));
    }

    #[test]
    fn hardcopy_writes_placeholder_bytes() {
        let mut b = RecordBackend::new();
        let fig = Figure::new(2);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        b.hardcopy(&fig, &path, HardcopyFormat::Png).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn unsupported_format_is_rejected() {
        let mut b = RecordBackend::with_capabilities(Capabilities {
            supports_3d: true,
            supports_isosurface: true,
            formats: vec![HardcopyFormat::Png],
        });
        let fig = Figure::new(1);
        let err = b
            .hardcopy(&fig, Path::new("/tmp/never-written.pdf"), HardcopyFormat::Pdf)
            .unwrap_err();
        assert!(matches!(err, PlotError::Unsupported { .. }));
    }

    #[test]
    fn downcast_through_raw_handle() {
        let b: Box<dyn Backend> = Box::new(RecordBackend::new());
        let raw = b.raw_handle().unwrap();
        assert!(raw.downcast_ref::<RecordBackend>().is_some());
    }
}
