//! The plotting session: figure registry, current-target bookkeeping,
//! hold state, the active backend, and the draw/hardcopy pipeline.

use std::collections::BTreeMap;
use std::path::Path;

use log::warn;

use crate::axes::Axis;
use crate::backend::{Backend, HardcopyFormat};
use crate::backends;
use crate::config::Config;
use crate::error::{PlotError, Result};
use crate::figure::Figure;
use crate::items::PlotItem;
use crate::props::PropValue;

pub struct Session {
    figures: BTreeMap<u32, Figure>,
    /// Handle of the current figure; 0 until the first figure exists.
    current: u32,
    /// Session-wide hold default, OR-ed with the per-axis flag.
    hold: bool,
    /// Redraw after every mutating command.
    interactive: bool,
    backend: Box<dyn Backend>,
    config: Config,
}

impl Session {
    /// Session over the backend named in the configuration. An unknown
    /// backend name is fatal.
    pub fn new(config: Config) -> Result<Self> {
        let backend = backends::create(&config.backend)?;
        Ok(Self {
            figures: BTreeMap::new(),
            current: 0,
            hold: false,
            interactive: true,
            backend,
            config,
        })
    }

    /// Session over an externally supplied backend adapter.
    pub fn with_backend(config: Config, backend: Box<dyn Backend>) -> Self {
        Self {
            figures: BTreeMap::new(),
            current: 0,
            hold: false,
            interactive: true,
            backend,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, on: bool) {
        self.interactive = on;
    }

    pub fn figure_handles(&self) -> Vec<u32> {
        self.figures.keys().copied().collect()
    }

    /// Select (creating if needed) a figure. `None` takes the lowest
    /// free handle.
    pub fn figure(&mut self, handle: Option<u32>) -> Result<u32> {
        let handle = match handle {
            Some(0) => {
                return Err(PlotError::BadValue {
                    name: "figure".into(),
                    reason: "figure handles start at 1".into(),
                })
            }
            Some(h) => h,
            None => (1..).find(|h| !self.figures.contains_key(h)).expect("free handle"),
        };
        if !self.figures.contains_key(&handle) {
            let fig = Figure::new(handle);
            self.backend.open_figure(&fig)?;
            self.figures.insert(handle, fig);
        }
        self.current = handle;
        Ok(handle)
    }

    fn ensure_current(&mut self) -> Result<()> {
        if self.current == 0 || !self.figures.contains_key(&self.current) {
            self.figure(Some(1))?;
        }
        Ok(())
    }

    /// Current figure, lazily creating figure 1.
    pub fn gcf(&mut self) -> Result<&mut Figure> {
        self.ensure_current()?;
        Ok(self
            .figures
            .get_mut(&self.current)
            .expect("current figure exists"))
    }

    /// Current axis of the current figure.
    pub fn gca(&mut self) -> Result<&mut Axis> {
        Ok(self.gcf()?.current_axis_mut())
    }

    /// Handle of the current axis: figure handle plus 1-based subplot
    /// cell. Usable as a leading command argument to target this axis
    /// later.
    pub fn current_axes(&mut self) -> Result<(u32, usize)> {
        self.ensure_current()?;
        let fig = self.figures.get(&self.current).expect("current figure");
        Ok((fig.handle(), fig.current_index() + 1))
    }

    /// Redirect to an explicit axis: make its figure and subplot cell
    /// current. The figure must already exist.
    pub fn select_axes(&mut self, figure: u32, cell: usize) -> Result<()> {
        let fig = self
            .figures
            .get_mut(&figure)
            .ok_or_else(|| PlotError::BadValue {
                name: "axes".into(),
                reason: format!("no figure with handle {figure}"),
            })?;
        fig.select_axis(cell)?;
        self.current = figure;
        Ok(())
    }

    /// Subplot selection; same grid shape leaves existing axes alone.
    pub fn subplot(&mut self, rows: usize, cols: usize, k: usize) -> Result<()> {
        self.ensure_current()?;
        let fig = self.figures.get_mut(&self.current).expect("current figure");
        fig.set_grid(rows, cols)?;
        fig.select_axis(k)?;
        Ok(())
    }

    /// Legacy packed form: `subplot(223)` is `subplot(2, 2, 3)`.
    pub fn subplot_packed(&mut self, rck: u32) -> Result<()> {
        if !(111..=999).contains(&rck) {
            return Err(PlotError::BadValue {
                name: "subplot".into(),
                reason: format!("packed form must be three digits, got {rck}"),
            });
        }
        let (r, c, k) = ((rck / 100) as usize, (rck / 10 % 10) as usize, (rck % 10) as usize);
        self.subplot(r, c, k)
    }

    pub fn hold(&mut self, on: bool) -> Result<()> {
        self.hold = on;
        self.gca()?.set_hold(on);
        Ok(())
    }

    /// `hold` without an argument: flip the current axis' flag. The
    /// session-wide default is left alone.
    pub fn toggle_hold(&mut self) -> Result<bool> {
        let axis = self.gca()?;
        let next = !axis.hold();
        axis.set_hold(next);
        Ok(next)
    }

    pub fn is_holding(&mut self) -> Result<bool> {
        let global = self.hold;
        Ok(global || self.gca()?.hold())
    }

    pub fn close(&mut self, handle: Option<u32>) -> Result<()> {
        let handle = match handle {
            Some(h) => h,
            None if self.current != 0 => self.current,
            None => return Ok(()),
        };
        if self.figures.remove(&handle).is_none() {
            return Err(PlotError::BadValue {
                name: "close".into(),
                reason: format!("no figure with handle {handle}"),
            });
        }
        self.backend.close_figure(handle)?;
        if self.current == handle {
            self.current = self.figures.keys().next_back().copied().unwrap_or(0);
        }
        Ok(())
    }

    pub fn close_all(&mut self) -> Result<()> {
        let handles: Vec<u32> = self.figures.keys().copied().collect();
        for handle in handles {
            self.figures.remove(&handle);
            self.backend.close_figure(handle)?;
        }
        self.current = 0;
        Ok(())
    }

    /// Clear the current figure back to one empty axis.
    pub fn clf(&mut self) -> Result<()> {
        self.gcf()?.clear();
        self.draw_if_interactive()
    }

    /// Clear the current axis' items.
    pub fn cla(&mut self) -> Result<()> {
        self.gca()?.clear_items();
        self.draw_if_interactive()
    }

    /// Back to a pristine session: no figures, hold off, defaults kept.
    pub fn reset(&mut self) -> Result<()> {
        self.close_all()?;
        self.hold = false;
        self.interactive = true;
        Ok(())
    }

    /// Property assignment on the current axis, atomic over the pairs.
    pub fn setp<'a, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, PropValue)>,
    {
        self.gca()?.set_props(pairs)?;
        self.draw_if_interactive()
    }

    pub fn getp(&mut self, name: &str) -> Result<PropValue> {
        self.gca()?.get_prop(name)
    }

    /// Switch the active backend by registry name. Existing figures
    /// stay in the session and are fully replayed on their next draw.
    pub fn use_backend(&mut self, name: &str) -> Result<()> {
        let backend = backends::create(name)?;
        self.adopt_backend(backend)
    }

    /// Install an externally built backend adapter.
    pub fn install_backend(&mut self, backend: Box<dyn Backend>) -> Result<()> {
        self.adopt_backend(backend)
    }

    fn adopt_backend(&mut self, backend: Box<dyn Backend>) -> Result<()> {
        self.backend = backend;
        for fig in self.figures.values_mut() {
            self.backend.open_figure(fig)?;
            for axis in fig.axes_mut() {
                axis.mark_dirty();
            }
        }
        Ok(())
    }

    /// Add items produced by one command to the current axis: honor
    /// hold, enforce capabilities, merge kwargs, then redraw.
    pub fn add_items(
        &mut self,
        items: Vec<PlotItem>,
        kwargs: Vec<(String, PropValue)>,
    ) -> Result<()> {
        let caps = self.backend.capabilities();
        let backend_name = self.backend.name().to_string();
        let safecode = self.config.safecode;
        let holding = self.is_holding()?;

        let axis = self.gca()?;
        if !holding {
            axis.clear_items();
        }

        let mut kept: Vec<PlotItem> = Vec::new();
        for item in items {
            let missing = if item.is_3d() && !caps.supports_3d {
                Some("3D rendering")
            } else if item.needs_isosurface() && !caps.supports_isosurface {
                Some("isosurface extraction")
            } else {
                None
            };
            if let Some(operation) = missing {
                let err = PlotError::unsupported(backend_name.clone(), operation);
                if safecode {
                    return Err(err);
                }
                warn!("dropping {} item: {err}", item.kind().name());
                continue;
            }
            kept.push(item);
        }

        // the axis bag embeds the item schema, so one atomic merge
        // covers both levels
        let pairs: Vec<(&str, PropValue)> = kwargs
            .iter()
            .map(|(name, value)| (name.as_str(), value.clone()))
            .collect();
        axis.set_props(pairs)?;

        for mut item in kept {
            for (name, value) in &kwargs {
                let item_key = item
                    .props()
                    .schema()
                    .names()
                    .any(|n| n.eq_ignore_ascii_case(name));
                if item_key {
                    item.props_mut().set(name, value.clone())?;
                }
            }
            axis.push_item(item);
        }

        self.draw_if_interactive()
    }

    /// Run a fallible item-producing step under the soft-error policy:
    /// shape and capability errors drop the item with a warning when
    /// safecode is off.
    pub fn soft_guard<T>(&self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(v) => Ok(Some(v)),
            Err(err) if err.is_soft() && !self.config.safecode => {
                warn!("dropping plot item: {err}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub fn draw_if_interactive(&mut self) -> Result<()> {
        if self.interactive {
            self.draw()?;
        }
        Ok(())
    }

    /// Replay the current figure through the backend if anything is
    /// dirty.
    pub fn draw(&mut self) -> Result<()> {
        self.ensure_current()?;
        let fig = self.figures.get_mut(&self.current).expect("current figure");
        if !fig.is_dirty() {
            return Ok(());
        }
        for axis in fig.axes_mut() {
            axis.sync_item_props();
        }
        self.backend.replot(fig)?;
        fig.mark_clean();
        Ok(())
    }

    /// Write the current figure to disk; the format comes from the file
    /// extension. Hardcopy failures always surface.
    pub fn hardcopy(&mut self, path: &Path) -> Result<()> {
        let format = HardcopyFormat::from_path(path)?;
        if !self.backend.capabilities().supports_format(format) {
            return Err(PlotError::unsupported(
                self.backend.name(),
                format!("hardcopy format {format}"),
            ));
        }
        if self.config.replot_on_hardcopy {
            self.draw()?;
        } else {
            self.ensure_current()?;
        }
        let fig = self.figures.get(&self.current).expect("current figure");
        self.backend.hardcopy(fig, path, format)
    }
}
