//! Free-function facade over a process-wide default session.
//!
//! Scripts that do not want to carry a [`Session`] around call these;
//! each acquires the global session lock for the duration of one
//! command. The session is built on first use from the layered
//! configuration; a broken configuration falls back to defaults with a
//! warning rather than poisoning every later call.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use log::warn;
use once_cell::sync::OnceCell;

use crate::axes::AxisLimits;
use crate::backends::RecordBackend;
use crate::commands;
use crate::config::{Config, ConfigLoader};
use crate::dispatch::Arg;
use crate::error::Result;
use crate::props::PropValue;
use crate::session::Session;

static SESSION: OnceCell<Mutex<Session>> = OnceCell::new();

fn session() -> MutexGuard<'static, Session> {
    SESSION
        .get_or_init(|| {
            let config = ConfigLoader::load().unwrap_or_else(|err| {
                warn!("configuration load failed, using defaults: {err}");
                Config::default()
            });
            let session = Session::new(config).unwrap_or_else(|err| {
                warn!("configured backend unavailable, using record: {err}");
                Session::with_backend(Config::default(), Box::new(RecordBackend::new()))
            });
            Mutex::new(session)
        })
        .lock()
        .expect("plot session lock poisoned")
}

/// Run a closure against the default session.
pub fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    f(&mut session())
}

pub fn plot(args: &[Arg]) -> Result<()> {
    commands::plot(&mut session(), args)
}

pub fn plot3(args: &[Arg]) -> Result<()> {
    commands::plot3(&mut session(), args)
}

pub fn bar(args: &[Arg]) -> Result<()> {
    commands::bar(&mut session(), args)
}

pub fn surf(args: &[Arg]) -> Result<()> {
    commands::surf(&mut session(), args)
}

pub fn mesh(args: &[Arg]) -> Result<()> {
    commands::mesh(&mut session(), args)
}

pub fn contour(args: &[Arg]) -> Result<()> {
    commands::contour(&mut session(), args)
}

pub fn contourf(args: &[Arg]) -> Result<()> {
    commands::contourf(&mut session(), args)
}

pub fn quiver(args: &[Arg]) -> Result<()> {
    commands::quiver(&mut session(), args)
}

pub fn streamline(args: &[Arg]) -> Result<()> {
    commands::streamline(&mut session(), args)
}

pub fn streamribbon(args: &[Arg]) -> Result<()> {
    commands::streamribbon(&mut session(), args)
}

pub fn streamtube(args: &[Arg]) -> Result<()> {
    commands::streamtube(&mut session(), args)
}

pub fn slice_(args: &[Arg]) -> Result<()> {
    commands::slice_(&mut session(), args)
}

pub fn isosurface(args: &[Arg]) -> Result<()> {
    commands::isosurface(&mut session(), args)
}

pub fn axis(args: &[Arg]) -> Result<()> {
    commands::axis(&mut session(), args)
}

pub fn axis_limits() -> Result<AxisLimits> {
    commands::axis_limits(&mut session())
}

pub fn title(text: &str) -> Result<()> {
    commands::title(&mut session(), text)
}

pub fn xlabel(text: &str) -> Result<()> {
    commands::xlabel(&mut session(), text)
}

pub fn ylabel(text: &str) -> Result<()> {
    commands::ylabel(&mut session(), text)
}

pub fn zlabel(text: &str) -> Result<()> {
    commands::zlabel(&mut session(), text)
}

pub fn legend(labels: &[&str]) -> Result<()> {
    commands::legend(&mut session(), labels)
}

pub fn colorbar() -> Result<()> {
    commands::colorbar(&mut session())
}

pub fn view(azimuth: f64, elevation: f64) -> Result<()> {
    commands::view(&mut session(), azimuth, elevation)
}

pub fn figure(handle: Option<u32>) -> Result<u32> {
    session().figure(handle)
}

pub fn subplot(rows: usize, cols: usize, k: usize) -> Result<()> {
    session().subplot(rows, cols, k)
}

pub fn hold(on: bool) -> Result<()> {
    session().hold(on)
}

pub fn toggle_hold() -> Result<bool> {
    session().toggle_hold()
}

/// Handle of the current axis, usable as a leading command argument.
pub fn current_axes() -> Result<(u32, usize)> {
    session().current_axes()
}

pub fn clf() -> Result<()> {
    session().clf()
}

pub fn cla() -> Result<()> {
    session().cla()
}

pub fn close(handle: Option<u32>) -> Result<()> {
    session().close(handle)
}

pub fn close_all() -> Result<()> {
    session().close_all()
}

pub fn setp(pairs: Vec<(&str, PropValue)>) -> Result<()> {
    session().setp(pairs)
}

pub fn getp(name: &str) -> Result<PropValue> {
    session().getp(name)
}

pub fn use_backend(name: &str) -> Result<()> {
    session().use_backend(name)
}

pub fn draw() -> Result<()> {
    session().draw()
}

pub fn hardcopy(path: impl AsRef<Path>) -> Result<()> {
    commands::hardcopy(&mut session(), path)
}
