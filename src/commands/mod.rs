//! The MATLAB-style command surface, one module per command family.
//!
//! Every command follows the same pipeline: split keyword pairs off the
//! argument slice, group the positional arrays by the command grammar,
//! build items (soft errors may drop them), and hand the result to the
//! session, which honors hold, merges properties, and redraws.

use crate::dispatch::{take_axes, Arg};
use crate::error::Result;
use crate::session::Session;

pub mod annotate;
pub mod axis;
pub mod bar;
pub mod contour;
pub mod hardcopy;
pub mod plot;
pub mod quiver;
pub mod stream;
pub mod surf;
pub mod volume;

pub use annotate::{colorbar, legend, title, view, view_preset, xlabel, ylabel, zlabel};
pub use axis::{axis, axis_limits};
pub use bar::bar;
pub use contour::{contour, contourf};
pub use hardcopy::{hardcopy, savefig};
pub use plot::{plot, plot3};
pub use quiver::quiver;
pub use stream::{streamline, streamribbon, streamtube};
pub use surf::{mesh, surf};
pub use volume::{isosurface, slice_};

/// Resolve a leading axis handle: redirect the session to that axis
/// and return the remaining arguments.
pub(crate) fn retarget<'a>(session: &mut Session, args: &'a [Arg]) -> Result<&'a [Arg]> {
    let (target, rest) = take_axes(args);
    if let Some((figure, cell)) = target {
        session.select_axes(figure, cell)?;
    }
    Ok(rest)
}
