//! multiplot: a uniform MATLAB-style command surface for scientific
//! 2D/3D plotting over pluggable rendering backends.
//!
//! The crate owns the scene graph (figures, axes, plot items, property
//! bags), the polymorphic argument dispatcher, the format-string
//! parser, the session, and the abstract backend contract. Concrete
//! renderers implement [`backend::Backend`]; the built-in `record`
//! backend runs headless and is what the tests drive.
//!
//! ```no_run
//! use multiplot::dispatch::Arg;
//! use multiplot::{global, Array};
//!
//! let x = Array::linspace(0.0, 6.28, 100);
//! let y = Array::vector(x.data.iter().map(|v| v.sin()).collect());
//! global::plot(&[Arg::from(x), Arg::from(y), Arg::from("r-")])?;
//! global::title("one period")?;
//! global::hardcopy("sine.png")?;
//! # Ok::<(), multiplot::PlotError>(())
//! ```

pub mod array;
pub mod axes;
pub mod backend;
pub mod backends;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod figure;
pub mod global;
pub mod items;
pub mod props;
pub mod samples;
pub mod session;
pub mod style;

pub use array::{meshgrid, Array};
pub use axes::{Axis, AxisLimits};
pub use backend::{Backend, Capabilities, HardcopyFormat};
pub use config::{Config, ConfigLoader};
pub use error::{PlotError, Result};
pub use figure::Figure;
pub use items::{ColorMap, PlotItem};
pub use session::Session;
pub use style::{Color, LineSpec, LineStyle, Marker};
