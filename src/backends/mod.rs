//! Built-in backend adapters and the name registry.
//!
//! External rendering engines plug in by implementing
//! [`Backend`](crate::backend::Backend) and installing an instance on
//! the session; the registry only knows the adapters shipped with the
//! crate.

pub mod record;

pub use record::{RecordBackend, RecordedCall};

use crate::backend::Backend;
use crate::error::{PlotError, Result};

/// Names the registry can instantiate.
pub const BUILTIN_NAMES: &[&str] = &["record"];

pub fn is_known(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// A fresh adapter instance for a built-in backend name.
pub fn create(name: &str) -> Result<Box<dyn Backend>> {
    match name {
        "record" => Ok(Box::new(RecordBackend::new())),
        other => Err(PlotError::config(format!(
            "unknown backend `{other}` (built-in: {})",
            BUILTIN_NAMES.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_knows_record() {
        assert!(is_known("record"));
        assert_eq!(create("record").unwrap().name(), "record");
    }

    #[test]
    fn unknown_backend_is_config_error() {
        assert!(matches!(create("gnuplot"), Err(PlotError::Config(_))));
    }
}
