//! Error taxonomy for the plotting core.
//!
//! Configuration and schema errors are hard failures. Shape and
//! capability errors are soft when `safecode` is off: the offending item
//! is dropped with a `log::warn!` diagnostic instead of failing the
//! calling script.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Bad configuration file, unknown backend name, or an unusable
    /// hardcopy path.
    #[error("configuration error: {0}")]
    Config(String),

    /// Property name not present in the bag's schema.
    #[error("unknown property `{name}` (no such key in the {scope} schema)")]
    UnknownKey { scope: &'static str, name: String },

    /// A validator rejected a property value.
    #[error("invalid value for `{name}`: {reason}")]
    BadValue { name: String, reason: String },

    /// A style format string could not be parsed.
    #[error("bad format string `{0}`")]
    BadFormat(String),

    /// Array ranks or lengths are incompatible.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The selected backend lacks a requested capability.
    #[error("backend `{backend}` does not support {operation}")]
    Unsupported { backend: String, operation: String },

    /// Wraps any error raised by a backend adapter.
    #[error("backend `{backend}` failed during {operation}")]
    Backend {
        backend: String,
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl PlotError {
    pub fn config(msg: impl Into<String>) -> Self {
        PlotError::Config(msg.into())
    }

    pub fn shape(msg: impl Into<String>) -> Self {
        PlotError::ShapeMismatch(msg.into())
    }

    pub fn unsupported(backend: impl Into<String>, operation: impl Into<String>) -> Self {
        PlotError::Unsupported {
            backend: backend.into(),
            operation: operation.into(),
        }
    }

    pub fn backend(
        backend: impl Into<String>,
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PlotError::Backend {
            backend: backend.into(),
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// True for the error classes that may be downgraded to a warning
    /// when `safecode` is off.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            PlotError::ShapeMismatch(_) | PlotError::Unsupported { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_classification() {
        assert!(PlotError::shape("x").is_soft());
        assert!(PlotError::unsupported("gnuplot", "surf").is_soft());
        assert!(!PlotError::config("bad").is_soft());
        assert!(!PlotError::BadFormat("q?".into()).is_soft());
    }

    #[test]
    fn backend_error_preserves_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PlotError::backend("record", "hardcopy", io);
        let source = std::error::Error::source(&err).expect("cause retained");
        assert!(source.to_string().contains("denied"));
    }
}
