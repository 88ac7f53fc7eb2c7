//! `hardcopy` / `savefig`: write the current figure to disk.

use std::path::Path;

use crate::error::Result;
use crate::session::Session;

/// Write the current figure; the format follows the file extension.
pub fn hardcopy(session: &mut Session, path: impl AsRef<Path>) -> Result<()> {
    session.hardcopy(path.as_ref())
}

/// Alias of [`hardcopy`].
pub fn savefig(session: &mut Session, path: impl AsRef<Path>) -> Result<()> {
    hardcopy(session, path)
}
