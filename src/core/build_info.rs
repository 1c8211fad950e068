//! Build metadata and the startup report printed before the application runs.

use std::fmt;
use std::io::{self, Write};

use crate::core::app;

/// Identity of this build: program name, version, and the toolchain that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub runtime_version: &'static str,
}

impl BuildInfo {
    pub const fn new(
        name: &'static str,
        version: &'static str,
        runtime_version: &'static str,
    ) -> Self {
        Self {
            name,
            version,
            runtime_version,
        }
    }

    /// Build info of the running binary, with defaults for anything not injected at build time.
    pub fn current() -> Self {
        Self::new(app::name(), app::version(), app::runtime_version())
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.version)?;
        writeln!(f, "{}", self.runtime_version)
    }
}

/// Write name, version, and runtime version to `writer`, one per line, then flush.
///
/// # Errors
/// Returns the first write or flush error from the sink. Nothing is retried.
pub fn display_build_info<W: Write + ?Sized>(writer: &mut W, info: &BuildInfo) -> io::Result<()> {
    write!(writer, "{info}")?;
    writer.flush()
}
