//! Application identity baked in at build time.
//!
//! Packaging can override the name and version by exporting `BASECODE_BASENAME`
//! and `BASECODE_VERSION` before `cargo build`. Unset or empty overrides fall
//! back to the defaults below.

/// Program name used when no override is supplied.
pub const DEFAULT_NAME: &str = "basename";

/// Version used when no override is supplied.
pub const DEFAULT_VERSION: &str = "dev";

/// Application name (`BASECODE_BASENAME`, else [`DEFAULT_NAME`]).
pub fn name() -> &'static str {
    non_empty_or(option_env!("BASECODE_BASENAME"), DEFAULT_NAME)
}

/// Application version (`BASECODE_VERSION`, else [`DEFAULT_VERSION`]).
pub fn version() -> &'static str {
    non_empty_or(option_env!("BASECODE_VERSION"), DEFAULT_VERSION)
}

/// Toolchain that compiled this binary, as reported by `rustc --version`.
pub fn runtime_version() -> &'static str {
    non_empty_or(option_env!("BASECODE_RUSTC_VERSION"), "rustc unknown")
}

/// An override must be a single non-blank line, otherwise the default applies.
fn non_empty_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    value
        .filter(|v| !v.trim().is_empty() && !v.contains(['\n', '\r']))
        .unwrap_or(default)
}
