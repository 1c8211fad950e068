//! Bootstrap error types.

use thiserror::Error;

/// Errors raised before control reaches the application.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to write build info: {0}")]
    Report(#[source] std::io::Error),
}
