//! Startup sequence: logger init, build info report, application hand-off.

use std::io::Write;

use crate::core::application::Application;
use crate::core::build_info::{self, BuildInfo};
use crate::core::error::BootstrapError;

/// Initialize env_logger on stderr. `RUST_LOG` overrides the `warn` default.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Print the build info to `out`, then run `app`.
///
/// The application is only started once the report has been written and
/// flushed. Panics inside the application are not caught.
///
/// # Errors
/// Returns [`BootstrapError::Report`] if `out` rejects the report; the
/// application is not run in that case.
pub fn bootstrap<W, A>(info: &BuildInfo, out: &mut W, app: &mut A) -> Result<(), BootstrapError>
where
    W: Write + ?Sized,
    A: Application + ?Sized,
{
    build_info::display_build_info(out, info).map_err(BootstrapError::Report)?;
    log::debug!("{} {} started, handing off to application", info.name, info.version);
    app.run();
    log::debug!("application returned");
    Ok(())
}
