//! Application code lives here.
//!
//! `main` prints the build info and then calls [`Main::run`]. Replace the body
//! of `run` with the real program; it owns its own errors and exit codes.

use crate::core::application::Application;

/// The program's entry point after startup.
#[derive(Debug, Default)]
pub struct Main;

impl Application for Main {
    fn run(&mut self) {
        log::info!("no application code wired into cmd::Main yet");
    }
}
