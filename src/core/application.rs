//! The application entry point the bootstrap hands control to.

/// Everything that happens after the build info is printed.
///
/// Implementations own their error handling and exit codes; `run` returning
/// means the process may exit successfully.
pub trait Application {
    fn run(&mut self);
}

impl<F: FnMut()> Application for F {
    fn run(&mut self) {
        self()
    }
}
