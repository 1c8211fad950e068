//! # basecode - program entry point
//!
//! Prints the build info (name, version, toolchain) to stdout, then hands
//! control to [`cmd::Main`]. Application code belongs in `cmd`, not here.

mod cmd;
mod core;
mod run;

use dotenv::dotenv;

use crate::core::build_info::BuildInfo;

fn main() {
    // .env may set RUST_LOG
    dotenv().ok();
    run::init_logger();

    // currently displays the build info unconditionally
    let info = BuildInfo::current();
    if let Err(e) = run::bootstrap(&info, &mut std::io::stdout(), &mut cmd::Main) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
