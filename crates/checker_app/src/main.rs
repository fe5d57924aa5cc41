mod app;
mod clipboard;
mod effects;
mod logging;
mod render;

use std::process::ExitCode;

fn main() -> ExitCode {
    logging::initialize(logging::LogDestination::File);
    app::run()
}
