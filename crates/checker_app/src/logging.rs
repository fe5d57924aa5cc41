//! Logger initialization for checker_app.
//!
//! File logging goes to `./checker.log` in the current working directory.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_PATH: &str = "./checker.log";

/// Destination for log output.
#[allow(dead_code)]
pub enum LogDestination {
    File,
    Terminal,
}

pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let logger: Box<dyn SharedLogger> = match destination {
        LogDestination::File => match File::create(LOG_PATH) {
            Ok(file) => WriteLogger::new(level, config, file),
            Err(err) => {
                eprintln!("Warning: could not create log file {LOG_PATH}: {err}");
                return;
            }
        },
        LogDestination::Terminal => {
            TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
        }
    };

    let _ = CombinedLogger::init(vec![logger]);
}
