mod config;
pub mod logging;

pub use config::{
    DEFAULT_REPORT_FILE, NO_EXTENSION, PROGRAM_LOG_LEVEL, PROGRAM_NAME, REPORT_RULE_WIDTH,
};

pub use logging::init;
