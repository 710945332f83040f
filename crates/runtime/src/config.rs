pub const PROGRAM_NAME: &str = "foldscan";
pub const PROGRAM_LOG_LEVEL: &str = "FOLDSCAN_LOG_LEVEL";

/// Report destination used when `--output` is not given, relative to the
/// working directory.
pub const DEFAULT_REPORT_FILE: &str = "scan_report.txt";

/// Extension label for files whose name carries no dot after its leading dots.
pub const NO_EXTENSION: &str = "(no extension)";

/// Width of the `=` rules framing the report header and footer.
pub const REPORT_RULE_WIDTH: usize = 60;
