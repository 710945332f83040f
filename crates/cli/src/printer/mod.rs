use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use foldscan_runtime::DEFAULT_REPORT_FILE;
use log::info;

/// Where the rendered report is saved.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    /// Destination file, overwritten on every run.
    pub output: PathBuf,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }
}

/// Emits a rendered report to `out` and to the configured file.
///
/// Status lines go to `err` so that `out` carries exactly the report.
pub struct ReportPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> ReportPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Print the report, then write it verbatim to the output file.
    ///
    /// Returns the absolute path of the written file.
    pub fn emit(&mut self, report: &str) -> Result<PathBuf> {
        writeln!(self.out, "{report}")?;
        self.out.flush()?;

        let output = &self.cfg.output;
        fs::write(output, report)
            .with_context(|| format!("failed to write report to {}", output.display()))?;

        let saved = std::path::absolute(output).unwrap_or_else(|_| output.clone());
        info!("[report] saved to {}", saved.display());

        writeln!(self.err, "\nReport saved to: {}", saved.display())?;

        Ok(saved)
    }
}

impl ReportPrinter<io::Stdout, io::Stderr> {
    /// Create a printer that writes to stdout and stderr.
    pub fn stdout(cfg: PrinterConfig) -> Self {
        Self::new(io::stdout(), io::stderr(), cfg)
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
