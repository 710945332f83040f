use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::Args;
use foldscan_engine::{ExtensionFilter, render_report, scan_folder};
use foldscan_fs::ListError;
use log::debug;

use crate::printer::{PrinterConfig, ReportPrinter};

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Path to the folder to scan
    pub folder: PathBuf,

    /// Output report file path (default: scan_report.txt in current directory)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only count files with these extensions, with or without the dot
    ///
    /// Example:
    ///   foldscan ./src -e py .TXT
    #[arg(long = "ext", short = 'e', value_name = "EXT", num_args = 0..)]
    pub ext: Vec<String>,
}

pub fn run(args: ScanArgs) -> ExitCode {
    let cfg = args
        .output
        .clone()
        .map(|output| PrinterConfig { output })
        .unwrap_or_default();
    let mut printer = ReportPrinter::stdout(cfg);

    match execute(&args, Local::now().naive_local(), &mut printer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("[scan] failed: {e:?}");
            match e.downcast_ref::<ListError>() {
                Some(ListError::NotADirectory(_)) => {
                    eprintln!("Error: {e}");
                    ExitCode::from(1)
                }
                _ => {
                    eprintln!("[error] {e:#}");
                    ExitCode::from(2)
                }
            }
        }
    }
}

fn execute<W: Write, E: Write>(
    args: &ScanArgs,
    generated_at: NaiveDateTime,
    printer: &mut ReportPrinter<W, E>,
) -> Result<()> {
    let filter = ExtensionFilter::from_tokens(&args.ext);

    let result = scan_folder(&args.folder, filter)?;
    let report = render_report(&result, generated_at);

    printer.emit(&report)?;

    Ok(())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
