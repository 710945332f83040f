use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::ScanArgs;
use foldscan_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "foldscan",
    version,
    about = "Scan a folder and generate a summary report"
)]
pub struct Cli {
    #[command(flatten)]
    pub scan: ScanArgs,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    commands::scan::run(cli.scan)
}
