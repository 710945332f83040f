use super::*;

use std::fs::{read_to_string, write};

fn printer_to(output: PathBuf) -> ReportPrinter<Vec<u8>, Vec<u8>> {
    ReportPrinter::new(Vec::new(), Vec::new(), PrinterConfig { output })
}

#[test]
fn default_config_targets_scan_report_txt() {
    assert_eq!(
        PrinterConfig::default().output,
        PathBuf::from(DEFAULT_REPORT_FILE)
    );
}

#[test]
fn emit_writes_identical_text_to_stdout_and_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let output = tmp.path().join("report.txt");
    let report = "line one\nline two";

    let mut printer = printer_to(output.clone());
    let saved = printer.emit(report).expect("emit");

    let file_text = read_to_string(&output).expect("read report");
    let stdout_text = String::from_utf8(printer.out.clone()).expect("utf8");

    assert_eq!(file_text, report);
    assert_eq!(stdout_text, format!("{report}\n"));
    assert_eq!(saved, output);

    let status = String::from_utf8(printer.err.clone()).expect("utf8");
    assert_eq!(status, format!("\nReport saved to: {}\n", output.display()));
}

#[test]
fn emit_overwrites_existing_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let output = tmp.path().join("report.txt");
    write(&output, "stale content that is longer than the new report").expect("seed file");

    let mut printer = printer_to(output.clone());
    printer.emit("fresh").expect("emit");

    assert_eq!(read_to_string(&output).expect("read report"), "fresh");
}

#[test]
fn emit_fails_when_destination_is_unwritable() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let output = tmp.path().join("no_such_dir").join("report.txt");

    let mut printer = printer_to(output);
    let err = printer.emit("report").expect_err("missing parent dir");

    assert!(err.to_string().contains("failed to write report to"));
    assert!(printer.err.is_empty(), "no save notice after a failed write");
}
