use chrono::NaiveDateTime;
use foldscan_fs::FileEntry;
use foldscan_runtime::REPORT_RULE_WIDTH;

use crate::aggregate::{ExtensionBucket, ScanResult};

const NO_FILES: &str = "   (no files found)";
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with two decimals, stepping units by 1024.
///
/// Anything past the TB range is reported in PB.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.2} PB")
}

/// Render the scan report. The text carries no trailing newline.
pub fn render_report(result: &ScanResult, generated_at: NaiveDateTime) -> String {
    let rule = "=".repeat(REPORT_RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(rule.clone());
    lines.push("  FOLDER SCAN REPORT".into());
    lines.push(rule.clone());
    lines.push(format!("  Scanned:  {}", result.path().display()));
    lines.push(format!(
        "  Date:     {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    if let Some(filter) = result.filter() {
        let joined: Vec<&str> = filter.iter().collect();
        lines.push(format!("  Filter:   {}", joined.join(", ")));
    }
    lines.push(rule.clone());

    lines.push(String::new());
    lines.push(">> Overview".into());
    lines.push(format!("   Total files:    {}", result.total_files()));
    lines.push(format!("   Total folders:  {}", result.total_folders()));
    lines.push(format!(
        "   Total size:     {}",
        format_size(result.total_size())
    ));

    lines.push(String::new());
    lines.push(">> Largest File".into());
    match result.largest_file() {
        Some(f) => lines.push(format!("   {}  ({})", f.name, format_size(f.size))),
        None => lines.push(NO_FILES.into()),
    }

    lines.push(String::new());
    lines.push(">> File Type Breakdown".into());
    let breakdown = sorted_breakdown(result.type_breakdown());
    if breakdown.is_empty() {
        lines.push(NO_FILES.into());
    }
    for bucket in breakdown {
        lines.push(format!(
            "   {:<20} {:>5} file(s)   {:>12}",
            bucket.extension,
            bucket.count,
            format_size(bucket.size)
        ));
    }

    lines.push(String::new());
    lines.push(">> All Files".into());
    let files = sorted_files(result.files());
    if files.is_empty() {
        lines.push(NO_FILES.into());
    }
    for f in files {
        lines.push(format!("   {:<40} {:>12}", f.name, format_size(f.size)));
    }

    if !result.folders().is_empty() {
        lines.push(String::new());
        lines.push(">> Subfolders".into());
        let mut folders: Vec<&String> = result.folders().iter().collect();
        folders.sort();
        for name in folders {
            lines.push(format!("   {name}/"));
        }
    }

    lines.push(String::new());
    lines.push(rule.clone());
    lines.push("  END OF REPORT".into());
    lines.push(rule);

    lines.join("\n")
}

/// Descending count; `sort_by` is stable so equal counts keep first-seen order.
fn sorted_breakdown(buckets: &[ExtensionBucket]) -> Vec<&ExtensionBucket> {
    let mut sorted: Vec<&ExtensionBucket> = buckets.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted
}

/// Descending size, stable on ties.
fn sorted_files(files: &[FileEntry]) -> Vec<&FileEntry> {
    let mut sorted: Vec<&FileEntry> = files.iter().collect();
    sorted.sort_by(|a, b| b.size.cmp(&a.size));
    sorted
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
