//! Per-run counters and the end-of-run report

/// What happened during one crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Folders whose listing was fetched and parsed
    pub folders_listed: u64,

    /// Folders skipped because their listing (or local directory) failed
    pub listing_errors: u64,

    /// Files written to disk
    pub files_downloaded: u64,

    /// Files not requested because of the extension filter
    pub files_filtered: u64,

    /// Files whose download or write failed
    pub download_errors: u64,

    /// Listed names refused as path segments
    pub names_rejected: u64,

    /// Folders listed more than once and not re-entered
    pub revisits_skipped: u64,

    /// Total bytes written across all downloaded files
    pub bytes_written: u64,
}

impl CrawlSummary {
    /// Total number of folder and file failures
    pub fn error_count(&self) -> u64 {
        self.listing_errors + self.download_errors
    }

    /// Returns true if no folder or file failed
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }
}

/// Prints the summary to stdout in a formatted manner
pub fn print_summary(summary: &CrawlSummary) {
    println!("\n=== Crawl Summary ===\n");

    println!("Folders:");
    println!("  Listed: {}", summary.folders_listed);
    println!("  Listing errors: {}", summary.listing_errors);
    if summary.revisits_skipped > 0 {
        println!("  Revisits skipped: {}", summary.revisits_skipped);
    }
    println!();

    println!("Files:");
    println!(
        "  Downloaded: {} ({})",
        summary.files_downloaded,
        format_bytes(summary.bytes_written)
    );
    println!("  Filtered out: {}", summary.files_filtered);
    println!("  Download errors: {}", summary.download_errors);
    if summary.names_rejected > 0 {
        println!("  Unsafe names ignored: {}", summary.names_rejected);
    }
    println!();

    if summary.is_clean() {
        println!("✓ Completed without errors");
    } else {
        println!("Completed with {} errors (see log)", summary.error_count());
    }
}

/// Formats a byte count with a binary unit
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = "B";
    for next in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", value, unit)
}
