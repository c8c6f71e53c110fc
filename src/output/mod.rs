//! Output module for reporting crawl results

mod summary;

pub use summary::{print_summary, CrawlSummary};
