use colored::Colorize;
use std::path::Path;

/// Aggregate counters for a single run.
///
/// Created when a run starts, filled in as files are processed and handed
/// back to the caller at the end. Nothing is persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Number of files discovered and processed.
    pub total_files_seen: usize,
    /// Number of files that had at least one directive comment removed.
    pub files_cleaned: usize,
    /// Number of directive comments removed across all files.
    pub comments_removed: usize,
    /// When set, `files_cleaned` counts files that would have been rewritten.
    pub dry_run: bool,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Records one processed file and how many comments it lost.
    pub fn record_file(&mut self, removed: usize) {
        self.total_files_seen += 1;
        if removed > 0 {
            self.files_cleaned += 1;
            self.comments_removed += removed;
        }
    }
}

/// Receives progress events from the `CleanerEngine`.
///
/// Progress output is informational only; the engine never depends on what
/// a reporter does with it.
pub trait StatusReporter {
    fn file_started(&self, path: &Path);
    fn comment_removed(&self, preview: &str, directive: &str);
    fn file_finished(&self, path: &Path, removed: usize, dry_run: bool);
    fn run_finished(&self, report: &RunReport);
}

/// Prints human-readable progress to standard output.
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    /// Constructs a new `ConsoleReporter`. In verbose mode the matched
    /// directive keyword is printed next to every removed comment.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Formats the one-line run summary.
    ///
    /// # Arguments
    /// * `report`: The totals collected during the run.
    ///
    /// # Returns
    /// A `String` such as `3 files processed, cleaned 1, 2 directive comments
    /// removed`. Dry runs say `would clean` instead of `cleaned`.
    fn format_summary(report: &RunReport) -> String {
        let verb = if report.dry_run { "would clean" } else { "cleaned" };
        format!(
            "{} files processed, {} {}, {} directive comments removed",
            report.total_files_seen, verb, report.files_cleaned, report.comments_removed
        )
    }
}

impl StatusReporter for ConsoleReporter {
    fn file_started(&self, path: &Path) {
        println!("🔍 Processing: {}", path.display());
    }

    fn comment_removed(&self, preview: &str, directive: &str) {
        if self.verbose {
            println!("  └─ Removing: {} ({})", preview.dimmed(), directive.yellow());
        } else {
            println!("  └─ Removing: {}", preview.dimmed());
        }
    }

    fn file_finished(&self, path: &Path, removed: usize, dry_run: bool) {
        if removed == 0 {
            println!("  {} No directive comments found", "-".dimmed());
        } else if dry_run {
            println!(
                "  {} Would clean {} ({} comments)",
                "~".yellow(),
                path.display(),
                removed
            );
        } else {
            println!(
                "  {} Cleaned {} ({} comments)",
                "✓".green(),
                path.display(),
                removed
            );
        }
    }

    fn run_finished(&self, report: &RunReport) {
        println!("\n📈 Summary:");
        if report.total_files_seen == 0 {
            println!("  No .sql files found.");
        }
        println!("  {}", Self::format_summary(report).bold());
        if report.dry_run && report.files_cleaned > 0 {
            println!("  Dry run: no files were written.");
        }
    }
}
