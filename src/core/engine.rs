use crate::builders::patterns::{self, DirectiveMatcher, LineOutcome};
use crate::builders::reporter::{ConsoleReporter, RunReport, StatusReporter};
use crate::builders::validator::{ConfigValidator, StandardValidator};
use crate::core::config::CleanerConfig;
use crate::core::discovery::{FileSource, GlobFileSource};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// A directive comment removed from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedComment {
    /// 1-based line number.
    pub line_number: usize,
    /// The first characters of the comment text.
    pub preview: String,
    /// The keyword that caused the removal.
    pub directive: String,
}

/// The result of cleaning the text of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    pub content: String,
    pub removed: Vec<RemovedComment>,
}

impl CleanOutcome {
    pub fn modified(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Strips directive comments from `content`.
///
/// Lines are split on `\n` only and joined back with `\n`, so a trailing
/// newline survives. A `\r` stays attached to a kept line; on a stripped
/// line it belongs to the comment and goes with it.
///
/// # Arguments
/// * `content`: The full text of a SQL file.
/// * `matcher`: Decides which comments are directives.
///
/// # Returns
/// A `CleanOutcome` holding the rewritten text and one `RemovedComment`
/// per stripped line, in line order. When nothing matched, the content is
/// identical to the input.
pub fn clean_content<M>(content: &str, matcher: &M) -> CleanOutcome
where
    M: DirectiveMatcher + ?Sized,
{
    let mut removed = Vec::new();
    let lines: Vec<&str> = content
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            let outcome = patterns::clean_line(line, matcher);
            if let LineOutcome::Stripped {
                comment, directive, ..
            } = outcome
            {
                removed.push(RemovedComment {
                    line_number: index + 1,
                    preview: patterns::preview(comment),
                    directive: directive.to_string(),
                });
            }
            outcome.output()
        })
        .collect();

    CleanOutcome {
        content: lines.join("\n"),
        removed,
    }
}

pub struct CleanerEngine {
    config: CleanerConfig,
    source: Box<dyn FileSource>,
    reporter: Box<dyn StatusReporter>,
}

impl CleanerEngine {
    /// Creates an engine over the local filesystem that reports to the console.
    pub fn new(config: CleanerConfig) -> Result<Self> {
        let reporter = ConsoleReporter::new(config.global_settings.verbose);
        Self::with_parts(config, Box::new(GlobFileSource::new()), Box::new(reporter))
    }

    /// Creates an engine with explicit collaborators. The configuration is
    /// validated first; warnings are logged and errors abort.
    pub fn with_parts(
        config: CleanerConfig,
        source: Box<dyn FileSource>,
        reporter: Box<dyn StatusReporter>,
    ) -> Result<Self> {
        let issues = StandardValidator::new().validate_config(&config)?;
        let mut errors = Vec::new();
        for issue in issues {
            if issue.is_error() {
                errors.push(issue.to_string());
            } else {
                log::warn!("{issue}");
            }
        }
        if !errors.is_empty() {
            anyhow::bail!("Configuration validation failed: {}", errors.join("; "));
        }

        Ok(Self {
            config,
            source,
            reporter,
        })
    }

    /// Lists the files a run would process.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        self.source.discover(&self.config.discovery_pattern)
    }

    /// Cleans a single file and returns whether it contained directive
    /// comments. In dry-run mode the file is left untouched.
    pub fn clean(&self, path: &Path) -> Result<bool> {
        Ok(self.clean_file(path)? > 0)
    }

    /// Processes every discovered file in order and returns the totals.
    ///
    /// Each file is read, cleaned and, unless this is a dry run, written
    /// back when at least one directive comment was removed. The reporter
    /// receives the summary once every file has been handled.
    ///
    /// # Returns
    /// `Result<RunReport>` with the number of files seen and cleaned. The
    /// first I/O error is returned instead; files cleaned before it keep
    /// their new content and later files are not touched.
    pub fn run(&self) -> Result<RunReport> {
        let dry_run = self.config.global_settings.dry_run;
        let mut report = RunReport::new(dry_run);

        for path in self.discover()? {
            let removed = self.clean_file(&path)?;
            report.record_file(removed);
        }

        log::info!(
            "Run finished: {} seen, {} cleaned",
            report.total_files_seen,
            report.files_cleaned
        );
        self.reporter.run_finished(&report);
        Ok(report)
    }

    fn clean_file(&self, path: &Path) -> Result<usize> {
        let dry_run = self.config.global_settings.dry_run;
        self.reporter.file_started(path);

        let content = self.source.read_file(path)?;
        let outcome = clean_content(&content, &self.config.directives);
        for comment in &outcome.removed {
            log::debug!(
                "{}:{} matched '{}'",
                path.display(),
                comment.line_number,
                comment.directive
            );
            self.reporter
                .comment_removed(&comment.preview, &comment.directive);
        }

        if outcome.modified() && !dry_run {
            self.source.write_file(path, &outcome.content)?;
        }

        let removed = outcome.removed.len();
        self.reporter.file_finished(path, removed, dry_run);
        Ok(removed)
    }
}
