use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Trait defining the filesystem operations required by the engine.
/// This abstraction keeps the engine independent of where files come from.
pub trait FileSource {
    /// Returns every regular file matching `pattern`, in traversal order.
    /// A pattern that matches nothing yields an empty list.
    fn discover(&self, pattern: &str) -> Result<Vec<PathBuf>>;

    /// Reads a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String>;

    /// Overwrites a file in place.
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}

/// Concrete implementation of `FileSource` backed by the local filesystem
/// and the `glob` crate.
pub struct GlobFileSource;

impl GlobFileSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GlobFileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSource for GlobFileSource {
    fn discover(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let entries = glob::glob(pattern)
            .with_context(|| format!("Invalid discovery pattern: {pattern}"))?;

        let mut files = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(path) => log::debug!("Skipping non-file match {}", path.display()),
                // Unreadable directories are skipped, discovery itself never fails.
                Err(e) => log::warn!("Skipping unreadable path {}: {}", e.path().display(), e),
            }
        }

        log::debug!("Discovered {} files for {}", files.len(), pattern);
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}
