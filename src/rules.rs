//! Ignore rules compiled from the root `.gitignore` and the exclusions file.
//!
//! Both sources are read as gitignore syntax and compiled into a single ordered
//! rule set. Lines from the exclusions file come last, so a negation there can
//! re-include something the root `.gitignore` excludes.

use crate::error::FlatcatError;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// File name of the root ignore file.
pub const ROOT_IGNORE_FILE: &str = ".gitignore";

/// Reads `path` as a list of lines.
///
/// A missing file yields no lines. Any other I/O error is returned.
pub fn read_lines(path: &Path) -> Result<Vec<String>, FlatcatError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            #[cfg(feature = "logging")]
            tracing::debug!("No ignore file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(FlatcatError::IgnoreFile {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect())
}

/// An ordered, immutable set of gitignore rules anchored at a root directory.
#[derive(Debug, Clone)]
pub struct RuleSet {
    root: PathBuf,
    matcher: Gitignore,
}

impl RuleSet {
    /// Loads `<root>/.gitignore` followed by `exclusions_file`.
    pub fn compile(root: &Path, exclusions_file: &Path) -> Result<Self, FlatcatError> {
        let mut lines = read_lines(&root.join(ROOT_IGNORE_FILE))?;
        lines.extend(read_lines(exclusions_file)?);
        Self::from_lines(root, &lines)
    }

    /// Compiles `lines` in order. Lines that fail to parse are skipped.
    pub fn from_lines<S: AsRef<str>>(root: &Path, lines: &[S]) -> Result<Self, FlatcatError> {
        let mut builder = GitignoreBuilder::new(root);
        for line in lines {
            let line = line.as_ref();
            if let Err(_e) = builder.add_line(None, line) {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping invalid ignore pattern '{}': {}", line, _e);
            }
        }
        let matcher = builder.build().map_err(FlatcatError::Rules)?;
        #[cfg(feature = "logging")]
        tracing::debug!("Compiled {} ignore rules", matcher.len());
        Ok(Self {
            root: root.to_path_buf(),
            matcher,
        })
    }

    /// A rule set that matches nothing.
    pub fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            matcher: Gitignore::empty(),
        }
    }

    /// Whether the last rule matching `relative` excludes it.
    pub fn matches(&self, relative: &Path, is_dir: bool) -> bool {
        // Matching against the root-joined path keeps a subdirectory that
        // shares the root's name from being stripped as if it were the root.
        self.matcher
            .matched(self.root.join(relative), is_dir)
            .is_ignore()
    }

    pub fn len(&self) -> usize {
        self.matcher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }
}
