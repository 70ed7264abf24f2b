use std::path::PathBuf;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the output was written.
    pub output: PathBuf,
    /// Number of files emitted.
    pub files_written: usize,
}
