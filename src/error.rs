use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FlatcatError {
    #[error("Cannot read ignore file {path}: {source}")]
    IgnoreFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot compile ignore rules: {0}")]
    Rules(ignore::Error),
    #[error("Error creating output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error walking the path: {0}")]
    Walk(#[from] ignore::Error),
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write output: {0}")]
    Write(std::io::Error),
    #[error("Cannot open file {path}: {source}")]
    ViewerLaunch {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl FlatcatError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FlatcatError::Read {
            path: path.into(),
            source,
        }
    }
    /// Process exit status for this kind of failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            FlatcatError::IgnoreFile { .. } | FlatcatError::Rules(_) => 2,
            FlatcatError::OutputCreate { .. } => 3,
            FlatcatError::Walk(_) => 4,
            FlatcatError::Read { .. } => 5,
            FlatcatError::Write(_) => 6,
            FlatcatError::ViewerLaunch { .. } => 7,
        }
    }
}
