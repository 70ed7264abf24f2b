//! # Flatcat
//!
//! `flatcat` walks a directory tree and concatenates the contents of its files into a
//! single text file, each one headed by its relative path and wrapped in a fence.
//! The result is meant to be pasted into another tool, such as a language model.
//!
//! Files are selected with gitignore rules read from the root `.gitignore` and an
//! optional exclusions file, plus an optional list of extensions.
//!
//! # Features
//!
//! - `logging` (default): Emits `tracing` events for rule compilation and per-entry decisions.
//!
//! # Example
//!
//! ```no_run
//! use flatcat::{FlatcatBuilder, flatcat};
//!
//! let options = FlatcatBuilder::new("src")
//!     .exclusions_file("exclusions.txt")
//!     .extensions("rs,toml")
//!     .build();
//!
//! let summary = flatcat(options).expect("Failed to flatten directory");
//! println!("{} files written to {}", summary.files_written, summary.output.display());
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod rules;
mod types;
pub mod viewer;

pub use engine::{emit_tree, flatcat};
pub use error::FlatcatError;
pub use filter::ExtensionFilter;
pub use options::{DEFAULT_EXCLUSIONS_FILE, FlatcatBuilder, FlatcatOptions, OUTPUT_FILE_NAME};
pub use rules::{ROOT_IGNORE_FILE, RuleSet, read_lines};
pub use types::RunSummary;
pub use viewer::Launcher;
