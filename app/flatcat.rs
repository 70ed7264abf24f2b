//! Command-line interface for flatcat.
//!
//! Flattens a directory into a single fenced text file in the current directory
//! and optionally opens it with the system's default viewer.

use clap::Parser;
use flatcat::{DEFAULT_EXCLUSIONS_FILE, FlatcatBuilder, FlatcatOptions, Launcher, flatcat};
use std::path::PathBuf;
use std::process::exit;

/// flatcat — concatenate a directory tree into one text file
#[derive(Parser)]
#[command(name = "flatcat", version, about, long_about = None)]
struct Cli {
    /// Directory to scan
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,

    /// Path to an additional ignore file (gitignore syntax)
    #[arg(short, long, default_value = DEFAULT_EXCLUSIONS_FILE)]
    exclusions: PathBuf,

    /// Comma-separated list of file extensions to include (without dots). Empty means all files.
    #[arg(short = 'x', long, default_value = "")]
    extensions: String,

    /// Open the generated file in the system's default editor/viewer
    #[arg(short, long)]
    open: bool,
}

impl Cli {
    fn into_options(self) -> (FlatcatOptions, bool) {
        let options = FlatcatBuilder::new(self.directory)
            .exclusions_file(self.exclusions)
            .extensions(self.extensions)
            .build();
        (options, self.open)
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let (options, open) = cli.into_options();

    let summary = match flatcat(options) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(e.exit_code());
        }
    };

    println!("File list has been written to {}", summary.output.display());

    if open {
        // The viewer is left running; its failure does not fail the run.
        if let Err(e) = Launcher::detect().launch(&summary.output) {
            eprintln!("Error: {}", e);
        }
    }
}
