use crate::error::FlatcatError;
use crate::filter::ExtensionFilter;
use crate::options::FlatcatOptions;
use crate::output::{Emitter, display_relative};
use crate::rules::{ROOT_IGNORE_FILE, RuleSet};
use crate::types::RunSummary;
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
}
impl Walker {
    /// Depth-first walk of `root` in file-name order. Entries matched by
    /// `rules` are dropped, and a matched directory is never entered.
    fn new(root: &Path, rules: RuleSet) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let prune_root = root.to_path_buf();
        builder.filter_entry(move |entry| !is_excluded(&prune_root, &rules, entry));
        Self {
            inner: builder.build(),
            root: root.to_path_buf(),
        }
    }
}
fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|t| t.is_dir())
}
fn is_excluded(root: &Path, rules: &RuleSet, entry: &DirEntry) -> bool {
    let Ok(relative) = entry.path().strip_prefix(root) else {
        return false;
    };
    if relative == Path::new(ROOT_IGNORE_FILE) {
        return true;
    }
    let dir = is_dir(entry);
    let excluded = rules.matches(relative, dir);
    #[cfg(feature = "logging")]
    {
        if excluded && dir {
            tracing::debug!("Pruning directory {}", relative.display());
        } else if excluded {
            tracing::debug!("Ignoring {}", relative.display());
        }
    }
    excluded
}
/// Walks `root` and writes a record to `sink` for every file that survives
/// `rules` and `filter`. Returns the number of records written.
///
/// The first walk, read or write error ends the run. Records written before
/// it stay in `sink`.
pub fn emit_tree<W: Write>(
    root: &Path,
    rules: RuleSet,
    filter: &ExtensionFilter,
    sink: &mut W,
) -> Result<usize, FlatcatError> {
    emit_tree_skipping(root, rules, filter, sink, None)
}
fn emit_tree_skipping<W: Write>(
    root: &Path,
    rules: RuleSet,
    filter: &ExtensionFilter,
    sink: &mut W,
    skip: Option<&Path>,
) -> Result<usize, FlatcatError> {
    let walker = Walker::new(root, rules);
    let mut emitter = Emitter::new(sink);
    for result in walker.inner {
        let entry = result?;
        if is_dir(&entry) {
            continue;
        }
        let path = entry.path();
        if !filter.allows(path) {
            #[cfg(feature = "logging")]
            tracing::debug!("Extension not selected: {}", path.display());
            continue;
        }
        if is_same_file(path, skip) {
            continue;
        }
        let relative = relative_name(&walker.root, path);
        let content = fs::read(path).map_err(|e| FlatcatError::read(path, e))?;
        emitter
            .write_record(&relative, &content)
            .map_err(FlatcatError::Write)?;
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Emitted #{} {} ({} bytes)",
            emitter.records(),
            relative,
            content.len()
        );
    }
    let (_, records) = emitter.finish().map_err(FlatcatError::Write)?;
    Ok(records)
}
fn relative_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    // Walking a single file yields the file itself at depth 0.
    if relative.as_os_str().is_empty() {
        return path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    display_relative(relative)
}
fn is_same_file(path: &Path, other: Option<&Path>) -> bool {
    let Some(other) = other else {
        return false;
    };
    if path.file_name() != other.file_name() {
        return false;
    }
    fs::canonicalize(path).is_ok_and(|p| p == other)
}
/// Runs a full pass: compiles the ignore rules, creates the output file and
/// writes every selected file under `options.root` into it.
pub fn flatcat(options: FlatcatOptions) -> Result<RunSummary, FlatcatError> {
    #[cfg(feature = "logging")]
    tracing::info!("Starting flatcat with root: {}", options.root.display());
    let rules = RuleSet::compile(&options.root, &options.exclusions_file)?;
    let filter = ExtensionFilter::from_csv(&options.extensions);
    #[cfg(feature = "logging")]
    tracing::debug!(
        "{} ignore rules, {} selected extensions",
        rules.len(),
        filter.len()
    );
    let file = File::create(&options.output).map_err(|e| FlatcatError::OutputCreate {
        path: options.output.clone(),
        source: e,
    })?;
    // The output may sit inside the walked tree; it must not be read back.
    let own_output = fs::canonicalize(&options.output).ok();
    let mut sink = BufWriter::new(file);
    let files_written =
        emit_tree_skipping(&options.root, rules, &filter, &mut sink, own_output.as_deref())?;
    #[cfg(feature = "logging")]
    tracing::info!(
        "Wrote {} files to {}",
        files_written,
        options.output.display()
    );
    Ok(RunSummary {
        output: options.output,
        files_written,
    })
}
