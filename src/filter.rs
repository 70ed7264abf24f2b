use std::collections::BTreeSet;
use std::path::Path;

/// Set of lowercase, dot-stripped extensions a file must have to be emitted.
///
/// An empty filter allows every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Parses a comma-separated list such as `"rs, .TOML,md"`.
    pub fn from_csv(csv: &str) -> Self {
        let extensions = csv
            .split(',')
            .map(|ext| {
                let ext = ext.trim();
                ext.strip_prefix('.').unwrap_or(ext).trim().to_lowercase()
            })
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.extensions.contains(&ext.to_lowercase())
    }

    pub fn allows(&self, path: &Path) -> bool {
        self.is_empty() || self.contains(&extension_of(path))
    }
}

/// Lowercased text after the last `.` of the file name, or empty if there is none.
///
/// Unlike [`Path::extension`], a dotfile such as `.env` yields `env`.
pub(crate) fn extension_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}
