use std::path::PathBuf;
/// Name of the output file, written relative to the current directory.
pub const OUTPUT_FILE_NAME: &str = "flatcat_output.txt";
/// Default location of the secondary ignore file.
pub const DEFAULT_EXCLUSIONS_FILE: &str = "exclusions.txt";
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatcatOptions {
    pub root: PathBuf,
    pub exclusions_file: PathBuf,
    /// Comma-separated extensions without dots. Empty means every file.
    pub extensions: String,
    pub output: PathBuf,
}
impl Default for FlatcatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclusions_file: PathBuf::from(DEFAULT_EXCLUSIONS_FILE),
            extensions: String::new(),
            output: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }
}
#[derive(Debug, Default)]
pub struct FlatcatBuilder {
    options: FlatcatOptions,
}
impl FlatcatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: FlatcatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn exclusions_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.exclusions_file = path.into();
        self
    }
    pub fn extensions(mut self, csv: impl Into<String>) -> Self {
        self.options.extensions = csv.into();
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn build(self) -> FlatcatOptions {
        self.options
    }
}
