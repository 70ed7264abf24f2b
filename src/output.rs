//! Output record format.
//!
//! Each emitted file becomes its relative path on one line followed by its raw
//! content between two fence lines:
//!
//! ````text
//! src/main.rs
//! ```
//! fn main() {}
//! ```
//! ````
//!
//! Content is written byte for byte. Backticks inside it are not escaped.

use std::io::{self, Write};
use std::path::{Component, Path};

/// Fence line written before and after every file's content.
pub const FENCE: &str = "```";

/// Writes output records to a sink and counts them.
#[derive(Debug)]
pub struct Emitter<W: Write> {
    sink: W,
    records: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, records: 0 }
    }

    /// Writes one `(path, content)` record.
    ///
    /// A newline always precedes the closing fence, so it sits on its own line
    /// whether or not the content ends with one.
    pub fn write_record(&mut self, relative_path: &str, content: &[u8]) -> io::Result<()> {
        self.sink.write_all(relative_path.as_bytes())?;
        self.sink.write_all(b"\n")?;
        self.sink.write_all(FENCE.as_bytes())?;
        self.sink.write_all(b"\n")?;
        self.sink.write_all(content)?;
        self.sink.write_all(b"\n")?;
        self.sink.write_all(FENCE.as_bytes())?;
        self.sink.write_all(b"\n")?;
        self.records += 1;
        Ok(())
    }

    pub fn records(&self) -> usize {
        self.records
    }

    /// Flushes the sink and hands it back with the record count.
    pub fn finish(mut self) -> io::Result<(W, usize)> {
        self.sink.flush()?;
        Ok((self.sink, self.records))
    }
}

/// Renders a relative path with `/` separators on every platform.
pub fn display_relative(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
