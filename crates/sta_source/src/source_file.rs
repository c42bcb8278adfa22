//! A single loaded source file with precomputed line-start offsets.

use sta_common::ContentHash;
use std::path::{Path, PathBuf};

/// A loaded source file, with its content and precomputed line-start offsets
/// for fast byte-offset-to-line/column resolution.
#[derive(Clone, Debug)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
    content_hash: ContentHash,
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a new `SourceFile` from a path and its content.
    pub fn new(path: impl AsRef<Path>, content: String) -> Self {
        let content_hash = ContentHash::from_bytes(content.as_bytes());
        let line_starts = compute_line_starts(&content);
        Self {
            path: path.as_ref().to_path_buf(),
            content,
            content_hash,
            line_starts,
        }
    }

    /// The file's path as it was provided when loaded.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full text content of the file.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The content hash of the file, for change detection.
    pub fn content_hash(&self) -> ContentHash {
        self.content_hash
    }

    /// Resolves a byte offset to a 1-indexed `(line, column)` pair.
    ///
    /// The column is a 1-indexed byte offset within the line. Offsets past
    /// the end of the content resolve to the last line.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let line_start = self.line_starts[line_idx];
        let line = (line_idx as u32) + 1;
        let col = offset - line_start + 1;
        (line, col)
    }

    /// Returns the text of the line containing the given byte offset, without
    /// its trailing newline.
    pub fn snippet(&self, offset: u32) -> &str {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let start = self.line_starts[line_idx] as usize;
        let end = self.line_starts
            .get(line_idx + 1)
            .map(|&e| e as usize)
            .unwrap_or(self.content.len());
        self.content[start..end].trim_end_matches(['\n', '\r'])
    }
}

fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, b) in content.bytes().enumerate() {
        if b == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}
