//! Storage for loaded source files, indexed by [`FileId`].

use crate::file_id::FileId;
use crate::resolved_span::ResolvedSpan;
use crate::source_file::SourceFile;
use crate::span::Span;
use std::fs;
use std::path::Path;

/// An error encountered while loading a source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that failed to load.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A database of loaded source files.
///
/// Files are assigned a [`FileId`] in the order they are added, and can be
/// looked up by ID to resolve [`Span`]s back to file content and
/// line/column coordinates.
#[derive(Clone, Debug, Default)]
pub struct SourceDb {
    files: Vec<SourceFile>,
}

impl SourceDb {
    /// Creates an empty source database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a file from disk and adds it to the database, returning its
    /// assigned [`FileId`].
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<FileId, SourceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(self.add_source(path, content))
    }

    /// Adds already-loaded source text to the database, returning its
    /// assigned [`FileId`].
    pub fn add_source(&mut self, path: impl AsRef<Path>, content: String) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(SourceFile::new(path, content));
        id
    }

    /// Looks up a loaded file by its [`FileId`].
    pub fn get_file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.as_raw() as usize)
    }

    /// Resolves a [`Span`] to a path and 1-indexed line/column coordinates.
    ///
    /// Returns `None` if the span's file is not present in this database
    /// (including the dummy span).
    pub fn resolve_span(&self, span: Span) -> Option<ResolvedSpan> {
        let file = self.get_file(span.file)?;
        let (line, column) = file.line_col(span.start);
        Some(ResolvedSpan {
            path: file.path().to_path_buf(),
            line,
            column,
        })
    }

    /// Returns the source line containing the start of the given span, if
    /// the file is present in this database.
    pub fn snippet(&self, span: Span) -> Option<&str> {
        let file = self.get_file(span.file)?;
        Some(file.snippet(span.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_resolve() {
        let mut db = SourceDb::new();
        let id = db.add_source("netlist.v", "wire a;\nassign a = b;".to_string());
        let span = Span::new(id, 8, 20);
        let resolved = db.resolve_span(span).unwrap();
        assert_eq!(resolved.line, 2);
        assert_eq!(resolved.column, 1);
        assert_eq!(resolved.path.to_str().unwrap(), "netlist.v");
    }

    #[test]
    fn ids_increment_in_load_order() {
        let mut db = SourceDb::new();
        let a = db.add_source("a.v", "x".to_string());
        let b = db.add_source("b.v", "y".to_string());
        assert_eq!(a.as_raw(), 0);
        assert_eq!(b.as_raw(), 1);
    }

    #[test]
    fn resolve_dummy_span_is_none() {
        let db = SourceDb::new();
        assert!(db.resolve_span(Span::DUMMY).is_none());
    }

    #[test]
    fn snippet_roundtrip() {
        let mut db = SourceDb::new();
        let id = db.add_source("a.v", "first\nsecond\nthird".to_string());
        let span = Span::new(id, 6, 12);
        assert_eq!(db.snippet(span), Some("second"));
    }

    #[test]
    fn load_missing_file_errors() {
        let mut db = SourceDb::new();
        let err = db.load_file("/nonexistent/path/does-not-exist.v");
        assert!(err.is_err());
    }
}
