use std::ops::Range;

use slotmap::DenseSlotMap;

pub mod span;

slotmap::new_key_type! {
    /// ID used to access input data in a [SourceFiles] collection
    pub struct FileId;
}

/// A map of [FileId]s to page range inputs, used for displaying diagnostics using span data
#[derive(Default)]
pub struct SourceFiles {
    map: DenseSlotMap<FileId, FileData>,
}

/// In-memory structure containing the full text of one input, with the byte offset of every line
/// start so that diagnostics can resolve locations quickly
struct FileData {
    name: String,
    text: String,
    lines: Vec<usize>,
}

impl SourceFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a named input and return the ID that diagnostics should reference it by
    pub fn add(&mut self, name: impl Into<String>, text: impl Into<String>) -> FileId {
        self.map.insert(FileData::new(name.into(), text.into()))
    }

    /// Get the text of a stored input, if the ID is still present
    pub fn text(&self, id: FileId) -> Option<&str> {
        self.map.get(id).map(|file| file.text.as_str())
    }

    pub fn name(&self, id: FileId) -> Option<&str> {
        self.map.get(id).map(|file| file.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn file(&self, id: FileId) -> Result<&FileData, codespan_reporting::files::Error> {
        self.map.get(id).ok_or(codespan_reporting::files::Error::FileMissing)
    }
}

impl FileData {
    /// Get the line number of the given byte position in the input
    fn line_of_offset(&self, offset: usize) -> usize {
        match self.lines.binary_search(&offset) {
            Ok(line) => line,
            Err(pos) => pos - 1,
        }
    }

    /// Get the byte range for the text contained in a given line number
    fn range_of_line(&self, line: usize) -> Result<Range<usize>, FileDataQueryError> {
        let start = *self.lines.get(line).ok_or_else(|| FileDataQueryError::LineTooLarge {
            err: line,
            max: self.line_max(),
        })?;

        let end = self.lines.get(line + 1).copied().unwrap_or(self.text.len());

        Ok(
            Range {
                start,
                end,
            }
        )
    }

    /// Get the last line number of this input
    fn line_max(&self) -> usize {
        self.lines.len() - 1
    }

    /// Create a new in-memory input from the given name and contents
    fn new(name: String, text: String) -> Self {
        let first_line = std::iter::once(0);
        let line_starts = text
            .char_indices()
            .filter_map(|(idx, ch)| (ch == '\n').then_some(idx + 1));

        let lines = first_line
            .chain(line_starts)
            .collect();

        Self {
            name,
            text,
            lines,
        }
    }
}

impl<'a> codespan_reporting::files::Files<'a> for &'a SourceFiles {
    type FileId = FileId;
    type Name = &'a str;
    type Source = &'a str;

    fn name(&'a self, id: Self::FileId) -> Result<Self::Name, codespan_reporting::files::Error> {
        Ok(&self.file(id)?.name)
    }

    fn source(&'a self, id: Self::FileId) -> Result<Self::Source, codespan_reporting::files::Error> {
        Ok(&self.file(id)?.text)
    }

    fn line_index(&'a self, id: Self::FileId, byte_index: usize) -> Result<usize, codespan_reporting::files::Error> {
        Ok(self.file(id)?.line_of_offset(byte_index))
    }

    fn line_range(&'a self, id: Self::FileId, line_index: usize) -> Result<std::ops::Range<usize>, codespan_reporting::files::Error> {
        self.file(id)?.range_of_line(line_index).map_err(Into::into)
    }
}

#[derive(Debug, thiserror::Error)]
enum FileDataQueryError {
    #[error("Line number {} too large for input with {} lines", err, max)]
    LineTooLarge {
        max: usize,
        err: usize,
    },
}

impl From<FileDataQueryError> for codespan_reporting::files::Error {
    fn from(value: FileDataQueryError) -> Self {
        match value {
            FileDataQueryError::LineTooLarge { err, max } => Self::LineTooLarge { given: err, max, },
        }
    }
}
