//! Serde model of the notebook JSON.
//!
//! Only the fields the transformer reads are typed, everything else is kept
//! in `extra` maps and written back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CellType {
    Markdown,
    Code,
    /// `raw` or any cell type unknown to us.
    Other(String),
}

impl From<String> for CellType {
    fn from(cell_type: String) -> Self {
        match cell_type.as_str() {
            "markdown" => Self::Markdown,
            "code" => Self::Code,
            _ => Self::Other(cell_type),
        }
    }
}

impl From<CellType> for String {
    fn from(cell_type: CellType) -> Self {
        match cell_type {
            CellType::Markdown => "markdown".into(),
            CellType::Code => "code".into(),
            CellType::Other(other) => other,
        }
    }
}

/// Cell source, either a list of lines or a single multi-line string.
///
/// Each line keeps its trailing `\n`, the last line usually has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Lines(Vec<String>),
    Text(String),
}

impl Default for Source {
    fn default() -> Self {
        Self::Lines(Vec::new())
    }
}

impl Source {
    pub fn first_line(&self) -> Option<&str> {
        match self {
            Self::Lines(lines) => lines.first().map(String::as_str),
            Self::Text(text) => text.split_inclusive('\n').next(),
        }
    }

    pub fn lines(&self) -> Cow<'_, [String]> {
        match self {
            Self::Lines(lines) => Cow::Borrowed(lines.as_slice()),
            Self::Text(text) => Cow::Owned(split_lines(text)),
        }
    }

    /// Returns the lines for in-place editing, converting a single string
    /// source into the list form first.
    pub fn lines_mut(&mut self) -> &mut Vec<String> {
        if let Self::Text(text) = self {
            *self = Self::Lines(split_lines(text));
        }

        match self {
            Self::Lines(lines) => lines,
            Self::Text(_) => unreachable!("text source has just been converted to lines"),
        }
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(ToOwned::to_owned).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub source: Source,
    /// `id`, `outputs`, `execution_count`, `attachments`, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    /// Constructs a new markdown cell with empty metadata.
    pub fn markdown(lines: Vec<String>) -> Self {
        Self {
            cell_type: CellType::Markdown,
            metadata: Map::new(),
            source: Source::Lines(lines),
            extra: Map::new(),
        }
    }

    pub fn is_markdown(&self) -> bool {
        self.cell_type == CellType::Markdown
    }

    pub fn first_line(&self) -> Option<&str> {
        self.source.first_line()
    }

    /// Replaces the first source line, no-op for an empty source.
    pub fn replace_first_line(&mut self, line: String) {
        if let Some(first) = self.source.lines_mut().first_mut() {
            *first = line;
        }
    }
}

/// The whole `.ipynb` JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookDocument {
    pub cells: Vec<Cell>,
    /// `metadata`, `nbformat`, `nbformat_minor`, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
