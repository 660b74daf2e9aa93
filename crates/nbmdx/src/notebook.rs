//! Jupyter notebook (.ipynb) model.
//!
//! Deserializes nbformat v4 JSON into cells and outputs the converter can
//! dispatch on. Cell and output kinds we don't render still parse, into
//! explicit `Unknown` variants, so newer notebooks don't fail to load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Media type of plain text output.
pub const TEXT_PLAIN: &str = "text/plain";

/// Media type of base64-encoded PNG output.
pub const IMAGE_PNG: &str = "image/png";

/// A Jupyter notebook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    /// Notebook cells, in document order
    pub cells: Vec<Cell>,

    /// Notebook metadata (kernelspec, language_info, ...)
    #[serde(default)]
    pub metadata: Value,

    /// Format version
    pub nbformat: u32,

    /// Minor format version
    #[serde(default)]
    pub nbformat_minor: u32,
}

#[derive(Deserialize)]
struct FormatVersion {
    nbformat: u32,
}

impl Notebook {
    /// Create an empty v4 notebook.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            metadata: Value::Object(Map::new()),
            nbformat: 4,
            nbformat_minor: 5,
        }
    }

    /// Parse a notebook from its JSON text.
    ///
    /// Only nbformat 4 and later is accepted; v3 notebooks keep their cells
    /// under `worksheets` and are rejected with [`Error::InvalidNotebook`].
    pub fn from_json(json: &str) -> Result<Self> {
        let version: FormatVersion = serde_json::from_str(json)?;
        if version.nbformat < 4 {
            return Err(Error::InvalidNotebook(format!(
                "nbformat {} is not supported (need 4 or later)",
                version.nbformat
            )));
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Read a notebook from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

/// A notebook cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// Markdown prose
    Markdown(MarkdownCell),

    /// Executable code with its recorded outputs
    Code(CodeCell),

    /// Any other cell kind (`raw`, or kinds added after nbformat 4.5)
    #[serde(other)]
    Unknown,
}

/// A markdown cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownCell {
    pub source: MultilineString,

    #[serde(default)]
    pub metadata: Value,
}

/// A code cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeCell {
    pub source: MultilineString,

    pub outputs: Vec<Output>,

    #[serde(default)]
    pub execution_count: Option<u32>,

    #[serde(default)]
    pub metadata: Value,
}

impl Cell {
    /// Build a markdown cell.
    pub fn markdown(source: impl Into<String>) -> Self {
        Cell::Markdown(MarkdownCell {
            source: MultilineString::from(source.into()),
            metadata: Value::Object(Map::new()),
        })
    }

    /// Build a code cell with the given outputs.
    pub fn code(source: impl Into<String>, outputs: Vec<Output>) -> Self {
        Cell::Code(CodeCell {
            source: MultilineString::from(source.into()),
            outputs,
            execution_count: None,
            metadata: Value::Object(Map::new()),
        })
    }
}

/// A recorded cell output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "output_type")]
pub enum Output {
    /// Standard output/error
    #[serde(rename = "stream")]
    Stream(StreamOutput),

    /// Rich display data
    #[serde(rename = "display_data")]
    DisplayData(DataOutput),

    /// Value of the last expression in the cell
    #[serde(rename = "execute_result")]
    ExecuteResult(DataOutput),

    /// Raised exception
    #[serde(rename = "error")]
    Error(ErrorOutput),

    /// Output kinds this crate does not know about
    #[serde(other)]
    Unknown,
}

impl Output {
    /// Build a stream output.
    pub fn stream(name: impl Into<String>, text: impl Into<String>) -> Self {
        Output::Stream(StreamOutput {
            name: name.into(),
            text: MultilineString::from(text.into()),
        })
    }

    /// Build a `display_data` output from a mime bundle.
    pub fn display_data(data: MimeBundle) -> Self {
        Output::DisplayData(DataOutput {
            data,
            metadata: Value::Object(Map::new()),
            execution_count: None,
        })
    }

    /// The mime bundle, for outputs that carry one.
    pub fn data(&self) -> Option<&MimeBundle> {
        match self {
            Output::DisplayData(output) | Output::ExecuteResult(output) => Some(&output.data),
            Output::Stream(_) | Output::Error(_) | Output::Unknown => None,
        }
    }
}

/// A stream output (`stdout` / `stderr`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamOutput {
    pub name: String,
    pub text: MultilineString,
}

/// An output carrying a mime bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataOutput {
    pub data: MimeBundle,

    #[serde(default)]
    pub metadata: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<u32>,
}

/// An error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    pub ename: String,
    pub evalue: String,
    #[serde(default)]
    pub traceback: Vec<String>,
}

/// Media-type keyed representations of one output, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MimeBundle(Map<String, Value>);

/// A single representation inside a [`MimeBundle`].
#[derive(Debug, Clone, PartialEq)]
pub enum MimeData<'a> {
    /// A string, or a list of strings joined together
    Text(String),
    /// Anything else (JSON payloads, widget state, ...)
    Other(&'a Value),
}

impl MimeBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Add a representation, keeping insertion order.
    pub fn insert(&mut self, mime_type: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(mime_type.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, mime_type: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(mime_type, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate representations in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MimeData<'_>)> {
        self.0.iter().map(|(key, value)| {
            let data = match join_lines(value) {
                Some(text) => MimeData::Text(text),
                None => MimeData::Other(value),
            };
            (key.as_str(), data)
        })
    }
}

/// Join a string or list-of-strings JSON value.
fn join_lines(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str())
            .collect::<Option<Vec<_>>>()
            .map(|lines| lines.concat()),
        _ => None,
    }
}

/// Notebook text that may be stored as one string or a list of lines.
///
/// nbformat allows both; lists are joined verbatim since each entry keeps its
/// own trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MultilineRepr", into = "MultilineRepr")]
pub struct MultilineString(String);

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MultilineRepr {
    Joined(String),
    Lines(Vec<String>),
}

impl MultilineString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<MultilineRepr> for MultilineString {
    fn from(repr: MultilineRepr) -> Self {
        match repr {
            MultilineRepr::Joined(s) => Self(s),
            MultilineRepr::Lines(lines) => Self(lines.concat()),
        }
    }
}

impl From<MultilineString> for MultilineRepr {
    fn from(s: MultilineString) -> Self {
        MultilineRepr::Joined(s.0)
    }
}

impl From<String> for MultilineString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MultilineString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for MultilineString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_cells_and_outputs() {
        let json = json!({
            "nbformat": 4,
            "nbformat_minor": 5,
            "metadata": {},
            "cells": [
                {"cell_type": "markdown", "metadata": {}, "source": ["# Title\n", "text"]},
                {
                    "cell_type": "code",
                    "metadata": {},
                    "execution_count": 1,
                    "source": "print(1)",
                    "outputs": [
                        {"output_type": "stream", "name": "stdout", "text": ["1\n"]},
                        {
                            "output_type": "execute_result",
                            "execution_count": 1,
                            "metadata": {},
                            "data": {"text/plain": ["1"]}
                        }
                    ]
                },
                {"cell_type": "raw", "metadata": {}, "source": "raw"}
            ]
        })
        .to_string();

        let notebook = Notebook::from_json(&json).unwrap();
        assert_eq!(notebook.cells.len(), 3);

        match &notebook.cells[0] {
            Cell::Markdown(cell) => assert_eq!(cell.source.as_str(), "# Title\ntext"),
            other => panic!("Expected markdown cell, got {:?}", other),
        }

        match &notebook.cells[1] {
            Cell::Code(cell) => {
                assert_eq!(cell.source.as_str(), "print(1)");
                assert_eq!(cell.execution_count, Some(1));
                assert!(matches!(&cell.outputs[0], Output::Stream(s) if s.text.as_str() == "1\n"));
                assert!(cell.outputs[1].data().is_some());
            }
            other => panic!("Expected code cell, got {:?}", other),
        }

        assert!(matches!(notebook.cells[2], Cell::Unknown));
    }

    #[test]
    fn test_unknown_output_type() {
        let output: Output =
            serde_json::from_value(json!({"output_type": "update_display_data"})).unwrap();
        assert!(matches!(output, Output::Unknown));
        assert!(output.data().is_none());
    }

    #[test]
    fn test_error_output_has_no_data() {
        let output: Output = serde_json::from_value(json!({
            "output_type": "error",
            "ename": "ValueError",
            "evalue": "bad",
            "traceback": []
        }))
        .unwrap();
        assert!(matches!(output, Output::Error(_)));
        assert!(output.data().is_none());
    }

    #[test]
    fn test_mime_bundle_keeps_document_order() {
        let bundle: MimeBundle = serde_json::from_str(
            r#"{"image/png": "iVBOR", "text/plain": ["<Figure", " size>"], "application/json": {"a": 1}}"#,
        )
        .unwrap();

        let entries: Vec<_> = bundle.iter().collect();
        assert_eq!(entries[0], (IMAGE_PNG, MimeData::Text("iVBOR".to_string())));
        assert_eq!(
            entries[1],
            (TEXT_PLAIN, MimeData::Text("<Figure size>".to_string()))
        );
        assert!(matches!(entries[2], ("application/json", MimeData::Other(_))));
    }

    #[test]
    fn test_missing_outputs_is_an_error() {
        let json = r#"{"nbformat": 4, "cells": [{"cell_type": "code", "source": "x"}]}"#;
        assert!(matches!(Notebook::from_json(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_rejects_nbformat_3() {
        let json = r#"{"nbformat": 3, "nbformat_minor": 0, "worksheets": []}"#;
        assert!(matches!(
            Notebook::from_json(json),
            Err(Error::InvalidNotebook(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = Notebook::read_from_file("/nonexistent/notebook.ipynb").unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
