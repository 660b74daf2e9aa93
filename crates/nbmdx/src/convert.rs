//! Notebook to MDX assembly.

use std::fs;
use std::path::{Path, PathBuf};

use crate::code::{DEFAULT_LANGUAGE, render_code_source};
use crate::error::{Error, Result};
use crate::markdown::{DEFAULT_WRAP_WIDTH, render_markdown_cell};
use crate::notebook::{Cell, Notebook};
use crate::outputs::render_code_outputs;

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Column markdown prose is wrapped at
    pub wrap_width: usize,

    /// Fence language for code cells without a `%%` magic
    pub default_language: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Converts notebooks to MDX documents.
#[derive(Debug, Clone, Default)]
pub struct MdxConverter {
    options: ConvertOptions,
}

impl MdxConverter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a notebook, concatenating cell fragments in document order.
    pub fn convert(&self, notebook: &Notebook) -> String {
        let mut mdx = String::new();
        for (index, cell) in notebook.cells.iter().enumerate() {
            mdx.push_str(&self.convert_cell(index, cell));
        }
        mdx
    }

    /// Render one cell.
    pub fn convert_cell(&self, index: usize, cell: &Cell) -> String {
        match cell {
            Cell::Markdown(cell) => {
                tracing::debug!(index, "Rendering markdown cell");
                render_markdown_cell(cell.source.as_str(), self.options.wrap_width)
            }
            Cell::Code(cell) => {
                tracing::debug!(index, outputs = cell.outputs.len(), "Rendering code cell");
                let mut mdx =
                    render_code_source(cell.source.as_str(), &self.options.default_language);
                mdx.push_str(&render_code_outputs(&cell.outputs));
                mdx
            }
            // Raw cells and future cell kinds contribute nothing, so a notebook
            // using them still converts.
            Cell::Unknown => {
                tracing::debug!(index, "Skipping unsupported cell");
                String::new()
            }
        }
    }

    /// Read a notebook, convert it and write the MDX document.
    ///
    /// Returns the number of cells in the notebook.
    pub fn convert_file(
        &self,
        ipynb_path: impl AsRef<Path>,
        mdx_path: impl AsRef<Path>,
    ) -> Result<usize> {
        let ipynb_path = ipynb_path.as_ref();
        let mdx_path = mdx_path.as_ref();

        let notebook = Notebook::read_from_file(ipynb_path)?;
        let mdx = self.convert(&notebook);

        fs::write(mdx_path, mdx).map_err(|e| Error::Write {
            path: mdx_path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::info!(
            "Converted {} → {} ({} cells)",
            ipynb_path.display(),
            mdx_path.display(),
            notebook.cells.len()
        );

        Ok(notebook.cells.len())
    }
}

/// Convert a notebook with default options.
pub fn convert(notebook: &Notebook) -> String {
    MdxConverter::default().convert(notebook)
}

/// Convert an `.ipynb` file to an `.mdx` file with default options.
pub fn convert_file(ipynb_path: impl AsRef<Path>, mdx_path: impl AsRef<Path>) -> Result<usize> {
    MdxConverter::default().convert_file(ipynb_path, mdx_path)
}

/// Get the default `.mdx` path for a notebook.
pub fn default_mdx_path(ipynb_path: impl AsRef<Path>) -> PathBuf {
    ipynb_path.as_ref().with_extension("mdx")
}
