//! Notebook to MDX conversion.
//!
//! Turns Jupyter `.ipynb` notebooks into MDX pages for a documentation site:
//! markdown cells are reformatted, code cells become line-numbered fences, and
//! recorded outputs become escaped text, inline images or warning callouts.
//!
//! # Architecture
//!
//! ```text
//! notebook.ipynb ───► Notebook ───► MdxConverter ───► notebook.mdx
//!                                        │
//!                     ┌──────────────────┼───────────────────┐
//!                     ▼                  ▼                   ▼
//!             render_markdown_cell  render_code_source  render_code_outputs
//!                     │
//!                     ▼
//!              extract_preamble
//! ```

mod code;
mod convert;
mod error;
mod markdown;
mod notebook;
mod outputs;
mod preamble;

pub use code::{DEFAULT_LANGUAGE, render_code_source};
pub use convert::{ConvertOptions, MdxConverter, convert, convert_file, default_mdx_path};
pub use error::{Error, Result};
pub use markdown::{DEFAULT_WRAP_WIDTH, format_markdown, render_markdown_cell};
pub use notebook::{
    Cell, CodeCell, DataOutput, ErrorOutput, IMAGE_PNG, MarkdownCell, MimeBundle, MimeData,
    MultilineString, Notebook, Output, StreamOutput, TEXT_PLAIN,
};
pub use outputs::{render_code_outputs, sanitize_text};
pub use preamble::{KATEX_IMPORT, Preamble, extract_preamble};
