//! Markdown cell rendering.

use comrak::{Options, markdown_to_commonmark};

use crate::preamble::extract_preamble;

/// Column markdown paragraphs are wrapped at.
pub const DEFAULT_WRAP_WIDTH: usize = 88;

/// Render a markdown cell: preamble first, then the reformatted text and a
/// trailing newline.
pub fn render_markdown_cell(source: &str, wrap_width: usize) -> String {
    let split = extract_preamble(source);

    let mut mdx = split.preamble;
    mdx.push_str(&format_markdown(&split.source, wrap_width));
    mdx.push('\n');
    mdx
}

/// Reformat markdown into canonical CommonMark, wrapped at `wrap_width`.
///
/// Extensions cover what technical notebooks use: dollar math, footnotes,
/// tables, strikethrough, task lists and YAML front matter.
pub fn format_markdown(text: &str, wrap_width: usize) -> String {
    let mut options = Options::default();
    options.extension.math_dollars = true;
    options.extension.footnotes = true;
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options.render.width = wrap_width;

    markdown_to_commonmark(text, &options)
}
