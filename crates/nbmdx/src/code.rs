//! Code cell source rendering.

/// Language assumed for cells without a `%%` magic.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Prefix of a cell magic line such as `%%bash`.
const CELL_MAGIC: &str = "%%";

/// Fence a code cell's source as a line-numbered code block.
///
/// A `%%lang` magic on the first line selects the fence language and is
/// dropped from the body. Magics on later lines are plain code. Empty cells
/// render nothing.
pub fn render_code_source(source: &str, default_language: &str) -> String {
    if source.is_empty() {
        return String::new();
    }

    let mut lines = source.lines().peekable();
    let magic = lines
        .peek()
        .copied()
        .and_then(|first| first.strip_prefix(CELL_MAGIC));
    let language = match magic {
        Some(magic) => {
            lines.next();
            magic
        }
        None => default_language,
    };

    let mut mdx = format!("```{language} showLineNumbers\n");
    for line in lines {
        mdx.push_str(line);
        mdx.push('\n');
    }
    mdx.push_str("```\n\n");
    mdx
}
