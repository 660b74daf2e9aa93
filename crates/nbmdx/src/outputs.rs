//! Code cell output rendering.
//!
//! | Output                        | MDX                                   |
//! |-------------------------------|---------------------------------------|
//! | `text/plain` data             | escaped text, blank line              |
//! | `image/png` data              | `![](data:image/png;base64,...)`      |
//! | stream containing `WARNING`   | `:::warning` admonition               |
//! | anything else                 | nothing                               |

use crate::notebook::{IMAGE_PNG, MimeBundle, MimeData, Output, TEXT_PLAIN};

/// Marker that promotes a stream output to a warning callout.
const WARNING_MARKER: &str = "WARNING";

/// Render a code cell's outputs in order.
pub fn render_code_outputs(outputs: &[Output]) -> String {
    let mut mdx = String::new();
    for output in outputs {
        render_output(output, &mut mdx);
    }
    mdx
}

fn render_output(output: &Output, mdx: &mut String) {
    match output {
        Output::DisplayData(output) | Output::ExecuteResult(output) => {
            render_data(&output.data, mdx);
        }
        Output::Stream(stream) => {
            let text = stream.text.as_str();
            if text.contains(WARNING_MARKER) {
                mdx.push_str(&format!(":::warning\n\n{text}\n:::\n\n"));
            }
        }
        // Tracebacks and output kinds from newer nbformat versions are left
        // out of the page rather than failing the conversion.
        Output::Error(_) | Output::Unknown => {
            tracing::debug!("Skipping output without renderable data");
        }
    }
}

fn render_data(data: &MimeBundle, mdx: &mut String) {
    for (mime_type, value) in data.iter() {
        match (mime_type, value) {
            (TEXT_PLAIN, MimeData::Text(text)) => {
                mdx.push_str(&sanitize_text(&text));
                mdx.push_str("\n\n");
            }
            (IMAGE_PNG, MimeData::Text(payload)) => {
                mdx.push_str(&format!("![](data:image/png;base64,{payload})\n"));
            }
            // HTML, SVG, JSON, widget state, ...
            _ => tracing::debug!(mime_type, "Ignoring unsupported output representation"),
        }
    }
}

/// Escape angle brackets so MDX doesn't read output text as JSX tags.
pub fn sanitize_text(text: &str) -> String {
    text.replace('<', "\\<").replace('>', "\\>")
}
