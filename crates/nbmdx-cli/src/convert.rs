//! Convert command implementation for nbmdx CLI.
//!
//! Converts .ipynb notebooks to .mdx pages.

use std::path::{Path, PathBuf};
use std::time::Instant;

use nbmdx::{ConvertOptions, MdxConverter, Notebook, default_mdx_path};

use crate::colors;

/// Execute the convert command.
pub fn execute(
    notebook_paths: &[String],
    output_path: Option<&str>,
    stdout: bool,
    options: ConvertOptions,
) -> anyhow::Result<()> {
    if output_path.is_some() && notebook_paths.len() > 1 {
        anyhow::bail!("--output can only be used with a single notebook");
    }

    for notebook_path in notebook_paths {
        if !Path::new(notebook_path).exists() {
            anyhow::bail!("Notebook not found: {}", notebook_path);
        }
    }

    let converter = MdxConverter::new(options);

    if stdout {
        for notebook_path in notebook_paths {
            let notebook = Notebook::read_from_file(notebook_path)?;
            print!("{}", converter.convert(&notebook));
        }
        return Ok(());
    }

    println!(
        "\n{}nbmdx{} - Converting to MDX",
        colors::BOLD,
        colors::RESET
    );
    println!("{}", "─".repeat(50));

    for notebook_path in notebook_paths {
        let ipynb_path = PathBuf::from(notebook_path);
        let mdx_path = output_path
            .map(PathBuf::from)
            .unwrap_or_else(|| default_mdx_path(&ipynb_path));

        convert_one(&converter, &ipynb_path, &mdx_path)?;
    }

    Ok(())
}

/// Convert a single file, printing progress.
fn convert_one(converter: &MdxConverter, ipynb_path: &Path, mdx_path: &Path) -> anyhow::Result<()> {
    let start = Instant::now();

    print!(
        "  {} → {} ... ",
        ipynb_path.file_name().unwrap_or_default().to_string_lossy(),
        mdx_path.file_name().unwrap_or_default().to_string_lossy()
    );
    colors::flush_stdout();

    let cells = converter.convert_file(ipynb_path, mdx_path)?;

    let elapsed = start.elapsed();
    println!(
        "{}✓{} {} cells ({:.2}ms)",
        colors::GREEN,
        colors::RESET,
        cells,
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}
