//! nbmdx CLI - Convert Jupyter notebooks to MDX pages.

mod colors;
mod convert;

use clap::{Parser, Subcommand};
use nbmdx::{ConvertOptions, DEFAULT_LANGUAGE, DEFAULT_WRAP_WIDTH};

#[derive(Parser)]
#[command(name = "nbmdx")]
#[command(about = "Convert Jupyter notebooks to MDX pages")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert .ipynb notebooks to .mdx
    Convert {
        /// Paths to the notebooks (.ipynb files)
        #[arg(required = true)]
        notebooks: Vec<String>,

        /// Output path (single notebook only; default: next to the notebook)
        #[arg(short, long)]
        output: Option<String>,

        /// Column markdown prose is wrapped at
        #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
        wrap: usize,

        /// Fence language for code cells without a cell magic
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Print the MDX to stdout instead of writing files
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert {
            notebooks,
            output,
            wrap,
            language,
            stdout,
        } => {
            let options = ConvertOptions {
                wrap_width: wrap,
                default_language: language,
            };
            convert::execute(&notebooks, output.as_deref(), stdout, options)?;
        }
    }

    Ok(())
}
