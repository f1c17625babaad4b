mod blocks;
mod report;

use anyhow::{Context, Result};
use blocks::BlockFile;
use clap::{Parser, Subcommand, ValueEnum};
use onepage_pdf::PageSize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "onepage",
    about = "Render single-page PDF reports",
    version,
    author
)]
struct Cli {
    /// Page size used when the content does not specify one
    #[arg(long, value_enum, default_value_t = PaperSize::Letter, global = true)]
    page_size: PaperSize,

    /// Page width in points (overrides --page-size)
    #[arg(long, global = true, requires = "height")]
    width: Option<f64>,

    /// Page height in points (overrides --page-size)
    #[arg(long, global = true, requires = "width")]
    height: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperSize {
    Letter,
    A4,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in app summary report
    Summary {
        /// Output file path
        #[arg(short, long, default_value = report::DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Render a JSON block file
    Render {
        /// Input JSON file
        input: PathBuf,

        /// Output file path (defaults to the input path with a .pdf extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    fn page_size(&self) -> PageSize {
        match (self.width, self.height) {
            (Some(width), Some(height)) => PageSize::new(width, height),
            _ => match self.page_size {
                PaperSize::Letter => PageSize::letter(),
                PaperSize::A4 => PageSize::a4(),
            },
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onepage=info,onepage_pdf=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let page_size = cli.page_size();

    match cli.command {
        Commands::Summary { output } => {
            let bytes = report::build_summary(page_size)?;
            let written = write_output(&output, &bytes)?;
            println!("{}", written.display());
        }

        Commands::Render { input, output } => {
            let json = fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let file = BlockFile::from_json(&json)
                .with_context(|| format!("invalid block file {}", input.display()))?;

            let bytes = file.render(page_size)?;
            let output = output.unwrap_or_else(|| input.with_extension("pdf"));
            let written = write_output(&output, &bytes)?;
            println!("{}", written.display());
        }
    }

    Ok(())
}

/// Writes the finished file, creating parent directories, and returns its
/// absolute path.
fn write_output(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;

    let absolute = fs::canonicalize(path)?;
    info!(path = %absolute.display(), bytes = bytes.len(), "wrote PDF");
    Ok(absolute)
}
