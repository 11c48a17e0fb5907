//! shdoc — view documentation embedded in shell script comments.
//!
//! - `shdoc script.sh` prints every documented entity
//! - `shdoc script.sh pattern` prints only entities whose name contains `pattern`
//! - `shdoc -f json -o docs.json script.sh` writes the document as JSON

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};
use shdoc::render;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when the script parses but documents nothing.
const EXIT_NOT_DOCUMENTED: u8 = 2;

#[derive(Parser)]
#[command(
    name = "shdoc",
    version,
    about = "View and export documentation from annotated shell scripts"
)]
struct Cli {
    /// Shell script to read
    file: PathBuf,

    /// Only show constants, variables and methods whose name contains this
    pattern: Option<String>,

    /// Override the document title (defaults to the file name)
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut doc = shdoc::parse(&cli.file)
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;

    if !doc.is_valid() {
        warn!("file {} doesn't contain documentation", cli.file.display());
        return Ok(ExitCode::from(EXIT_NOT_DOCUMENTED));
    }

    if let Some(name) = cli.name {
        doc.title = name;
    }

    debug!(
        "{}: {} constants, {} variables, {} methods",
        doc.title,
        doc.constants.len(),
        doc.variables.len(),
        doc.methods.len()
    );

    let renderer = render::create_renderer(&cli.format, cli.pattern.as_deref())?;
    let output = renderer.render(&doc)?;

    match cli.output {
        Some(path) => fs::write(&path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", output),
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
