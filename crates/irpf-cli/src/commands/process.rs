//! Process command - summarize the assets of a single declaration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use irpf_core::models::config::IrpfConfig;
use irpf_core::pdf::{PdfExtractor, PdfProcessor};
use irpf_core::{AssetsParser, DeclarationParser, DeclarationReport, IrpfError, PdfError};

use super::output::{format_report, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Leave the declarant block out of CSV and text output
    #[arg(long)]
    no_declarant: bool,

    /// Do not print extraction warnings
    #[arg(short, long)]
    quiet: bool,
}

/// Load configuration from `config_path`, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<IrpfConfig> {
    match config_path {
        Some(path) => Ok(IrpfConfig::from_file(Path::new(path))?),
        None => Ok(IrpfConfig::default()),
    }
}

/// Read the text of a declaration from a PDF or a text file.
pub fn read_document_text(path: &Path, config: &IrpfConfig) -> irpf_core::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = match extension.as_str() {
        "pdf" => {
            let data = fs::read(path)?;
            let mut extractor = PdfExtractor::new();
            extractor.load(&data)?;
            debug!("PDF has {} pages", extractor.page_count());

            let text = extractor.extract_text()?;
            let length = text.trim().len();
            if length < config.pdf.min_text_length {
                return Err(PdfError::InsufficientText { length }.into());
            }
            text
        }
        "txt" | "text" => fs::read_to_string(path)?,
        _ => return Err(IrpfError::UnsupportedFormat(extension)),
    };

    Ok(text)
}

/// Read and parse one declaration file.
pub fn process_file(
    path: &Path,
    parser: &AssetsParser,
    config: &IrpfConfig,
) -> irpf_core::Result<DeclarationReport> {
    let text = read_document_text(path, config)?;
    Ok(parser.parse(&text)?)
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if args.no_declarant {
        config.export.include_declarant = false;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );

    pb.set_message("Reading document...");
    let text = read_document_text(&args.input, &config)?;

    pb.set_message("Summing assets per (group, code)...");
    let parser = AssetsParser::from_config(&config.extraction);
    let report = parser.parse(&text)?;

    pb.finish_and_clear();

    if !args.quiet {
        for warning in &report.warnings {
            eprintln!("{} {}", style("!").yellow(), warning);
        }
    }

    let output = format_report(&report, args.format, &config.export)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
