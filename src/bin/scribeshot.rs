//! CLI binary for scribeshot.
//!
//! A thin shim over the library crate: parse flags, bootstrap the AWS
//! session, run the extraction, print lines to stdout and diagnostics to
//! stderr.

use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use scribeshot::pipeline::render::{summary_lines, write_lines};
use scribeshot::{
    extract, ExtractionConfig, ExtractionProgressCallback, ProgressCallback, ScribeshotError,
    Session, TextractDetector,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Prints the `Processing file` diagnostic and spins while Textract works.
///
/// indicatif draws to stderr and stays silent when stderr is not a terminal,
/// so piped or redirected runs see only the plain diagnostic lines.
struct CliProgressCallback {
    spinner: ProgressBar,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}  ⏱ {elapsed}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
        );
        Arc::new(Self { spinner })
    }
}

impl ExtractionProgressCallback for CliProgressCallback {
    fn on_document_loaded(&self, path: &Path, bytes: usize) {
        eprintln!("Processing file: {} ({} bytes)", path.display(), bytes);
    }

    fn on_request_start(&self) {
        self.spinner.set_message("Detecting text…");
        self.spinner.enable_steady_tick(Duration::from_millis(80));
    }

    fn on_request_complete(&self, block_count: usize, elapsed_ms: u64) {
        self.spinner.finish_and_clear();
        debug!("Textract returned {} blocks in {}ms", block_count, elapsed_ms);
    }

    fn on_request_error(&self, _error: &str) {
        self.spinner.finish_and_clear();
    }
}

/// Version as the tool has always reported it, with a leading `v`.
const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const AFTER_HELP: &str = r#"EXAMPLES:
  scribeshot document.pdf
  scribeshot --profile dev-account image.jpg
  scribeshot --region eu-west-1 --json scan.tiff > scan.json
  scribeshot --help

SUPPORTED FORMATS:
  PDF, JPG, JPEG, PNG, TIFF (up to 10 MiB; synchronous DetectDocumentText)

REGION RESOLUTION (first match wins):
  1. --region flag
  2. AWS_REGION environment variable
  3. [<profile>] section in ~/.aws/config
  4. [default] section in ~/.aws/config

COST:
  DetectDocumentText is billed at $0.0015 per page; the estimate is printed
  on stderr after every run.
"#;

/// Extract text from images and PDFs using AWS Textract.
#[derive(Parser, Debug)]
#[command(
    name = "scribeshot",
    version = VERSION,
    about = "scribeshot - AWS Textract CLI Tool",
    long_about = "Extract text from images and PDFs using AWS Textract. Each detected \
text line is printed to stdout in document order; region, file size, counts and the \
estimated cost go to stderr.",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Image or PDF to extract text from (exactly one).
    #[arg(value_name = "FILENAME")]
    files: Vec<PathBuf>,

    /// AWS profile to use (defaults to AWS SDK default behavior).
    #[arg(long)]
    profile: Option<String>,

    /// AWS region to use (defaults to profile/environment configuration).
    #[arg(long)]
    region: Option<String>,

    /// Print the extraction result as JSON instead of plain lines.
    #[arg(long, env = "SCRIBESHOT_JSON", value_parser = FalseyValueParser::new())]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "SCRIBESHOT_VERBOSE", value_parser = FalseyValueParser::new())]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with success; usage errors exit 1, not clap's 2.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Validate invocation ──────────────────────────────────────────────
    let filename = single_filename(&cli.files)?;
    // Only a confirmed absence stops here; other I/O errors surface from the read.
    if let Ok(false) = filename.try_exists() {
        return Err(ScribeshotError::FileNotFound {
            path: filename.to_path_buf(),
        }
        .into());
    }

    // ── Session ──────────────────────────────────────────────────────────
    let session = Session::bootstrap(cli.profile.as_deref(), cli.region.as_deref())
        .await
        .context("Error initializing AWS session")?;
    eprintln!("Using AWS region: {}", session.region());

    let detector = TextractDetector::new(&session);
    let config = ExtractionConfig::builder()
        .progress_callback(CliProgressCallback::new() as ProgressCallback)
        .build()
        .context("Invalid configuration")?;

    // ── Run extraction ───────────────────────────────────────────────────
    let output = extract(filename, &detector, &config)
        .await
        .context("Error processing document")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else {
        write_lines(&output.lines, io::stdout().lock()).context("Failed to write to stdout")?;
    }

    for line in summary_lines(&output.stats) {
        eprintln!("{line}");
    }

    Ok(())
}

/// Exactly one positional argument is accepted.
fn single_filename(files: &[PathBuf]) -> Result<&Path> {
    match files {
        [only] => Ok(only.as_path()),
        _ => anyhow::bail!("Please provide exactly one filename"),
    }
}
