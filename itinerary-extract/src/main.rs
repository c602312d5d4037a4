use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use itinerary_extract::markup::HtmlTokenSource;
use itinerary_extract::output::{OutputFormat, write_records};
use itinerary_extract::scan::{DocumentScanner, ScanConfig};

/// Extract travel segments from a saved booking confirmation page.
#[derive(Parser)]
#[command(name = "itinerary-extract", version)]
struct Cli {
    /// Path to the saved HTML page
    file: PathBuf,

    /// Output format
    #[arg(long, default_value = "text", value_enum)]
    format: OutputFormat,

    /// chrono format for the day label printed with each segment
    #[arg(long, default_value = "%a %d/%m")]
    day_format: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let file = match File::open(&cli.file) {
        Ok(file) => file,
        Err(e) => {
            error!(path = %cli.file.display(), error = %e, "cannot open booking page");
            return ExitCode::FAILURE;
        }
    };

    let config = ScanConfig::default().with_day_label_format(cli.day_format);
    let source = HtmlTokenSource::from_reader(BufReader::new(file));
    let mut scanner = DocumentScanner::new(source, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match write_records(&mut scanner, cli.format, &mut out) {
        Ok(summary) => {
            info!(
                emitted = summary.emitted,
                discarded = summary.discarded,
                "booking page processed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(path = %cli.file.display(), error = %e, "extraction failed");
            ExitCode::FAILURE
        }
    }
}
