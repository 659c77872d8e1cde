//! stepcal - Command-line interface for step-calories
//!
//! Commands:
//! - day: Summarize a daily-steps record
//! - training: Summarize a training record
//! - batch: Summarize one record per line (NDJSON output)
//! - config: Print the effective model configuration

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use step_calories::{BodyParams, ComputeError, ErrorKind, ModelConfig, StepsProcessor, VERSION};

/// stepcal - Step, distance and calorie calculations
#[derive(Parser)]
#[command(name = "stepcal")]
#[command(version = VERSION)]
#[command(about = "Turn step records into distance and calorie summaries", long_about = None)]
struct Cli {
    /// Model configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG still applies)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a daily-steps record, e.g. "4000,1h30m"
    Day {
        /// Record in <steps>,<duration> form
        record: String,

        #[command(flatten)]
        body: BodyArgs,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Summarize a training record, e.g. "3456,running,1h0m"
    Training {
        /// Record in <steps>,<activity>,<duration> form
        record: String,

        #[command(flatten)]
        body: BodyArgs,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Summarize one record per line
    Batch {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Record kind
        #[arg(long, default_value = "training")]
        kind: RecordKind,

        #[command(flatten)]
        body: BodyArgs,
    },

    /// Print the effective model configuration
    Config {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(clap::Args)]
struct BodyArgs {
    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Body height in metres
    #[arg(long)]
    height: f64,
}

impl From<&BodyArgs> for BodyParams {
    fn from(args: &BodyArgs) -> Self {
        BodyParams::new(args.weight, args.height)
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Single-line JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, Copy, ValueEnum)]
enum RecordKind {
    /// <steps>,<duration>
    Day,
    /// <steps>,<activity>,<duration>
    Training,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), StepcalCliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Day {
            record,
            body,
            format,
        } => {
            let processor = StepsProcessor::with_config(config)?;
            let report = processor.day_report(&record, &BodyParams::from(&body))?;
            print_report(&report, &format)
        }

        Commands::Training {
            record,
            body,
            format,
        } => {
            let processor = StepsProcessor::with_config(config)?;
            let report = processor.training_report(&record, &BodyParams::from(&body))?;
            print_report(&report, &format)
        }

        Commands::Batch {
            input,
            output,
            kind,
            body,
        } => cmd_batch(&input, &output, kind, &BodyParams::from(&body), config),

        Commands::Config { pretty } => {
            let json = if pretty {
                config.to_json_pretty()?
            } else {
                serde_json::to_string(&config)?
            };
            println!("{}", json);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ModelConfig, StepcalCliError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            let config = ModelConfig::from_json(&json)?;
            log::debug!("loaded model configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(ModelConfig::default()),
    }
}

fn print_report<R>(report: &R, format: &OutputFormat) -> Result<(), StepcalCliError>
where
    R: Serialize + std::fmt::Display,
{
    match format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string(report)?),
        OutputFormat::JsonPretty => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

#[derive(Serialize)]
struct BatchLine<R: Serialize> {
    line: usize,
    report: R,
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    kind: RecordKind,
    body: &BodyParams,
    config: ModelConfig,
) -> Result<(), StepcalCliError> {
    let processor = StepsProcessor::with_config(config)?;

    let reader: Box<dyn BufRead> = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            log::warn!("reading records from an interactive terminal; end input with Ctrl-D");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Box::new(io::Cursor::new(buffer))
    } else {
        Box::new(BufReader::new(fs::File::open(input)?))
    };

    let mut writer: Box<dyn Write> = if output.to_string_lossy() == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(fs::File::create(output)?)
    };

    let mut processed = 0usize;
    let mut failed = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        let line_number = index + 1;

        let rendered = match kind {
            RecordKind::Day => processor.day_report(record, body).and_then(|report| {
                Ok(serde_json::to_string(&BatchLine {
                    line: line_number,
                    report,
                })?)
            }),
            RecordKind::Training => processor.training_report(record, body).and_then(|report| {
                Ok(serde_json::to_string(&BatchLine {
                    line: line_number,
                    report,
                })?)
            }),
        };

        match rendered {
            Ok(json) => {
                writeln!(writer, "{}", json)?;
                processed += 1;
            }
            Err(e) => {
                let mut error = CliError::from(StepcalCliError::Compute(e));
                error.line = Some(line_number);
                eprintln!("{}", serde_json::to_string(&error)?);
                failed += 1;
            }
        }
    }

    writer.flush()?;
    log::debug!("batch finished: {} processed, {} failed", processed, failed);

    if failed > 0 {
        return Err(StepcalCliError::BatchFailed(failed));
    }
    Ok(())
}

// Error handling

#[derive(Debug)]
enum StepcalCliError {
    Io(io::Error),
    Compute(ComputeError),
    Json(serde_json::Error),
    BatchFailed(usize),
}

impl From<io::Error> for StepcalCliError {
    fn from(e: io::Error) -> Self {
        StepcalCliError::Io(e)
    }
}

impl From<ComputeError> for StepcalCliError {
    fn from(e: ComputeError) -> Self {
        StepcalCliError::Compute(e)
    }
}

impl From<serde_json::Error> for StepcalCliError {
    fn from(e: serde_json::Error) -> Self {
        StepcalCliError::Json(e)
    }
}

#[derive(Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

impl CliError {
    fn new(code: &str, message: String, hint: &str) -> Self {
        CliError {
            code: code.to_string(),
            message,
            hint: Some(hint.to_string()),
            line: None,
        }
    }
}

impl From<StepcalCliError> for CliError {
    fn from(e: StepcalCliError) -> Self {
        match e {
            StepcalCliError::Io(e) => {
                CliError::new("IO_ERROR", e.to_string(), "Check file paths and permissions")
            }
            StepcalCliError::Json(e) => CliError::new("JSON_ERROR", e.to_string(), "Check JSON syntax"),
            StepcalCliError::BatchFailed(count) => CliError::new(
                "BATCH_FAILED",
                format!("{} records failed", count),
                "See the per-line errors above",
            ),
            StepcalCliError::Compute(e) => {
                let (code, hint) = match e.kind() {
                    ErrorKind::Format => (
                        "FORMAT_ERROR",
                        "Use <steps>,<duration> or <steps>,<activity>,<duration>",
                    ),
                    ErrorKind::Parse => (
                        "PARSE_ERROR",
                        "Steps must be an integer and durations look like 1h30m",
                    ),
                    ErrorKind::Validation => (
                        "VALIDATION_ERROR",
                        "Steps, weight, height and duration must be positive",
                    ),
                    ErrorKind::Config => (
                        "CONFIG_ERROR",
                        "Run 'stepcal config --pretty' to see the expected shape",
                    ),
                };
                CliError::new(code, e.to_string(), hint)
            }
        }
    }
}
