use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trendfit::{
    error::{Error, Result},
    EvidenceSeries, SeriesState, TrendCalculator, TrendReport,
};

#[derive(Parser)]
#[command(name = "trend_score")]
#[command(about = "Predict the current trend score from a series of 1-4 scores", long_about = None)]
struct Cli {
    /// Scores in time order, earliest first
    scores: Vec<String>,

    /// Read scores from a file instead (CSV / one per line, or a JSON array)
    #[arg(short, long, conflicts_with = "scores")]
    input: Option<PathBuf>,

    /// Skip the first line of a CSV / text input file
    #[arg(long, requires = "input")]
    header: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    series: &'a EvidenceSeries,
    state: SeriesState,
    display_score: f64,
    report: &'a TrendReport<f64>,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let inputs = match &cli.input {
        Some(path) => read_scores(path, cli.header)?,
        None => cli.scores.clone(),
    };

    let mut calc = TrendCalculator::<f64>::new();
    for input in &inputs {
        calc.append_str(input)?;
    }

    let state = calc.state();
    let report = match (calc.report(), state) {
        (Some(report), _) => report,
        (None, SeriesState::Insufficient { needed }) => {
            return Err(Error::InsufficientData { needed })
        }
        (None, _) => {
            return Err(Error::InsufficientData {
                needed: trendfit::evidence::MIN_EVIDENCE,
            })
        }
    };

    match cli.format {
        Format::Text => {
            println!("Scores: {}", calc.series());
            println!();
            print!("{report}");
        }
        Format::Json => {
            let output = JsonOutput {
                series: calc.series(),
                state,
                display_score: report.display_score(),
                report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Reads raw score tokens from a file; validation happens when they are appended.
fn read_scores(path: &Path, header: bool) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read evidence file");

    if path.extension().and_then(|s| s.to_str()) == Some("json") {
        let series: EvidenceSeries = serde_json::from_str(&contents)?;
        return Ok(series.scores().iter().map(ToString::to_string).collect());
    }

    Ok(split_scores(&contents, header))
}

/// CSV or plain text: commas and newlines both separate scores.
fn split_scores(contents: &str, header: bool) -> Vec<String> {
    contents
        .lines()
        .skip(usize::from(header))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
