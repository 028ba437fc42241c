use anyhow::Context;
use clap::{Parser, ValueEnum};
use strdist::{DistanceReport, Metric, MetricScore};
use tracing::{debug, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Compare two strings with word n-gram, cosine and edit distance metrics
#[derive(Parser, Debug)]
#[command(name = "strdist", version)]
#[command(about = "Distance metrics between two strings (0 = identical)", long_about = None)]
struct Args {
    /// First text
    text1: String,

    /// Second text
    text2: String,

    /// Metrics to compute, comma separated (default: all)
    #[arg(short, long, value_delimiter = ',')]
    metric: Vec<Metric>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `metric<TAB>value` line per metric
    Text,
    /// A JSON object keyed by metric name
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let metrics = if args.metric.is_empty() {
        Metric::ALL.to_vec()
    } else {
        args.metric.clone()
    };
    debug!(?metrics, format = ?args.format, "Parsed arguments");

    let report = DistanceReport::compute(&args.text1, &args.text2)
        .context("failed to compute distances")?;
    let scores = report.select(&metrics);
    info!(metrics = scores.len(), "Computed distances");

    match args.format {
        Format::Text => {
            for score in &scores {
                println!("{}\t{}", score.metric, format_value(score));
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&render_json(&scores))?);
        }
    }

    Ok(())
}

fn init_logging(log_level: &str) -> anyhow::Result<()> {
    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn format_value(score: &MetricScore) -> String {
    if score.metric.is_bounded() {
        format!("{:.6}", score.value)
    } else {
        format!("{}", score.value as u64)
    }
}

/// Flat `{ "metric": value }` object for the selected scores
fn render_json(scores: &[MetricScore]) -> serde_json::Value {
    let distances: serde_json::Map<String, serde_json::Value> = scores
        .iter()
        .map(|score| (score.metric.to_string(), json_value(score)))
        .collect();
    serde_json::Value::Object(distances)
}

fn json_value(score: &MetricScore) -> serde_json::Value {
    if score.metric.is_bounded() {
        serde_json::Value::from(score.value)
    } else {
        serde_json::Value::from(score.value as u64)
    }
}
