use anyhow::{Context, Result};
use clap::Parser;
use fimine::config::{MinSupport, RunConfig, DEFAULT_MIN_SUPPORT_COUNT, DEFAULT_SAMPLE_SIZE};
use fimine::pipeline;
use fimine::Algorithm;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mine frequent itemsets from a transaction file and write a text report.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Transaction file: one transaction per line, whitespace-separated tokens
    input: PathBuf,

    /// apriori, eclat or fp-growth
    #[arg(short, long, default_value = "fp-growth")]
    algorithm: Algorithm,

    /// Absolute minimum support count
    #[arg(
        long,
        conflicts_with = "min_fraction",
        default_value_t = DEFAULT_MIN_SUPPORT_COUNT,
        allow_negative_numbers = true
    )]
    min_count: i64,

    /// Minimum support as a fraction of the sample, in (0, 1]
    #[arg(long)]
    min_fraction: Option<f64>,

    /// Mine only the first N transactions (0 keeps all)
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Report path (default: <algorithm>_result.txt beside the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Recount supports by rescanning the sample when writing the report
    #[arg(long)]
    recount: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("invalid log level '{}'", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let min_support = match args.min_fraction {
        Some(fraction) => MinSupport::Fraction(fraction),
        None => MinSupport::Count(args.min_count),
    };
    let sample_size = (args.sample_size > 0).then_some(args.sample_size);

    let mut config = RunConfig::new(&args.input)
        .with_algorithm(args.algorithm)
        .with_min_support(min_support)
        .with_sample_size(sample_size)
        .with_recount(args.recount);
    if let Some(output) = args.output {
        config = config.with_output(output);
    }

    let summary = pipeline::run(&config)
        .with_context(|| format!("mining {} failed", config.input.display()))?;

    println!("Sample size: {} transactions", summary.sample_size);
    println!("Minimum support count: {}", summary.min_support_count);
    println!("Frequent itemsets: {}", summary.itemset_count);
    println!("Results have been saved to: {}", summary.report_path.display());
    Ok(())
}
