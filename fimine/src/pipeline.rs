use crate::config::RunConfig;
use crate::error::Result;
use crate::io::{load_transactions, Report};
use crate::monitor::{PerformanceMonitor, PerformanceReport};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub sample_size: usize,
    pub min_support_count: usize,
    pub itemset_count: usize,
    pub report_path: PathBuf,
    pub performance: PerformanceReport,
}

/// Loads the sample, mines it with the configured engine under a
/// [`PerformanceMonitor`] and writes the text report.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    info!(input = %config.input.display(), "loading transactions");
    let sample = load_transactions(&config.input, config.sample_size)?;
    let min_support_count = config.min_support.resolve(sample.len())?;
    info!(
        transactions = sample.len(),
        min_support_count,
        algorithm = %config.algorithm,
        "mining frequent itemsets"
    );

    let monitor = PerformanceMonitor::new();
    monitor.start();
    let itemsets = config.algorithm.mine_monitored(&sample, min_support_count, &monitor);
    monitor.end();
    let performance = monitor.results();
    info!(
        itemsets = itemsets.len(),
        elapsed_ms = performance.execution_time.as_millis() as u64,
        "mining finished"
    );

    let report_path = config.report_path();
    Report {
        sample: &sample,
        min_support_count,
        itemsets: &itemsets,
        performance: &performance,
        recount: config.recount,
    }
    .save(&report_path)?;
    info!(path = %report_path.display(), "report written");

    Ok(RunSummary {
        sample_size: sample.len(),
        min_support_count,
        itemset_count: itemsets.len(),
        report_path,
        performance,
    })
}
