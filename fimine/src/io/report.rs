use crate::error::{Error, Result};
use crate::monitor::PerformanceReport;
use crate::utils::{count_support, ItemsetStorage};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Everything the text report shows for one mining run.
pub struct Report<'a, T> {
    pub sample: &'a [Vec<T>],
    pub min_support_count: usize,
    pub itemsets: &'a ItemsetStorage<T>,
    pub performance: &'a PerformanceReport,
    /// Recount each itemset's support by rescanning `sample` instead of
    /// trusting the engine's counts.
    pub recount: bool,
}

impl<T: Ord + Display> Report<'_, T> {
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let sample_size = self.sample.len();
        writeln!(out, "Sample size: {} transactions", sample_size)?;
        writeln!(out, "Minimum support count: {}", self.min_support_count)?;
        writeln!(out)?;
        writeln!(out, "Frequent itemsets found:")?;

        for (itemset, mined_count) in self.itemsets.iter() {
            let count = if self.recount {
                count_support(self.sample, itemset)
            } else {
                mined_count
            };
            let support = if sample_size == 0 { 0.0 } else { count as f64 / sample_size as f64 };
            writeln!(
                out,
                "Itemset: {}, Support: {:.3}, Count: {}",
                format_itemset(itemset),
                support,
                count
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Total number of frequent itemsets: {}", self.itemsets.len())?;
        writeln!(out, "Performance Metrics:")?;
        writeln!(
            out,
            "Execution Time: {:.8} seconds",
            self.performance.execution_time.as_secs_f64()
        )?;
        writeln!(out, "Peak Memory Usage: {:.8} MB", self.performance.peak_memory_mb())?;
        for (name, value) in &self.performance.metrics {
            writeln!(out, "{}: {}", metric_title(name), value)?;
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out)
            .and_then(|_| out.flush())
            .map_err(|e| Error::io(path, e))
    }
}

/// `['a', 'b']`
pub fn format_itemset<T: Display>(itemset: &[T]) -> String {
    let items: Vec<String> = itemset.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", items.join(", "))
}

/// `candidate_count` becomes `Candidate Count`.
fn metric_title(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn performance() -> PerformanceReport {
        let mut report = PerformanceReport {
            execution_time: Duration::from_millis(1500),
            peak_memory_bytes: 2 * 1024 * 1024,
            ..Default::default()
        };
        report.metrics.insert("candidate_count".to_string(), 3);
        report
    }

    #[test]
    fn writes_text_layout() {
        let sample = vec![vec!["a", "b"], vec!["a", "b", "c"], vec!["a"], vec!["b", "c"]];
        let mut itemsets = ItemsetStorage::new();
        itemsets.add_itemset(vec!["a"], 3);
        itemsets.add_itemset(vec!["b", "a"], 2);

        let performance = performance();
        let report = Report {
            sample: &sample,
            min_support_count: 2,
            itemsets: &itemsets,
            performance: &performance,
            recount: false,
        };
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();

        let expected = "\
Sample size: 4 transactions
Minimum support count: 2

Frequent itemsets found:
Itemset: ['a'], Support: 0.750, Count: 3
Itemset: ['a', 'b'], Support: 0.500, Count: 2

Total number of frequent itemsets: 2
Performance Metrics:
Execution Time: 1.50000000 seconds
Peak Memory Usage: 2.00000000 MB
Candidate Count: 3
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn recount_rescans_the_sample() {
        let sample = vec![vec![1, 2], vec![1]];
        let mut itemsets = ItemsetStorage::new();
        itemsets.add_itemset(vec![1], 99);

        let performance = PerformanceReport::default();
        let report = Report {
            sample: &sample,
            min_support_count: 1,
            itemsets: &itemsets,
            performance: &performance,
            recount: true,
        };
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Itemset: ['1'], Support: 1.000, Count: 2"));
    }

    #[test]
    fn empty_sample_has_zero_support() {
        let sample: Vec<Vec<u8>> = Vec::new();
        let itemsets = ItemsetStorage::new();
        let performance = PerformanceReport::default();
        let report = Report {
            sample: &sample,
            min_support_count: 1,
            itemsets: &itemsets,
            performance: &performance,
            recount: true,
        };
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Total number of frequent itemsets: 0"));
    }

    #[test]
    fn saves_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let sample = vec![vec!["x"]];
        let mut itemsets = ItemsetStorage::new();
        itemsets.add_itemset(vec!["x"], 1);
        let performance = PerformanceReport::default();

        Report {
            sample: &sample,
            min_support_count: 1,
            itemsets: &itemsets,
            performance: &performance,
            recount: false,
        }
        .save(&path)
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Sample size: 1 transactions\n"));
    }

    #[test]
    fn metric_titles() {
        assert_eq!(metric_title("conditional_pattern_count"), "Conditional Pattern Count");
        assert_eq!(metric_title("node_count"), "Node Count");
    }
}
