use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

const NEVER_SAMPLED: u64 = u64::MAX;

/// Instrumentation hooks the engines call at their checkpoints.
///
/// Engines may call these from several rayon workers at once, so
/// implementations use interior mutability.
pub trait Monitor: Sync {
    /// Samples resident memory towards the peak.
    fn record_memory(&self);

    /// Adds `value` to the counter called `name`.
    fn add_metric(&self, name: &'static str, value: u64);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMonitor;

impl Monitor for NoopMonitor {
    fn record_memory(&self) {}

    fn add_metric(&self, _name: &'static str, _value: u64) {}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceReport {
    pub execution_time: Duration,
    pub peak_memory_bytes: u64,
    pub metrics: BTreeMap<String, u64>,
}

impl PerformanceReport {
    pub fn peak_memory_mb(&self) -> f64 {
        self.peak_memory_bytes as f64 / 1024.0 / 1024.0
    }

    pub fn metric(&self, name: &str) -> u64 {
        self.metrics.get(name).copied().unwrap_or(0)
    }
}

#[derive(Debug, Default)]
struct MonitorState {
    started: Option<Instant>,
    elapsed: Duration,
    peak_memory_bytes: u64,
    samples: u64,
    metrics: BTreeMap<String, u64>,
}

/// Wall-clock, peak resident memory and named counters for one mining call.
#[derive(Debug)]
pub struct PerformanceMonitor {
    state: Mutex<MonitorState>,
    sample_interval: Duration,
    epoch: Instant,
    /// Nanoseconds after `epoch` of the last memory sample. Read without the
    /// lock so throttled checkpoints never contend on `state`.
    last_sample_nanos: AtomicU64,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::with_sample_interval(Duration::from_millis(1))
    }

    /// Memory checkpoints closer together than `interval` are skipped.
    pub fn with_sample_interval(interval: Duration) -> Self {
        Self {
            state: Mutex::new(MonitorState::default()),
            sample_interval: interval,
            epoch: Instant::now(),
            last_sample_nanos: AtomicU64::new(NEVER_SAMPLED),
        }
    }

    pub fn start(&self) {
        let mut state = self.lock();
        *state = MonitorState::default();
        state.started = Some(Instant::now());
        self.sample(&mut state);
    }

    pub fn end(&self) {
        let mut state = self.lock();
        if let Some(started) = state.started {
            state.elapsed = started.elapsed();
        }
        self.sample(&mut state);
        debug!(
            elapsed_ms = state.elapsed.as_millis() as u64,
            peak_memory_bytes = state.peak_memory_bytes,
            samples = state.samples,
            "monitor stopped"
        );
    }

    pub fn results(&self) -> PerformanceReport {
        let state = self.lock();
        PerformanceReport {
            execution_time: state.elapsed,
            peak_memory_bytes: state.peak_memory_bytes,
            metrics: state.metrics.clone(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MonitorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn now_nanos(&self) -> u64 {
        let nanos = self.epoch.elapsed().as_nanos();
        u64::try_from(nanos).unwrap_or(u64::MAX - 1)
    }

    fn sample(&self, state: &mut MonitorState) {
        self.last_sample_nanos.store(self.now_nanos(), Ordering::Relaxed);
        state.samples += 1;
        if let Some(bytes) = resident_memory_bytes() {
            state.peak_memory_bytes = state.peak_memory_bytes.max(bytes);
        }
    }
}

impl Monitor for PerformanceMonitor {
    fn record_memory(&self) {
        let last = self.last_sample_nanos.load(Ordering::Relaxed);
        let now = self.now_nanos();
        let since_last = u128::from(now.saturating_sub(last));
        if last != NEVER_SAMPLED && since_last < self.sample_interval.as_nanos() {
            return;
        }
        // Only the worker that claims this slot takes the sample.
        if self
            .last_sample_nanos
            .compare_exchange(last, now, Ordering::Relaxed, Ordering::Relaxed)
            .is_err()
        {
            return;
        }
        let mut state = self.lock();
        self.sample(&mut state);
    }

    fn add_metric(&self, name: &'static str, value: u64) {
        let mut state = self.lock();
        *state.metrics.entry(name.to_string()).or_insert(0) += value;
    }
}

/// Current resident set size of this process, if the platform exposes it.
#[cfg(target_os = "linux")]
pub fn resident_memory_bytes() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb * 1024)
}

#[cfg(not(target_os = "linux"))]
pub fn resident_memory_bytes() -> Option<u64> {
    use std::process::Command;

    let output = Command::new("ps")
        .args(["-o", "rss=", "-p", &std::process::id().to_string()])
        .output()
        .ok()?;
    let kb: u64 = String::from_utf8(output.stdout).ok()?.trim().parse().ok()?;
    Some(kb * 1024)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn metrics_accumulate_by_name() {
        let monitor = PerformanceMonitor::new();
        monitor.start();
        monitor.add_metric("candidate_count", 3);
        monitor.add_metric("candidate_count", 4);
        monitor.add_metric("node_count", 9);
        monitor.end();

        let results = monitor.results();
        assert_eq!(results.metric("candidate_count"), 7);
        assert_eq!(results.metric("node_count"), 9);
        assert_eq!(results.metric("missing"), 0);
    }

    #[test]
    fn start_resets_previous_run() {
        let monitor = PerformanceMonitor::new();
        monitor.start();
        monitor.add_metric("candidate_count", 3);
        monitor.end();

        monitor.start();
        monitor.end();
        assert!(monitor.results().metrics.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn peak_memory_is_sampled() {
        let monitor = PerformanceMonitor::with_sample_interval(Duration::ZERO);
        monitor.start();
        monitor.record_memory();
        monitor.end();
        assert!(monitor.results().peak_memory_bytes > 0);
    }

    #[test]
    fn throttled_checkpoints_skip_sampling() {
        let monitor = PerformanceMonitor::with_sample_interval(Duration::from_secs(3600));
        monitor.start();
        (0..1000)
            .into_par_iter()
            .for_each(|_| monitor.record_memory());
        assert_eq!(monitor.lock().samples, 1);

        monitor.end();
        assert_eq!(monitor.lock().samples, 2);
    }

    #[test]
    fn unthrottled_checkpoints_always_sample() {
        let monitor = PerformanceMonitor::with_sample_interval(Duration::ZERO);
        monitor.start();
        for _ in 0..3 {
            monitor.record_memory();
        }
        assert_eq!(monitor.lock().samples, 4);
    }

    #[test]
    fn noop_monitor_ignores_hooks() {
        let monitor = NoopMonitor;
        monitor.record_memory();
        monitor.add_metric("node_count", 1);
    }
}
