use crate::error::{Error, Result};
use crate::miner::Algorithm;
use std::path::{Path, PathBuf};

pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;
pub const DEFAULT_MIN_SUPPORT_COUNT: i64 = 5;

/// A user-supplied support threshold, absolute or relative to the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(i64),
    Fraction(f64),
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport::Count(DEFAULT_MIN_SUPPORT_COUNT)
    }
}

impl MinSupport {
    /// The absolute count for a sample of `num_transactions`. Fractions round
    /// up and never resolve below 1.
    pub fn resolve(&self, num_transactions: usize) -> Result<usize> {
        match *self {
            MinSupport::Count(count) if count <= 0 => Err(Error::InvalidThreshold(format!(
                "minimum support count must be positive, got {}",
                count
            ))),
            MinSupport::Count(count) => usize::try_from(count).map_err(|_| {
                Error::InvalidThreshold(format!("minimum support count {} is too large", count))
            }),
            MinSupport::Fraction(fraction) if !(fraction > 0.0 && fraction <= 1.0) => {
                Err(Error::InvalidThreshold(format!(
                    "minimum support fraction must be in (0, 1], got {}",
                    fraction
                )))
            }
            MinSupport::Fraction(fraction) => {
                Ok(((fraction * num_transactions as f64).ceil() as usize).max(1))
            }
        }
    }
}

/// Parameters of one load → mine → report run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    /// Only the first `sample_size` transactions are mined.
    pub sample_size: Option<usize>,
    pub min_support: MinSupport,
    pub algorithm: Algorithm,
    pub recount: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            sample_size: Some(DEFAULT_SAMPLE_SIZE),
            min_support: MinSupport::default(),
            algorithm: Algorithm::FpGrowth,
            recount: false,
        }
    }
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_min_support(mut self, min_support: MinSupport) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_sample_size(mut self, sample_size: Option<usize>) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_recount(mut self, recount: bool) -> Self {
        self.recount = recount;
        self
    }

    /// `output` if set, otherwise `{algorithm}_result.txt` beside the input.
    pub fn report_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let dir = self.input.parent().unwrap_or_else(|| Path::new("."));
                dir.join(format!("{}_result.txt", self.algorithm.name().replace('-', "")))
            }
        }
    }
}
