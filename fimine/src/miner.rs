use crate::apriori::Apriori;
use crate::eclat::Eclat;
use crate::error::Error;
use crate::fp::FpGrowth;
use crate::monitor::{Monitor, NoopMonitor};
use crate::utils::ItemsetStorage;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// An opaque, totally ordered item token.
pub trait Item: Ord + Hash + Clone + Send + Sync {}

impl<T: Ord + Hash + Clone + Send + Sync> Item for T {}

/// The contract shared by every mining engine: transactions and an absolute
/// support threshold in, frequent itemsets with their support counts out.
///
/// A threshold of 0 is not rejected here. Every engine mines it like 1, so the
/// result is every itemset that occurs at least once, which can grow
/// exponentially. Use [`crate::config::MinSupport`] to validate user input.
pub trait Miner {
    fn name(&self) -> &'static str;

    fn mine_monitored<T: Item>(
        &self,
        transactions: &[Vec<T>],
        min_support_count: usize,
        monitor: &dyn Monitor,
    ) -> ItemsetStorage<T>;

    fn mine<T: Item>(
        &self,
        transactions: &[Vec<T>],
        min_support_count: usize,
    ) -> ItemsetStorage<T> {
        self.mine_monitored(transactions, min_support_count, &NoopMonitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Apriori,
    Eclat,
    FpGrowth,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Apriori, Algorithm::Eclat, Algorithm::FpGrowth];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Apriori => Apriori.name(),
            Algorithm::Eclat => Eclat.name(),
            Algorithm::FpGrowth => FpGrowth.name(),
        }
    }

    pub fn mine_monitored<T: Item>(
        self,
        transactions: &[Vec<T>],
        min_support_count: usize,
        monitor: &dyn Monitor,
    ) -> ItemsetStorage<T> {
        match self {
            Algorithm::Apriori => Apriori.mine_monitored(transactions, min_support_count, monitor),
            Algorithm::Eclat => Eclat.mine_monitored(transactions, min_support_count, monitor),
            Algorithm::FpGrowth => {
                FpGrowth.mine_monitored(transactions, min_support_count, monitor)
            }
        }
    }

    pub fn mine<T: Item>(
        self,
        transactions: &[Vec<T>],
        min_support_count: usize,
    ) -> ItemsetStorage<T> {
        self.mine_monitored(transactions, min_support_count, &NoopMonitor)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apriori" => Ok(Algorithm::Apriori),
            "eclat" => Ok(Algorithm::Eclat),
            "fp-growth" | "fpgrowth" | "fp_growth" => Ok(Algorithm::FpGrowth),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
