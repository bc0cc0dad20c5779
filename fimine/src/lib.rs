//! Frequent itemset mining.
//!
//! Three interchangeable engines implement [`Miner`]: [`Apriori`] (level-wise
//! candidates), [`Eclat`] (vertical tid-set intersection) and [`FpGrowth`]
//! (prefix-tree pattern growth). Each takes transactions and an absolute
//! support count and returns the frequent itemsets with their supports.

pub mod apriori;
pub mod config;
pub mod eclat;
pub mod error;
pub mod fp;
pub mod io;
pub mod miner;
pub mod monitor;
pub mod pipeline;
pub mod utils;

#[cfg(feature = "python")]
mod python;


pub use apriori::Apriori;
pub use config::{MinSupport, RunConfig};
pub use eclat::Eclat;
pub use error::{Error, Result};
pub use fp::FpGrowth;
pub use miner::{Algorithm, Item, Miner};
pub use monitor::{Monitor, NoopMonitor, PerformanceMonitor, PerformanceReport};
pub use utils::{count_support, FrequentLevel, ItemsetStorage};
