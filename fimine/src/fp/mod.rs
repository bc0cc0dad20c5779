//! Pattern growth over a shared-prefix tree.
//!
//! The tree is an arena: parent and same-item links are node indices. Mining
//! walks each header item's links to collect its conditional pattern base and
//! mines the resulting conditional trees from a worklist.

pub mod growth;


pub use growth::{build_fp_tree, fp_growth_algorithm, FPNode, FPTree, HeaderEntry};

use crate::miner::{Item, Miner};
use crate::monitor::Monitor;
use crate::utils::ItemsetStorage;

#[derive(Debug, Default, Clone, Copy)]
pub struct FpGrowth;

impl Miner for FpGrowth {
    fn name(&self) -> &'static str {
        "fp-growth"
    }

    fn mine_monitored<T: Item>(
        &self,
        transactions: &[Vec<T>],
        min_support_count: usize,
        monitor: &dyn Monitor,
    ) -> ItemsetStorage<T> {
        fp_growth_algorithm(transactions, min_support_count, monitor)
    }
}
