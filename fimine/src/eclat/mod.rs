//! Depth-first mining over the vertical (tid-set) layout.

mod tidset;

pub use tidset::{build_vertical, intersect, TidSet};

use crate::miner::{Item, Miner};
use crate::monitor::Monitor;
use crate::utils::{effective_min_count, ItemsetStorage};
use rayon::prelude::*;
use tidset::tidset_bytes;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct Eclat;

impl Miner for Eclat {
    fn name(&self) -> &'static str {
        "eclat"
    }

    fn mine_monitored<T: Item>(
        &self,
        transactions: &[Vec<T>],
        min_support_count: usize,
        monitor: &dyn Monitor,
    ) -> ItemsetStorage<T> {
        eclat(transactions, min_support_count, monitor)
    }
}

/// Frequent 1-itemsets first (ascending), then every longer itemset in
/// depth-first discovery order.
pub fn eclat<T: Item>(
    transactions: &[Vec<T>],
    min_support_count: usize,
    monitor: &dyn Monitor,
) -> ItemsetStorage<T> {
    let min_support_count = effective_min_count(min_support_count);
    let vertical = build_vertical(transactions);
    monitor.add_metric("tidset_bytes", tidset_bytes(vertical.values()) as u64);

    let frequent: Vec<(T, TidSet)> = vertical
        .into_iter()
        .filter(|(_, tids)| tids.len() >= min_support_count)
        .map(|(item, tids)| (item.clone(), tids))
        .collect();
    monitor.record_memory();

    let mut result = ItemsetStorage::new();
    for (item, tids) in &frequent {
        result.add_itemset(vec![item.clone()], tids.len());
    }

    // Each first-level prefix only reads its own slice of the class.
    let branches: Vec<ItemsetStorage<T>> = (0..frequent.len())
        .into_par_iter()
        .map(|idx| mine_branch(&frequent, idx, min_support_count, monitor))
        .collect();

    for branch in branches {
        result.append(branch);
    }
    result
}

fn mine_branch<T: Item>(
    class: &[(T, TidSet)],
    idx: usize,
    min_support_count: usize,
    monitor: &dyn Monitor,
) -> ItemsetStorage<T> {
    let (item, tids) = &class[idx];
    let mut out = ItemsetStorage::new();
    let mut prefix = vec![item.clone()];
    let mut intersections = 0u64;

    let extensions = extend_class(tids, &class[idx + 1..], min_support_count, &mut intersections);
    monitor.record_memory();
    if !extensions.is_empty() {
        extend(&mut prefix, &extensions, min_support_count, monitor, &mut intersections, &mut out);
    }

    monitor.add_metric("intersection_count", intersections);
    debug!(found = out.len(), intersections, "eclat branch");
    out
}

/// `class` holds the frequent extensions of `prefix`, each paired with the
/// tid-set of `prefix` plus that token.
fn extend<T: Item>(
    prefix: &mut Vec<T>,
    class: &[(T, TidSet)],
    min_support_count: usize,
    monitor: &dyn Monitor,
    intersections: &mut u64,
    out: &mut ItemsetStorage<T>,
) {
    for (idx, (item, tids)) in class.iter().enumerate() {
        prefix.push(item.clone());
        out.add_itemset(prefix.clone(), tids.len());

        let next = extend_class(tids, &class[idx + 1..], min_support_count, intersections);
        monitor.record_memory();
        if !next.is_empty() {
            extend(prefix, &next, min_support_count, monitor, intersections, out);
        }
        prefix.pop();
    }
}

fn extend_class<T: Item>(
    tids: &[usize],
    candidates: &[(T, TidSet)],
    min_support_count: usize,
    intersections: &mut u64,
) -> Vec<(T, TidSet)> {
    candidates
        .iter()
        .filter_map(|(item, candidate_tids)| {
            *intersections += 1;
            let common = intersect(tids, candidate_tids);
            (common.len() >= min_support_count)
                .then(|| (item.clone(), common))
        })
        .collect()
}
