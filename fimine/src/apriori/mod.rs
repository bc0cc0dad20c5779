//! Level-wise candidate generation.
//!
//! Level k is built by joining the frequent (k-1)-itemsets that agree on all
//! but their last token, pruning candidates that have an infrequent subset,
//! and counting the survivors with one full scan of the transactions.

mod candidates;

pub use candidates::generate_candidates;

use crate::miner::{Item, Miner};
use crate::monitor::Monitor;
use crate::utils::{effective_min_count, FrequentLevel, ItemsetStorage};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct Apriori;

impl Miner for Apriori {
    fn name(&self) -> &'static str {
        "apriori"
    }

    fn mine_monitored<T: Item>(
        &self,
        transactions: &[Vec<T>],
        min_support_count: usize,
        monitor: &dyn Monitor,
    ) -> ItemsetStorage<T> {
        apriori(transactions, min_support_count, monitor)
    }
}

/// Output order: increasing itemset size, lexicographic within a size.
pub fn apriori<T: Item>(
    transactions: &[Vec<T>],
    min_support_count: usize,
    monitor: &dyn Monitor,
) -> ItemsetStorage<T> {
    let min_support_count = effective_min_count(min_support_count);
    let prepared = canonical_transactions(transactions);
    let mut level = frequent_items(&prepared, min_support_count);
    let mut result = ItemsetStorage::new();

    while !level.is_empty() {
        let candidates = generate_candidates(&level);
        monitor.add_metric("candidate_count", candidates.len() as u64);
        monitor.record_memory();
        debug!(
            size = level.itemset_size,
            frequent = level.len(),
            candidates = candidates.len(),
            "apriori level"
        );

        let next = count_candidates(
            &prepared,
            candidates,
            level.itemset_size + 1,
            min_support_count,
        );
        result.append(level.into_storage());
        level = next;
    }

    result
}

/// Sorted, deduplicated copies so containment is a linear merge.
fn canonical_transactions<T: Item>(transactions: &[Vec<T>]) -> Vec<Vec<&T>> {
    transactions
        .par_iter()
        .map(|transaction| {
            let mut items: Vec<&T> = transaction.iter().collect();
            items.sort_unstable();
            items.dedup();
            items
        })
        .collect()
}

fn frequent_items<T: Item>(transactions: &[Vec<&T>], min_support_count: usize) -> FrequentLevel<T> {
    let mut item_counts: HashMap<&T, usize> = HashMap::new();
    for transaction in transactions {
        for &item in transaction {
            *item_counts.entry(item).or_insert(0) += 1;
        }
    }

    let mut frequent: Vec<(&T, usize)> = item_counts
        .into_iter()
        .filter(|&(_, count)| count >= min_support_count)
        .collect();
    frequent.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut level = FrequentLevel::new(1);
    for (item, count) in frequent {
        level.add_itemset_with_support(vec![item.clone()], count);
    }
    level
}

fn count_candidates<T: Item>(
    transactions: &[Vec<&T>],
    candidates: Vec<Vec<T>>,
    itemset_size: usize,
    min_support_count: usize,
) -> FrequentLevel<T> {
    let mut level = FrequentLevel::new(itemset_size);
    if candidates.is_empty() {
        return level;
    }

    let counts = transactions
        .par_iter()
        .filter(|transaction| transaction.len() >= itemset_size)
        .fold(
            || vec![0usize; candidates.len()],
            |mut acc, transaction| {
                for (slot, candidate) in acc.iter_mut().zip(&candidates) {
                    if contains_sorted(transaction, candidate) {
                        *slot += 1;
                    }
                }
                acc
            },
        )
        .reduce(
            || vec![0usize; candidates.len()],
            |mut left, right| {
                for (l, r) in left.iter_mut().zip(right) {
                    *l += r;
                }
                left
            },
        );

    for (candidate, count) in candidates.into_iter().zip(counts) {
        if count >= min_support_count {
            level.add_itemset_with_support(candidate, count);
        }
    }
    level
}

/// Both slices sorted ascending.
fn contains_sorted<T: Ord>(transaction: &[&T], itemset: &[T]) -> bool {
    let mut position = 0;
    for item in itemset {
        while position < transaction.len() && transaction[position] < item {
            position += 1;
        }
        if position == transaction.len() || transaction[position] != item {
            return false;
        }
        position += 1;
    }
    true
}
