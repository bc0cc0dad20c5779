use super::tree::FPTree;
use crate::monitor::Monitor;
use std::collections::HashMap;

/// Builds an FP-tree from weighted transactions in two passes.
///
/// The first pass counts items (each token once per transaction), the second
/// inserts every transaction's frequent items in canonical order. Returns
/// `None` when no item reaches `min_count`.
pub fn build_fp_tree<'a, T, I>(
    transactions: I,
    min_count: usize,
    monitor: &dyn Monitor,
) -> Option<FPTree<T>>
where
    T: Ord + std::hash::Hash + Clone + 'a,
    I: IntoIterator<Item = (&'a [T], usize)> + Clone,
{
    let mut item_counts: HashMap<&T, usize> = HashMap::new();
    let mut seen: Vec<&T> = Vec::new();
    for (transaction, count) in transactions.clone() {
        seen.clear();
        seen.extend(transaction.iter());
        seen.sort_unstable();
        seen.dedup();
        for &item in &seen {
            *item_counts.entry(item).or_insert(0) += count;
        }
    }

    let header = canonical_header(item_counts, min_count);
    if header.is_empty() {
        return None;
    }

    let ranks: HashMap<&T, usize> = header
        .iter()
        .enumerate()
        .map(|(rank, &(item, _))| (item, rank))
        .collect();
    let mut fp_tree = FPTree::new(
        header
            .iter()
            .map(|&(item, count)| (item.clone(), count))
            .collect(),
    );

    let mut path: Vec<usize> = Vec::new();
    for (transaction, count) in transactions {
        path.clear();
        path.extend(transaction.iter().filter_map(|item| ranks.get(item).copied()));
        if path.is_empty() {
            continue;
        }
        path.sort_unstable();
        path.dedup();

        fp_tree.insert_transaction(&path, count);
        monitor.record_memory();
    }

    Some(fp_tree)
}

/// Frequent items ordered by descending count, ties by ascending item.
pub fn canonical_header<T: Ord>(
    item_counts: HashMap<&T, usize>,
    min_count: usize,
) -> Vec<(&T, usize)> {
    let mut frequent_items: Vec<(&T, usize)> = item_counts
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .collect();

    frequent_items.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    frequent_items
}
