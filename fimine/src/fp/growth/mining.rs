use super::builder::build_fp_tree;
use super::tree::FPTree;
use crate::miner::Item;
use crate::monitor::Monitor;
use crate::utils::{effective_min_count, ItemsetStorage};
use rayon::prelude::*;
use tracing::debug;

/// A conditional sub-problem: the pattern found so far and the weighted
/// prefix paths it was found in.
struct ConditionalJob<T> {
    prefix: Vec<T>,
    pattern_base: Vec<(Vec<T>, usize)>,
}

/// Output order follows the mining traversal: least frequent header item
/// first, each followed by its conditional patterns.
pub fn fp_growth_algorithm<T: Item>(
    transactions: &[Vec<T>],
    min_count: usize,
    monitor: &dyn Monitor,
) -> ItemsetStorage<T> {
    let min_count = effective_min_count(min_count);
    let weighted = transactions
        .iter()
        .map(|transaction| (transaction.as_slice(), 1usize));
    let Some(fp_tree) = build_fp_tree(weighted, min_count, monitor) else {
        return ItemsetStorage::new();
    };
    monitor.add_metric("node_count", fp_tree.len() as u64);
    debug!(
        nodes = fp_tree.len(),
        frequent_items = fp_tree.header_table.len(),
        "fp-tree built"
    );

    // The tree is read-only from here on, so header items mine independently.
    let branches: Vec<ItemsetStorage<T>> = fp_tree
        .mining_order()
        .into_par_iter()
        .map(|rank| mine_item(&fp_tree, rank, min_count, monitor))
        .collect();

    let mut result = ItemsetStorage::new();
    for branch in branches {
        result.append(branch);
    }
    result
}

/// Mines everything ending in the header item at `rank` with an explicit
/// worklist instead of recursing on conditional trees.
fn mine_item<T: Item>(
    fp_tree: &FPTree<T>,
    rank: usize,
    min_count: usize,
    monitor: &dyn Monitor,
) -> ItemsetStorage<T> {
    let mut result = ItemsetStorage::new();
    let mut worklist: Vec<ConditionalJob<T>> = Vec::new();
    worklist.extend(emit_pattern(fp_tree, rank, &[], monitor, &mut result));

    while let Some(job) = worklist.pop() {
        let weighted = job
            .pattern_base
            .iter()
            .map(|(path, count)| (path.as_slice(), *count));
        let Some(cond_tree) = build_fp_tree(weighted, min_count, monitor) else {
            continue;
        };

        let children: Vec<ConditionalJob<T>> = cond_tree
            .mining_order()
            .into_iter()
            .filter_map(|cond_rank| {
                emit_pattern(&cond_tree, cond_rank, &job.prefix, monitor, &mut result)
            })
            .collect();

        // Reversed so children pop in mining order.
        worklist.extend(children.into_iter().rev());
    }

    result
}

/// Records `prefix + item` with the item's aggregate count and returns its
/// conditional sub-problem, if it has a non-empty pattern base.
fn emit_pattern<T: Item>(
    fp_tree: &FPTree<T>,
    rank: usize,
    prefix: &[T],
    monitor: &dyn Monitor,
    result: &mut ItemsetStorage<T>,
) -> Option<ConditionalJob<T>> {
    let entry = &fp_tree.header_table[rank];
    let mut pattern = Vec::with_capacity(prefix.len() + 1);
    pattern.extend_from_slice(prefix);
    pattern.push(entry.item.clone());
    result.add_itemset(pattern.clone(), entry.count);

    let pattern_base = fp_tree.get_prefix_paths(rank);
    if pattern_base.is_empty() {
        return None;
    }
    monitor.add_metric("conditional_pattern_count", pattern_base.len() as u64);
    monitor.record_memory();

    Some(ConditionalJob {
        prefix: pattern,
        pattern_base,
    })
}
