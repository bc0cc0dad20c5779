use crate::utils::FrequentLevel;
use std::collections::HashSet;

/// Joins the frequent (k-1)-itemsets of `level` into candidate k-itemsets and
/// drops every candidate with an infrequent (k-1)-subset.
///
/// `level` must hold canonical itemsets in lexicographic order, which keeps
/// itemsets sharing a (k-2)-prefix contiguous. Candidates come back sorted.
pub fn generate_candidates<T: Ord + std::hash::Hash + Clone>(
    level: &FrequentLevel<T>,
) -> Vec<Vec<T>> {
    let prefix_len = level.itemset_size.saturating_sub(1);
    let known: HashSet<&[T]> = level.iter_itemsets().collect();
    let mut candidates = Vec::new();

    for i in 0..level.len() {
        let left = level.get_itemset(i);
        for j in (i + 1)..level.len() {
            let right = level.get_itemset(j);
            if left[..prefix_len] != right[..prefix_len] {
                break;
            }

            let mut candidate = Vec::with_capacity(left.len() + 1);
            candidate.extend_from_slice(left);
            candidate.push(right[prefix_len].clone());
            candidate.sort_unstable();
            candidate.dedup();
            if candidate.len() != level.itemset_size + 1 {
                continue;
            }

            if all_subsets_frequent(&candidate, &known) {
                candidates.push(candidate);
            }
        }
    }

    candidates.sort_unstable();
    candidates
}

fn all_subsets_frequent<T: Ord + std::hash::Hash + Clone>(
    candidate: &[T],
    known: &HashSet<&[T]>,
) -> bool {
    let mut subset = Vec::with_capacity(candidate.len() - 1);
    (0..candidate.len()).all(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != skip)
                .map(|(_, item)| item.clone()),
        );
        known.contains(subset.as_slice())
    })
}
