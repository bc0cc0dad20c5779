/// The threshold every engine actually mines with. An itemset must occur in at
/// least one transaction, so a threshold of 0 behaves like 1.
pub fn effective_min_count(min_support_count: usize) -> usize {
    min_support_count.max(1)
}

/// Number of transactions containing every token of `itemset`.
///
/// This is the brute-force rescan used for reporting and verification; the
/// engines never call it.
pub fn count_support<T: PartialEq>(transactions: &[Vec<T>], itemset: &[T]) -> usize {
    transactions
        .iter()
        .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
        .count()
}
