use std::collections::BTreeMap;

/// Ascending indices of the transactions that contain an itemset.
pub type TidSet = Vec<usize>;

/// Vertical layout: every token mapped to the transactions containing it,
/// in ascending token order.
pub fn build_vertical<T: Ord>(transactions: &[Vec<T>]) -> BTreeMap<&T, TidSet> {
    let mut vertical: BTreeMap<&T, TidSet> = BTreeMap::new();
    for (tid, transaction) in transactions.iter().enumerate() {
        for item in transaction {
            let tids = vertical.entry(item).or_default();
            if tids.last() != Some(&tid) {
                tids.push(tid);
            }
        }
    }
    vertical
}

pub fn intersect(left: &[usize], right: &[usize]) -> TidSet {
    let mut common = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                common.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    common
}

/// Heap bytes held by a collection of tid-sets.
pub fn tidset_bytes<'a>(tidsets: impl IntoIterator<Item = &'a TidSet>) -> usize {
    tidsets
        .into_iter()
        .map(|tids| tids.len() * std::mem::size_of::<usize>())
        .sum()
}
