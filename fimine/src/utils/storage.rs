use std::collections::BTreeSet;

/// Flat storage for mined itemsets and their support counts.
///
/// Every itemset is canonicalized (sorted, deduplicated) when it is added, so
/// two engines that discover the same itemset in a different order store the
/// same token sequence. Itemsets keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsetStorage<T> {
    items: Vec<T>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// All frequent itemsets of one size, as produced by a single Apriori level.
#[derive(Debug, Clone)]
pub struct FrequentLevel<T> {
    pub(crate) storage: ItemsetStorage<T>,
    pub itemset_size: usize,
}

impl<T> Default for ItemsetStorage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }
}

impl<T: Ord> ItemsetStorage<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_itemset(&mut self, mut items: Vec<T>, support: usize) -> usize {
        items.sort_unstable();
        items.dedup();
        let start = self.items.len();
        let length = items.len();
        self.items.extend(items);
        self.offsets.push((start, length));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[T] {
        let (start, length) = self.offsets[idx];
        &self.items[start..start + length]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Moves every itemset of `other` to the end of `self`.
    pub fn append(&mut self, other: ItemsetStorage<T>) {
        let shift = self.items.len();
        self.items.extend(other.items);
        self.offsets
            .extend(other.offsets.into_iter().map(|(start, length)| (start + shift, length)));
        self.supports.extend(other.supports);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[T], usize)> {
        (0..self.len())
            .map(move |idx| (self.get_itemset(idx), self.supports[idx]))
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[T]> {
        (0..self.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Order-independent view of the stored itemsets.
    pub fn to_set(&self) -> BTreeSet<Vec<T>>
    where
        T: Clone,
    {
        self.iter_itemsets().map(<[T]>::to_vec).collect()
    }

    /// Converts into owned `(itemset, support)` pairs.
    pub fn into_pairs(self) -> Vec<(Vec<T>, usize)>
    where
        T: Clone,
    {
        self.iter()
            .map(|(itemset, support)| (itemset.to_vec(), support))
            .collect()
    }

    pub fn max_itemset_size(&self) -> usize {
        self.offsets
            .iter()
            .map(|&(_, length)| length)
            .max()
            .unwrap_or(0)
    }
}

impl<T: Ord> FrequentLevel<T> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset_with_support(&mut self, items: Vec<T>, support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[T] {
        self.storage.get_itemset(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[T]> {
        self.storage.iter_itemsets()
    }

    pub fn into_storage(self) -> ItemsetStorage<T> {
        self.storage
    }
}
