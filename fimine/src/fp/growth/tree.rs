use std::collections::HashMap;

/// A node of the arena. `item` is the node's rank in the header table, so
/// labels are compared as integers inside the tree.
#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<usize>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<usize, usize>,
    /// Next node carrying the same item, in insertion order.
    pub next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct HeaderEntry<T> {
    pub item: T,
    pub count: usize,
    pub head: Option<usize>,
    tail: Option<usize>,
}

/// Prefix tree over frequent items.
///
/// `header_table` is in canonical order: descending count, ties broken by
/// ascending item. Transaction paths are inserted in that order.
#[derive(Debug, Clone)]
pub struct FPTree<T> {
    pub nodes: Vec<FPNode>,
    pub header_table: Vec<HeaderEntry<T>>,
    pub root_index: usize,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            next: None,
        }
    }

    pub fn new_item(item: usize, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
            next: None,
        }
    }
}

impl<T: Ord> FPTree<T> {
    /// `header` must already be in canonical order.
    pub fn new(header: Vec<(T, usize)>) -> Self {
        let header_table = header
            .into_iter()
            .map(|(item, count)| HeaderEntry { item, count, head: None, tail: None })
            .collect();
        Self {
            nodes: vec![FPNode::new_root()],
            header_table,
            root_index: 0,
        }
    }

    /// Inserts a path of header ranks, strictly ascending, with weight `count`.
    pub fn insert_transaction(&mut self, ranks: &[usize], count: usize) {
        let mut current_index = self.root_index;

        for &rank in ranks {
            if let Some(&child_index) = self.nodes[current_index].children.get(&rank) {
                self.nodes[child_index].count += count;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FPNode::new_item(rank, count, current_index));
                self.nodes[current_index].children.insert(rank, new_index);
                self.link(rank, new_index);
                current_index = new_index;
            }
        }
    }

    fn link(&mut self, rank: usize, node_index: usize) {
        let entry = &mut self.header_table[rank];
        match entry.tail {
            Some(tail) => self.nodes[tail].next = Some(node_index),
            None => entry.head = Some(node_index),
        }
        entry.tail = Some(node_index);
    }

    /// Walks the same-item links of the item at `rank`.
    pub fn node_links(&self, rank: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.header_table[rank].head, move |&idx| self.nodes[idx].next)
    }

    /// Conditional pattern base of the item at `rank`: for every occurrence,
    /// the items on the path from the root (excluded) down to its parent,
    /// with the occurrence's count. Empty paths are skipped.
    pub fn get_prefix_paths(&self, rank: usize) -> Vec<(Vec<T>, usize)>
    where
        T: Clone,
    {
        self.node_links(rank)
            .filter_map(|idx| {
                let mut path = Vec::new();
                let mut current = self.nodes[idx].parent;

                while let Some(i) = current {
                    if let Some(item) = self.nodes[i].item {
                        path.push(self.header_table[item].item.clone());
                    }
                    current = self.nodes[i].parent;
                }

                path.reverse();
                (!path.is_empty()).then_some((path, self.nodes[idx].count))
            })
            .collect()
    }

    /// Header ranks ordered for mining: ascending count, ties by ascending item.
    pub fn mining_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.header_table.len()).collect();
        order.sort_by(|&a, &b| {
            let (left, right) = (&self.header_table[a], &self.header_table[b]);
            left.count
                .cmp(&right.count)
                .then_with(|| left.item.cmp(&right.item))
        });
        order
    }

    pub fn rank_of(&self, item: &T) -> Option<usize> {
        self.header_table.iter().position(|entry| &entry.item == item)
    }

    /// Child of `node_index` labelled `item`, if any.
    pub fn child(&self, node_index: usize, item: &T) -> Option<usize> {
        let rank = self.rank_of(item)?;
        self.nodes[node_index].children.get(&rank).copied()
    }

    pub fn item_of(&self, node_index: usize) -> Option<&T> {
        self.nodes[node_index].item.map(|rank| &self.header_table[rank].item)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}
