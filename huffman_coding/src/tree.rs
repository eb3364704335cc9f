// huffman_coding/src/tree.rs

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use contracts::debug_ensures;

use crate::code_table::{map_codes, CodeTable};
use crate::frequency::FrequencyEntry;

/// A node of the prefix-code tree.
///
/// Internal nodes always own both children, so a walk never has to check for
/// a missing side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S> {
    /// A leaf. `symbol` is `None` only for the placeholder that pads a
    /// single-symbol alphabet.
    Leaf { weight: usize, symbol: Option<S> },
    Internal {
        weight: usize,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S> HuffmanNode<S> {
    pub fn leaf(symbol: S, weight: usize) -> Self {
        HuffmanNode::Leaf {
            weight,
            symbol: Some(symbol),
        }
    }

    pub fn placeholder() -> Self {
        HuffmanNode::Leaf {
            weight: 0,
            symbol: None,
        }
    }

    /// Joins two subtrees under a new internal node. `left` should be the
    /// lighter of the two.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => symbol.as_ref(),
            HuffmanNode::Internal { .. } => None,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn weighted_path_length(&self, depth: usize) -> usize {
        match self {
            HuffmanNode::Leaf { weight, .. } => weight * depth,
            HuffmanNode::Internal { left, right, .. } => {
                left.weighted_path_length(depth + 1) + right.weighted_path_length(depth + 1)
            }
        }
    }
}

/// The result of a build: an immutable prefix-code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffmanNode<S>,
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &HuffmanNode<S> {
        &self.root
    }

    /// Total weight of the tree, i.e. the length of the input it was built from.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// Number of leaves, the placeholder included.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest code.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Sum of `weight * depth` over all leaves. This is exactly the number of
    /// bits the tree's input encodes to.
    pub fn weighted_path_length(&self) -> usize {
        self.root.weighted_path_length(0)
    }
}

impl<S: Eq + Hash + Clone> HuffmanTree<S> {
    /// Builds the symbol to code table for this tree.
    #[debug_ensures(ret.len() <= self.leaf_count())]
    pub fn code_table(&self) -> CodeTable<S> {
        map_codes(&self.root)
    }
}

/// A queue slot. The sequence number makes the ordering total so equal
/// weights always pop in insertion order.
struct QueueEntry<S> {
    weight: usize,
    sequence: usize,
    node: HuffmanNode<S>,
}

impl<S> QueueEntry<S> {
    fn key(&self) -> (usize, usize) {
        (self.weight, self.sequence)
    }
}

impl<S> PartialEq for QueueEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for QueueEntry<S> {}

impl<S> PartialOrd for QueueEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for QueueEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and the lightest entry must pop first.
        other.key().cmp(&self.key())
    }
}

/// Builds a Huffman tree by repeatedly merging the two lightest subtrees.
///
/// The first entry popped becomes the left child and the second the right
/// child. Ties on weight are resolved by insertion order, with merged nodes
/// taking the next sequence number.
///
/// # Arguments
///
/// * `entries` - Frequency entries, usually from `map_frequencies`.
///
/// # Returns
///
/// * `Option<HuffmanTree<S>>` - The tree, or `None` when `entries` is empty.
#[debug_ensures(ret.is_none() == (old(entries.len()) == 0))]
pub fn build_tree<S>(entries: Vec<FrequencyEntry<S>>) -> Option<HuffmanTree<S>> {
    let mut queue: BinaryHeap<QueueEntry<S>> = entries
        .into_iter()
        .enumerate()
        .map(|(sequence, entry)| QueueEntry {
            weight: entry.count,
            sequence,
            node: entry.node,
        })
        .collect();
    let mut next_sequence = queue.len();

    loop {
        let first = queue.pop()?;
        let Some(second) = queue.pop() else {
            return Some(HuffmanTree { root: first.node });
        };

        tracing::trace!(
            left = first.weight,
            right = second.weight,
            sequence = next_sequence,
            "merging subtrees"
        );

        let parent = HuffmanNode::merge(first.node, second.node);
        queue.push(QueueEntry {
            weight: parent.weight(),
            sequence: next_sequence,
            node: parent,
        });
        next_sequence += 1;
    }
}
