// huffman_coding/src/frequency.rs

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::tree::HuffmanNode;

/// A symbol count paired with the leaf node that seeds the tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry<S> {
    pub count: usize,
    pub node: HuffmanNode<S>,
}

impl<S> FrequencyEntry<S> {
    /// Creates an entry holding a fresh leaf for `symbol`.
    pub fn new(symbol: S, count: usize) -> Self {
        FrequencyEntry {
            count,
            node: HuffmanNode::leaf(symbol, count),
        }
    }

    /// Creates the zero-weight entry used to pad a single-symbol alphabet.
    pub fn placeholder() -> Self {
        FrequencyEntry {
            count: 0,
            node: HuffmanNode::placeholder(),
        }
    }

    /// Returns the entry's symbol, or `None` for the placeholder.
    pub fn symbol(&self) -> Option<&S> {
        self.node.symbol()
    }
}

/// Counts every distinct symbol of `data`.
///
/// Entries come back in first-occurrence order so that tree construction is
/// reproducible. When `data` holds exactly one distinct symbol, a placeholder
/// entry is put in front of it so the tree builder still produces an internal
/// root and the symbol gets a one-bit code.
///
/// # Arguments
///
/// * `data` - Slice of input symbols.
///
/// # Returns
///
/// * `Vec<FrequencyEntry<S>>` - One entry per distinct symbol, empty for empty input.
pub fn map_frequencies<S>(data: &[S]) -> Vec<FrequencyEntry<S>>
where
    S: Eq + Hash + Clone,
{
    let mut positions: HashMap<&S, usize> = HashMap::new();
    let mut counts: Vec<(&S, usize)> = Vec::new();

    for symbol in data {
        match positions.entry(symbol) {
            Entry::Occupied(slot) => counts[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(counts.len());
                counts.push((symbol, 1));
            }
        }
    }

    let mut entries = Vec::with_capacity(counts.len() + 1);
    if counts.len() == 1 {
        entries.push(FrequencyEntry::placeholder());
    }
    entries.extend(
        counts
            .into_iter()
            .map(|(symbol, count)| FrequencyEntry::new(symbol.clone(), count)),
    );
    entries
}
