// huffman_coding/src/code_table.rs

use std::collections::HashMap;
use std::hash::Hash;

use crate::tree::HuffmanNode;

/// Mapping from each symbol to its code, written as a string of `'0'` and `'1'`.
pub type CodeTable<S> = HashMap<S, String>;

/// Lazy depth-first walk over the leaves of a tree.
///
/// Yields `(symbol, code)` for every leaf exactly once, left subtree first.
/// The placeholder leaf shows up with a `None` symbol.
pub struct Codes<'a, S> {
    stack: Vec<(&'a HuffmanNode<S>, String)>,
}

impl<'a, S> Iterator for Codes<'a, S> {
    type Item = (Option<&'a S>, String);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, code)) = self.stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => return Some((symbol.as_ref(), code)),
                HuffmanNode::Internal { left, right, .. } => {
                    // Right goes on first so the left subtree is visited first.
                    let mut right_code = code.clone();
                    right_code.push('1');
                    self.stack.push((&**right, right_code));

                    let mut left_code = code;
                    left_code.push('0');
                    self.stack.push((&**left, left_code));
                }
            }
        }
        None
    }
}

/// Walks the tree rooted at `root`, one item per leaf.
pub fn codes<S>(root: &HuffmanNode<S>) -> Codes<'_, S> {
    Codes {
        stack: vec![(root, String::new())],
    }
}

/// Builds the code table for every real symbol under `root`.
///
/// The placeholder leaf has no symbol and is left out, since nothing in the
/// input can map to it.
pub fn map_codes<S>(root: &HuffmanNode<S>) -> CodeTable<S>
where
    S: Eq + Hash + Clone,
{
    codes(root)
        .filter_map(|(symbol, code)| symbol.map(|s| (s.clone(), code)))
        .collect()
}
