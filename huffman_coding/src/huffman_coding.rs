// huffman_coding/src/huffman_coding.rs

use std::hash::Hash;

use contracts::debug_ensures;
use thiserror::Error;

use crate::frequency::map_frequencies;
use crate::tree::{build_tree, HuffmanNode, HuffmanTree};

/// Output of an encode call: the bitstring and the tree needed to decode it.
/// The tree is `None` only for empty input.
pub type Encoded<S> = (String, Option<HuffmanTree<S>>);

/// Error type for encoding and decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HuffmanCodingError {
    /// A symbol had no code in the table built from the same input. This is a
    /// construction bug, never a property of the input.
    #[error("no code for the symbol at position {position}")]
    MissingCode { position: usize },
    /// The bitstring contains something other than `'0'` or `'1'`.
    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit { bit: char, position: usize },
    /// A path ended on the placeholder leaf, which stands for no symbol.
    #[error("bit path ending at position {position} selects the placeholder leaf")]
    PlaceholderLeaf { position: usize },
    /// The bits ran out before the walk reached a leaf.
    #[error("encoded data ended mid-code after {consumed} bits")]
    Incomplete { consumed: usize },
    /// The tree is a bare leaf and cannot assign a code to anything.
    #[error("tree has no internal root to decode with")]
    DegenerateTree,
}

/// Encodes a sequence of symbols with a Huffman code built from the sequence itself.
///
/// # Arguments
///
/// * `data` - Slice of input symbols.
///
/// # Returns
///
/// * `Result<Encoded<S>, HuffmanCodingError>` - The `'0'`/`'1'` string and the
///   tree to decode it with, or `("", None)` for empty input.
///
/// # Examples
///
/// ```
/// use huffman_coding::{huffman_decode, huffman_encode};
///
/// let data = b"ABRACADABRA";
/// let (bits, tree) = huffman_encode(data).unwrap();
/// let decoded = huffman_decode(&bits, &tree.unwrap()).unwrap();
/// assert_eq!(decoded, data.to_vec());
/// ```
#[debug_ensures(ret.as_ref().map_or(true, |(bits, tree)| bits.is_empty() == tree.is_none()))]
pub fn huffman_encode<S>(data: &[S]) -> Result<Encoded<S>, HuffmanCodingError>
where
    S: Eq + Hash + Clone,
{
    if data.is_empty() {
        return Ok((String::new(), None));
    }

    let frequencies = map_frequencies(data);
    let distinct = frequencies.iter().filter(|e| e.symbol().is_some()).count();
    let Some(tree) = build_tree(frequencies) else {
        return Ok((String::new(), None));
    };

    let table = tree.code_table();
    let mut encoded = String::with_capacity(tree.weighted_path_length());
    for (position, symbol) in data.iter().enumerate() {
        let code = table
            .get(symbol)
            .ok_or(HuffmanCodingError::MissingCode { position })?;
        encoded.push_str(code);
    }

    tracing::debug!(
        symbols = data.len(),
        distinct,
        bits = encoded.len(),
        "encoded sequence"
    );

    Ok((encoded, Some(tree)))
}

/// Decodes a bitstring produced by [`huffman_encode`] with the tree returned alongside it.
///
/// Starting at the root, each `'0'` steps left and each `'1'` steps right.
/// Reaching a leaf emits its symbol and restarts at the root.
///
/// # Arguments
///
/// * `bits` - String of `'0'` and `'1'` characters.
/// * `tree` - Tree returned by the matching encode call.
///
/// # Returns
///
/// * `Result<Vec<S>, HuffmanCodingError>` - Decoded symbols or an error when
///   the bits do not describe complete paths through `tree`.
pub fn huffman_decode<S>(bits: &str, tree: &HuffmanTree<S>) -> Result<Vec<S>, HuffmanCodingError>
where
    S: Clone,
{
    let root = tree.root();
    let mut decoded = Vec::new();
    let mut cursor = root;
    let mut consumed = 0;

    for (position, bit) in bits.chars().enumerate() {
        let next = match (cursor, bit) {
            (HuffmanNode::Internal { left, .. }, '0') => left,
            (HuffmanNode::Internal { right, .. }, '1') => right,
            (HuffmanNode::Internal { .. }, _) => {
                return Err(HuffmanCodingError::InvalidBit { bit, position })
            }
            // Only a bare-leaf root leaves the cursor on a leaf.
            (HuffmanNode::Leaf { .. }, _) => return Err(HuffmanCodingError::DegenerateTree),
        };
        consumed = position + 1;

        match &**next {
            HuffmanNode::Leaf {
                symbol: Some(symbol),
                ..
            } => {
                decoded.push(symbol.clone());
                cursor = root;
            }
            HuffmanNode::Leaf { symbol: None, .. } => {
                return Err(HuffmanCodingError::PlaceholderLeaf { position })
            }
            internal => cursor = internal,
        }
    }

    if !std::ptr::eq(cursor, root) {
        return Err(HuffmanCodingError::Incomplete { consumed });
    }

    tracing::debug!(bits = consumed, symbols = decoded.len(), "decoded sequence");

    Ok(decoded)
}

/// Encodes the `char`s of `text`.
pub fn encode_text(text: &str) -> Result<Encoded<char>, HuffmanCodingError> {
    let symbols: Vec<char> = text.chars().collect();
    huffman_encode(&symbols)
}

/// Decodes into a `String`, the counterpart of [`encode_text`].
pub fn decode_text(bits: &str, tree: &HuffmanTree<char>) -> Result<String, HuffmanCodingError> {
    huffman_decode(bits, tree).map(|symbols| symbols.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::Rng;

    use crate::code_table::codes;

    /// Helper function to generate random text over a small alphabet.
    fn generate_random_text(length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| rng.gen_range(b'a'..=b'h') as char)
            .collect()
    }

    fn round_trip(text: &str) -> (String, String) {
        let (bits, tree) = encode_text(text).unwrap();
        let tree = tree.expect("non-empty input returns a tree");
        let decoded = decode_text(&bits, &tree).unwrap();
        (bits, decoded)
    }

    #[test]
    fn test_empty_encode() {
        let (bits, tree) = encode_text("").unwrap();
        assert_eq!(bits, "");
        assert!(tree.is_none());

        let (bits, tree) = huffman_encode::<u8>(&[]).unwrap();
        assert_eq!(bits, "");
        assert!(tree.is_none());
    }

    #[test]
    fn test_repeating_symbol() {
        for text in ["aaaaaa", "bbbbbb", "1111111"] {
            let (bits, decoded) = round_trip(text);
            assert_eq!(bits, "1".repeat(text.len()));
            assert_eq!(decoded, text);
        }
    }

    #[test]
    fn test_single_symbol_input() {
        let (bits, decoded) = round_trip("n");
        assert_eq!(bits, "1");
        assert_eq!(decoded, "n");
    }

    #[test]
    fn test_abracadabra() {
        let (bits, tree) = encode_text("ABRACADABRA").unwrap();
        let tree = tree.unwrap();

        assert_eq!(bits, "01101110100010101101110");
        assert_eq!(tree.leaf_count(), 5);

        let table = tree.code_table();
        let mut symbols: Vec<char> = table.keys().copied().collect();
        symbols.sort_unstable();
        assert_eq!(symbols, vec!['A', 'B', 'C', 'D', 'R']);

        assert_eq!(decode_text(&bits, &tree).unwrap(), "ABRACADABRA");
    }

    #[test]
    fn test_sample_sentences() {
        for text in [
            "ab ba",
            "abc123Huffman coding",
            "Mississippi",
            "Sally sells seashells down by the seashore.",
        ] {
            let (_, decoded) = round_trip(text);
            assert_eq!(decoded, text);
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let text = "Sally sells seashells down by the seashore.";
        let first = encode_text(text).unwrap();
        let second = encode_text(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_encoded_length_matches_weighted_path_length() {
        let text = generate_random_text(2048);
        let (bits, tree) = encode_text(&text).unwrap();
        let tree = tree.unwrap();

        assert_eq!(bits.len(), tree.weighted_path_length());
        assert_eq!(tree.weight(), text.len());
    }

    #[test]
    fn test_encode_decode_random() {
        let text = generate_random_text(4096);
        let (_, decoded) = round_trip(&text);
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_skewed_frequencies_beat_fixed_width() {
        // Eight symbols would need three bits each at a fixed width.
        let text = format!("{}{}", "a".repeat(500), "bcdefgh");
        let (bits, _) = encode_text(&text).unwrap();
        assert!(bits.len() < text.len() * 3);
    }

    #[test]
    fn test_decode_empty_bits() {
        let (_, tree) = encode_text("abc").unwrap();
        assert_eq!(decode_text("", &tree.unwrap()).unwrap(), "");
    }

    #[test]
    fn test_decode_invalid_bit() {
        let (_, tree) = encode_text("ABRACADABRA").unwrap();
        let err = decode_text("01x", &tree.unwrap()).unwrap_err();
        assert_eq!(
            err,
            HuffmanCodingError::InvalidBit {
                bit: 'x',
                position: 2
            }
        );
    }

    #[test]
    fn test_decode_incomplete() {
        let (_, tree) = encode_text("ABRACADABRA").unwrap();
        // "0" is A, then "11" stops inside the B/R subtree.
        let err = decode_text("011", &tree.unwrap()).unwrap_err();
        assert_eq!(err, HuffmanCodingError::Incomplete { consumed: 3 });
    }

    #[test]
    fn test_decode_placeholder_path() {
        let (_, tree) = encode_text("aaaaaa").unwrap();
        let err = decode_text("110", &tree.unwrap()).unwrap_err();
        assert_eq!(err, HuffmanCodingError::PlaceholderLeaf { position: 2 });
    }

    #[test]
    fn test_decode_with_bare_leaf_tree() {
        let tree = build_tree(vec![crate::frequency::FrequencyEntry::new('z', 2)]).unwrap();
        assert_eq!(
            decode_text("0", &tree).unwrap_err(),
            HuffmanCodingError::DegenerateTree
        );
        assert_eq!(decode_text("", &tree).unwrap(), "");
    }

    #[test]
    fn test_decode_shared_tree_across_threads() {
        let (bits, tree) = encode_text("Mississippi").unwrap();
        let tree = tree.unwrap();
        let (bits, tree) = (&bits, &tree);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(move |_| scope.spawn(move || decode_text(bits, tree).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), "Mississippi");
            }
        });
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HuffmanCodingError::InvalidBit {
                bit: '2',
                position: 7
            }
            .to_string(),
            "invalid bit '2' at position 7"
        );
        assert_eq!(
            HuffmanCodingError::Incomplete { consumed: 5 }.to_string(),
            "encoded data ended mid-code after 5 bits"
        );
    }

    proptest! {
        #[test]
        fn test_huffman_encode_decode_prop(data in proptest::collection::vec(any::<u8>(), 1usize..=4096)) {
            let (bits, tree) = huffman_encode(&data).unwrap();
            let tree = tree.unwrap();

            prop_assert!(bits.chars().all(|bit| bit == '0' || bit == '1'));
            prop_assert_eq!(bits.len(), tree.weighted_path_length());

            let decoded = huffman_decode(&bits, &tree).unwrap();
            prop_assert_eq!(decoded, data);
        }

        #[test]
        fn test_text_encode_decode_prop(text in "\\PC{1,512}") {
            let (bits, tree) = encode_text(&text).unwrap();
            let tree = tree.unwrap();

            prop_assert_eq!(tree.weight(), text.chars().count());
            prop_assert_eq!(decode_text(&bits, &tree).unwrap(), text);
        }

        #[test]
        fn test_code_count_matches_leaves_prop(text in "[a-f]{1,64}") {
            let (_, tree) = encode_text(&text).unwrap();
            let tree = tree.unwrap();
            prop_assert_eq!(codes(tree.root()).count(), tree.leaf_count());
        }
    }
}
