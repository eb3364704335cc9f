// huffman_coding/src/lib.rs

//! Huffman Coding Library
//!
//! This library builds optimal prefix codes from symbol frequencies and uses
//! them to encode sequences into `'0'`/`'1'` strings and decode them back.

pub mod code_table;
pub mod frequency;
pub mod huffman_coding;
pub mod tree;

pub use code_table::{codes, map_codes, CodeTable, Codes};
pub use frequency::{map_frequencies, FrequencyEntry};
pub use huffman_coding::{
    decode_text, encode_text, huffman_decode, huffman_encode, Encoded, HuffmanCodingError,
};
pub use tree::{build_tree, HuffmanNode, HuffmanTree};
