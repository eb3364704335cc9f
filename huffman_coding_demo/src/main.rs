// huffman_coding_demo/src/main.rs

use clap::Parser;
use huffman_coding::{codes, decode_text, encode_text};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Sample inputs used when none are given on the command line.
const SAMPLES: [&str; 9] = [
    "aaaaaa",
    "bbbbbb",
    "1111111",
    "n",
    "ab ba",
    "abc123Huffman coding",
    "ABRACADABRA",
    "Mississippi",
    "Sally sells seashells down by the seashore.",
];

#[derive(Parser)]
#[command(name = "huffman_coding_demo", version)]
#[command(about = "Encodes and decodes strings with Huffman coding.", long_about = None)]
struct Cli {
    /// Strings to encode. Defaults to a built-in set of samples.
    inputs: Vec<String>,

    /// Print the code assigned to each symbol.
    #[arg(long)]
    show_codes: bool,

    /// Log level for the library's tracing output.
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

// Initializer for logger
fn init_logging(level: Level) -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Helper function to print a tree's codes, shortest first.
fn print_codes(tree: &huffman_coding::HuffmanTree<char>) {
    let mut rows: Vec<(Option<&char>, String)> = codes(tree.root()).collect();
    rows.sort_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| a.1.cmp(&b.1)));
    for (symbol, code) in rows {
        match symbol {
            Some(symbol) => println!("  {:?} -> {}", symbol, code),
            None => println!("  (placeholder) -> {}", code),
        }
    }
}

fn run(text: &str, show_codes: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("Data: {:?}", text);
    println!("Data size: {} bits", text.len() * 8);

    let (encoded, tree) = encode_text(text)?;
    let Some(tree) = tree else {
        println!("Encoded: (empty)\n");
        return Ok(());
    };

    println!("Encoded: {}", encoded);
    println!(
        "Encoded size: {} bits ({:.1}% of original)",
        encoded.len(),
        100.0 * encoded.len() as f64 / (text.len() * 8) as f64
    );

    if show_codes {
        println!("Codes ({} leaves, depth {}):", tree.leaf_count(), tree.depth());
        print_codes(&tree);
    }

    let decoded = decode_text(&encoded, &tree)?;
    println!("Decoded: {:?}", decoded);

    if decoded == text {
        println!("Decoding successful.\n");
    } else {
        println!("Decoding failed. The decoded text does not match the input.\n");
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    if cli.inputs.is_empty() {
        for sample in SAMPLES {
            run(sample, cli.show_codes)?;
        }
    } else {
        for input in &cli.inputs {
            run(input, cli.show_codes)?;
        }
    }

    Ok(())
}
