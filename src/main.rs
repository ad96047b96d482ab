use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use bio_aligner::pipeline::{align_all_pairs, read_sequences, translate_all};
use bio_aligner::scoring::{
    ScoreParams, PROTEIN_DELETION, PROTEIN_INSERTION, PROTEIN_MATCH, PROTEIN_MISMATCH,
};
use bio_aligner::translate::ProteinSequencer;
use bio_aligner::Aligner;

#[derive(Parser)]
#[command(name = "bio_aligner")]
#[command(version = "0.1.0")]
#[command(about = "Translates DNA sequences to proteins and aligns every pair", long_about = None)]
struct Cli {
    /// Input file with whitespace-separated DNA sequences; blank lines and
    /// lines starting with '#' are skipped
    input: PathBuf,

    /// Cost of inserting a symbol
    #[arg(long, default_value_t = PROTEIN_INSERTION, allow_hyphen_values = true)]
    insertion: i32,

    /// Cost of deleting a symbol
    #[arg(long, default_value_t = PROTEIN_DELETION, allow_hyphen_values = true)]
    deletion: i32,

    /// Cost of a matching substitution
    #[arg(long, default_value_t = PROTEIN_MATCH, allow_hyphen_values = true)]
    matched: i32,

    /// Cost of a mismatching substitution
    #[arg(long, default_value_t = PROTEIN_MISMATCH, allow_hyphen_values = true)]
    mismatched: i32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let params = ScoreParams {
        insertion: cli.insertion,
        deletion: cli.deletion,
        matched: cli.matched,
        mismatched: cli.mismatched,
    };
    let sequencer = ProteinSequencer::new();
    let aligner = Aligner::new(params);

    let dna_seqs = read_sequences(&cli.input)?;
    let proteins = translate_all(&sequencer, &dna_seqs)?;
    let results = align_all_pairs(&aligner, &proteins);

    for (n, result) in results.iter().enumerate() {
        println!("=== Alignment {} ===", n + 1);
        println!("{}", String::from_utf8_lossy(&result.aligned_x));
        println!("{}", String::from_utf8_lossy(&result.aligned_y));
        println!();
    }

    Ok(())
}
