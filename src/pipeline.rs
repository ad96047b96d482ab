//! End-to-end pairwise pipeline: read DNA sequences from a file, translate
//! each to its longest-ORF protein, align every pair of distinct proteins.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::traceback::AlignmentResult;
use crate::translate::ProteinSequencer;
use crate::{Aligner, BioAlignerError};

/// Reads whitespace-separated sequences from a text file.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_sequences(path: &Path) -> Result<Vec<String>, BioAlignerError> {
    let reader = BufReader::new(File::open(path)?);
    let mut sequences = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        sequences.extend(line.split_whitespace().map(str::to_owned));
    }

    info!("read {} sequences", sequences.len());
    Ok(sequences)
}

/// Translates every DNA sequence to its longest-ORF protein.
pub fn translate_all(
    sequencer: &ProteinSequencer,
    dna_seqs: &[String],
) -> Result<Vec<Vec<u8>>, BioAlignerError> {
    dna_seqs
        .iter()
        .map(|seq| sequencer.longest_protein_orf(seq))
        .collect()
}

/// Aligns every ordered pair of proteins whose contents differ.
pub fn align_all_pairs(aligner: &Aligner, proteins: &[Vec<u8>]) -> Vec<AlignmentResult> {
    let mut results = Vec::new();

    for seq1 in proteins {
        for seq2 in proteins {
            if seq1 != seq2 {
                results.push(aligner.align(seq1, seq2));
            }
        }
    }

    info!("aligned {} sequence pairs", results.len());
    results
}
